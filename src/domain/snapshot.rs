//! Snapshot payload served by the spread server.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ArbitrageOpportunity, HistoryPoint, Quote, SpreadStats};

/// SnapshotResult is the unit the dashboard fetches and displays.
///
/// `prices` and `stats` must be present; `history` and the opportunities
/// may be absent or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotResult {
    #[serde(rename = "prices", deserialize_with = "null_as_empty")]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub buy_opportunity: Option<ArbitrageOpportunity>,
    #[serde(default)]
    pub sell_opportunity: Option<ArbitrageOpportunity>,
    /// Time-ascending, oldest first.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<HistoryPoint>,
    pub stats: SpreadStats,
}

/// Accepts JSON `null` as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: &str = r#"{"max_spread":null,"avg_spread":0,"avg_spread_pct":0,"avg_price":0,"period_minutes":15}"#;

    #[test]
    fn test_null_lists_are_empty() {
        let json = format!(
            r#"{{"prices":null,"buy_opportunity":null,"sell_opportunity":null,"history":null,"stats":{}}}"#,
            STATS
        );
        let snapshot: SnapshotResult = serde_json::from_str(&json).unwrap();

        assert!(snapshot.quotes.is_empty());
        assert!(snapshot.history.is_empty());
        assert!(snapshot.buy_opportunity.is_none());
        assert_eq!(snapshot.stats.period_minutes, 15);
    }

    #[test]
    fn test_missing_prices_is_rejected() {
        let json = format!(r#"{{"history":[],"stats":{}}}"#, STATS);
        let err = serde_json::from_str::<SnapshotResult>(&json).unwrap_err();

        assert!(err.to_string().contains("prices"));
    }

    #[test]
    fn test_missing_stats_is_rejected() {
        let json = r#"{"prices":[],"history":[]}"#;
        let err = serde_json::from_str::<SnapshotResult>(json).unwrap_err();

        assert!(err.to_string().contains("stats"));
    }

    #[test]
    fn test_missing_history_defaults_to_empty() {
        let json = format!(r#"{{"prices":[],"stats":{}}}"#, STATS);
        let snapshot: SnapshotResult = serde_json::from_str(&json).unwrap();

        assert!(snapshot.history.is_empty());
        assert!(snapshot.sell_opportunity.is_none());
    }
}
