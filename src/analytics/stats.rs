//! Rolling spread statistics over a history window.

use crate::domain::{HistoryPoint, MaxSpreadEvent, SpreadStats};

/// Computes spread statistics over the given window.
///
/// The window is taken as-is: no time filtering happens here. Empty history
/// yields zero averages and no max spread.
pub fn compute(history: &[HistoryPoint], period_minutes: u32) -> SpreadStats {
    if history.is_empty() {
        return SpreadStats::empty(period_minutes);
    }

    let mut widest: Option<&HistoryPoint> = None;
    let mut total_spread = 0.0;
    let mut total_spread_pct = 0.0;
    let mut total_price = 0.0;
    let mut price_count = 0usize;

    for point in history {
        total_spread += point.spread_abs;
        total_spread_pct += point.spread_pct;

        for (_, price) in point.valid_prices() {
            total_price += price;
            price_count += 1;
        }

        widest = match widest {
            Some(best) if !is_wider(point, best) => Some(best),
            _ => Some(point),
        };
    }

    let n = history.len() as f64;
    SpreadStats {
        max_spread: widest.map(max_spread_event),
        avg_spread_abs: total_spread / n,
        avg_spread_pct: total_spread_pct / n,
        avg_price: mean(total_price, price_count),
        period_minutes,
    }
}

/// Returns true if `point` should replace `best` as the widest spread.
/// Equal spreads keep the earlier timestamp.
fn is_wider(point: &HistoryPoint, best: &HistoryPoint) -> bool {
    point.spread_abs > best.spread_abs
        || (point.spread_abs == best.spread_abs && point.timestamp < best.timestamp)
}

fn max_spread_event(point: &HistoryPoint) -> MaxSpreadEvent {
    let (high_exchange, high_price) = point.highest().unwrap_or_default();
    let (low_exchange, low_price) = point.lowest().unwrap_or_default();

    MaxSpreadEvent {
        value: point.spread_abs,
        pct: point.spread_pct,
        timestamp: point.timestamp,
        high_exchange: high_exchange.to_string(),
        high_price,
        low_exchange: low_exchange.to_string(),
        low_price,
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}
