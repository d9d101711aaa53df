//! Chart support: axis tick bucketing and price ranges.

use chrono::Timelike;

use crate::domain::{HistoryPoint, Quote};

/// Default tick bucket size in minutes.
pub const DEFAULT_BUCKET_MINUTES: u32 = 10;

/// Lower padding applied to the chart's price axis.
const DOMAIN_PAD_LOW: f64 = 0.9995;
/// Upper padding applied to the chart's price axis.
const DOMAIN_PAD_HIGH: f64 = 1.0005;
/// Price axis used before any price is known.
const EMPTY_DOMAIN: (f64, f64) = (0.0, 100_000.0);

/// Returns the indices of the first point in each time bucket.
///
/// The bucket of a point is `minute_of_hour / bucket_minutes`; an index is
/// emitted whenever it differs from the previous point's bucket, and always
/// for the first point. Indices are strictly increasing.
pub fn bucket_ticks(history: &[HistoryPoint], bucket_minutes: u32) -> Vec<usize> {
    let bucket_minutes = bucket_minutes.max(1);
    let mut ticks = Vec::new();
    let mut last_bucket = None;

    for (idx, point) in history.iter().enumerate() {
        let bucket = point.timestamp.minute() / bucket_minutes;
        if last_bucket != Some(bucket) {
            ticks.push(idx);
            last_bucket = Some(bucket);
        }
    }

    ticks
}

/// Returns the padded `(min, max)` price axis over every valid price.
pub fn price_domain(history: &[HistoryPoint]) -> (f64, f64) {
    let (min, max) = history
        .iter()
        .flat_map(|p| p.valid_prices().map(|(_, price)| price))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        });

    if min.is_finite() && max.is_finite() {
        (min * DOMAIN_PAD_LOW, max * DOMAIN_PAD_HIGH)
    } else {
        EMPTY_DOMAIN
    }
}

/// Returns the lowest and highest mid across quotes, `(0, 0)` when empty.
pub fn price_extremes(quotes: &[Quote]) -> (f64, f64) {
    if quotes.is_empty() {
        return (0.0, 0.0);
    }

    quotes
        .iter()
        .map(|q| q.mid)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        })
}

/// Percentage distance of `price` from the window average; 0 without an average.
pub fn vs_average_pct(price: f64, avg_price: f64) -> f64 {
    if avg_price == 0.0 {
        return 0.0;
    }
    (price - avg_price) / avg_price * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::BTreeMap;

    fn at(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, hour, min, sec).unwrap()
    }

    fn point(ts: DateTime<Utc>, prices: &[(&str, f64)]) -> HistoryPoint {
        HistoryPoint {
            timestamp: ts,
            spread_abs: 0.0,
            spread_pct: 0.0,
            prices: prices
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn points(times: &[DateTime<Utc>]) -> Vec<HistoryPoint> {
        times.iter().map(|ts| point(*ts, &[("aster", 1.0)])).collect()
    }

    #[test]
    fn test_bucket_ticks_empty() {
        assert!(bucket_ticks(&[], 10).is_empty());
    }

    #[test]
    fn test_bucket_ticks_crossing_ten_minute_boundaries() {
        let history = points(&[
            at(12, 8, 0),
            at(12, 9, 58),
            at(12, 10, 1),
            at(12, 15, 0),
            at(12, 19, 59),
            at(12, 20, 0),
            at(12, 21, 0),
        ]);

        assert_eq!(bucket_ticks(&history, 10), vec![0, 2, 5]);
    }

    #[test]
    fn test_bucket_ticks_bursty_sampling() {
        let mut times = vec![at(12, 0, 0); 5];
        times.extend(vec![at(12, 10, 0); 3]);
        times.push(at(12, 30, 0));
        let history = points(&times);

        let ticks = bucket_ticks(&history, 10);
        assert_eq!(ticks, vec![0, 5, 8]);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_bucket_ticks_hour_rollover() {
        let history = points(&[at(12, 55, 0), at(13, 0, 30), at(13, 4, 0)]);

        assert_eq!(bucket_ticks(&history, 10), vec![0, 1]);
    }

    #[test]
    fn test_bucket_ticks_zero_bucket_size_is_per_minute() {
        let history = points(&[at(12, 0, 0), at(12, 0, 30), at(12, 1, 0)]);

        assert_eq!(bucket_ticks(&history, 0), vec![0, 2]);
    }

    #[test]
    fn test_price_domain_pads_valid_prices() {
        let history = vec![
            point(at(12, 0, 0), &[("aster", 100.0), ("lighter", 0.0)]),
            point(at(12, 0, 1), &[("aster", 200.0)]),
        ];
        let (lo, hi) = price_domain(&history);

        assert!((lo - 99.95).abs() < 1e-9);
        assert!((hi - 200.1).abs() < 1e-9);
    }

    #[test]
    fn test_price_domain_without_prices() {
        assert_eq!(price_domain(&[]), (0.0, 100_000.0));
    }

    #[test]
    fn test_price_extremes() {
        let quotes = vec![
            Quote::from_book("a", "A", 10.0, 12.0),
            Quote::from_book("b", "B", 8.0, 8.0),
        ];
        assert_eq!(price_extremes(&quotes), (8.0, 11.0));
        assert_eq!(price_extremes(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_vs_average_pct() {
        assert!((vs_average_pct(101.0, 100.0) - 1.0).abs() < 1e-12);
        assert!((vs_average_pct(99.0, 100.0) + 1.0).abs() < 1e-12);
        assert_eq!(vs_average_pct(99.0, 0.0), 0.0);
    }
}
