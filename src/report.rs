//! Log rendering of the dashboard view.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::analytics::{Analytics, chart};
use crate::config::Config;
use crate::dashboard::View;

/// One exchange row of the price panel.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    pub name: String,
    pub color: String,
    pub bid: f64,
    pub ask: f64,
    pub mid: f64,
    /// Distance of the mid from the window's average price, in percent.
    pub vs_avg_pct: f64,
}

/// One exchange row of the funding panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingLine {
    pub exchange: String,
    /// Signed rate per funding period, e.g. "+0.0100%".
    pub rate: String,
    /// True if longs pay shorts.
    pub longs_pay: bool,
    /// Minutes until the next settlement, never negative.
    pub next_update_mins: i64,
}

/// Builds the funding panel rows.
pub fn funding_lines(analytics: &Analytics, now: DateTime<Utc>) -> Vec<FundingLine> {
    analytics
        .funding_rates
        .iter()
        .map(|r| FundingLine {
            exchange: r.exchange.clone(),
            rate: format!("{:+.4}%", r.rate_pct()),
            longs_pay: r.is_positive(),
            next_update_mins: (r.next_update - now).num_minutes().max(0),
        })
        .collect()
}

/// Builds the price panel rows, resolving names and colors from config.
pub fn quote_lines(analytics: &Analytics, config: &Config) -> Vec<QuoteLine> {
    analytics
        .snapshot
        .quotes
        .iter()
        .map(|q| {
            let name = if q.display_name.is_empty() {
                config.display_name(&q.exchange_id).to_string()
            } else {
                q.display_name.clone()
            };
            QuoteLine {
                name,
                color: config.color(&q.exchange_id).to_string(),
                bid: q.bid,
                ask: q.ask,
                mid: q.mid,
                vs_avg_pct: chart::vs_average_pct(q.mid, analytics.stats.avg_price),
            }
        })
        .collect()
}

/// Logs what the dashboard currently shows.
pub fn log_view(view: &View, config: &Config) {
    match view {
        View::Loading => info!("Loading market data"),
        View::Error { message } => {
            warn!(error = %message, "No market data available, retry pending")
        }
        View::Ready { analytics, error } => {
            if let Some(message) = error {
                warn!(error = %message, "Showing last good data");
            }
            log_analytics(analytics, config);
        }
    }
}

fn log_analytics(analytics: &Analytics, config: &Config) {
    let (low, high) = chart::price_extremes(&analytics.snapshot.quotes);
    info!(
        exchanges = analytics.snapshot.quotes.len(),
        low = low,
        high = high,
        range = high - low,
        "Prices"
    );

    for line in quote_lines(analytics, config) {
        debug!(
            exchange = %line.name,
            color = %line.color,
            bid = line.bid,
            ask = line.ask,
            mid = line.mid,
            vs_avg_pct = format!("{:+.4}", line.vs_avg_pct),
            "Quote"
        );
    }

    match &analytics.mid_arbitrage {
        Some(opp) => info!(
            buy = %opp.buy_exchange,
            sell = %opp.sell_exchange,
            spread = format!("{:.2}", opp.spread_abs),
            spread_pct = format!("{:.4}", opp.spread_pct),
            "Best spread"
        ),
        None => debug!("No cross-exchange spread"),
    }

    for (side, opp) in [
        ("buy", &analytics.executable_buy),
        ("sell", &analytics.executable_sell),
    ] {
        if let Some(opp) = opp {
            debug!(
                side = side,
                buy = %opp.buy_exchange,
                sell = %opp.sell_exchange,
                spread = format!("{:.2}", opp.spread_abs),
                spread_pct = format!("{:.4}", opp.spread_pct),
                "Executable spread"
            );
        }
    }

    let stats = &analytics.stats;
    match &stats.max_spread {
        Some(max) => info!(
            period_minutes = stats.period_minutes,
            max = format!("{:.2}", max.value),
            at = %max.timestamp.format("%H:%M:%S"),
            high = %config.display_name(&max.high_exchange),
            low = %config.display_name(&max.low_exchange),
            avg = format!("{:.2}", stats.avg_spread_abs),
            avg_pct = format!("{:.4}", stats.avg_spread_pct),
            "Spread window"
        ),
        None => info!(period_minutes = stats.period_minutes, "No spread history"),
    }

    let (axis_low, axis_high) = chart::price_domain(&analytics.snapshot.history);
    debug!(
        points = analytics.snapshot.history.len(),
        ticks = analytics.ticks.len(),
        axis_low = format!("{:.2}", axis_low),
        axis_high = format!("{:.2}", axis_high),
        "Chart"
    );

    for line in funding_lines(analytics, Utc::now()) {
        let payer = if line.longs_pay { "longs" } else { "shorts" };
        info!(
            exchange = %line.exchange,
            rate = %line.rate,
            payer = payer,
            next_update_mins = line.next_update_mins,
            "Funding"
        );
    }

    if let Some(funding) = &analytics.funding_arbitrage {
        info!(
            long = %funding.long_exchange,
            short = %funding.short_exchange,
            diff_pct = format!("{:.4}", funding.rate_diff_pct),
            annualized_pct = format!("{:.2}", funding.annualized_pct),
            "Funding arbitrage"
        );
    }
}
