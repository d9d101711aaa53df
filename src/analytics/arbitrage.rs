//! Cross-exchange arbitrage detection.

use crate::domain::{ArbitrageOpportunity, Quote};

/// Finds the best buy-low/sell-high pair by mid price.
///
/// Quotes without a usable mid are ignored. When several exchanges share the
/// minimum (or maximum) mid, the first in input order wins.
pub fn detect(quotes: &[Quote]) -> Option<ArbitrageOpportunity> {
    let mut priced = quotes.iter().enumerate().filter(|(_, q)| q.has_price());

    let first = priced.next()?;
    let (mut buy, mut sell) = (first, first);
    for (idx, quote) in priced {
        if quote.mid < buy.1.mid {
            buy = (idx, quote);
        }
        if quote.mid > sell.1.mid {
            sell = (idx, quote);
        }
    }

    if buy.0 == sell.0 || buy.1.exchange_id == sell.1.exchange_id {
        return None;
    }

    ArbitrageOpportunity::between(
        &buy.1.display_name,
        buy.1.mid,
        &sell.1.display_name,
        sell.1.mid,
    )
}

/// Finds executable opportunities across the book: buy at one exchange's
/// ask, sell at another's bid.
///
/// Returns `(buy, sell)`. `buy` is the widest `bid_j - ask_i` over ordered
/// pairs `(i, j)`; `sell` is found by the mirrored scan `bid_i - ask_j`.
/// The first pair reaching the widest spread wins.
pub fn detect_executable(
    quotes: &[Quote],
) -> (Option<ArbitrageOpportunity>, Option<ArbitrageOpportunity>) {
    let mut buy: Option<ArbitrageOpportunity> = None;
    let mut sell: Option<ArbitrageOpportunity> = None;

    for (i, a) in quotes.iter().enumerate() {
        for (j, b) in quotes.iter().enumerate() {
            if i == j {
                continue;
            }

            if let Some(opp) =
                ArbitrageOpportunity::between(&a.display_name, a.ask, &b.display_name, b.bid)
            {
                if buy.as_ref().is_none_or(|best| opp.spread_abs > best.spread_abs) {
                    buy = Some(opp);
                }
            }

            if let Some(opp) =
                ArbitrageOpportunity::between(&b.display_name, b.ask, &a.display_name, a.bid)
            {
                if sell.as_ref().is_none_or(|best| opp.spread_abs > best.spread_abs) {
                    sell = Some(opp);
                }
            }
        }
    }

    (buy, sell)
}
