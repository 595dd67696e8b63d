//! Pure valuation math. No I/O; prices are handed in by the caller.
//!
//! All arithmetic is checked. A figure that does not fit a `Decimal` never
//! panics: a quote whose market value overflows is dropped, and sums saturate.

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::valuation_model::{EnrichedHolding, PortfolioSummary, TopPerformer};
use crate::constants::PERCENT_PRECISION;
use crate::portfolio::holdings::Holding;

/// Attach a price (or its absence) to a holding and derive its metrics.
pub fn enrich_holding(holding: Holding, current_price: Option<Decimal>) -> EnrichedHolding {
    let shares = holding.shares;
    let purchase_price = holding.purchase_price;

    let current_price = current_price.filter(|price| {
        let fits = shares.checked_mul(*price).is_some();
        if !fits {
            warn!(
                "Price {} for {} overflows its market value. Leaving it unpriced.",
                price, holding.symbol
            );
        }
        fits
    });

    let market_value = match current_price {
        Some(price) => shares.saturating_mul(price),
        None => holding.cost_basis(),
    };
    let gain_loss = current_price.and_then(|price| {
        price
            .checked_sub(purchase_price)
            .and_then(|diff| diff.checked_mul(shares))
    });
    let percent_change = current_price
        .and_then(|price| percent_return(price, purchase_price))
        .map(|pct| pct.round_dp(PERCENT_PRECISION));

    EnrichedHolding {
        holding,
        current_price,
        market_value,
        gain_loss,
        percent_change,
    }
}

/// Portfolio figures for a set of enriched holdings.
///
/// `total_investment` covers every holding; gain/loss and the top performer
/// only look at holdings with a known price. Ties for top performer go to the
/// earliest holding.
pub fn summarize(holdings: &[EnrichedHolding]) -> PortfolioSummary {
    let mut total_value = Decimal::ZERO;
    let mut total_investment = Decimal::ZERO;
    let mut total_gain_loss = Decimal::ZERO;
    let mut priced_count = 0;
    let mut best: Option<(Decimal, &EnrichedHolding)> = None;

    for enriched in holdings {
        total_value = total_value.saturating_add(enriched.market_value);
        total_investment = total_investment.saturating_add(enriched.holding.cost_basis());

        let Some(price) = enriched.current_price else {
            continue;
        };
        priced_count += 1;
        total_gain_loss =
            total_gain_loss.saturating_add(enriched.gain_loss.unwrap_or(Decimal::ZERO));

        if let Some(pct) = percent_return(price, enriched.holding.purchase_price) {
            if best.map_or(true, |(best_pct, _)| pct > best_pct) {
                best = Some((pct, enriched));
            }
        }
    }

    let gain_loss_percentage = if total_investment.is_zero() {
        Decimal::ZERO
    } else {
        total_gain_loss
            .checked_div(total_investment)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .map(|pct| pct.round_dp(PERCENT_PRECISION))
            .unwrap_or_else(|| {
                warn!("Portfolio gain/loss percentage does not fit a decimal. Reporting 0.");
                Decimal::ZERO
            })
    };

    let top_performer = best.map(|(pct, enriched)| TopPerformer {
        symbol: enriched.holding.symbol.clone(),
        percent_change: pct.round_dp(PERCENT_PRECISION),
        gain_loss: enriched.gain_loss.unwrap_or(Decimal::ZERO),
    });

    PortfolioSummary {
        total_value,
        total_investment,
        total_gain_loss,
        gain_loss_percentage,
        top_performer,
        holding_count: holdings.len(),
        priced_count,
    }
}

/// `(price − purchase_price) / purchase_price × 100`, unrounded.
///
/// `None` for a zero cost or when the result does not fit.
fn percent_return(price: Decimal, purchase_price: Decimal) -> Option<Decimal> {
    if purchase_price.is_zero() {
        return None;
    }
    price
        .checked_sub(purchase_price)?
        .checked_div(purchase_price)?
        .checked_mul(dec!(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::holdings::NewHolding;

    fn holding(symbol: &str, shares: Decimal, purchase_price: Decimal) -> Holding {
        Holding::from_new(NewHolding::new(symbol, shares, purchase_price))
    }

    #[test]
    fn test_enrich_priced_holding() {
        let enriched = enrich_holding(holding("AAPL", dec!(10), dec!(100)), Some(dec!(110)));
        assert_eq!(enriched.market_value, dec!(1100));
        assert_eq!(enriched.gain_loss, Some(dec!(100)));
        assert_eq!(enriched.percent_change, Some(dec!(10)));
    }

    #[test]
    fn test_enrich_unpriced_holding_falls_back_to_cost() {
        let enriched = enrich_holding(holding("AAPL", dec!(10), dec!(100)), None);
        assert_eq!(enriched.market_value, dec!(1000));
        assert!(enriched.current_price.is_none());
        assert!(enriched.gain_loss.is_none());
        assert!(enriched.percent_change.is_none());
    }

    #[test]
    fn test_summary_math() {
        let holdings = vec![
            enrich_holding(holding("AAPL", dec!(10), dec!(100)), Some(dec!(110))),
            enrich_holding(holding("MSFT", dec!(5), dec!(50)), Some(dec!(40))),
        ];
        let summary = summarize(&holdings);

        assert_eq!(summary.total_investment, dec!(1250));
        assert_eq!(summary.total_value, dec!(1300));
        assert_eq!(summary.total_gain_loss, dec!(50));
        assert_eq!(summary.gain_loss_percentage, dec!(4.0));
        assert_eq!(summary.holding_count, 2);
        assert_eq!(summary.priced_count, 2);

        let top = summary.top_performer.unwrap();
        assert_eq!(top.symbol, "AAPL");
        assert_eq!(top.percent_change, dec!(10));
        assert_eq!(top.gain_loss, dec!(100));
    }

    #[test]
    fn test_unpriced_holding_contributes_no_gain_or_loss() {
        let holdings = vec![
            enrich_holding(holding("AAPL", dec!(10), dec!(100)), Some(dec!(110))),
            enrich_holding(holding("MSFT", dec!(5), dec!(50)), None),
        ];
        let summary = summarize(&holdings);

        assert_eq!(summary.total_value, dec!(1350));
        assert_eq!(summary.total_investment, dec!(1250));
        assert_eq!(summary.total_gain_loss, dec!(100));
        assert_eq!(summary.total_gain_loss, summary.total_value - summary.total_investment);
        assert_eq!(summary.gain_loss_percentage, dec!(8));
        assert_eq!(summary.priced_count, 1);
        assert_eq!(summary.top_performer.unwrap().symbol, "AAPL");
    }

    #[test]
    fn test_no_prices_no_top_performer() {
        let holdings = vec![
            enrich_holding(holding("AAPL", dec!(10), dec!(100)), None),
            enrich_holding(holding("MSFT", dec!(5), dec!(50)), None),
        ];
        let summary = summarize(&holdings);

        assert_eq!(summary.total_value, summary.total_investment);
        assert_eq!(summary.total_gain_loss, Decimal::ZERO);
        assert_eq!(summary.gain_loss_percentage, Decimal::ZERO);
        assert!(summary.top_performer.is_none());
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.total_investment, Decimal::ZERO);
        assert_eq!(summary.gain_loss_percentage, Decimal::ZERO);
        assert!(summary.top_performer.is_none());
        assert_eq!(summary.holding_count, 0);
    }

    #[test]
    fn test_top_performer_uses_percentage_not_amount() {
        // MSFT gains more in absolute terms, IBM more in percent.
        let holdings = vec![
            enrich_holding(holding("MSFT", dec!(100), dec!(100)), Some(dec!(110))),
            enrich_holding(holding("IBM", dec!(1), dec!(10)), Some(dec!(15))),
        ];
        let top = summarize(&holdings).top_performer.unwrap();
        assert_eq!(top.symbol, "IBM");
        assert_eq!(top.percent_change, dec!(50));
    }

    #[test]
    fn test_top_performer_tie_goes_to_first() {
        let holdings = vec![
            enrich_holding(holding("AAPL", dec!(1), dec!(100)), Some(dec!(120))),
            enrich_holding(holding("MSFT", dec!(2), dec!(50)), Some(dec!(60))),
        ];
        assert_eq!(summarize(&holdings).top_performer.unwrap().symbol, "AAPL");
    }

    #[test]
    fn test_top_performer_can_be_a_loss() {
        let holdings = vec![
            enrich_holding(holding("AAPL", dec!(1), dec!(100)), Some(dec!(90))),
            enrich_holding(holding("MSFT", dec!(1), dec!(100)), Some(dec!(80))),
        ];
        let top = summarize(&holdings).top_performer.unwrap();
        assert_eq!(top.symbol, "AAPL");
        assert_eq!(top.percent_change, dec!(-10));
    }

    #[test]
    fn test_percentages_are_rounded() {
        let enriched = enrich_holding(holding("AAPL", dec!(3), dec!(3)), Some(dec!(4)));
        assert_eq!(enriched.percent_change, Some(dec!(33.3333)));
    }

    #[test]
    fn test_overflowing_quote_is_left_unpriced() {
        let big = holding("AAPL", dec!(1_000_000_000), dec!(100));
        let enriched = enrich_holding(big, Some(Decimal::MAX));
        assert!(enriched.current_price.is_none());
        assert_eq!(enriched.market_value, dec!(100_000_000_000));
        assert!(enriched.gain_loss.is_none());
    }

    #[test]
    fn test_extreme_holdings_never_panic() {
        // Bypasses admission rules, as a hand-built holding could.
        let huge = dec!(100_000_000_000_000_000_000);
        let holdings = vec![
            enrich_holding(holding("AAPL", huge, huge), Some(dec!(1))),
            enrich_holding(holding("MSFT", huge, huge), None),
            enrich_holding(
                holding("IBM", dec!(1), dec!(0.0000000000000000000000000001)),
                Some(huge),
            ),
        ];
        let summary = summarize(&holdings);

        assert_eq!(summary.holding_count, 3);
        assert_eq!(summary.total_investment, Decimal::MAX);
        assert!(holdings[2].percent_change.is_none());
    }
}
