//! Roll-up of saved day records for the history view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DayRecord;

/// Field-wise totals across a set of saved days.
///
/// `orders` counts orders; the money made on them is already part of
/// `cash` + `card`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub profit: Decimal,
    pub orders: u64,
    pub cash: Decimal,
    pub card: Decimal,
}

/// Sums net profit, order count and the cash/card totals over the given
/// records. An empty input yields the all-zero summary, and because every
/// field is a plain sum the result does not depend on record order.
pub fn summarize_history(days: &[DayRecord]) -> HistorySummary {
    days.iter().fold(HistorySummary::default(), |mut acc, day| {
        acc.profit += day.totals.net_profit;
        acc.orders += day.orders.len() as u64;
        acc.cash += day.totals.total_cash;
        acc.card += day.totals.total_card;
        acc
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{DayExtras, DayTotals, Order, PaymentType};

    use super::*;

    fn day(
        id: &str,
        order_count: usize,
        net_profit: Decimal,
        total_cash: Decimal,
        total_card: Decimal,
    ) -> DayRecord {
        let orders = (0..order_count)
            .map(|i| Order {
                id: format!("{id}-{i}"),
                amount: dec!(100),
                payment_type: PaymentType::Cash,
                tips: None,
                time: None,
            })
            .collect();

        DayRecord {
            id: id.to_string(),
            date: "2025-06-01".to_string(),
            orders,
            extras: DayExtras::default(),
            notes: None,
            totals: DayTotals {
                net_profit,
                total_cash,
                total_card,
                ..DayTotals::default()
            },
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn empty_history_is_all_zero() {
        let summary = summarize_history(&[]);

        assert_eq!(summary, HistorySummary::default());
    }

    #[test]
    fn sums_each_field_across_days() {
        let days = vec![
            day("a", 3, dec!(700), dec!(500), dec!(300)),
            day("b", 2, dec!(-50), dec!(0), dec!(120)),
        ];

        let summary = summarize_history(&days);

        assert_eq!(summary.profit, dec!(650));
        assert_eq!(summary.orders, 5);
        assert_eq!(summary.cash, dec!(500));
        assert_eq!(summary.card, dec!(420));
    }

    #[test]
    fn counts_orders_not_their_amounts() {
        // One day with a single large order, one with three small ones.
        let days = vec![
            day("a", 1, dec!(900), dec!(900), dec!(0)),
            day("b", 3, dec!(300), dec!(300), dec!(0)),
        ];

        let summary = summarize_history(&days);

        assert_eq!(summary.orders, 4);
    }

    #[test]
    fn summary_is_additive_over_concatenation() {
        let first = vec![day("a", 2, dec!(400), dec!(250), dec!(150))];
        let second = vec![
            day("b", 1, dec!(-20), dec!(0), dec!(80)),
            day("c", 4, dec!(610), dec!(410), dec!(200)),
        ];
        let combined: Vec<DayRecord> =
            first.iter().chain(second.iter()).cloned().collect();

        let s1 = summarize_history(&first);
        let s2 = summarize_history(&second);
        let all = summarize_history(&combined);

        assert_eq!(all.profit, s1.profit + s2.profit);
        assert_eq!(all.orders, s1.orders + s2.orders);
        assert_eq!(all.cash, s1.cash + s2.cash);
        assert_eq!(all.card, s1.card + s2.card);
    }

    #[test]
    fn order_of_days_does_not_matter() {
        let mut days = vec![
            day("a", 2, dec!(400), dec!(250), dec!(150)),
            day("b", 1, dec!(-20), dec!(0), dec!(80)),
            day("c", 4, dec!(610), dec!(410), dec!(200)),
        ];

        let forward = summarize_history(&days);
        days.reverse();
        let backward = summarize_history(&days);

        assert_eq!(forward, backward);
    }
}
