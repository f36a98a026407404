//! The day calculation engine: orders + extras + settings in, totals out.
//!
//! # Calculation steps
//!
//! The steps run in a fixed order; each one feeds the next:
//!
//! | Step | Value          | Rule |
//! |------|----------------|------|
//! | 1    | `total_orders` | sum of `amount` over all orders |
//! | 2    | `total_cash`   | sum of `amount` over cash orders |
//! | 3    | `total_card`   | sum of `amount` over card orders |
//! | 4    | `total_tips`   | sum of `tips` (missing = 0), or 0 when tips are hidden or there are no orders |
//! | 5    | `gross`        | `total_orders + total_tips` |
//! | 6    | `rent_amount`  | `gross × rent_percent / 100` when rent is shown and the percent is positive, else 0 |
//! | 7    | cost gating    | info service / medic / mechanic costs zeroed unless their toggle is on |
//! | 8    | `extras_total` | gated costs + daily expenses + rent (only when rent counts toward profit) |
//! | 9    | `net_profit`   | `gross - extras_total` |
//!
//! The engine applies no rounding and no input validation: negative amounts
//! or a rent percent outside 0–100 flow straight through the arithmetic.
//! Rounding to display precision happens in [`crate::format`], and range
//! checks belong to whatever collects the input.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use shift_core::calculations::calculate_day;
//! use shift_core::{DayExtras, Order, PaymentType, UserSettings};
//!
//! let orders = vec![
//!     Order {
//!         id: "1".into(),
//!         amount: dec!(500),
//!         payment_type: PaymentType::Cash,
//!         tips: None,
//!         time: None,
//!     },
//!     Order {
//!         id: "2".into(),
//!         amount: dec!(300),
//!         payment_type: PaymentType::Card,
//!         tips: Some(dec!(50)),
//!         time: None,
//!     },
//! ];
//! let extras = DayExtras {
//!     daily_expenses: dec!(100),
//!     ..DayExtras::default()
//! };
//! let settings = UserSettings::default();
//!
//! let totals = calculate_day(&orders, &extras, &settings);
//!
//! assert_eq!(totals.total_orders, dec!(800));
//! assert_eq!(totals.gross, dec!(850));
//! assert_eq!(totals.net_profit, dec!(750));
//! ```

use rust_decimal::Decimal;

use crate::models::{DayExtras, DayTotals, Order, PaymentType, UserSettings};

/// Computes the financial totals of one working day.
///
/// Pure and total: any combination of well-typed inputs produces a result.
/// `total_cash + total_card == total_orders` holds for every input because
/// each order is exactly one of cash or card.
pub fn calculate_day(
    orders: &[Order],
    extras: &DayExtras,
    settings: &UserSettings,
) -> DayTotals {
    let total_orders: Decimal = orders.iter().map(|o| o.amount).sum();
    let total_cash: Decimal = amount_sum(orders, PaymentType::Cash);
    let total_card: Decimal = amount_sum(orders, PaymentType::Card);

    // The explicit empty-list check matches the documented behavior of the
    // tips rule; an empty sum would be zero anyway.
    let total_tips: Decimal = if settings.show_tips && !orders.is_empty() {
        orders.iter().map(|o| o.tips.unwrap_or(Decimal::ZERO)).sum()
    } else {
        Decimal::ZERO
    };

    let gross = total_orders + total_tips;

    let rent_amount = if settings.show_rent_percent && extras.rent_percent > Decimal::ZERO {
        gross * extras.rent_percent / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let info_service_cost = if settings.show_info_service_cost {
        extras.info_service_cost
    } else {
        Decimal::ZERO
    };
    let medic = if settings.show_medic_mechanic {
        extras.medic_cost
    } else {
        Decimal::ZERO
    };
    let mechanic = if settings.show_medic_mechanic {
        extras.mechanic_cost
    } else {
        Decimal::ZERO
    };

    let counted_rent = if settings.include_rent_in_profit {
        rent_amount
    } else {
        Decimal::ZERO
    };
    let extras_total = info_service_cost + medic + mechanic + extras.daily_expenses + counted_rent;

    let net_profit = gross - extras_total;

    DayTotals {
        total_orders,
        total_cash,
        total_card,
        total_tips,
        gross,
        rent_amount,
        extras_total,
        net_profit,
    }
}

fn amount_sum(
    orders: &[Order],
    payment_type: PaymentType,
) -> Decimal {
    orders
        .iter()
        .filter(|o| o.payment_type == payment_type)
        .map(|o| o.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn order(
        id: &str,
        amount: Decimal,
        payment_type: PaymentType,
    ) -> Order {
        Order {
            id: id.to_string(),
            amount,
            payment_type,
            tips: None,
            time: None,
        }
    }

    fn tipped_order(
        id: &str,
        amount: Decimal,
        payment_type: PaymentType,
        tips: Decimal,
    ) -> Order {
        Order {
            tips: Some(tips),
            ..order(id, amount, payment_type)
        }
    }

    /// Settings with every toggle off, so only daily expenses count.
    fn bare_settings() -> UserSettings {
        UserSettings {
            show_order_time: false,
            show_tips: false,
            show_info_service_cost: false,
            show_rent_percent: false,
            show_medic_mechanic: false,
            include_rent_in_profit: false,
            ..UserSettings::default()
        }
    }

    fn two_orders() -> Vec<Order> {
        vec![
            order("a", dec!(500), PaymentType::Cash),
            order("b", dec!(300), PaymentType::Card),
        ]
    }

    // =========================================================================
    // totals and payment partition
    // =========================================================================

    #[test]
    fn sums_orders_and_splits_by_payment_type() {
        let extras = DayExtras {
            daily_expenses: dec!(100),
            ..DayExtras::default()
        };

        let totals = calculate_day(&two_orders(), &extras, &bare_settings());

        assert_eq!(totals.total_orders, dec!(800));
        assert_eq!(totals.total_cash, dec!(500));
        assert_eq!(totals.total_card, dec!(300));
        assert_eq!(totals.total_tips, dec!(0));
        assert_eq!(totals.gross, dec!(800));
        assert_eq!(totals.rent_amount, dec!(0));
        assert_eq!(totals.extras_total, dec!(100));
        assert_eq!(totals.net_profit, dec!(700));
    }

    #[test]
    fn cash_plus_card_equals_total_orders() {
        let orders = vec![
            order("a", dec!(120.50), PaymentType::Cash),
            order("b", dec!(79.30), PaymentType::Card),
            order("c", dec!(210.99), PaymentType::Cash),
            order("d", dec!(45.01), PaymentType::Card),
        ];

        let totals = calculate_day(&orders, &DayExtras::default(), &bare_settings());

        assert_eq!(totals.total_cash + totals.total_card, totals.total_orders);
    }

    #[test]
    fn empty_order_list_yields_zero_totals() {
        let extras = DayExtras {
            daily_expenses: dec!(250),
            ..DayExtras::default()
        };

        let totals = calculate_day(&[], &extras, &bare_settings());

        assert_eq!(totals.total_orders, dec!(0));
        assert_eq!(totals.total_cash, dec!(0));
        assert_eq!(totals.total_card, dec!(0));
        assert_eq!(totals.gross, dec!(0));
        // Fixed costs still apply, so profit is purely negative.
        assert_eq!(totals.net_profit, dec!(-250));
    }

    // =========================================================================
    // tips gating
    // =========================================================================

    #[test]
    fn tips_are_counted_when_enabled() {
        let mut orders = two_orders();
        orders[1] = tipped_order("b", dec!(300), PaymentType::Card, dec!(50));
        let settings = UserSettings {
            show_tips: true,
            ..bare_settings()
        };

        let totals = calculate_day(&orders, &DayExtras::default(), &settings);

        assert_eq!(totals.total_tips, dec!(50));
        assert_eq!(totals.gross, dec!(850));
    }

    #[test]
    fn tips_are_zero_when_disabled_even_if_present() {
        let orders = vec![tipped_order("a", dec!(500), PaymentType::Cash, dec!(90))];

        let totals = calculate_day(&orders, &DayExtras::default(), &bare_settings());

        assert_eq!(totals.total_tips, dec!(0));
        assert_eq!(totals.gross, dec!(500));
    }

    #[test]
    fn tips_are_zero_for_empty_order_list_regardless_of_toggle() {
        let settings = UserSettings {
            show_tips: true,
            ..bare_settings()
        };

        let totals = calculate_day(&[], &DayExtras::default(), &settings);

        assert_eq!(totals.total_tips, dec!(0));
    }

    #[test]
    fn missing_tips_count_as_zero() {
        let orders = vec![
            tipped_order("a", dec!(400), PaymentType::Cash, dec!(30)),
            order("b", dec!(200), PaymentType::Card),
        ];
        let settings = UserSettings {
            show_tips: true,
            ..bare_settings()
        };

        let totals = calculate_day(&orders, &DayExtras::default(), &settings);

        assert_eq!(totals.total_tips, dec!(30));
    }

    // =========================================================================
    // rent gating
    // =========================================================================

    #[test]
    fn rent_is_zero_when_toggle_is_off() {
        let extras = DayExtras {
            rent_percent: dec!(10),
            ..DayExtras::default()
        };

        let totals = calculate_day(&two_orders(), &extras, &bare_settings());

        assert_eq!(totals.rent_amount, dec!(0));
    }

    #[test]
    fn rent_is_zero_when_percent_is_zero() {
        let settings = UserSettings {
            show_rent_percent: true,
            ..bare_settings()
        };

        let totals = calculate_day(&two_orders(), &DayExtras::default(), &settings);

        assert_eq!(totals.rent_amount, dec!(0));
    }

    #[test]
    fn rent_is_percentage_of_gross() {
        let extras = DayExtras {
            rent_percent: dec!(10),
            ..DayExtras::default()
        };
        let settings = UserSettings {
            show_rent_percent: true,
            include_rent_in_profit: true,
            ..bare_settings()
        };

        let totals = calculate_day(&two_orders(), &extras, &settings);

        assert_eq!(totals.gross, dec!(800));
        assert_eq!(totals.rent_amount, dec!(80));
        assert_eq!(totals.extras_total, dec!(80));
        assert_eq!(totals.net_profit, dec!(720));
    }

    #[test]
    fn rent_includes_tips_in_its_base() {
        let orders = vec![tipped_order("a", dec!(900), PaymentType::Cash, dec!(100))];
        let extras = DayExtras {
            rent_percent: dec!(3),
            ..DayExtras::default()
        };
        let settings = UserSettings {
            show_tips: true,
            show_rent_percent: true,
            ..bare_settings()
        };

        let totals = calculate_day(&orders, &extras, &settings);

        assert_eq!(totals.gross, dec!(1000));
        assert_eq!(totals.rent_amount, dec!(30));
    }

    #[test]
    fn excluding_rent_from_profit_shifts_net_by_exactly_the_rent() {
        let extras = DayExtras {
            daily_expenses: dec!(100),
            rent_percent: dec!(10),
            ..DayExtras::default()
        };
        let with_rent = UserSettings {
            show_rent_percent: true,
            include_rent_in_profit: true,
            ..bare_settings()
        };
        let without_rent = UserSettings {
            include_rent_in_profit: false,
            ..with_rent.clone()
        };

        let included = calculate_day(&two_orders(), &extras, &with_rent);
        let excluded = calculate_day(&two_orders(), &extras, &without_rent);

        // Rent is still reported either way, it just stops counting as a cost.
        assert_eq!(included.rent_amount, dec!(80));
        assert_eq!(excluded.rent_amount, dec!(80));
        assert_eq!(included.extras_total - excluded.extras_total, dec!(80));
        assert_eq!(excluded.net_profit - included.net_profit, dec!(80));
    }

    // =========================================================================
    // conditional cost components
    // =========================================================================

    #[test]
    fn hidden_cost_components_do_not_count() {
        let extras = DayExtras {
            daily_expenses: dec!(100),
            info_service_cost: dec!(300),
            medic_cost: dec!(500),
            mechanic_cost: dec!(1000),
            ..DayExtras::default()
        };

        let totals = calculate_day(&two_orders(), &extras, &bare_settings());

        assert_eq!(totals.extras_total, dec!(100));
    }

    #[test]
    fn enabled_cost_components_all_count() {
        let extras = DayExtras {
            daily_expenses: dec!(100),
            info_service_cost: dec!(300),
            medic_cost: dec!(500),
            mechanic_cost: dec!(1000),
            ..DayExtras::default()
        };
        let settings = UserSettings {
            show_info_service_cost: true,
            show_medic_mechanic: true,
            ..bare_settings()
        };

        let totals = calculate_day(&two_orders(), &extras, &settings);

        assert_eq!(totals.extras_total, dec!(1900));
        assert_eq!(totals.net_profit, dec!(800) - dec!(1900));
    }

    // =========================================================================
    // structural invariants
    // =========================================================================

    #[test]
    fn gross_equals_orders_plus_tips_and_profit_equals_gross_minus_extras() {
        let orders = vec![
            tipped_order("a", dec!(333.33), PaymentType::Cash, dec!(12.50)),
            order("b", dec!(666.67), PaymentType::Card),
        ];
        let extras = DayExtras {
            daily_expenses: dec!(75.25),
            info_service_cost: dec!(300),
            rent_percent: dec!(7),
            medic_cost: dec!(500),
            mechanic_cost: dec!(1000),
        };
        let settings = UserSettings::default();

        let totals = calculate_day(&orders, &extras, &settings);

        assert_eq!(totals.gross, totals.total_orders + totals.total_tips);
        assert_eq!(totals.net_profit, totals.gross - totals.extras_total);
    }

    // =========================================================================
    // garbage in, garbage out: the engine never validates ranges
    // =========================================================================

    #[test]
    fn negative_amounts_flow_through_unchecked() {
        let orders = vec![
            order("a", dec!(-100), PaymentType::Cash),
            order("b", dec!(300), PaymentType::Card),
        ];

        let totals = calculate_day(&orders, &DayExtras::default(), &bare_settings());

        assert_eq!(totals.total_orders, dec!(200));
        assert_eq!(totals.total_cash, dec!(-100));
        assert_eq!(totals.total_cash + totals.total_card, totals.total_orders);
    }

    #[test]
    fn rent_percent_above_one_hundred_flows_through_unchecked() {
        let extras = DayExtras {
            rent_percent: dec!(150),
            ..DayExtras::default()
        };
        let settings = UserSettings {
            show_rent_percent: true,
            include_rent_in_profit: true,
            ..bare_settings()
        };

        let totals = calculate_day(&two_orders(), &extras, &settings);

        assert_eq!(totals.rent_amount, dec!(1200));
        assert_eq!(totals.net_profit, dec!(-400));
    }
}
