use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived financial summary of one working day. Fully determined by the
/// orders, extras and settings that produced it, so it can be recomputed at
/// any time; it is only ever persisted as part of a saved day record.
///
/// Every field is non-negative for non-negative inputs except `net_profit`,
/// which goes negative when fixed costs exceed revenue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    pub total_orders: Decimal,
    pub total_cash: Decimal,
    pub total_card: Decimal,
    pub total_tips: Decimal,
    /// `total_orders + total_tips`.
    pub gross: Decimal,
    pub rent_amount: Decimal,
    pub extras_total: Decimal,
    /// `gross - extras_total`.
    pub net_profit: Decimal,
}
