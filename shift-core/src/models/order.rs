use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a fare was paid. Every order is exactly one of the two, so the
/// cash/card totals always partition the order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Cash,
    Card,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(Self::Cash),
            "card" => Some(Self::Card),
            _ => None,
        }
    }
}

/// One completed fare within a working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: Decimal,
    pub payment_type: PaymentType,
    /// Only meaningful when tips tracking is enabled in the settings.
    pub tips: Option<Decimal>,
    /// Free-form entry time, only meaningful when order-time tracking is enabled.
    pub time: Option<String>,
}
