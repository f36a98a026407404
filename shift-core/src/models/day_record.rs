use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DayExtras, DayTotals, Order};

/// A saved working day: the orders, the extras snapshot and the computed
/// totals, bundled once at save time. Immutable after creation except for
/// deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub id: String,
    /// Calendar date of the shift, `YYYY-MM-DD`.
    pub date: String,
    pub orders: Vec<Order>,
    pub extras: DayExtras,
    pub notes: Option<String>,
    pub totals: DayTotals,
    pub created_at: DateTime<Utc>,
}

/// For saving a new day (no creation timestamp yet; the repository stamps it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDayRecord {
    pub id: String,
    pub date: String,
    pub orders: Vec<Order>,
    pub extras: DayExtras,
    pub notes: Option<String>,
    pub totals: DayTotals,
}
