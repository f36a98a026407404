use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::UserSettings;

/// Per-day cost inputs, distinct from the per-order data. Which of these
/// actually participate in the profit calculation is controlled by the
/// boolean toggles in [`UserSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayExtras {
    pub daily_expenses: Decimal,
    pub info_service_cost: Decimal,
    /// Percentage of gross revenue, 0–100.
    pub rent_percent: Decimal,
    pub medic_cost: Decimal,
    pub mechanic_cost: Decimal,
}

impl DayExtras {
    /// Seeds a fresh working day from the default tariffs in the settings.
    /// Daily expenses always start at zero.
    pub fn seeded_from(settings: &UserSettings) -> Self {
        Self {
            daily_expenses: Decimal::ZERO,
            info_service_cost: settings.default_info_service_cost,
            rent_percent: settings.default_rent_percent,
            medic_cost: settings.default_medic_cost,
            mechanic_cost: settings.default_mechanic_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn seeded_from_copies_default_tariffs() {
        let settings = UserSettings::default();

        let extras = DayExtras::seeded_from(&settings);

        assert_eq!(extras.daily_expenses, Decimal::ZERO);
        assert_eq!(extras.info_service_cost, dec!(300));
        assert_eq!(extras.rent_percent, dec!(3));
        assert_eq!(extras.medic_cost, dec!(500));
        assert_eq!(extras.mechanic_cost, dec!(1000));
    }
}
