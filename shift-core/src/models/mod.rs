mod day_extras;
mod day_record;
mod day_totals;
mod order;
mod user_settings;

pub use day_extras::DayExtras;
pub use day_record::{DayRecord, NewDayRecord};
pub use day_totals::DayTotals;
pub use order::{Order, PaymentType};
pub use user_settings::{AccentColor, ColorScheme, SettingsPatch, UserSettings};
