use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Cyan,
    Teal,
    Green,
    Blue,
}

impl AccentColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cyan" => Some(Self::Cyan),
            "teal" => Some(Self::Teal),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }
}

/// Effective user configuration: which optional extras fields are active,
/// how profit is computed, display preferences, and the default tariffs
/// used to seed a new day's extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub show_order_time: bool,
    pub show_tips: bool,
    pub show_info_service_cost: bool,
    pub show_rent_percent: bool,
    pub show_medic_mechanic: bool,
    pub include_rent_in_profit: bool,
    pub color_scheme: ColorScheme,
    pub accent_color: AccentColor,
    pub default_rent_percent: Decimal,
    pub default_info_service_cost: Decimal,
    pub default_medic_cost: Decimal,
    pub default_mechanic_cost: Decimal,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            show_order_time: false,
            show_tips: true,
            show_info_service_cost: false,
            show_rent_percent: true,
            show_medic_mechanic: false,
            include_rent_in_profit: true,
            color_scheme: ColorScheme::Light,
            accent_color: AccentColor::Cyan,
            default_rent_percent: Decimal::from(3),
            default_info_service_cost: Decimal::from(300),
            default_medic_cost: Decimal::from(500),
            default_mechanic_cost: Decimal::from(1000),
        }
    }
}

impl UserSettings {
    /// Overlays a partial patch onto this snapshot and returns the result.
    ///
    /// This single pure function covers both uses of partial settings:
    /// merging a stored (possibly older, incomplete) copy over the
    /// hard-coded defaults at load time, and applying an in-session update.
    /// Fields absent from the patch keep their current value.
    pub fn with_patch(&self, patch: &SettingsPatch) -> Self {
        Self {
            show_order_time: patch.show_order_time.unwrap_or(self.show_order_time),
            show_tips: patch.show_tips.unwrap_or(self.show_tips),
            show_info_service_cost: patch
                .show_info_service_cost
                .unwrap_or(self.show_info_service_cost),
            show_rent_percent: patch.show_rent_percent.unwrap_or(self.show_rent_percent),
            show_medic_mechanic: patch.show_medic_mechanic.unwrap_or(self.show_medic_mechanic),
            include_rent_in_profit: patch
                .include_rent_in_profit
                .unwrap_or(self.include_rent_in_profit),
            color_scheme: patch.color_scheme.unwrap_or(self.color_scheme),
            accent_color: patch.accent_color.unwrap_or(self.accent_color),
            default_rent_percent: patch.default_rent_percent.unwrap_or(self.default_rent_percent),
            default_info_service_cost: patch
                .default_info_service_cost
                .unwrap_or(self.default_info_service_cost),
            default_medic_cost: patch.default_medic_cost.unwrap_or(self.default_medic_cost),
            default_mechanic_cost: patch
                .default_mechanic_cost
                .unwrap_or(self.default_mechanic_cost),
        }
    }
}

/// All-optional mirror of [`UserSettings`]: the shape of a stored settings
/// row (older saves simply lack the newer fields) and of a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub show_order_time: Option<bool>,
    pub show_tips: Option<bool>,
    pub show_info_service_cost: Option<bool>,
    pub show_rent_percent: Option<bool>,
    pub show_medic_mechanic: Option<bool>,
    pub include_rent_in_profit: Option<bool>,
    pub color_scheme: Option<ColorScheme>,
    pub accent_color: Option<AccentColor>,
    pub default_rent_percent: Option<Decimal>,
    pub default_info_service_cost: Option<Decimal>,
    pub default_medic_cost: Option<Decimal>,
    pub default_mechanic_cost: Option<Decimal>,
}

impl From<&UserSettings> for SettingsPatch {
    fn from(settings: &UserSettings) -> Self {
        Self {
            show_order_time: Some(settings.show_order_time),
            show_tips: Some(settings.show_tips),
            show_info_service_cost: Some(settings.show_info_service_cost),
            show_rent_percent: Some(settings.show_rent_percent),
            show_medic_mechanic: Some(settings.show_medic_mechanic),
            include_rent_in_profit: Some(settings.include_rent_in_profit),
            color_scheme: Some(settings.color_scheme),
            accent_color: Some(settings.accent_color),
            default_rent_percent: Some(settings.default_rent_percent),
            default_info_service_cost: Some(settings.default_info_service_cost),
            default_medic_cost: Some(settings.default_medic_cost),
            default_mechanic_cost: Some(settings.default_mechanic_cost),
        }
    }
}
