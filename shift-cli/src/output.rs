//! Plain-text rendering of totals, saved days and history, using the same
//! Russian labels as the original product surface.

use shift_core::calculations::HistorySummary;
use shift_core::format::{format_currency, format_date};
use shift_core::{DayRecord, DayTotals, UserSettings};

/// Renders the totals of one day. Lines for optional fields (tips, rent)
/// appear only when the corresponding toggle is on.
pub fn render_totals(
    totals: &DayTotals,
    settings: &UserSettings,
) -> String {
    let mut lines = vec![
        format!("Заказы:   {}", format_currency(totals.total_orders)),
        format!("Наличные: {}", format_currency(totals.total_cash)),
        format!("Карта:    {}", format_currency(totals.total_card)),
    ];
    if settings.show_tips {
        lines.push(format!("Чаевые:   {}", format_currency(totals.total_tips)));
    }
    lines.push(format!("Выручка:  {}", format_currency(totals.gross)));
    if settings.show_rent_percent {
        lines.push(format!("Аренда:   {}", format_currency(totals.rent_amount)));
    }
    lines.push(format!(
        "Расходы:  {}",
        format_currency(totals.extras_total)
    ));
    lines.push(format!("Прибыль:  {}", format_currency(totals.net_profit)));
    lines.join("\n")
}

/// Renders one saved day in full: header, orders and notes.
pub fn render_day(day: &DayRecord) -> String {
    let mut lines = vec![format!(
        "{} · {} · {} заказов",
        format_date(&day.date),
        day.id,
        day.orders.len()
    )];
    for order in &day.orders {
        let mut line = format!(
            "  {} {} ({})",
            order.id,
            format_currency(order.amount),
            order.payment_type.as_str()
        );
        if let Some(tips) = order.tips {
            line.push_str(&format!(" + чаевые {}", format_currency(tips)));
        }
        if let Some(time) = &order.time {
            line.push_str(&format!(" в {time}"));
        }
        lines.push(line);
    }
    if let Some(notes) = &day.notes {
        lines.push(format!("  Заметки: {notes}"));
    }
    lines.push(format!(
        "  Прибыль: {}",
        format_currency(day.totals.net_profit)
    ));
    lines.join("\n")
}

/// Renders the history view: one line per saved day (already newest first)
/// and the roll-up summary.
pub fn render_history(
    days: &[DayRecord],
    summary: &HistorySummary,
) -> String {
    let mut lines = Vec::with_capacity(days.len() + 5);
    for day in days {
        lines.push(format!(
            "{}  {}  {} заказов  {}",
            format_date(&day.date),
            day.id,
            day.orders.len(),
            format_currency(day.totals.net_profit)
        ));
    }
    if days.is_empty() {
        lines.push("История пуста".to_string());
    }
    lines.push(String::new());
    lines.push(format!("Прибыль:  {}", format_currency(summary.profit)));
    lines.push(format!("Заказов:  {}", summary.orders));
    lines.push(format!("Наличные: {}", format_currency(summary.cash)));
    lines.push(format!("Карта:    {}", format_currency(summary.card)));
    lines.join("\n")
}

/// Renders the effective settings, one `name = value` line per field.
pub fn render_settings(settings: &UserSettings) -> String {
    [
        format!("show_order_time = {}", settings.show_order_time),
        format!("show_tips = {}", settings.show_tips),
        format!(
            "show_info_service_cost = {}",
            settings.show_info_service_cost
        ),
        format!("show_rent_percent = {}", settings.show_rent_percent),
        format!("show_medic_mechanic = {}", settings.show_medic_mechanic),
        format!(
            "include_rent_in_profit = {}",
            settings.include_rent_in_profit
        ),
        format!("color_scheme = {}", settings.color_scheme.as_str()),
        format!("accent_color = {}", settings.accent_color.as_str()),
        format!("default_rent_percent = {}", settings.default_rent_percent),
        format!(
            "default_info_service_cost = {}",
            settings.default_info_service_cost
        ),
        format!("default_medic_cost = {}", settings.default_medic_cost),
        format!("default_mechanic_cost = {}", settings.default_mechanic_cost),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use shift_core::calculations::summarize_history;
    use shift_core::{DayExtras, Order, PaymentType};

    use super::*;

    fn sample_day() -> DayRecord {
        DayRecord {
            id: "2025-06-01-1".to_string(),
            date: "2025-06-01".to_string(),
            orders: vec![Order {
                id: "2025-06-01-1-1".to_string(),
                amount: dec!(500),
                payment_type: PaymentType::Cash,
                tips: Some(dec!(50)),
                time: Some("09:15".to_string()),
            }],
            extras: DayExtras::default(),
            notes: Some("дождь".to_string()),
            totals: DayTotals {
                total_orders: dec!(500),
                total_cash: dec!(500),
                total_tips: dec!(50),
                gross: dec!(550),
                net_profit: dec!(550),
                ..DayTotals::default()
            },
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn totals_hide_tips_and_rent_lines_when_toggled_off() {
        let settings = UserSettings {
            show_tips: false,
            show_rent_percent: false,
            ..UserSettings::default()
        };

        let text = render_totals(&DayTotals::default(), &settings);

        assert!(!text.contains("Чаевые"));
        assert!(!text.contains("Аренда"));
        assert!(text.contains("Прибыль:  0 ₽ ПМР"));
    }

    #[test]
    fn totals_show_all_lines_with_default_settings() {
        let totals = DayTotals {
            total_orders: dec!(800),
            gross: dec!(850),
            total_tips: dec!(50),
            net_profit: dec!(750),
            ..DayTotals::default()
        };

        let text = render_totals(&totals, &UserSettings::default());

        assert!(text.contains("Чаевые:   50 ₽ ПМР"));
        assert!(text.contains("Выручка:  850 ₽ ПМР"));
        assert!(text.contains("Прибыль:  750 ₽ ПМР"));
    }

    #[test]
    fn day_rendering_includes_orders_and_notes() {
        let text = render_day(&sample_day());

        assert!(text.contains("01.06.2025"));
        assert!(text.contains("500 ₽ ПМР (cash)"));
        assert!(text.contains("чаевые 50 ₽ ПМР"));
        assert!(text.contains("в 09:15"));
        assert!(text.contains("Заметки: дождь"));
    }

    #[test]
    fn history_rendering_includes_summary() {
        let days = vec![sample_day()];
        let summary = summarize_history(&days);

        let text = render_history(&days, &summary);

        assert!(text.contains("1 заказов"));
        assert!(text.contains("Прибыль:  550 ₽ ПМР"));
        assert!(text.contains("Заказов:  1"));
    }

    #[test]
    fn settings_rendering_lists_every_field() {
        let text = render_settings(&UserSettings::default());

        assert!(text.contains("show_tips = true"));
        assert!(text.contains("color_scheme = light"));
        assert!(text.contains("accent_color = cyan"));
        assert!(text.contains("default_mechanic_cost = 1000"));
    }

    #[test]
    fn empty_history_says_so() {
        let text = render_history(&[], &HistorySummary::default());

        assert!(text.contains("История пуста"));
        assert!(text.contains("Прибыль:  0 ₽ ПМР"));
    }
}
