use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shift_core::{
    AccentColor, ColorScheme, DayExtras, DayRecord, DayRepository, DayTotals, NewDayRecord, Order,
    PaymentType, RepositoryError, SettingsPatch, UserSettings,
};
use sqlx::{FromRow, sqlite::SqlitePool, sqlite::SqlitePoolOptions};

const SETTINGS_KEY: &str = "user-settings";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(database_url: &str) -> Result<Self, RepositoryError> {
        // Single-user local store; one connection also keeps `:memory:`
        // databases coherent across calls.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn orders_for_day(&self, day_id: &str) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            "SELECT day_id, id, amount, payment_type, tips, entry_time
             FROM day_orders WHERE day_id = ? ORDER BY position",
        )
        .bind(day_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }
}

#[derive(FromRow)]
struct DayRow {
    id: String,
    date: String,
    daily_expenses: String,
    info_service_cost: String,
    rent_percent: String,
    medic_cost: String,
    mechanic_cost: String,
    notes: Option<String>,
    total_orders: String,
    total_cash: String,
    total_card: String,
    total_tips: String,
    gross: String,
    rent_amount: String,
    extras_total: String,
    net_profit: String,
    created_at: String,
}

impl DayRow {
    fn into_record(self, orders: Vec<Order>) -> Result<DayRecord, RepositoryError> {
        Ok(DayRecord {
            id: self.id,
            date: self.date,
            orders,
            extras: DayExtras {
                daily_expenses: parse_decimal(&self.daily_expenses)?,
                info_service_cost: parse_decimal(&self.info_service_cost)?,
                rent_percent: parse_decimal(&self.rent_percent)?,
                medic_cost: parse_decimal(&self.medic_cost)?,
                mechanic_cost: parse_decimal(&self.mechanic_cost)?,
            },
            notes: self.notes,
            totals: DayTotals {
                total_orders: parse_decimal(&self.total_orders)?,
                total_cash: parse_decimal(&self.total_cash)?,
                total_card: parse_decimal(&self.total_card)?,
                total_tips: parse_decimal(&self.total_tips)?,
                gross: parse_decimal(&self.gross)?,
                rent_amount: parse_decimal(&self.rent_amount)?,
                extras_total: parse_decimal(&self.extras_total)?,
                net_profit: parse_decimal(&self.net_profit)?,
            },
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

#[derive(FromRow)]
struct OrderRow {
    day_id: String,
    id: String,
    amount: String,
    payment_type: String,
    tips: Option<String>,
    entry_time: Option<String>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let payment_type = PaymentType::parse(&row.payment_type).ok_or_else(|| {
            RepositoryError::Database(format!("invalid payment type: {}", row.payment_type))
        })?;
        Ok(Order {
            id: row.id,
            amount: parse_decimal(&row.amount)?,
            payment_type,
            tips: parse_optional_decimal(&row.tips)?,
            time: row.entry_time,
        })
    }
}

#[derive(FromRow)]
struct SettingsRow {
    show_order_time: Option<i64>,
    show_tips: Option<i64>,
    show_info_service_cost: Option<i64>,
    show_rent_percent: Option<i64>,
    show_medic_mechanic: Option<i64>,
    include_rent_in_profit: Option<i64>,
    color_scheme: Option<String>,
    accent_color: Option<String>,
    default_rent_percent: Option<String>,
    default_info_service_cost: Option<String>,
    default_medic_cost: Option<String>,
    default_mechanic_cost: Option<String>,
}

impl TryFrom<SettingsRow> for SettingsPatch {
    type Error = RepositoryError;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        let color_scheme = row
            .color_scheme
            .as_deref()
            .map(|s| {
                ColorScheme::parse(s)
                    .ok_or_else(|| RepositoryError::Database(format!("invalid color scheme: {s}")))
            })
            .transpose()?;
        let accent_color = row
            .accent_color
            .as_deref()
            .map(|s| {
                AccentColor::parse(s)
                    .ok_or_else(|| RepositoryError::Database(format!("invalid accent color: {s}")))
            })
            .transpose()?;

        Ok(SettingsPatch {
            show_order_time: row.show_order_time.map(|v| v != 0),
            show_tips: row.show_tips.map(|v| v != 0),
            show_info_service_cost: row.show_info_service_cost.map(|v| v != 0),
            show_rent_percent: row.show_rent_percent.map(|v| v != 0),
            show_medic_mechanic: row.show_medic_mechanic.map(|v| v != 0),
            include_rent_in_profit: row.include_rent_in_profit.map(|v| v != 0),
            color_scheme,
            accent_color,
            default_rent_percent: parse_optional_decimal(&row.default_rent_percent)?,
            default_info_service_cost: parse_optional_decimal(&row.default_info_service_cost)?,
            default_medic_cost: parse_optional_decimal(&row.default_medic_cost)?,
            default_mechanic_cost: parse_optional_decimal(&row.default_mechanic_cost)?,
        })
    }
}

fn parse_decimal(s: &str) -> Result<Decimal, RepositoryError> {
    s.parse::<Decimal>()
        .map_err(|e| RepositoryError::Database(format!("failed to parse decimal '{s}': {e}")))
}

fn parse_optional_decimal(s: &Option<String>) -> Result<Option<Decimal>, RepositoryError> {
    s.as_ref().map(|s| parse_decimal(s)).transpose()
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    chrono::NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| RepositoryError::Database(format!("failed to parse datetime '{s}': {e}")))
}

const DAY_COLUMNS: &str = "id, date, daily_expenses, info_service_cost, rent_percent, \
     medic_cost, mechanic_cost, notes, total_orders, total_cash, total_card, \
     total_tips, gross, rent_amount, extras_total, net_profit, created_at";

#[async_trait]
impl DayRepository for SqliteRepository {
    async fn save_day(&self, day: NewDayRecord) -> Result<DayRecord, RepositoryError> {
        tracing::debug!(id = %day.id, orders = day.orders.len(), "saving day");
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query(
            "INSERT INTO days (
                id, date, daily_expenses, info_service_cost, rent_percent,
                medic_cost, mechanic_cost, notes, total_orders, total_cash,
                total_card, total_tips, gross, rent_amount, extras_total,
                net_profit, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&day.id)
        .bind(&day.date)
        .bind(day.extras.daily_expenses.to_string())
        .bind(day.extras.info_service_cost.to_string())
        .bind(day.extras.rent_percent.to_string())
        .bind(day.extras.medic_cost.to_string())
        .bind(day.extras.mechanic_cost.to_string())
        .bind(&day.notes)
        .bind(day.totals.total_orders.to_string())
        .bind(day.totals.total_cash.to_string())
        .bind(day.totals.total_card.to_string())
        .bind(day.totals.total_tips.to_string())
        .bind(day.totals.gross.to_string())
        .bind(day.totals.rent_amount.to_string())
        .bind(day.totals.extras_total.to_string())
        .bind(day.totals.net_profit.to_string())
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        for (position, order) in day.orders.iter().enumerate() {
            sqlx::query(
                "INSERT INTO day_orders (day_id, position, id, amount, payment_type, tips, entry_time)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&day.id)
            .bind(position as i64)
            .bind(&order.id)
            .bind(order.amount.to_string())
            .bind(order.payment_type.as_str())
            .bind(order.tips.map(|t| t.to_string()))
            .bind(&order.time)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        self.get_day(&day.id).await
    }

    async fn get_day(&self, id: &str) -> Result<DayRecord, RepositoryError> {
        let row: DayRow =
            sqlx::query_as(&format!("SELECT {DAY_COLUMNS} FROM days WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?
                .ok_or(RepositoryError::NotFound)?;

        let orders = self.orders_for_day(id).await?;
        row.into_record(orders)
    }

    async fn delete_day(&self, id: &str) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM day_orders WHERE day_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let result = sqlx::query("DELETE FROM days WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn list_days(&self) -> Result<Vec<DayRecord>, RepositoryError> {
        let day_rows: Vec<DayRow> = sqlx::query_as(&format!(
            "SELECT {DAY_COLUMNS} FROM days ORDER BY created_at DESC, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let order_rows: Vec<OrderRow> = sqlx::query_as(
            "SELECT day_id, id, amount, payment_type, tips, entry_time
             FROM day_orders ORDER BY day_id, position",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let mut orders_by_day: HashMap<String, Vec<Order>> = HashMap::new();
        for row in order_rows {
            let day_id = row.day_id.clone();
            orders_by_day
                .entry(day_id)
                .or_default()
                .push(row.try_into()?);
        }

        day_rows
            .into_iter()
            .map(|row| {
                let orders = orders_by_day.remove(&row.id).unwrap_or_default();
                row.into_record(orders)
            })
            .collect()
    }

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT OR REPLACE INTO user_settings (
                key, show_order_time, show_tips, show_info_service_cost,
                show_rent_percent, show_medic_mechanic, include_rent_in_profit,
                color_scheme, accent_color, default_rent_percent,
                default_info_service_cost, default_medic_cost, default_mechanic_cost
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(SETTINGS_KEY)
        .bind(settings.show_order_time as i64)
        .bind(settings.show_tips as i64)
        .bind(settings.show_info_service_cost as i64)
        .bind(settings.show_rent_percent as i64)
        .bind(settings.show_medic_mechanic as i64)
        .bind(settings.include_rent_in_profit as i64)
        .bind(settings.color_scheme.as_str())
        .bind(settings.accent_color.as_str())
        .bind(settings.default_rent_percent.to_string())
        .bind(settings.default_info_service_cost.to_string())
        .bind(settings.default_medic_cost.to_string())
        .bind(settings.default_mechanic_cost.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<SettingsPatch>, RepositoryError> {
        let row: Option<SettingsRow> = sqlx::query_as(
            "SELECT show_order_time, show_tips, show_info_service_cost,
                    show_rent_percent, show_medic_mechanic, include_rent_in_profit,
                    color_scheme, accent_color, default_rent_percent,
                    default_info_service_cost, default_medic_cost, default_mechanic_cost
             FROM user_settings WHERE key = ?",
        )
        .bind(SETTINGS_KEY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(|r| r.try_into()).transpose()
    }
}
