use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;

use shift_cli::orders_csv::OrderCsvLoader;
use shift_cli::{logging, output};
use shift_core::calculations::{calculate_day, summarize_history};
use shift_core::db::{DbConfig, RepositoryRegistry};
use shift_core::format::{format_currency, format_date};
use shift_core::settings::SettingsStore;
use shift_core::{
    AccentColor, ColorScheme, DayExtras, DayRepository, NewDayRecord, Order, SettingsPatch,
    UserSettings,
};
use shift_db_sqlite::SqliteRepositoryFactory;

/// Shift profit calculator: record per-order income and per-day expenses,
/// compute the day's totals and keep a history of saved days.
#[derive(Parser, Debug)]
#[command(name = "shift")]
#[command(version, about, long_about = None)]
struct Cli {
    /// SQLite database URL (e.g. sqlite:shift.db?mode=rwc to create if missing)
    #[arg(long, default_value = "sqlite:shift.db?mode=rwc", global = true)]
    database: String,

    /// Append log output to this file as well as stdout
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the totals of a day without saving it
    Calc {
        /// Path to the orders CSV file (amount, payment_type, tips, time)
        #[arg(short, long)]
        orders: PathBuf,

        #[command(flatten)]
        extras: ExtrasArgs,
    },

    /// Compute and save a finished day
    Record {
        /// Path to the orders CSV file (amount, payment_type, tips, time)
        #[arg(short, long)]
        orders: PathBuf,

        #[command(flatten)]
        extras: ExtrasArgs,

        /// Shift date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text notes for the day
        #[arg(long)]
        notes: Option<String>,
    },

    /// List saved days (newest first) with the roll-up summary
    History,

    /// Show one saved day in full
    Show { id: String },

    /// Delete a saved day
    Delete { id: String },

    /// Inspect or change user settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// Per-day cost inputs. Anything not given falls back to the default
/// tariffs from the settings; daily expenses default to zero.
#[derive(Args, Debug)]
struct ExtrasArgs {
    /// Daily fixed expenses (fuel, food, ...)
    #[arg(long, default_value = "0")]
    expenses: Decimal,

    /// Info service cost, overrides the default tariff
    #[arg(long)]
    info_service_cost: Option<Decimal>,

    /// Rent as a percentage of gross revenue, overrides the default tariff
    #[arg(long)]
    rent_percent: Option<Decimal>,

    /// Medical check cost, overrides the default tariff
    #[arg(long)]
    medic_cost: Option<Decimal>,

    /// Mechanic check cost, overrides the default tariff
    #[arg(long)]
    mechanic_cost: Option<Decimal>,
}

impl ExtrasArgs {
    fn to_extras(&self, settings: &UserSettings) -> DayExtras {
        let mut extras = DayExtras::seeded_from(settings);
        extras.daily_expenses = self.expenses;
        if let Some(v) = self.info_service_cost {
            extras.info_service_cost = v;
        }
        if let Some(v) = self.rent_percent {
            extras.rent_percent = v;
        }
        if let Some(v) = self.medic_cost {
            extras.medic_cost = v;
        }
        if let Some(v) = self.mechanic_cost {
            extras.mechanic_cost = v;
        }
        extras
    }
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Print the effective settings
    Show,

    /// Change any subset of settings; the rest keep their values
    Set(SettingsSetArgs),
}

#[derive(Args, Debug)]
struct SettingsSetArgs {
    #[arg(long)]
    show_order_time: Option<bool>,
    #[arg(long)]
    show_tips: Option<bool>,
    #[arg(long)]
    show_info_service_cost: Option<bool>,
    #[arg(long)]
    show_rent_percent: Option<bool>,
    #[arg(long)]
    show_medic_mechanic: Option<bool>,
    #[arg(long)]
    include_rent_in_profit: Option<bool>,
    /// light or dark
    #[arg(long)]
    color_scheme: Option<String>,
    /// cyan, teal, green or blue
    #[arg(long)]
    accent_color: Option<String>,
    #[arg(long)]
    default_rent_percent: Option<Decimal>,
    #[arg(long)]
    default_info_service_cost: Option<Decimal>,
    #[arg(long)]
    default_medic_cost: Option<Decimal>,
    #[arg(long)]
    default_mechanic_cost: Option<Decimal>,
}

impl SettingsSetArgs {
    fn to_patch(&self) -> Result<SettingsPatch> {
        let color_scheme = match &self.color_scheme {
            Some(s) => match ColorScheme::parse(s) {
                Some(v) => Some(v),
                None => bail!("unknown color scheme '{s}' (expected 'light' or 'dark')"),
            },
            None => None,
        };
        let accent_color = match &self.accent_color {
            Some(s) => match AccentColor::parse(s) {
                Some(v) => Some(v),
                None => bail!("unknown accent color '{s}' (expected cyan, teal, green or blue)"),
            },
            None => None,
        };

        Ok(SettingsPatch {
            show_order_time: self.show_order_time,
            show_tips: self.show_tips,
            show_info_service_cost: self.show_info_service_cost,
            show_rent_percent: self.show_rent_percent,
            show_medic_mechanic: self.show_medic_mechanic,
            include_rent_in_profit: self.include_rent_in_profit,
            color_scheme,
            accent_color,
            default_rent_percent: self.default_rent_percent,
            default_info_service_cost: self.default_info_service_cost,
            default_medic_cost: self.default_medic_cost,
            default_mechanic_cost: self.default_mechanic_cost,
        })
    }
}

fn load_orders(
    path: &Path,
    date: &str,
) -> Result<Vec<Order>> {
    let file =
        File::open(path).with_context(|| format!("failed to open: {}", path.display()))?;
    let records = OrderCsvLoader::parse(file)
        .with_context(|| format!("failed to parse orders CSV: {}", path.display()))?;
    OrderCsvLoader::into_orders(records, date).map_err(Into::into)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(SqliteRepositoryFactory));
    let config = DbConfig {
        backend: "sqlite".to_string(),
        connection_string: cli.database.clone(),
    };
    let repo: Arc<dyn DayRepository> = Arc::from(
        registry
            .create(&config)
            .await
            .with_context(|| format!("failed to open database: {}", cli.database))?,
    );

    let mut settings_store = SettingsStore::load(repo.clone())
        .await
        .context("failed to load settings")?;
    let settings = settings_store.settings().clone();

    match cli.command {
        Command::Calc { orders, extras } => {
            let date = Local::now().format("%Y-%m-%d").to_string();
            let orders = load_orders(&orders, &date)?;
            let extras = extras.to_extras(&settings);
            let totals = calculate_day(&orders, &extras, &settings);
            println!("{}", output::render_totals(&totals, &settings));
        }

        Command::Record {
            orders,
            extras,
            date,
            notes,
        } => {
            let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
            let orders = load_orders(&orders, &date)?;
            let extras = extras.to_extras(&settings);
            let totals = calculate_day(&orders, &extras, &settings);
            let record = NewDayRecord {
                id: format!("{date}-{}", Utc::now().timestamp_millis()),
                date: date.clone(),
                orders,
                extras,
                notes,
                totals,
            };
            let saved = repo.save_day(record).await?;
            info!(id = %saved.id, "day saved");
            println!(
                "Сохранено: {} · {}",
                format_date(&saved.date),
                format_currency(saved.totals.net_profit)
            );
            println!("{}", output::render_totals(&saved.totals, &settings));
        }

        Command::History => {
            let days = repo.list_days().await?;
            let summary = summarize_history(&days);
            println!("{}", output::render_history(&days, &summary));
        }

        Command::Show { id } => {
            let day = repo.get_day(&id).await?;
            println!("{}", output::render_day(&day));
        }

        Command::Delete { id } => {
            repo.delete_day(&id).await?;
            info!(%id, "day deleted");
            println!("Удалено: {id}");
        }

        Command::Settings { action } => match action {
            SettingsAction::Show => {
                println!("{}", output::render_settings(&settings));
            }
            SettingsAction::Set(args) => {
                let patch = args.to_patch()?;
                let updated = settings_store.update(&patch).await?;
                println!("{}", output::render_settings(&updated));
            }
        },
    }

    Ok(())
}
