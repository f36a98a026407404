//! CSV import of a day's orders.
//!
//! The expected columns:
//! - `amount`: fare amount (e.g. `500` or `123.45`)
//! - `payment_type`: `cash` or `card`
//! - `tips`: optional tip amount (empty when none)
//! - `time`: optional free-form entry time (empty when none)

use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use shift_core::{Order, PaymentType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderCsvError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid payment type '{0}' (expected 'cash' or 'card')")]
    InvalidPaymentType(String),
}

impl From<csv::Error> for OrderCsvError {
    fn from(err: csv::Error) -> Self {
        OrderCsvError::CsvParse(err.to_string())
    }
}

/// A single row from the orders CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderCsvRecord {
    pub amount: Decimal,
    pub payment_type: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub tips: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub time: Option<String>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Loader for order data from CSV files.
pub struct OrderCsvLoader;

impl OrderCsvLoader {
    /// Parses order records from any CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<OrderCsvRecord>, OrderCsvError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: OrderCsvRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Converts parsed records into orders, assigning ids from the shift
    /// date and the row position.
    pub fn into_orders(
        records: Vec<OrderCsvRecord>,
        date: &str,
    ) -> Result<Vec<Order>, OrderCsvError> {
        records
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let payment_type =
                    PaymentType::parse(record.payment_type.trim()).ok_or_else(|| {
                        OrderCsvError::InvalidPaymentType(record.payment_type.clone())
                    })?;
                Ok(Order {
                    id: format!("{date}-{}", position + 1),
                    amount: record.amount,
                    payment_type,
                    tips: record.tips,
                    time: record.time,
                })
            })
            .collect()
    }
}
