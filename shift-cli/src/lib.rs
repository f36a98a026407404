pub mod logging;
pub mod orders_csv;
pub mod output;
