mod csv_utils;
mod dto;
mod error;
mod runner;
mod stores;

pub use csv_utils::{load_customers, read_csv};
pub use dto::CustomerRow;
pub use error::Error;
pub use runner::{demo_adjustments, demo_customers, run};
pub use stores::{Customer, CustomerDirectory, NOT_FOUND_MESSAGE};
