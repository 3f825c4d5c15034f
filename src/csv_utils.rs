//! CSV deserialization utilities.
//!
//! Provides a generic function for reading seed records from CSV data,
//! plus the customer-specific seed loader used by the binary.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::{Customer, CustomerRow, Error};

/// Creates an iterator that reads CSV records from a file.
/// Each record is deserialized into type T.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .into_deserialize())
}

/// Reads a customer seed file (`id,name,balance,age`) into records
/// ready to construct a directory.
///
/// # Errors
/// Returns [`Error::Seed`] if the file cannot be read or a row is
/// malformed.
pub fn load_customers<P>(path: P) -> Result<Vec<Customer>, Error>
where
    P: AsRef<Path>,
{
    let customers = read_csv::<CustomerRow, _>(path)?
        .map(|row| row.map(Customer::from))
        .collect::<csv::Result<_>>()?;
    Ok(customers)
}
