//! Domain-specific errors for the customer directory.
//!
//! Contains error variants for the two failure cases:
//! - Absence of a record ([`Error::CustomerNotFound`]) — the only
//!   failure mode in the core, never fatal: lookups return `Option`
//!   and mutations report it as a `Result`.
//! - Seed-file failures ([`Error::Seed`]) — read/parse errors surfaced
//!   from the CSV layer when the directory is seeded from a file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("customer not found")]
    CustomerNotFound,
    #[error("failed to read seed data: {0}")]
    Seed(#[from] csv::Error),
}
