//! Storage layer for the customer directory. Provides storage for
//! customer identity and balance records ([`CustomerDirectory`]).
//!
//! Current implementation is optimized for synchronous, direct memory
//! access.

mod customers;

pub use customers::{Customer, CustomerDirectory, NOT_FOUND_MESSAGE};
