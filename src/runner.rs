//! The runner is responsible for seeding the directory and driving the
//! report/adjust/report sequence, writing the report lines to a writer.

use std::io::Write;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{Customer, CustomerDirectory};

/// The three fixed records the binary seeds when no seed file is given.
pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            name: "Alice".to_string(),
            balance: Decimal::new(1000_00, 2),
            age: 30,
        },
        Customer {
            id: 2,
            name: "Bob".to_string(),
            balance: Decimal::new(500_00, 2),
            age: 25,
        },
        Customer {
            id: 3,
            name: "Charlie".to_string(),
            balance: Decimal::new(200_00, 2),
            age: 17,
        },
    ]
}

/// The fixed balance adjustments the binary applies, one per demo id.
pub fn demo_adjustments() -> Vec<(u32, Decimal)> {
    vec![
        (1, Decimal::new(500, 0)),
        (2, Decimal::new(-200, 0)),
        (3, Decimal::new(1000, 0)),
    ]
}

/// Seeds a directory and, for each `(id, delta)` adjustment, writes the
/// customer report, applies the balance change, and writes the report
/// again.
///
/// An adjustment targeting an unknown id is logged and skipped; the
/// sequence continues, and the surrounding reports show the not-found
/// message.
///
/// # Arguments
/// * `seed` - Initial customer records for the directory
/// * `adjustments` - Signed balance deltas keyed by customer id
/// * `writer` - Where to write the report lines (e.g. stdout)
///
/// # Errors
/// Returns an error only if writing to the output fails.
pub fn run<W>(
    seed: Vec<Customer>,
    adjustments: &[(u32, Decimal)],
    mut writer: W,
) -> std::io::Result<()>
where
    W: Write,
{
    let mut directory = CustomerDirectory::with_customers(seed);
    info!(count = directory.len(), "customer directory initialized");

    for &(id, delta) in adjustments {
        writeln!(writer, "{}", directory.describe(id))?;
        if let Err(err) = directory.adjust_balance(id, delta) {
            warn!(id, %err, "skipping balance adjustment");
        }
        writeln!(writer, "{}", directory.describe(id))?;
    }
    Ok(())
}
