use rust_decimal::Decimal;
use std::collections::HashMap;

use tracing::debug;

use crate::Error;

/// Sentinel line emitted when a report is requested for an unknown id.
pub const NOT_FOUND_MESSAGE: &str = "Customer not found!";

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub balance: Decimal,
    pub age: u8,
}

/// In-memory map from customer id to record.
///
/// The directory exclusively owns its records: reads hand out shared
/// references and the only mutation path is [`adjust_balance`].
/// Records are neither inserted nor deleted after construction.
///
/// [`adjust_balance`]: CustomerDirectory::adjust_balance
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: HashMap<u32, Customer>,
}

impl CustomerDirectory {
    /// Builds a directory from an explicit seed set, keyed by each
    /// record's own id. If two seed records share an id, the later one
    /// wins.
    pub fn with_customers(seed: impl IntoIterator<Item = Customer>) -> Self {
        let customers = seed
            .into_iter()
            .map(|customer| (customer.id, customer))
            .collect();
        Self { customers }
    }

    /// Looks up a customer by id. No side effects.
    pub fn get(&self, id: u32) -> Option<&Customer> {
        debug!(id, "getting customer");
        self.customers.get(&id)
    }

    /// Adds a signed delta to a customer's balance in place.
    /// No lower bound is enforced; the resulting balance may go negative.
    pub fn adjust_balance(&mut self, id: u32, delta: Decimal) -> Result<(), Error> {
        debug!(id, %delta, "adjusting balance");
        let customer = self
            .customers
            .get_mut(&id)
            .ok_or(Error::CustomerNotFound)?;
        customer.balance += delta;
        Ok(())
    }

    /// Renders a one-line report with id, name, balance (2 decimal
    /// places) and age, or [`NOT_FOUND_MESSAGE`] for an unknown id.
    pub fn describe(&self, id: u32) -> String {
        match self.get(id) {
            Some(customer) => format!(
                "Customer ID: {}, Name: {}, Balance: {:.2}, Age: {}",
                customer.id, customer.name, customer.balance, customer.age
            ),
            None => NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
