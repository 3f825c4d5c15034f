use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::Deserialize;

use crate::Customer;

/// A customer record as it appears in a seed CSV file
/// (`id,name,balance,age`).
#[derive(Debug, Deserialize, PartialEq)]
pub struct CustomerRow {
    pub id: u32,
    pub name: String,
    #[serde(deserialize_with = "deserialize_decimal_2dp")]
    pub balance: Decimal,
    pub age: u8,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            balance: row.balance,
            age: row.age,
        }
    }
}

fn deserialize_decimal_2dp<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer)
        .map(|dec| dec.round_dp_with_strategy(2, RoundingStrategy::ToZero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse_csv_row(row: &str) -> Result<CustomerRow, csv::Error> {
        let data_with_header = format!("id,name,balance,age\n{}", row);
        let mut reader = csv::Reader::from_reader(data_with_header.as_bytes());
        reader.deserialize().next().unwrap()
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(
            parse_csv_row("1,Alice,1000.00,30").unwrap(),
            CustomerRow {
                id: 1,
                name: "Alice".to_string(),
                balance: dec!(1000.00),
                age: 30,
            }
        );
    }

    #[test]
    fn test_parse_negative_balance() {
        assert_eq!(
            parse_csv_row("4,Dora,-12.50,41").unwrap(),
            CustomerRow {
                id: 4,
                name: "Dora".to_string(),
                balance: dec!(-12.50),
                age: 41,
            }
        );
    }

    #[test]
    fn test_parse_invalid_balance_format() {
        let result = parse_csv_row("1,Alice,abc,30");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_field() {
        let result = parse_csv_row("1,Alice,1000.00");
        assert!(result.is_err());
    }

    #[test]
    fn test_customer_id_overflow() {
        let result = parse_csv_row("4294967296,Alice,1.0,30"); // u32::MAX + 1
        assert!(result.is_err());
    }

    #[test]
    fn test_age_overflow() {
        let result = parse_csv_row("1,Alice,1.0,256"); // u8::MAX + 1
        assert!(result.is_err());
    }

    #[test]
    fn test_max_valid_ids() {
        assert_eq!(
            parse_csv_row(&format!("{},Alice,1.0,{}", u32::MAX, u8::MAX))
                .unwrap()
                .id,
            u32::MAX
        );
    }

    #[test]
    fn test_rounds_balance_to_2_decimal_places() {
        assert_eq!(
            parse_csv_row("1,Alice,0.129,30").unwrap().balance,
            dec!(0.12) // Rounded down from 0.129
        );
    }

    #[test]
    fn test_row_converts_to_customer() {
        let customer = Customer::from(parse_csv_row("2,Bob,500.00,25").unwrap());
        assert_eq!(
            customer,
            Customer {
                id: 2,
                name: "Bob".to_string(),
                balance: dec!(500.00),
                age: 25,
            }
        );
    }
}
