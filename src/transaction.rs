//! Define the transaction records on both sides of the conversion.
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{Amount, ExchangeRate, DATE_FORMAT};

/// Number of columns in an N26 export row.
pub const SOURCE_FIELD_COUNT: usize = 9;

/// The home currency of the account, foreign-currency columns quoting it are not FX.
const HOME_CURRENCY: &str = "eur";

/// One row of an N26 CSV export, columns in the order they appear in the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SourceTransaction {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub recipient: String,
    pub account_number: String,
    pub transaction_type: String,
    pub reference: String,
    pub amount: Amount,
    #[serde(deserialize_with = "deserialize_optional")]
    pub amount_foreign_currency: Option<Amount>,
    pub foreign_currency: String,
    #[serde(deserialize_with = "deserialize_optional")]
    pub exchange_rate: Option<ExchangeRate>,
}

impl SourceTransaction {
    /// Whether the transaction was executed in a currency other than the home one. Only looks at
    /// the currency code, even if the foreign amount or rate are missing.
    pub fn is_foreign_currency_transaction(&self) -> bool {
        !self.foreign_currency.is_empty()
            && !self.foreign_currency.eq_ignore_ascii_case(HOME_CURRENCY)
    }
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|err| serde::de::Error::custom(format!("invalid date '{}': {}", raw, err)))
}

/// An empty column is an absent value, anything else must parse.
fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|err| serde::de::Error::custom(format!("invalid number '{}': {}", raw, err)))
}

/// One row of a YNAB CSV import, fields in the order they are written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DestinationTransaction {
    pub date: String,
    pub payee: String,
    pub memo: String,
    pub amount: String,
}
