//! crates/receipt_processor_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any HTTP or serialization format. Values are
//! validated when they are built, so a `Receipt` always holds a real calendar
//! date, a real clock time and exact two-decimal amounts.

use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//=========================================================================================
// Validation Errors
//=========================================================================================

/// The reason a money string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an amount with exactly two decimal places")]
pub struct AmountError(pub String);

/// Raised when a field of an incoming receipt cannot be parsed into its domain shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptError {
    #[error("Invalid {field}: {source}")]
    InvalidAmount {
        field: String,
        #[source]
        source: AmountError,
    },
    #[error("Invalid purchaseDate: '{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("Invalid purchaseTime: '{0}' is not a 24-hour HH:MM time")]
    InvalidTime(String),
    #[error("Invalid items: the item prices are too large to score")]
    PointsOverflow,
}

//=========================================================================================
// Amount
//=========================================================================================

/// A non-negative money value, held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    /// The two digits after the decimal point, as a number in `0..100`.
    pub fn fractional_cents(self) -> u64 {
        self.cents % 100
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Accepts one or more ASCII digits, a `.`, then exactly two ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AmountError(s.to_string());

        let (whole, fraction) = s.split_once('.').ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || fraction.len() != 2 || !all_digits(fraction) {
            return Err(invalid());
        }

        let dollars: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = fraction.parse().map_err(|_| invalid())?;
        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(Self { cents })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

//=========================================================================================
// Receipt
//=========================================================================================

/// A single purchased line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

/// A receipt whose fields have all been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub total: Amount,
    pub items: Vec<Item>,
}

/// The outcome of a submission: the issued identifier and the points it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredReceipt {
    pub id: Uuid,
    pub points: u64,
}

/// Parses a `YYYY-MM-DD` purchase date.
pub fn parse_purchase_date(value: &str) -> Result<NaiveDate, ReceiptError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ReceiptError::InvalidDate(value.to_string()))
}

/// Parses a 24-hour `HH:MM` purchase time.
pub fn parse_purchase_time(value: &str) -> Result<NaiveTime, ReceiptError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ReceiptError::InvalidTime(value.to_string()))
}

/// Parses an amount, naming `field` in the error so the client can find it.
pub fn parse_amount(field: &str, value: &str) -> Result<Amount, ReceiptError> {
    value.parse().map_err(|source| ReceiptError::InvalidAmount {
        field: field.to_string(),
        source,
    })
}
