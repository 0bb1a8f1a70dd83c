//! crates/receipt_processor_core/src/scoring.rs
//!
//! The points rule engine. Every rule looks at one aspect of a receipt and
//! contributes independently; the score is the sum of all contributions.

use crate::domain::{Amount, Item, Receipt, ReceiptError};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const ROUND_DOLLAR_POINTS: u64 = 75;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_WINDOW_POINTS: u64 = 10;

/// Points awarded by each rule for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon_window: u64,
}

impl PointsBreakdown {
    /// The sum of all rules, or `None` if it does not fit in a `u64`.
    pub fn checked_total(&self) -> Option<u64> {
        [
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon_window,
        ]
        .into_iter()
        .try_fold(self.retailer_name, u64::checked_add)
    }
}

/// Scores a receipt.
pub fn score(receipt: &Receipt) -> Result<u64, ReceiptError> {
    breakdown(receipt)?
        .checked_total()
        .ok_or(ReceiptError::PointsOverflow)
}

/// Evaluates every rule against `receipt` and records what each one awarded.
///
/// Fails when the item prices are large enough that the points cannot be counted.
pub fn breakdown(receipt: &Receipt) -> Result<PointsBreakdown, ReceiptError> {
    let item_descriptions = receipt
        .items
        .iter()
        .map(item_description_points)
        .try_fold(0u64, u64::checked_add)
        .ok_or(ReceiptError::PointsOverflow)?;

    let points = PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(receipt.total),
        quarter_multiple: quarter_multiple_points(receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions,
        odd_day: odd_day_points(receipt.purchase_date),
        afternoon_window: afternoon_window_points(receipt.purchase_time),
    };
    points.checked_total().ok_or(ReceiptError::PointsOverflow)?;
    Ok(points)
}

/// One point per ASCII letter or digit.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

pub fn round_dollar_points(total: Amount) -> u64 {
    if total.fractional_cents() == 0 {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Only `.25`, `.50` and `.75` qualify; `.00` is left to the round-dollar rule.
pub fn quarter_multiple_points(total: Amount) -> u64 {
    match total.fractional_cents() {
        25 | 50 | 75 => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// `ceil(0.2 * price)` when the space-trimmed description length is a multiple of 3.
///
/// Length is measured in bytes and an empty description qualifies. The product is
/// computed on whole cents: `0.2 * cents / 100 == cents / 500`.
pub fn item_description_points(item: &Item) -> u64 {
    let trimmed = item.short_description.trim_matches(' ');
    if trimmed.len() % 3 == 0 {
        item.price.cents().div_ceil(500)
    } else {
        0
    }
}

pub fn odd_day_points(purchase_date: NaiveDate) -> u64 {
    if purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Strictly after 14:00 and strictly before 16:00.
pub fn afternoon_window_points(purchase_time: NaiveTime) -> u64 {
    let in_window = match purchase_time.hour() {
        14 => purchase_time.minute() > 0,
        15 => true,
        _ => false,
    };
    if in_window {
        AFTERNOON_WINDOW_POINTS
    } else {
        0
    }
}
