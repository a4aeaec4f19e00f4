//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};

use crate::items::LineItem;

/// Calculates the total unit price of items no offer has accounted for.
///
/// An empty or fully processed list yields zero.
///
/// # Errors
///
/// Returns a [`MoneyError`] on money arithmetic or currency mismatch.
pub fn unprocessed_total<'a>(
    items: &[LineItem<'a>],
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, MoneyError> {
    items
        .iter()
        .filter(|item| !item.processed())
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            acc.add(*item.price())
        })
}

/// Calculates the full-price subtotal of every item, ignoring processed
/// flags.
///
/// # Errors
///
/// Returns a [`MoneyError`] on money arithmetic or currency mismatch.
pub fn subtotal<'a>(
    items: &[LineItem<'a>],
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, MoneyError> {
    items
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            acc.add(*item.price())
        })
}
