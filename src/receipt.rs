//! Receipt

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;

/// Priced summary of a checked-out basket.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    /// Indexes of items that were charged at full price, outside any offer
    full_price_items: SmallVec<[usize; 10]>,

    /// Total cost before any offer applications
    subtotal: Money<'a, Currency>,

    /// Total amount payable after offer applications
    total: Money<'a, Currency>,

    /// Currency used for all monetary values
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Create a new receipt with the given details.
    pub fn new(
        full_price_items: SmallVec<[usize; 10]>,
        subtotal: Money<'a, Currency>,
        total: Money<'a, Currency>,
        currency: &'static Currency,
    ) -> Self {
        Self {
            full_price_items,
            subtotal,
            total,
            currency,
        }
    }

    /// Total cost before any offer applications
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total amount payable after offer applications
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Basket indexes of the items charged at full price
    pub fn full_price_items(&self) -> &[usize] {
        &self.full_price_items
    }

    /// Currency used for all monetary values
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Calculate the savings made by applying offers.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }
}
