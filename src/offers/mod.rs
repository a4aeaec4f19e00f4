//! Offers
//!
//! Promotional rules applied while totalling a basket. Two families exist:
//! [`bulk`] offers give free units of a single product, [`discount`] offers
//! give a percentage off one product for buying enough of another.
//!
//! Both passes partition the basket's line items through the `processed`
//! flag: once a pass accounts for a unit's cost it marks the unit, and no
//! later pass prices it again.

use rust_decimal::Decimal;
use rusty_money::MoneyError;
use thiserror::Error;

use crate::products::ProductId;

pub mod bulk;
pub mod discount;

/// Errors raised while applying offers to a basket.
#[derive(Debug, Error)]
pub enum OfferError {
    /// A bulk offer's leftover paid-for units reached the buy threshold
    /// without the free units needed to complete another group.
    #[error("not enough free units of product {product_id} selected to complete the bulk offer")]
    InsufficientFreeProducts {
        /// Product the failing bulk offer applies to.
        product_id: ProductId,
    },

    /// A percentage calculation could not be represented in minor units.
    #[error("percentage calculation overflowed or was not representable")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A "buy N, get M free" rule scoped to a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOffer {
    /// Product the offer applies to.
    pub product_id: ProductId,

    /// Paid-for units required per group. Must be greater than zero.
    pub number_to_buy: usize,

    /// Free units granted per group. Must be greater than zero.
    pub number_free: usize,
}

impl BulkOffer {
    /// Create a new bulk offer.
    pub fn new(product_id: ProductId, number_to_buy: usize, number_free: usize) -> Self {
        Self {
            product_id,
            number_to_buy,
            number_free,
        }
    }

    /// Units consumed by one complete group of this offer.
    pub(crate) fn group_size(&self) -> usize {
        self.number_to_buy + self.number_free
    }
}

/// A cross-product rule: every `number_to_buy` units of one product entitle
/// one unit of another product to a percentage discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountOffer {
    /// Product whose purchases trigger the discount.
    pub product_bought_id: ProductId,

    /// Trigger units required per discounted unit. Must be greater than zero.
    pub number_to_buy: usize,

    /// Product the discount applies to.
    pub product_discounted_id: ProductId,

    /// Fraction taken off the unit price, in `[0, 1]`.
    pub percentage_off: Decimal,
}

impl DiscountOffer {
    /// Create a new discount offer.
    pub fn new(
        product_bought_id: ProductId,
        number_to_buy: usize,
        product_discounted_id: ProductId,
        percentage_off: Decimal,
    ) -> Self {
        Self {
            product_bought_id,
            number_to_buy,
            product_discounted_id,
            percentage_off,
        }
    }
}
