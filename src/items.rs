//! Line Items

use rusty_money::{Money, iso::Currency};

use crate::products::{Product, ProductId};

/// One physical unit of a purchased product.
///
/// The name and price are copied out of the catalog when the unit is added,
/// so a later catalog change never reprices a basket retroactively. The
/// `processed` flag records that some offer has already accounted for this
/// unit's cost, excluding it from full-price summation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    product_id: ProductId,
    name: String,
    price: Money<'a, Currency>,
    processed: bool,
}

impl<'a> LineItem<'a> {
    /// Creates a new, unprocessed line item.
    pub fn new(product_id: ProductId, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            processed: false,
        }
    }

    /// Creates a line item as a value copy of a catalog product.
    pub fn from_product(product: &Product<'a>) -> Self {
        Self::new(product.id(), product.name(), *product.price())
    }

    /// Returns the id of the product this unit belongs to
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the denormalised product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns whether an offer has already accounted for this unit's cost
    pub fn processed(&self) -> bool {
        self.processed
    }

    pub(crate) fn mark_processed(&mut self) {
        self.processed = true;
    }
}

/// Clear the processed flag on every item.
pub(crate) fn clear_processed(items: &mut [LineItem<'_>]) {
    for item in items {
        item.processed = false;
    }
}
