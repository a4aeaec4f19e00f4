//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Identifier for a product registered in a [`Catalog`](crate::catalog::Catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    id: ProductId,
    name: String,
    price: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Create a new product definition.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Returns the product id
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the product
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let product = Product::new(ProductId(2), "Milk", Money::from_minor(115, iso::GBP));

        assert_eq!(product.id(), ProductId(2));
        assert_eq!(product.name(), "Milk");
        assert_eq!(product.price(), &Money::from_minor(115, iso::GBP));
    }

    #[test]
    fn product_id_displays_as_plain_number() {
        assert_eq!(ProductId(42).to_string(), "42");
    }
}
