//! Wicker prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    catalog::{Catalog, CatalogError, StaticCatalog},
    fixtures::{CatalogFixture, FixtureError},
    items::LineItem,
    offers::{BulkOffer, DiscountOffer, OfferError},
    products::{Product, ProductId},
    receipt::Receipt,
};
