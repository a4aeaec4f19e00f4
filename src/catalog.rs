//! Catalog
//!
//! Read-only source of product definitions and the active offer sets. The
//! pricing passes never mutate catalog state; baskets copy what they need at
//! add time.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    offers::{BulkOffer, DiscountOffer},
    products::{Product, ProductId},
};

/// Errors related to catalog lookup or construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the given id is registered.
    #[error("no product registered with id {0}")]
    ProductNotFound(ProductId),

    /// Two products were registered under the same id.
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    /// A product's price currency differs from the catalog currency.
    #[error("product {0} is priced in {1}, but the catalog uses {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Read-only provider of products and active offers.
pub trait Catalog {
    /// Resolve a product definition by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if no product with that id
    /// is registered.
    fn product(&self, id: ProductId) -> Result<&Product<'_>, CatalogError>;

    /// The active bulk offers, in application order.
    fn bulk_offers(&self) -> &[BulkOffer];

    /// The active discount offers, in application order.
    fn discount_offers(&self) -> &[DiscountOffer];
}

/// In-memory catalog backed by static definitions, initialised once at
/// startup and shared by reference.
#[derive(Debug)]
pub struct StaticCatalog<'a> {
    products: FxHashMap<ProductId, Product<'a>>,
    bulk_offers: Vec<BulkOffer>,
    discount_offers: Vec<DiscountOffer>,
    currency: &'static Currency,
}

impl<'a> StaticCatalog<'a> {
    /// Create a catalog from product and offer definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an
    /// id, or [`CatalogError::CurrencyMismatch`] if any product is priced in
    /// a currency other than `currency`.
    pub fn new(
        products: impl IntoIterator<Item = Product<'a>>,
        bulk_offers: impl Into<Vec<BulkOffer>>,
        discount_offers: impl Into<Vec<DiscountOffer>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut by_id = FxHashMap::default();

        for product in products {
            let id = product.id();

            let product_currency = product.price().currency();
            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if by_id.insert(id, product).is_some() {
                return Err(CatalogError::DuplicateProduct(id));
            }
        }

        Ok(Self {
            products: by_id,
            bulk_offers: bulk_offers.into(),
            discount_offers: discount_offers.into(),
            currency,
        })
    }

    /// Get the currency every product in the catalog is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Get the number of registered products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for StaticCatalog<'_> {
    fn product(&self, id: ProductId) -> Result<&Product<'_>, CatalogError> {
        self.products
            .get(&id)
            .ok_or(CatalogError::ProductNotFound(id))
    }

    fn bulk_offers(&self) -> &[BulkOffer] {
        &self.bulk_offers
    }

    fn discount_offers(&self) -> &[DiscountOffer] {
        &self.discount_offers
    }
}
