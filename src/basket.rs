//! Basket

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    items::{self, LineItem},
    offers::{OfferError, bulk, discount},
    pricing,
    products::ProductId,
    receipt::Receipt,
};

/// Errors related to basket mutation or totalling.
#[derive(Debug, Error)]
pub enum BasketError {
    /// A negative quantity was passed to [`Basket::add_product`].
    #[error("cannot add a negative quantity of items ({0})")]
    InvalidQuantity(i32),

    /// A product's price currency differs from the basket currency.
    #[error("product {0} is priced in {1}, but the basket uses {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// Wrapped catalog lookup error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Wrapped offer application error.
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Basket
///
/// Owns an ordered run of line items and prices them against the offers its
/// catalog currently advertises. Insertion order decides which units an
/// offer consumes, so totals are deterministic for a given add sequence.
#[derive(Debug)]
pub struct Basket<'a, C> {
    catalog: &'a C,
    items: Vec<LineItem<'a>>,
    currency: &'static Currency,
}

impl<'a, C: Catalog> Basket<'a, C> {
    /// Create an empty basket bound to a catalog and currency.
    pub fn new(catalog: &'a C, currency: &'static Currency) -> Self {
        Basket {
            catalog,
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of a product to the end of the basket.
    ///
    /// Each unit becomes its own [`LineItem`], copied from the catalog
    /// definition at add time. A zero quantity is a no-op. On any error the
    /// basket is left unmodified.
    ///
    /// # Errors
    ///
    /// - [`BasketError::InvalidQuantity`]: `quantity` is negative.
    /// - [`BasketError::Catalog`]: no product with that id is registered.
    /// - [`BasketError::CurrencyMismatch`]: the product is priced in a
    ///   currency other than the basket's.
    pub fn add_product(&mut self, id: ProductId, quantity: i32) -> Result<(), BasketError> {
        if quantity < 0 {
            return Err(BasketError::InvalidQuantity(quantity));
        }

        let product = self.catalog.product(id)?;

        let product_currency = product.price().currency();
        if product_currency != self.currency {
            return Err(BasketError::CurrencyMismatch(
                id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        for _ in 0..quantity {
            self.items.push(LineItem::from_product(product));
        }

        Ok(())
    }

    /// Calculate the total cost of the basket with all offers applied.
    ///
    /// Every processed flag is reset first, so repeated calls on an
    /// unmodified basket return the same total. The bulk pass then marks
    /// free units, the discount pass prices and marks discounted units, and
    /// everything still unmarked is charged at full price.
    ///
    /// # Errors
    ///
    /// - [`BasketError::Offer`]: a bulk offer's free-unit selection was
    ///   incomplete. No total is produced and every processed flag is left
    ///   cleared.
    /// - [`BasketError::Money`]: money arithmetic failed.
    pub fn total_cost(&mut self) -> Result<Money<'a, Currency>, BasketError> {
        let catalog = self.catalog;

        items::clear_processed(&mut self.items);

        bulk::process_free_items(&mut self.items, catalog.bulk_offers())?;

        let discounted =
            discount::discounted_total(&mut self.items, catalog.discount_offers(), self.currency)?;
        let full_price = pricing::unprocessed_total(&self.items, self.currency)?;

        Ok(discounted.add(full_price)?)
    }

    /// Total the basket and return a [`Receipt`] with the subtotal, the
    /// payable total, and the items that went through at full price.
    ///
    /// # Errors
    ///
    /// As for [`Basket::total_cost`], plus [`BasketError::Money`] for the
    /// subtotal calculation.
    pub fn checkout(&mut self) -> Result<Receipt<'a>, BasketError> {
        let subtotal = pricing::subtotal(&self.items, self.currency)?;
        let total = self.total_cost()?;

        let full_price_items: SmallVec<[usize; 10]> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.processed())
            .map(|(index, _)| index)
            .collect();

        Ok(Receipt::new(full_price_items, subtotal, total, self.currency))
    }

    /// Iterate over the line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// Get the number of line items in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the basket.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::{
        catalog::StaticCatalog,
        offers::{BulkOffer, DiscountOffer},
        products::Product,
    };

    use super::*;

    const BUTTER: ProductId = ProductId(1);
    const MILK: ProductId = ProductId(2);
    const BREAD: ProductId = ProductId(3);

    fn groceries() -> Result<StaticCatalog<'static>, CatalogError> {
        let products = [
            Product::new(BUTTER, "Butter", Money::from_minor(80, iso::GBP)),
            Product::new(MILK, "Milk", Money::from_minor(115, iso::GBP)),
            Product::new(BREAD, "Bread", Money::from_minor(100, iso::GBP)),
        ];

        let bulk_offers = vec![BulkOffer::new(MILK, 3, 1)];
        let discount_offers = vec![DiscountOffer::new(BUTTER, 2, BREAD, Decimal::new(5, 1))];

        StaticCatalog::new(products, bulk_offers, discount_offers, iso::GBP)
    }

    #[test]
    fn add_product_appends_one_item_per_unit() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        basket.add_product(MILK, 2)?;
        basket.add_product(BREAD, 1)?;

        let ids: Vec<ProductId> = basket.iter().map(LineItem::product_id).collect();

        assert_eq!(ids, vec![MILK, MILK, BREAD]);

        Ok(())
    }

    #[test]
    fn add_product_zero_quantity_is_a_no_op() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        basket.add_product(MILK, 0)?;

        assert!(basket.is_empty());

        Ok(())
    }

    #[test]
    fn add_product_negative_quantity_errors() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        let result = basket.add_product(MILK, -1);

        assert!(matches!(result, Err(BasketError::InvalidQuantity(-1))));
        assert!(basket.is_empty());

        Ok(())
    }

    #[test]
    fn add_product_unknown_id_leaves_basket_unmodified() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        basket.add_product(MILK, 1)?;

        let result = basket.add_product(ProductId(99), 2);

        assert!(matches!(
            result,
            Err(BasketError::Catalog(CatalogError::ProductNotFound(
                ProductId(99)
            )))
        ));
        assert_eq!(basket.len(), 1);

        Ok(())
    }

    #[test]
    fn add_product_currency_mismatch_errors() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::USD);

        let result = basket.add_product(MILK, 1);

        match result {
            Err(BasketError::CurrencyMismatch(id, product_currency, basket_currency)) => {
                assert_eq!(id, MILK);
                assert_eq!(product_currency, iso::GBP.iso_alpha_code);
                assert_eq!(basket_currency, iso::USD.iso_alpha_code);
            }
            other => unreachable!("expected CurrencyMismatch error, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn total_cost_of_empty_basket_is_zero() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        assert_eq!(basket.total_cost()?, Money::from_minor(0, iso::GBP));

        Ok(())
    }

    #[test]
    fn total_cost_without_applicable_offers_is_the_subtotal() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        basket.add_product(BREAD, 3)?;

        assert_eq!(basket.total_cost()?, Money::from_minor(300, iso::GBP));

        Ok(())
    }

    #[test]
    fn total_cost_is_idempotent_across_calls() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        basket.add_product(BUTTER, 2)?;
        basket.add_product(MILK, 4)?;
        basket.add_product(BREAD, 1)?;

        let first = basket.total_cost()?;
        let second = basket.total_cost()?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn failed_bulk_pass_leaves_every_item_unprocessed() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        // 7 milk: one complete group of 4, then 3 left over, which reaches
        // the buy threshold without its free unit.
        basket.add_product(MILK, 7)?;

        let result = basket.total_cost();

        assert!(matches!(
            result,
            Err(BasketError::Offer(OfferError::InsufficientFreeProducts {
                product_id: MILK
            }))
        ));
        assert!(basket.iter().all(|item| !item.processed()));

        Ok(())
    }

    #[test]
    fn checkout_reports_subtotal_total_and_full_price_items() -> TestResult {
        let catalog = groceries()?;
        let mut basket = Basket::new(&catalog, iso::GBP);

        basket.add_product(BUTTER, 2)?;
        basket.add_product(MILK, 8)?;
        basket.add_product(BREAD, 1)?;

        let receipt = basket.checkout()?;

        assert_eq!(receipt.subtotal(), Money::from_minor(1180, iso::GBP));
        assert_eq!(receipt.total(), Money::from_minor(900, iso::GBP));
        assert_eq!(receipt.savings()?, Money::from_minor(280, iso::GBP));

        // Two butter at indexes 0-1, then six of the eight milk; the first
        // two milk are free and the bread is discounted.
        assert_eq!(receipt.full_price_items(), &[0, 1, 4, 5, 6, 7, 8, 9]);

        Ok(())
    }
}
