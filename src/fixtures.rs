//! Fixtures
//!
//! Catalogs defined as YAML documents, for demos and tests. A fixture file
//! stands in for whatever system of record a host application resolves
//! products and offers from; the shipped `fixtures/groceries.yaml` carries
//! the three-product grocery dataset used by the acceptance tests.

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{CatalogError, StaticCatalog},
    offers::{BulkOffer, DiscountOffer},
    products::{Product, ProductId},
};

/// Fixture parsing errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Percentage not a decimal, or outside `[0, 1]`
    #[error("invalid percentage: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Invalid catalog data
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Catalog definition as it appears in a YAML fixture file.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// ISO alpha code of the currency every price is quoted in
    pub currency: String,

    /// Product definitions
    pub products: Vec<ProductFixture>,

    /// Active bulk offers
    #[serde(default)]
    pub bulk_offers: Vec<BulkOfferFixture>,

    /// Active discount offers
    #[serde(default)]
    pub discount_offers: Vec<DiscountOfferFixture>,
}

/// Product definition from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: u32,

    /// Product name
    pub name: String,

    /// Unit price as a decimal string, e.g. `"1.15"`
    pub price: String,
}

/// Bulk offer definition from YAML
#[derive(Debug, Deserialize)]
pub struct BulkOfferFixture {
    /// Product the offer applies to
    pub product_id: u32,

    /// Paid-for units per group
    pub number_to_buy: usize,

    /// Free units per group
    pub number_free: usize,
}

/// Discount offer definition from YAML
#[derive(Debug, Deserialize)]
pub struct DiscountOfferFixture {
    /// Product whose purchases trigger the discount
    pub product_bought_id: u32,

    /// Trigger units required per discounted unit
    pub number_to_buy: usize,

    /// Product the discount applies to
    pub product_discounted_id: u32,

    /// Fraction off as a decimal string in `[0, 1]`, e.g. `"0.5"`
    pub percentage_off: String,
}

impl CatalogFixture {
    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if the file cannot be read, or
    /// [`FixtureError::Yaml`] if it is not a valid catalog document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = fs::read_to_string(path)?;

        Ok(serde_norway::from_str(&raw)?)
    }

    /// Load a named fixture set from the `fixtures/` directory.
    ///
    /// # Errors
    ///
    /// As for [`CatalogFixture::load`].
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::load(Path::new("fixtures").join(format!("{name}.yaml")))
    }

    /// Build a catalog from the fixture definitions.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::UnknownCurrency`]: the currency code is not a known
    ///   ISO code.
    /// - [`FixtureError::InvalidPrice`]: a product price does not parse.
    /// - [`FixtureError::InvalidPercentage`]: a discount percentage does not
    ///   parse or falls outside `[0, 1]`.
    /// - [`FixtureError::Catalog`]: duplicate product ids.
    pub fn into_catalog(self) -> Result<StaticCatalog<'static>, FixtureError> {
        let Some(currency) = iso::find(&self.currency) else {
            return Err(FixtureError::UnknownCurrency(self.currency));
        };

        let products = self
            .products
            .into_iter()
            .map(|product| {
                let minor_units = parse_price(&product.price, currency)?;
                let price = Money::from_minor(minor_units, currency);

                Ok(Product::new(ProductId(product.id), product.name, price))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        let bulk_offers: Vec<BulkOffer> = self
            .bulk_offers
            .into_iter()
            .map(|offer| {
                BulkOffer::new(
                    ProductId(offer.product_id),
                    offer.number_to_buy,
                    offer.number_free,
                )
            })
            .collect();

        let discount_offers = self
            .discount_offers
            .into_iter()
            .map(|offer| {
                let percentage_off = parse_percentage(&offer.percentage_off)?;

                Ok(DiscountOffer::new(
                    ProductId(offer.product_bought_id),
                    offer.number_to_buy,
                    ProductId(offer.product_discounted_id),
                    percentage_off,
                ))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        Ok(StaticCatalog::new(
            products,
            bulk_offers,
            discount_offers,
            currency,
        )?)
    }
}

/// Parse a decimal price string (e.g. `"1.15"`) into minor units of the
/// given currency.
fn parse_price(raw: &str, currency: &'static iso::Currency) -> Result<i64, FixtureError> {
    let amount = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(raw.to_string()))?;

    let scale = Decimal::from(10_i64.pow(currency.exponent));

    amount
        .checked_mul(scale)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(raw.to_string()))
}

/// Parse a percentage string, accepting only values in `[0, 1]`.
fn parse_percentage(raw: &str) -> Result<Decimal, FixtureError> {
    match raw.trim().parse::<Decimal>() {
        Ok(value) if (Decimal::ZERO..=Decimal::ONE).contains(&value) => Ok(value),
        Ok(_) | Err(_) => Err(FixtureError::InvalidPercentage(raw.to_string())),
    }
}
