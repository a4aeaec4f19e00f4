//! Wicker
//!
//! Wicker is a small, deterministic basket pricing engine written in Rust.
//! It totals a basket of line items against two families of promotional
//! offers, "buy N get M free" bulk offers and cross-product percentage
//! discounts, charging full price for everything left over.

pub mod basket;
pub mod catalog;
pub mod fixtures;
pub mod items;
pub mod offers;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
