//! Discount Offers
//!
//! The cross-product percentage pass. Runs after the bulk pass, pricing the
//! units it captures and marking them so the full-price pass skips them.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::{
    items::LineItem,
    offers::{DiscountOffer, OfferError},
};

/// Price the units captured by each discount offer, marking them processed.
///
/// For each offer, every `number_to_buy` units of the trigger product earn a
/// discount on one unit of the target product. The trigger count includes
/// units already marked free by a bulk offer; the target walk skips them, so
/// a unit is never priced by more than one offer. Discounted units are
/// consumed from the front of the target run in insertion order.
///
/// An offer with too few trigger units, or no unmarked target units,
/// contributes nothing and is not an error.
///
/// # Errors
///
/// Returns [`OfferError::PercentConversion`] if a discounted price cannot be
/// represented in minor units, or [`OfferError::Money`] if accumulating the
/// total fails.
pub fn discounted_total<'a>(
    items: &mut [LineItem<'a>],
    offers: &[DiscountOffer],
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, OfferError> {
    let mut total = Money::from_minor(0, currency);

    for offer in offers {
        if offer.number_to_buy == 0 {
            continue;
        }

        let num_bought = items
            .iter()
            .filter(|item| item.product_id() == offer.product_bought_id)
            .count();

        let num_discounts = num_bought / offer.number_to_buy;

        for item in items
            .iter_mut()
            .filter(|item| item.product_id() == offer.product_discounted_id && !item.processed())
            .take(num_discounts)
        {
            total = total.add(discounted_price(item, offer.percentage_off)?)?;
            item.mark_processed();
        }
    }

    Ok(total)
}

/// Calculate `price * (1 - percentage_off)` in exact decimal arithmetic,
/// rounded to minor units with midpoints away from zero.
fn discounted_price<'a>(
    item: &LineItem<'a>,
    percentage_off: Decimal,
) -> Result<Money<'a, Currency>, OfferError> {
    let Some(factor) = Decimal::ONE.checked_sub(percentage_off) else {
        return Err(OfferError::PercentConversion);
    };

    let minor = Decimal::from(item.price().to_minor_units());
    let Some(applied) = factor.checked_mul(minor) else {
        return Err(OfferError::PercentConversion);
    };

    let rounded = applied.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let Some(rounded) = rounded.to_i64() else {
        return Err(OfferError::PercentConversion);
    };

    Ok(Money::from_minor(rounded, item.price().currency()))
}
