//! Bulk Offers
//!
//! The free-unit marking pass. Runs before any pricing so that free units
//! are already excluded when the discount and full-price passes read the
//! `processed` flags.

use crate::{
    items::{self, LineItem},
    offers::{BulkOffer, OfferError},
};

/// Mark the free units granted by each bulk offer, in place.
///
/// For each offer the basket is scanned for units of the offer's product in
/// insertion order. Every complete group of `number_to_buy + number_free`
/// units grants `number_free` free units, taken from the front of the
/// matching run; offers on disjoint products do not interact. Empty item or
/// offer lists are a no-op.
///
/// # Errors
///
/// Returns [`OfferError::InsufficientFreeProducts`] when the units left over
/// after complete groups reach the buy threshold: the customer has paid for
/// enough units to open another group but has not selected the free units
/// that would complete it. On failure the processed flag is cleared on every
/// item in the basket, including marks made by earlier offers in the same
/// pass, so no partial markings survive.
pub fn process_free_items(
    items: &mut [LineItem<'_>],
    offers: &[BulkOffer],
) -> Result<(), OfferError> {
    for offer in offers {
        let group_size = offer.group_size();
        if group_size == 0 {
            continue;
        }

        let matching = items
            .iter()
            .filter(|item| item.product_id() == offer.product_id)
            .count();

        let num_groups = matching / group_size;
        let total_free = num_groups * offer.number_free;

        let leftover = matching % group_size;
        if leftover >= offer.number_to_buy {
            items::clear_processed(items);
            return Err(OfferError::InsufficientFreeProducts {
                product_id: offer.product_id,
            });
        }

        for item in items
            .iter_mut()
            .filter(|item| item.product_id() == offer.product_id)
            .take(total_free)
        {
            item.mark_processed();
        }
    }

    Ok(())
}
