//! Stock-limit reconciliation.
//!
//! The cart store trusts its inputs, so every add-to-cart intent passes
//! through here first: the requested quantity is reconciled against the
//! listing's available stock *and* against what the cart already holds for
//! that product. A rejected intent never mutates the store; the error
//! messages are the user-facing notices.

use harbor_core::{Product, ProductId, UserId};
use thiserror::Error;

use crate::cart::CartStore;

/// Why an add-to-cart intent was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("This product is out of stock.")]
    OutOfStock,

    #[error("Please select a valid quantity.")]
    InvalidQuantity,

    #[error("Only {available} items available in stock.")]
    ExceedsStock { available: u32 },

    #[error(
        "Cannot add {requested} item(s). You already have {in_cart} in cart, and only {available} are in stock."
    )]
    ExceedsStockWithCart {
        requested: u32,
        in_cart: u32,
        available: u32,
    },

    #[error("You cannot buy your own product.")]
    OwnListing,
}

/// Reconcile a requested quantity against stock and the cart's contents.
///
/// # Errors
///
/// Rejects when the product is out of stock, the request is zero, the
/// request alone exceeds stock, or the request plus the quantity already in
/// the cart exceeds stock.
pub fn check_stock(
    cart: &CartStore,
    product_id: &ProductId,
    requested: u32,
    available: u32,
) -> Result<(), StockError> {
    if available == 0 {
        return Err(StockError::OutOfStock);
    }
    if requested == 0 {
        return Err(StockError::InvalidQuantity);
    }
    if requested > available {
        return Err(StockError::ExceedsStock { available });
    }

    let in_cart = cart.find(product_id).map_or(0, |line| line.quantity);
    if in_cart + requested > available {
        return Err(StockError::ExceedsStockWithCart {
            requested,
            in_cart,
            available,
        });
    }

    Ok(())
}

/// Full purchase check against a catalog listing.
///
/// In addition to [`check_stock`], rejects buying one's own listing when
/// the buyer is known.
///
/// # Errors
///
/// Returns the first failed check, if any.
pub fn check_purchase(
    cart: &CartStore,
    product: &Product,
    requested: u32,
    buyer: Option<&UserId>,
) -> Result<(), StockError> {
    if buyer.is_some_and(|buyer| buyer == &product.seller) {
        return Err(StockError::OwnListing);
    }
    check_stock(cart, &product.id, requested, product.available())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use crate::cart::CartProduct;
    use crate::storage::MemoryStorage;

    use super::*;

    fn cart_with(id: &str, quantity: u32) -> CartStore {
        let mut cart = CartStore::load(Box::new(MemoryStorage::new()));
        cart.add(
            CartProduct {
                product_id: ProductId::new(id),
                name: "Wireless Mouse".to_owned(),
                unit_price: dec!(25.50),
                image: None,
                attributes: None,
            },
            quantity,
        )
        .unwrap();
        cart
    }

    #[test]
    fn test_out_of_stock_wins() {
        let cart = CartStore::load(Box::new(MemoryStorage::new()));
        assert_eq!(
            check_stock(&cart, &ProductId::new("P1"), 1, 0),
            Err(StockError::OutOfStock)
        );
    }

    #[test]
    fn test_zero_request_rejected() {
        let cart = CartStore::load(Box::new(MemoryStorage::new()));
        assert_eq!(
            check_stock(&cart, &ProductId::new("P1"), 0, 5),
            Err(StockError::InvalidQuantity)
        );
    }

    #[test]
    fn test_request_beyond_stock() {
        let cart = CartStore::load(Box::new(MemoryStorage::new()));
        assert_eq!(
            check_stock(&cart, &ProductId::new("P1"), 6, 5),
            Err(StockError::ExceedsStock { available: 5 })
        );
    }

    #[test]
    fn test_cart_contents_count_against_stock() {
        let cart = cart_with("P1", 3);
        assert_eq!(
            check_stock(&cart, &ProductId::new("P1"), 3, 5),
            Err(StockError::ExceedsStockWithCart {
                requested: 3,
                in_cart: 3,
                available: 5,
            })
        );
        // Two more still fit.
        assert_eq!(check_stock(&cart, &ProductId::new("P1"), 2, 5), Ok(()));
    }

    #[test]
    fn test_other_products_do_not_interfere() {
        let cart = cart_with("P2", 5);
        assert_eq!(check_stock(&cart, &ProductId::new("P1"), 5, 5), Ok(()));
    }

    #[test]
    fn test_error_messages_are_user_notices() {
        let err = StockError::ExceedsStockWithCart {
            requested: 3,
            in_cart: 3,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "Cannot add 3 item(s). You already have 3 in cart, and only 5 are in stock."
        );
    }
}
