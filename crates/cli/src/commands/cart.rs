//! Cart commands.
//!
//! `add` is the inventory-display path: it fetches the listing, reconciles
//! the requested quantity against stock and the cart's current contents,
//! and only then mutates the store. `update --quantity 0` never removes the
//! line by itself - removal is confirmed with `--yes` or an explicit
//! `remove`.

use clap::Subcommand;

use harbor_core::ProductId;

use harbor_client::cart::{CartProduct, QuantityUpdate};
use harbor_client::{Result, check_purchase};

use super::{Session, format_price};

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: ProductId,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity
    Update {
        /// Product id
        product_id: ProductId,

        /// New quantity; 0 asks for removal
        #[arg(short, long)]
        quantity: u32,

        /// Confirm removal when the quantity is 0
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id
        product_id: ProductId,
    },
    /// Empty the cart
    Clear,
    /// Sync with the account cart on the server
    Sync {
        /// Push the local cart to the account instead of pulling
        #[arg(long)]
        push: bool,
    },
}

pub async fn run(session: &Session, action: CartAction) -> Result<()> {
    match action {
        CartAction::Show => {
            let cart = session.cart();
            if cart.is_empty() {
                println!("Your cart is empty.");
                return Ok(());
            }

            for line in cart.lines() {
                println!(
                    "{}  {}  {} x {} = {}",
                    line.product_id,
                    line.name,
                    format_price(line.unit_price),
                    line.quantity,
                    format_price(line.line_total()),
                );
            }
            println!();
            println!(
                "{} item(s), total {}",
                cart.total_items(),
                format_price(cart.total())
            );
        }
        CartAction::Add {
            product_id,
            quantity,
        } => {
            let product = session.api().product(&product_id).await?;
            let mut cart = session.cart();

            let buyer = session.profile().map(|profile| profile.user_id);
            check_purchase(&cart, &product, quantity, buyer.as_ref())?;

            let name = product.general.title.clone();
            cart.add(
                CartProduct {
                    product_id: product.id.clone(),
                    name,
                    unit_price: product.current_price(),
                    image: product.general.images.first().cloned(),
                    attributes: None,
                },
                quantity,
            )?;

            println!(
                "{} {}(s) added to cart. Cart total: {}",
                quantity,
                product.general.title,
                format_price(cart.total())
            );
        }
        CartAction::Update {
            product_id,
            quantity,
            yes,
        } => {
            let mut cart = session.cart();
            match cart.update_quantity(&product_id, quantity)? {
                QuantityUpdate::Updated => {
                    println!(
                        "Quantity updated. Cart total: {}",
                        format_price(cart.total())
                    );
                }
                QuantityUpdate::RemovalRequired => {
                    if yes {
                        cart.remove(&product_id)?;
                        println!("Item removed from cart.");
                    } else {
                        println!(
                            "A quantity of 0 removes the item. Re-run with --yes to confirm, \
                             or use `harbor cart remove {product_id}`."
                        );
                    }
                }
                QuantityUpdate::NotInCart => println!("Item not found in cart."),
            }
        }
        CartAction::Remove { product_id } => {
            let mut cart = session.cart();
            if cart.remove(&product_id)? {
                println!("Item removed from cart.");
            } else {
                println!("Item not found in cart.");
            }
        }
        CartAction::Clear => {
            let mut cart = session.cart();
            cart.clear()?;
            println!("Cart cleared.");
        }
        CartAction::Sync { push } => {
            let mut cart = session.cart();
            if push {
                // Replace the account copy wholesale: clear it, then push
                // each local line (the server merges repeated adds).
                session.api().clear_cart().await?;
                for line in cart.lines() {
                    session.api().push_cart_line(line).await?;
                }
                println!("Pushed {} line(s) to your account cart.", cart.lines().len());
            } else {
                let lines = session.api().fetch_cart().await?;
                let count = lines.len();
                cart.replace(lines)?;
                println!("Pulled {count} line(s) from your account cart.");
            }
        }
    }
    Ok(())
}
