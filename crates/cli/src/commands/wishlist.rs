//! Wishlist commands.

use clap::Subcommand;

use harbor_core::{ProductId, WishlistEntry};

use harbor_client::Result;
use harbor_client::wishlist::WishlistAdd;

use super::{Session, format_price};

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Show the wishlist
    Show,
    /// Save a product for later
    Add {
        /// Product id
        product_id: ProductId,
    },
    /// Remove a saved product
    Remove {
        /// Product id
        product_id: ProductId,
    },
    /// Empty the wishlist
    Clear,
    /// Sync with the account wishlist on the server
    Sync,
}

pub async fn run(session: &Session, action: WishlistAction) -> Result<()> {
    match action {
        WishlistAction::Show => {
            let wishlist = session.wishlist();
            if wishlist.is_empty() {
                println!("Your wishlist is empty.");
                return Ok(());
            }

            for entry in wishlist.entries() {
                let category = entry.category.as_deref().unwrap_or("-");
                println!(
                    "{}  {}  {}  [{category}]",
                    entry.product_id,
                    entry.name,
                    format_price(entry.price),
                );
            }
            println!();
            println!("{} item(s) saved.", wishlist.total_items());
        }
        WishlistAction::Add { product_id } => {
            let product = session.api().product(&product_id).await?;
            let mut wishlist = session.wishlist();

            let name = product.general.title.clone();
            let price = product.current_price();
            let image = product.general.images.first().cloned();
            let outcome = wishlist.add(WishlistEntry {
                product_id: product.id,
                name: name.clone(),
                price,
                image,
                category: Some(product.general.category),
            })?;

            match outcome {
                WishlistAdd::Added => println!("{name} added to wishlist!"),
                WishlistAdd::AlreadyPresent => {
                    println!("{name} is already in your wishlist.");
                }
            }
        }
        WishlistAction::Remove { product_id } => {
            let mut wishlist = session.wishlist();
            if wishlist.remove(&product_id)? {
                println!("Item removed from wishlist.");
            } else {
                println!("Item not found in wishlist.");
            }
        }
        WishlistAction::Clear => {
            let mut wishlist = session.wishlist();
            wishlist.clear()?;
            println!("Wishlist cleared.");
        }
        WishlistAction::Sync => {
            let mut wishlist = session.wishlist();
            let entries = session.api().fetch_wishlist().await?;
            let count = entries.len();
            wishlist.replace(entries)?;
            println!("Pulled {count} entry(ies) from your account wishlist.");
        }
    }
    Ok(())
}
