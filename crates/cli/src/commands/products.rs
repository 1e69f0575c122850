//! Catalog browsing.

use clap::Subcommand;

use harbor_core::ProductId;

use harbor_client::Result;

use super::{Session, format_price};

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List all products
    List,
    /// Show one product
    Show {
        /// Product id
        product_id: ProductId,
    },
}

pub async fn run(session: &Session, action: ProductsAction) -> Result<()> {
    match action {
        ProductsAction::List => {
            let products = session.api().products().await?;
            if products.is_empty() {
                println!("No products in the catalog.");
                return Ok(());
            }

            for product in products {
                let stock = match product.available() {
                    0 => "out of stock".to_owned(),
                    n => format!("{n} in stock"),
                };
                println!(
                    "{}  {}  {}  [{}]  ({stock})",
                    product.id,
                    product.general.title,
                    format_price(product.current_price()),
                    product.general.category,
                );
            }
        }
        ProductsAction::Show { product_id } => {
            let product = session.api().product(&product_id).await?;

            println!("{} ({})", product.general.title, product.id);
            println!("Category: {}", product.general.category);
            println!("Price:    {}", format_price(product.current_price()));
            if product.pricing.sale_price.is_some() {
                println!("Was:      {}", format_price(product.pricing.price));
            }
            println!("Stock:    {} (SKU {})", product.available(), product.inventory.sku);
            if !product.general.description.is_empty() {
                println!();
                println!("{}", product.general.description);
            }
        }
    }
    Ok(())
}
