//! Harbor CLI - command-line storefront client.
//!
//! # Usage
//!
//! ```bash
//! # Create an account and log in
//! harbor auth register -f Jane -l Doe -e jane@example.com
//! harbor auth login -e jane@example.com
//!
//! # Browse and shop
//! harbor products list
//! harbor cart add prod001 --quantity 2
//! harbor cart show
//!
//! # Pay, then place the order
//! harbor checkout --name "Jane Doe" --address "456 Oak Avenue" \
//!     --city Townsville --state TX --zip 75001 --last4 4321
//!
//! # Track it
//! harbor orders list
//! harbor dashboard customer
//! ```
//!
//! # Environment Variables
//!
//! - `HARBOR_API_URL` - Marketplace API base URL
//! - `HARBOR_DATA_DIR` - Directory for the persisted cart/wishlist/credential

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output goes to stdout by design; diagnostics go through tracing.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

use commands::{auth, cart, checkout, dashboard, orders, products, seller, wishlist};

#[derive(Parser)]
#[command(name = "harbor")]
#[command(author, version, about = "Harbor marketplace storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register, log in, log out
    Auth {
        #[command(subcommand)]
        action: auth::AuthAction,
    },
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        action: products::ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: cart::CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: wishlist::WishlistAction,
    },
    /// Pay for the cart and place the order
    Checkout(checkout::CheckoutArgs),
    /// View and cancel orders
    Orders {
        #[command(subcommand)]
        action: orders::OrdersAction,
    },
    /// Seller-side order management and dashboard
    Seller {
        #[command(subcommand)]
        action: seller::SellerAction,
    },
    /// Dashboard summaries
    Dashboard {
        #[command(subcommand)]
        action: dashboard::DashboardAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> harbor_client::Result<()> {
    let session = commands::Session::init()?;

    match cli.command {
        Commands::Auth { action } => auth::run(&session, action).await,
        Commands::Products { action } => products::run(&session, action).await,
        Commands::Cart { action } => cart::run(&session, action).await,
        Commands::Wishlist { action } => wishlist::run(&session, action).await,
        Commands::Checkout(args) => checkout::run(&session, args).await,
        Commands::Orders { action } => orders::run(&session, action).await,
        Commands::Seller { action } => seller::run(&session, action).await,
        Commands::Dashboard { action } => dashboard::run(&session, action).await,
    }
}
