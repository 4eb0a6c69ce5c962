//! Rigstore CLI - catalog, PC builder and back-office tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! rigstore products --search ryzen --sort price_low
//!
//! # Price a PC build and add it to the cart
//! rigstore build --file build.json --commit
//!
//! # Manage orders and users
//! rigstore admin orders
//! rigstore admin order-status --id 65b0c2f1a9 --status shipped
//! rigstore admin users
//! ```
//!
//! # Commands
//!
//! - `products` - List a filtered, sorted page of the catalog
//! - `build` - Price a build file and optionally commit it to the cart
//! - `admin` - Orders and users
//!
//! Configuration comes from the environment (see `rigstore_storefront::config`).
//! Log verbosity follows `RUST_LOG` (default `rigstore=info`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::products::ListingArgs;

#[derive(Parser)]
#[command(name = "rigstore")]
#[command(author, version, about = "Rigstore storefront and back-office CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a page of the catalog
    Products {
        /// Case-insensitive text searched in model, title, description, category and brand
        #[arg(short, long)]
        search: Option<String>,

        /// Category (e.g., "Graphics Card"), or "All"
        #[arg(short, long)]
        category: Option<String>,

        /// Brand (e.g., "AMD"), or "All"
        #[arg(short, long)]
        brand: Option<String>,

        /// Lowest effective price
        #[arg(long)]
        min: Option<String>,

        /// Highest effective price
        #[arg(long)]
        max: Option<String>,

        /// Sort (`default`, `price_low`, `price_high`, `discount_percent`, `newest`)
        #[arg(long)]
        sort: Option<String>,

        /// Page number (1-indexed)
        #[arg(short, long)]
        page: Option<u32>,

        /// Products per page (4, 8 or 12)
        #[arg(long)]
        per_page: Option<u32>,

        /// List discounted products only
        #[arg(long)]
        discounted: bool,
    },
    /// Price a PC build
    Build {
        /// JSON file mapping slot names to product ids
        #[arg(short, long)]
        file: String,

        /// Add every component to the cart
        #[arg(long)]
        commit: bool,
    },
    /// Back-office tools
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List all orders, or show one
    Orders {
        /// Order id
        #[arg(long)]
        id: Option<String>,
    },
    /// Update an order's status
    OrderStatus {
        /// Order id
        #[arg(long)]
        id: String,

        /// New order status (`pending`, `processing`, `shipped`, `delivered`, `cancelled`)
        #[arg(short, long)]
        status: String,

        /// New payment status (`pending`, `paid`, `failed`, `refunded`)
        #[arg(short, long)]
        payment: Option<String>,
    },
    /// List registered users
    Users,
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rigstore=info,rigstore_storefront=info,rigstore_admin=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products {
            search,
            category,
            brand,
            min,
            max,
            sort,
            page,
            per_page,
            discounted,
        } => {
            let args = ListingArgs {
                search,
                category,
                brand,
                min,
                max,
                sort,
                page,
                per_page,
                discounted,
            };
            commands::products::list(&args).await?;
        }
        Commands::Build { file, commit } => commands::build::run(&file, commit).await?,
        Commands::Admin { action } => match action {
            AdminAction::Orders { id } => commands::admin::orders(id.as_deref()).await?,
            AdminAction::OrderStatus { id, status, payment } => {
                commands::admin::order_status(&id, &status, payment.as_deref()).await?;
            }
            AdminAction::Users => commands::admin::users().await?,
        },
    }
    Ok(())
}
