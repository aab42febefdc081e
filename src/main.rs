use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use trolley::app::AppContext;
use trolley::app::commands::{add, remove, set_amount, show};
use trolley::domain::{AppError, CONFIG_FILE, StoreConfig};
use trolley::ports::Notifier;
use trolley::services::{CartService, ConsoleNotifier, FileCartStore, HttpCatalogClient};

#[derive(Parser)]
#[command(name = "trolley")]
#[command(version)]
#[command(about = "Stock-validated shopping cart with write-through local storage", long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    #[clap(visible_alias = "a")]
    Add {
        /// Catalog identifier of the product
        product_id: u64,
    },
    /// Remove a product from the cart
    #[clap(visible_alias = "rm")]
    Remove {
        /// Catalog identifier of the product
        product_id: u64,
    },
    /// Set the absolute amount of a product already in the cart
    Set {
        /// Catalog identifier of the product
        product_id: u64,
        /// Desired amount, at least 1
        amount: u32,
    },
    /// Print the cart contents and total
    #[clap(visible_alias = "ls")]
    Show,
}

fn main() {
    let cli = Cli::parse();
    let notifier = ConsoleNotifier;

    let mut ctx = match bootstrap(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            notifier.error(&e.to_string());
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Add { product_id } => add::execute(&mut ctx, product_id),
        Commands::Remove { product_id } => remove::execute(&mut ctx, product_id),
        Commands::Set { product_id, amount } => set_amount::execute(&mut ctx, product_id, amount),
        Commands::Show => {
            show::execute(&ctx);
            Ok(())
        }
    };

    if result.is_err() {
        // The command already reported the failure through the notifier.
        process::exit(1);
    }
}

fn bootstrap(
    cli: &Cli,
) -> Result<AppContext<HttpCatalogClient, FileCartStore, ConsoleNotifier>, AppError> {
    let config_path = cli.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = StoreConfig::load(&config_path)?;

    let catalog = HttpCatalogClient::new(&config.catalog)?;
    let store = FileCartStore::new(&config.storage);
    let service = CartService::new(catalog, store);

    Ok(AppContext::new(service, ConsoleNotifier))
}
