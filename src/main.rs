use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use order_facade::domain::Product;
use order_facade::infrastructure::InMemoryProductCatalog;
use order_facade::{build_shop, AppConfig, AppError};

#[derive(Parser, Debug)]
#[command(name = "order_facade")]
#[command(about = "Place an order for a customer and print it as JSON")]
struct Args {
    /// Identifier of the customer placing the order
    customer_id: u64,

    /// Products to order, in order; unknown ids are skipped with a warning
    product_ids: Vec<u64>,
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let shop = build_shop(&config, demo_catalog())?;

    let order = shop.facade.place_order(args.customer_id, &args.product_ids)?;
    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}

fn demo_catalog() -> InMemoryProductCatalog {
    InMemoryProductCatalog::new([
        Product::new(1, "Mechanical keyboard"),
        Product::new(2, "Wireless mouse"),
        Product::new(3, "USB-C hub"),
        Product::new(4, "Monitor stand"),
    ])
}
