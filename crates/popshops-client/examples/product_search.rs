//! Search PopShops products from the command line.
//!
//! Usage: POPSHOPS_API_KEY=... cargo run --example product_search -- "red shoes"

use popshops_client::{PopShopsClient, QueryOptions};
use popshops_core::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let keyword = std::env::args().nth(1).unwrap_or_else(|| "shoes".to_string());

    let config = Config::from_env()?;
    let client = PopShopsClient::new(config)?;

    let results = client
        .products()
        .search(QueryOptions::new().set("keyword", keyword.as_str()))
        .await?;

    for product in results.get_seq("products.product") {
        println!(
            "{}  {}",
            product.get_str("name").unwrap_or("<unnamed>"),
            product.get_str("price").unwrap_or("-"),
        );
    }

    Ok(())
}
