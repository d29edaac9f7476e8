//! # Mock Backend
//!
//! Runs a local storefront backend seeded with generated products, for
//! developing against without the real API.
//!
//! ## Usage
//! ```bash
//! # 20 products on port 3000 (defaults)
//! cargo run -p storefront-catalog --bin mock-backend
//!
//! # Custom amount and port
//! cargo run -p storefront-catalog --bin mock-backend -- --count 50 --port 4000
//!
//! # Add named products on top of the generated ones
//! cargo run -p storefront-catalog --bin mock-backend -- --title "Relogio 1" --title "Relogio 2"
//! ```

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use storefront_catalog::{MockServer, ProductOverrides, ProductStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Local storefront backend serving GET /api/products.
#[derive(Debug, Parser)]
#[command(name = "mock-backend", version)]
struct Args {
    /// Number of generated products.
    #[arg(short, long, default_value_t = 20)]
    count: usize,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Extra product titles to create after the generated ones.
    #[arg(long = "title")]
    titles: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let store = ProductStore::new();
    store.create_list(args.count);
    for title in &args.titles {
        store.create(ProductOverrides::titled(title.clone()));
    }
    info!(products = store.len(), "Store seeded");

    let server = MockServer::start_on(SocketAddr::new(args.bind, args.port), store).await?;
    info!(url = %server.base_url(), "Serving /api/products, press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;
    server.shutdown().await;

    Ok(())
}
