//! # Storefront Entry Point
//!
//! Fetches the catalog, applies a search and cart additions from the command
//! line, and prints the rendered page as HTML.
//!
//! ## Usage
//! ```bash
//! # Against the mock backend on localhost:3000
//! storefront
//!
//! # Search and put two of product 3 in the cart
//! storefront --search relogio --add 3 --add 3
//!
//! # Another backend, plain text instead of HTML
//! storefront --api-url http://localhost:4000 --text
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use storefront::state::StorefrontConfig;
use storefront::{init_tracing, load_storefront, RenderOptions};

/// Renders the storefront page for the configured backend.
#[derive(Debug, Parser)]
#[command(name = "storefront", version)]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding config and environment.
    #[arg(long)]
    api_url: Option<String>,

    /// Search term to submit.
    #[arg(short, long)]
    search: Option<String>,

    /// Product id to add to the cart; repeat to add more.
    #[arg(short, long = "add", value_name = "ID")]
    add: Vec<String>,

    /// Show the cart panel even if nothing was added.
    #[arg(long)]
    open_cart: bool,

    /// Print text content instead of HTML.
    #[arg(long)]
    text: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match StorefrontConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("storefront: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        if let Err(e) = config.validate() {
            eprintln!("storefront: {e}");
            return ExitCode::FAILURE;
        }
    }

    init_tracing(&config.logging.filter);

    let options = RenderOptions {
        search: cli.search,
        add: cli.add,
        open_cart: cli.open_cart,
    };

    match load_storefront(&config, &options).await {
        Ok(page) => {
            let rendered = page.render();
            if cli.text {
                println!("{}", rendered.text_content());
            } else {
                println!("{rendered}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("storefront: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
