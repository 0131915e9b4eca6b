//! Waypoint CLI - Drive storefront navigations from the command line.
//!
//! Commands:
//! - `waypoint visit <urls>...` - Navigate a sequence of URLs and print each
//!   activation (page, state, title, error message)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use waypoint_app::Storefront;
use waypoint_catalog::InMemoryCatalog;

/// Waypoint CLI - Exercise route-scoped prefetch against the sample catalog
#[derive(Parser)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate through a sequence of URLs, printing each activation
    Visit(VisitArgs),
}

#[derive(Args)]
struct VisitArgs {
    /// URLs to visit, in order (e.g. /products/5 /products/abc)
    #[arg(required = true)]
    urls: Vec<String>,

    /// Simulated backend latency in milliseconds
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Visit(args) => visit(args).await,
    }
}

async fn visit(args: VisitArgs) -> Result<()> {
    let catalog = InMemoryCatalog::with_sample_data()
        .with_latency(Duration::from_millis(args.latency_ms));
    let app = Storefront::new(Arc::new(catalog));
    info!(urls = args.urls.len(), "starting visit sequence");

    for url in &args.urls {
        match app.navigate(url).await {
            Ok(activation) => {
                println!(
                    "{url} -> [{}] {} ({})",
                    activation.state.as_str(),
                    activation.title,
                    activation.page.as_str()
                );
                if !activation.error_message.is_empty() {
                    println!("        error: {}", activation.error_message);
                }
            }
            Err(error) => println!("{url} -> navigation error: {error}"),
        }
    }

    for message in app.messages().await {
        println!("message: {}", message.text);
    }

    Ok(())
}
