//! Orderbook Client Binary
//!
//! Command-line front end for the HYPE/FLOP matching engine.
//!
//! # Usage
//!
//! ```bash
//! orderbook-client orders
//! orderbook-client submit --side buy --asset hype --mode limit --price 10 --quantity 30
//! orderbook-client submit --side sell --asset flop --mode market --quantity 3
//! orderbook-client proxy
//! ```
//!
//! # Environment Variables
//!
//! - `ORDERBOOK_API_URL`: Matching engine base URL (default: <http://localhost:3001>)
//! - `ORDERBOOK_CONFIG`: Config file path (default: config.yaml if present)
//! - `RUST_LOG`: Log filter (default: from config, `orderbook_client=info`)

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use orderbook_client::config::{Config, load_config};
use orderbook_client::domain::execution::BookOrder;
use orderbook_client::telemetry::init_tracing;
use orderbook_client::{
    Asset, AskProxyState, ExecutionMode, HttpMatchingEngine, MatchingEnginePort, OrderBookView,
    OrderForm, OrderSide, RefreshOrdersUseCase, SessionState, SubmitOrderUseCase, create_router,
};
use tokio::net::TcpListener;
use tokio::signal;

/// Orderbook client CLI
#[derive(Parser, Debug)]
#[command(name = "orderbook-client")]
#[command(version, about = "Submit orders to the HYPE/FLOP matching engine")]
struct Cli {
    /// Path to the YAML config file.
    #[arg(long, global = true, env = "ORDERBOOK_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the current order book
    Orders,

    /// Submit one order and print its execution history
    Submit {
        /// buy | sell
        #[arg(long)]
        side: OrderSide,
        /// hype | flop
        #[arg(long)]
        asset: Asset,
        /// limit | market
        #[arg(long, default_value = "limit")]
        mode: ExecutionMode,
        /// Notional for buys, shares for sells
        #[arg(long)]
        quantity: String,
        /// Limit price (ignored for market orders)
        #[arg(long, default_value = "")]
        price: String,
    },

    /// Serve the /api/ask passthrough until Ctrl+C or SIGTERM
    Proxy,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.observability.logging);

    match cli.command {
        Commands::Orders => print_orders(&config).await,
        Commands::Submit {
            side,
            asset,
            mode,
            quantity,
            price,
        } => {
            let form = OrderForm {
                price,
                quantity,
                side,
                asset,
                mode,
            };
            submit(&config, form).await
        }
        Commands::Proxy => serve_proxy(&config).await,
    }
}

fn create_engine(config: &Config) -> anyhow::Result<Arc<HttpMatchingEngine>> {
    let engine = HttpMatchingEngine::new(config.engine.to_http_config())
        .context("building matching engine client")?;
    tracing::info!(base_url = %engine.base_url(), "Matching engine client ready");
    Ok(Arc::new(engine))
}

async fn print_orders(config: &Config) -> anyhow::Result<()> {
    let engine = create_engine(config)?;
    let orders = engine
        .fetch_orders()
        .await
        .context("fetching order book")?;

    let view = OrderBookView::new(&orders);
    for asset in Asset::ALL {
        println!("{asset}");
        println!("  Compras:");
        for order in view.bids(asset) {
            println!("    {}", format_order(order));
        }
        println!("  Vendas:");
        for order in view.asks(asset) {
            println!("    {}", format_order(order));
        }
    }
    Ok(())
}

fn format_order(order: &BookOrder) -> String {
    let price = order
        .price
        .map_or_else(|| "-".to_string(), |p| p.normalize().to_string());
    let quantity = order
        .open_quantity()
        .map_or_else(|| "-".to_string(), |q| q.normalize().to_string());
    format!("#{} {quantity} @ {price}", order.id)
}

async fn submit(config: &Config, form: OrderForm) -> anyhow::Result<()> {
    let engine = create_engine(config)?;
    let state = RefreshOrdersUseCase::new(Arc::clone(&engine))
        .execute(SessionState::with_form(form))
        .await;
    let before = state.history.len();

    let state = SubmitOrderUseCase::new(engine).execute(state).await;

    if let Some(error) = &state.last_error {
        anyhow::bail!("{error}");
    }
    for entry in &state.history.entries()[before..] {
        println!("{entry}");
    }
    Ok(())
}

async fn serve_proxy(config: &Config) -> anyhow::Result<()> {
    let state = AskProxyState::new(&config.proxy.ask_upstream)?;
    let app = create_router(state);

    let addr = config.proxy.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, upstream = %config.proxy.ask_upstream, "Ask proxy starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("ask proxy server")?;

    tracing::info!("Ask proxy stopped");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
