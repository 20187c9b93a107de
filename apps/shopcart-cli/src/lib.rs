//! # Shopcart Console Library
//!
//! The console application around `shopcart-core`.
//!
//! ## Module Organization
//! ```text
//! shopcart_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── args.rs         ◄─── Command-line flags (clap)
//! ├── config.rs       ◄─── ConfigState: currency, store name, yes-answers
//! ├── console.rs      ◄─── Prompt/answer I/O over BufRead + Write
//! ├── menu.rs         ◄─── Shop: the menu loop
//! ├── payment.rs      ◄─── SimulatedPayment processor
//! └── error.rs        ◄─── AppError
//! ```

pub mod args;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod payment;

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;
use config::ConfigState;
use console::Console;
use error::AppResult;
use menu::Shop;
use payment::SimulatedPayment;

/// Runs one interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse Arguments ──────────────────────────────────────────────────► │
/// │     • --verbose, --currency                                             │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,shopcart_cli=info; RUST_LOG overrides               │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults ◄── SHOPCART_* env vars ◄── CLI flags                    │
/// │                                                                         │
/// │  4. Run Menu Loop ────────────────────────────────────────────────────► │
/// │     • Shop owns Cart + SimulatedPayment + ConfigState                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args);
    info!(
        store = %config.store_name,
        currency = %config.currency_symbol,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut shop = Shop::new(console, SimulatedPayment::new(), config);
    shop.run()
}

/// Merges CLI flags over the environment-derived configuration.
fn load_config(args: &Args) -> ConfigState {
    let mut config = ConfigState::from_env();
    if let Some(symbol) = &args.currency {
        config.currency_symbol = symbol.clone();
    }
    config
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopcart_cli=trace` - Trace for this crate only
/// - Default: warnings, plus info from this crate (`--verbose`: debug)
///
/// Output goes to stderr so it never mixes with the menu on stdout.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else {
        "warn,shopcart_cli=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_flag_overrides_config() {
        let args = Args::try_parse_from(["shopcart", "--currency", "€"]).unwrap();
        let config = load_config(&args);
        assert_eq!(config.currency_symbol, "€");
    }
}
