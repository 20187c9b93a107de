use clap::Parser;

/// Command-line arguments for the `shopcart` binary.
#[derive(Debug, Parser)]
#[command(name = "shopcart")]
#[command(about = "An interactive in-memory shopping cart")]
#[command(version)]
pub struct Args {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Currency symbol used when printing prices
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,
}
