use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fxconv::cli::convert::ConvertArgs;
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ConvertOptions {
    /// Currency to convert from: USD, EUR or JPY
    #[arg(short, long)]
    base: Option<String>,

    /// Currency to convert to: USD, EUR or JPY
    #[arg(short, long)]
    symbols: Option<String>,

    /// Amount to convert, must be positive
    #[arg(short, long, allow_negative_numbers = true)]
    amount: Option<f64>,

    /// Decimal places to round the result to
    #[arg(short, long, allow_negative_numbers = true)]
    places: Option<i64>,

    /// Rate source: ecb, cbr or imf
    #[arg(long)]
    source: Option<String>,

    /// Override the exchange rate API endpoint
    #[arg(long)]
    url: Option<String>,
}

impl From<ConvertOptions> for ConvertArgs {
    fn from(opts: ConvertOptions) -> ConvertArgs {
        ConvertArgs {
            base: opts.base,
            symbols: opts.symbols,
            amount: opts.amount,
            places: opts.places,
            source: opts.source,
            url: opts.url,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between currencies
    Convert(ConvertOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(Commands::Convert(opts)) => {
            fxconv::run_command(
                fxconv::AppCommand::Convert(opts.into()),
                cli.config_path.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
