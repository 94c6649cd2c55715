pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::convert::ConvertArgs;
use crate::core::config::AppConfig;
use crate::core::{ConversionRequest, ExchangeError, ExchangeRateProvider};
use crate::providers::{DEFAULT_BASE_URL, ExchangeRateHostProvider, USER_AGENT};
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert(ConvertArgs),
}

/// Converts `request.amount` from `request.base` to `request.symbols`.
///
/// `url` overrides the exchangerate.host endpoint, e.g. to point at a mock
/// server. Parameters are validated before any network access.
pub async fn convert(
    request: &ConversionRequest,
    url: Option<&str>,
) -> Result<f64, ExchangeError> {
    let provider = ExchangeRateHostProvider::new(url.unwrap_or(DEFAULT_BASE_URL))?;
    provider.convert(request).await
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxconv starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Convert(args) => {
            let base_url = args.url.as_deref().unwrap_or(&config.provider.base_url);

            let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
            if let Some(timeout) = config.provider.timeout() {
                builder = builder.timeout(timeout);
            }
            let provider = ExchangeRateHostProvider::with_client(base_url, builder.build()?);

            let request = args.to_request(&config.defaults);
            cli::convert::run(&provider, &request).await
        }
    }
}
