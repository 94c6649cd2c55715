use super::ui;
use crate::core::config::DefaultsConfig;
use crate::core::{ConversionRequest, ExchangeRateProvider, Quote};
use anyhow::Result;
use comfy_table::Cell;

/// Command line overrides; anything left out comes from the config defaults.
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub base: Option<String>,
    pub symbols: Option<String>,
    pub amount: Option<f64>,
    pub places: Option<i64>,
    pub source: Option<String>,
    pub url: Option<String>,
}

impl ConvertArgs {
    pub fn to_request(&self, defaults: &DefaultsConfig) -> ConversionRequest {
        let fallback = defaults.to_request();
        ConversionRequest {
            base: self.base.clone().unwrap_or(fallback.base),
            symbols: self.symbols.clone().unwrap_or(fallback.symbols),
            amount: self.amount.unwrap_or(fallback.amount),
            places: self.places.unwrap_or(fallback.places),
            source: self.source.clone().unwrap_or(fallback.source),
        }
    }
}

pub async fn run(provider: &dyn ExchangeRateProvider, request: &ConversionRequest) -> Result<()> {
    let spinner = ui::new_spinner(&format!(
        "Converting {} {} to {}",
        request.amount, request.base, request.symbols
    ));
    let quote = provider.quote(request).await;
    spinner.finish_and_clear();

    let quote = quote?;
    println!("{}", display_conversion(request, &quote));
    Ok(())
}

pub fn display_conversion(request: &ConversionRequest, quote: &Quote) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Amount"),
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Source"),
        ui::header_cell("Result"),
    ]);
    table.add_row(vec![
        ui::number_cell(request.amount.to_string()),
        Cell::new(&request.base),
        Cell::new(&request.symbols),
        Cell::new(&request.source),
        ui::result_cell(quote.rate.to_string()),
    ]);

    let title = ui::style_text("Currency Conversion", ui::StyleType::Title);
    let footer = match quote.date {
        Some(date) => ui::style_text(&format!("Rates as of {date}"), ui::StyleType::Subtle),
        None => ui::style_text("Rate date not reported", ui::StyleType::Subtle),
    };
    format!("{title}\n{table}\n{footer}")
}
