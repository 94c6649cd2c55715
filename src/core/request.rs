use super::error::{ExchangeError, Violation};
use serde::{Deserialize, Serialize};

/// Currencies accepted for both `base` and `symbols`.
pub const CURRENCIES: &[&str] = &["USD", "EUR", "JPY"];

/// Upstream data sources understood by exchangerate.host.
///
/// - `ecb`: European Central Bank, cannot convert roubles
/// - `cbr`: Central Bank of Russia, currently returns no data
/// - `imf`: International Monetary Fund
pub const SOURCES: &[&str] = &["ecb", "cbr", "imf"];

pub const MAX_AMOUNT_LEN: usize = 20;
pub const MAX_PLACES_LEN: usize = 5;

/// Parameters for a single conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub base: String,
    pub symbols: String,
    pub amount: f64,
    pub places: i64,
    pub source: String,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        ConversionRequest {
            base: "USD".to_string(),
            symbols: "EUR".to_string(),
            amount: 1.0,
            places: 2,
            source: "ecb".to_string(),
        }
    }
}

impl ConversionRequest {
    pub fn new(base: &str, symbols: &str) -> Self {
        ConversionRequest {
            base: base.to_string(),
            symbols: symbols.to_string(),
            ..Default::default()
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_places(mut self, places: i64) -> Self {
        self.places = places;
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    /// Checks every parameter in order: base, symbols, amount, places, source.
    /// The first failing parameter is reported.
    pub fn validate(&self) -> Result<(), ExchangeError> {
        check_allowed("base", &self.base, CURRENCIES)?;
        check_allowed("symbols", &self.symbols, CURRENCIES)?;

        if !self.amount.is_finite() {
            return Err(ExchangeError::invalid("amount", Violation::NotANumber));
        }
        if self.amount <= 0.0 {
            return Err(ExchangeError::invalid("amount", Violation::NotPositive));
        }
        check_length("amount", &self.amount.to_string(), MAX_AMOUNT_LEN)?;

        if self.places < 0 {
            return Err(ExchangeError::invalid("places", Violation::Negative));
        }
        check_length("places", &self.places.to_string(), MAX_PLACES_LEN)?;

        check_allowed("source", &self.source, SOURCES)
    }

    /// Query string pairs in the order the API documents them.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("base", self.base.clone()),
            ("symbols", self.symbols.clone()),
            ("amount", self.amount.to_string()),
            ("places", self.places.to_string()),
            ("source", self.source.clone()),
        ]
    }
}

fn check_allowed(
    parameter: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ExchangeError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ExchangeError::invalid(
            parameter,
            Violation::NotAllowed { allowed },
        ))
    }
}

fn check_length(parameter: &'static str, text: &str, max: usize) -> Result<(), ExchangeError> {
    if text.len() > max {
        return Err(ExchangeError::invalid(parameter, Violation::TooLong { max }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation_of(request: &ConversionRequest) -> (&'static str, Violation) {
        match request.validate() {
            Err(ExchangeError::InvalidParameter {
                parameter,
                violation,
            }) => (parameter, violation),
            other => panic!("Expected an invalid parameter error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_request_is_valid() {
        let request = ConversionRequest::default();
        assert_eq!(request.base, "USD");
        assert_eq!(request.symbols, "EUR");
        assert_eq!(request.amount, 1.0);
        assert_eq!(request.places, 2);
        assert_eq!(request.source, "ecb");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_all_allowed_pairs_and_sources_validate() {
        for base in CURRENCIES {
            for symbols in CURRENCIES {
                for source in SOURCES {
                    let request = ConversionRequest::new(base, symbols).with_source(source);
                    assert!(request.validate().is_ok(), "{base}->{symbols} via {source}");
                }
            }
        }
    }

    #[test]
    fn test_unknown_currencies_rejected() {
        let (parameter, violation) = violation_of(&ConversionRequest::new("RUB", "EUR"));
        assert_eq!(parameter, "base");
        assert_eq!(
            violation,
            Violation::NotAllowed {
                allowed: CURRENCIES
            }
        );

        let (parameter, _) = violation_of(&ConversionRequest::new("USD", "RUB"));
        assert_eq!(parameter, "symbols");

        // Codes are case sensitive
        let (parameter, _) = violation_of(&ConversionRequest::new("usd", "EUR"));
        assert_eq!(parameter, "base");
    }

    #[test]
    fn test_amount_rules() {
        let request = ConversionRequest::default().with_amount(-10.0);
        assert_eq!(violation_of(&request), ("amount", Violation::NotPositive));

        let request = ConversionRequest::default().with_amount(0.0);
        assert_eq!(violation_of(&request), ("amount", Violation::NotPositive));

        let request = ConversionRequest::default().with_amount(f64::NAN);
        assert_eq!(violation_of(&request), ("amount", Violation::NotANumber));

        let request = ConversionRequest::default().with_amount(f64::INFINITY);
        assert_eq!(violation_of(&request), ("amount", Violation::NotANumber));

        let request = ConversionRequest::default().with_amount(123456789012345678901.0);
        assert_eq!(
            violation_of(&request),
            ("amount", Violation::TooLong { max: MAX_AMOUNT_LEN })
        );

        let request = ConversionRequest::default().with_amount(12345678901234567.0);
        assert!(request.validate().is_ok());

        let request = ConversionRequest::default().with_amount(0.25);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_places_rules() {
        let request = ConversionRequest::default().with_places(-1);
        assert_eq!(violation_of(&request), ("places", Violation::Negative));

        let request = ConversionRequest::default().with_places(0);
        assert!(request.validate().is_ok());

        let request = ConversionRequest::default().with_places(99999);
        assert!(request.validate().is_ok());

        let request = ConversionRequest::default().with_places(1234567);
        assert_eq!(
            violation_of(&request),
            ("places", Violation::TooLong { max: MAX_PLACES_LEN })
        );
    }

    #[test]
    fn test_unknown_source_rejected() {
        let request = ConversionRequest::default().with_source("wrong_source");
        assert_eq!(
            violation_of(&request),
            ("source", Violation::NotAllowed { allowed: SOURCES })
        );
    }

    #[test]
    fn test_first_failing_parameter_is_reported() {
        let request = ConversionRequest {
            base: "RUB".to_string(),
            symbols: "GBP".to_string(),
            amount: -1.0,
            places: -1,
            source: "nope".to_string(),
        };
        assert_eq!(violation_of(&request).0, "base");

        let request = ConversionRequest {
            base: "USD".to_string(),
            ..request
        };
        assert_eq!(violation_of(&request).0, "symbols");
    }

    #[test]
    fn test_query_pairs() {
        let request = ConversionRequest::new("EUR", "JPY")
            .with_amount(100.0)
            .with_places(0)
            .with_source("imf");
        assert_eq!(
            request.query(),
            vec![
                ("base", "EUR".to_string()),
                ("symbols", "JPY".to_string()),
                ("amount", "100".to_string()),
                ("places", "0".to_string()),
                ("source", "imf".to_string()),
            ]
        );
    }
}
