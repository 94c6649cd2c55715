//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod request;

// Re-export main types for cleaner imports
pub use currency::{ExchangeRateProvider, Quote};
pub use error::{ExchangeError, Violation};
pub use request::ConversionRequest;
