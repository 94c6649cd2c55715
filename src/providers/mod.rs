pub mod exchangerate_host;

pub use exchangerate_host::{DEFAULT_BASE_URL, ExchangeRateHostProvider, USER_AGENT};
