//! Error types for currency conversion

use std::fmt;
use thiserror::Error;

/// Why a request parameter was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NotAllowed { allowed: &'static [&'static str] },
    NotANumber,
    NotPositive,
    Negative,
    TooLong { max: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotAllowed { allowed } => {
                write!(f, "must be one of [{}]", allowed.join(", "))
            }
            Violation::NotANumber => write!(f, "must be a number"),
            Violation::NotPositive => write!(f, "must be a positive number"),
            Violation::Negative => write!(f, "must be a positive number or zero"),
            Violation::TooLong { max } => write!(f, "must have at most {max} digits"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Parameter '{parameter}' {violation}")]
    InvalidParameter {
        parameter: &'static str,
        violation: Violation,
    },

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from API: status code {status}")]
    UpstreamStatus { status: u16 },

    #[error("Invalid response from API: {reason}")]
    MalformedResponse { reason: String },
}

impl ExchangeError {
    pub(crate) fn invalid(parameter: &'static str, violation: Violation) -> Self {
        ExchangeError::InvalidParameter {
            parameter,
            violation,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ExchangeError::MalformedResponse {
            reason: reason.into(),
        }
    }
}
