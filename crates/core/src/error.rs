//! Error types for the auction evaluator.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the auction evaluator.
#[derive(Error, Debug)]
pub enum Error {
    /// The auction has no bids, so there is nothing to evaluate.
    #[error("Auction '{description}' has no bids to evaluate")]
    EmptyAuction {
        /// Description of the offending auction.
        description: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an empty auction error.
    pub fn empty_auction(description: impl Into<String>) -> Self {
        Error::EmptyAuction {
            description: description.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Whether this error signals an auction evaluated without bids.
    pub fn is_empty_auction(&self) -> bool {
        matches!(self, Error::EmptyAuction { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_auction_message() {
        let err = Error::empty_auction("Iphone 7");
        assert!(err.is_empty_auction());
        assert_eq!(err.to_string(), "Auction 'Iphone 7' has no bids to evaluate");
    }

    #[test]
    fn test_config_error_is_not_empty_auction() {
        let err = Error::config("bad value");
        assert!(!err.is_empty_auction());
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}
