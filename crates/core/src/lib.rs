//! Core types and configuration for the auction evaluator.
//!
//! This crate provides shared types used across all other crates:
//! - Bidders, bids and auctions
//! - A fluent auction builder
//! - Configuration structures
//! - Common error types

pub mod builder;
pub mod config;
pub mod error;
pub mod types;

pub use builder::AuctionBuilder;
pub use config::{Config, ReportConfig};
pub use error::{Error, Result};
pub use types::*;
