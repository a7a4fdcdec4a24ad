//! Bid evaluation for the auction evaluator.
//!
//! This crate handles:
//! - Highest and lowest bid
//! - Average bid value
//! - The three highest bids, descending
//! - Plain-text evaluation reports

pub mod evaluation;
pub mod evaluator;

pub use evaluation::{Evaluation, TOP_BIDS};
pub use evaluator::Evaluator;
