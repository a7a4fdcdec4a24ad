//! Stateful auction evaluator.
//!
//! Holds the aggregates of the most recent successful evaluation. One
//! evaluator serves one caller at a time; use one instance per concurrent
//! evaluation, or call [`Evaluation::from_auction`] directly.

use auction_core::{Amount, Auction, Bid, Result};

use crate::evaluation::Evaluation;

/// Computes and stores summary statistics for an auction.
///
/// Before the first successful [`evaluate`](Evaluator::evaluate), and after a
/// failed one, the accessors report zero and an empty top list.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    evaluation: Evaluation,
}

impl Evaluator {
    /// Create a new evaluator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate an auction, overwriting the stored aggregates.
    ///
    /// Fails with [`auction_core::Error::EmptyAuction`] when the auction has
    /// no bids.
    pub fn evaluate(&mut self, auction: &Auction) -> Result<()> {
        self.evaluation = Evaluation::default();
        self.evaluation = Evaluation::from_auction(auction)?;
        Ok(())
    }

    /// Highest bid value.
    pub fn highest_bid(&self) -> Amount {
        self.evaluation.highest_bid
    }

    /// Lowest bid value.
    pub fn lowest_bid(&self) -> Amount {
        self.evaluation.lowest_bid
    }

    /// Average bid value.
    pub fn average(&self) -> Amount {
        self.evaluation.average
    }

    /// Up to three highest bids, descending by value.
    pub fn top_three(&self) -> &[Bid] {
        &self.evaluation.top_three
    }

    /// The full result of the last evaluation.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }
}
