//! Summary statistics over an auction's bids.
//!
//! An [`Evaluation`] is computed in one scan of the bid values plus one
//! stable sort for the top bids.

use std::cmp::Reverse;
use std::fmt::Write;

use auction_core::{Amount, Auction, Bid, Error, ReportConfig, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of bids kept in [`Evaluation::top_three`].
pub const TOP_BIDS: usize = 3;

/// Aggregates computed from one auction.
///
/// The default value is the "never evaluated" state: zero aggregates and no
/// top bids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Description of the evaluated auction.
    pub description: String,
    /// Number of bids evaluated.
    pub bid_count: usize,
    /// Highest bid value.
    pub highest_bid: Amount,
    /// Lowest bid value.
    pub lowest_bid: Amount,
    /// Arithmetic mean of all bid values.
    pub average: Amount,
    /// Up to three highest bids, descending by value.
    pub top_three: Vec<Bid>,
}

impl Evaluation {
    /// Evaluate an auction.
    ///
    /// Fails with [`Error::EmptyAuction`] when the auction has no bids.
    pub fn from_auction(auction: &Auction) -> Result<Self> {
        let bids = auction.bids();
        debug!(
            description = auction.description(),
            bid_count = bids.len(),
            "evaluating auction"
        );

        if bids.is_empty() {
            warn!(description = auction.description(), "auction has no bids");
            return Err(Error::empty_auction(auction.description()));
        }

        let mut highest = f64::NEG_INFINITY;
        let mut lowest = f64::INFINITY;
        let mut sum = 0.0;
        for bid in bids {
            let value = bid.value();
            highest = highest.max(value);
            lowest = lowest.min(value);
            sum += value;
        }

        // Rounding in the sum can land the mean a hair outside the observed range
        let average = (sum / bids.len() as f64).max(lowest).min(highest);

        let evaluation = Self {
            description: auction.description().to_string(),
            bid_count: bids.len(),
            highest_bid: highest,
            lowest_bid: lowest,
            average,
            top_three: top_bids(bids),
        };

        debug!(
            highest = evaluation.highest_bid,
            lowest = evaluation.lowest_bid,
            average = evaluation.average,
            "auction evaluated"
        );

        Ok(evaluation)
    }

    /// Render a plain-text report.
    pub fn render(&self, config: &ReportConfig) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "Auction: {}", self.description);
        let _ = writeln!(out, "Bids: {}", self.bid_count);
        let _ = writeln!(out, "Highest: {}", config.format_amount(self.highest_bid));
        let _ = writeln!(out, "Lowest: {}", config.format_amount(self.lowest_bid));
        let _ = writeln!(out, "Average: {}", config.format_amount(self.average));
        let _ = writeln!(out, "Top bids:");
        for (rank, bid) in self.top_three.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} {}",
                rank + 1,
                bid.bidder(),
                config.format_amount(bid.value())
            );
        }

        out
    }
}

/// The highest bids, descending. Equal values keep proposal order.
fn top_bids(bids: &[Bid]) -> Vec<Bid> {
    let mut ranked = bids.to_vec();
    // sort_by_key is stable
    ranked.sort_by_key(|bid| Reverse(OrderedFloat(bid.value())));
    ranked.truncate(TOP_BIDS);
    ranked
}
