//! Core data types for the auction evaluator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monetary amount of a bid.
pub type Amount = f64;

/// Opaque identity of a bidder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bidder(String);

impl Bidder {
    /// Create a bidder identified by name.
    pub fn new(name: impl Into<String>) -> Self {
        Bidder(name.into())
    }

    /// Get the bidder's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bidder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value proposal by a bidder.
///
/// Bids compare by (bidder, value), so two bids from the same bidder for the
/// same amount are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    bidder: Bidder,
    value: Amount,
}

impl Bid {
    /// Create a new bid.
    pub fn new(bidder: Bidder, value: Amount) -> Self {
        Self { bidder, value }
    }

    /// Get the bidder.
    #[inline]
    pub fn bidder(&self) -> &Bidder {
        &self.bidder
    }

    /// Get the bid value.
    #[inline]
    pub fn value(&self) -> Amount {
        self.value
    }
}

/// An auction collecting bids for a described item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    /// Item description.
    description: String,
    /// Bids in proposal order.
    bids: Vec<Bid>,
}

impl Auction {
    /// Create an auction with no bids.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            bids: Vec::new(),
        }
    }

    /// Get the item description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append a bid.
    ///
    /// No validation happens here: zero values and repeated bidders are
    /// accepted as proposed.
    pub fn propose(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    /// Get the bids in proposal order.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    /// Number of bids proposed so far.
    pub fn len(&self) -> usize {
        self.bids.len()
    }

    /// Whether no bids have been proposed.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_equality_is_structural() {
        let a = Bid::new(Bidder::new("Joao"), 250.0);
        let b = Bid::new(Bidder::new("Joao"), 250.0);
        let c = Bid::new(Bidder::new("Maria"), 250.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_propose_preserves_order() {
        let joao = Bidder::new("Joao");
        let mut auction = Auction::new("Playstation 3 Novo");
        assert!(auction.is_empty());

        auction.propose(Bid::new(joao.clone(), 400.0));
        auction.propose(Bid::new(joao.clone(), 100.0));
        auction.propose(Bid::new(joao, 0.0));

        assert_eq!(auction.len(), 3);
        let values: Vec<f64> = auction.bids().iter().map(Bid::value).collect();
        assert_eq!(values, vec![400.0, 100.0, 0.0]);
    }

    #[test]
    fn test_bids_view_is_a_copy_when_owned() {
        let mut auction = Auction::new("Xbox");
        auction.propose(Bid::new(Bidder::new("Jose"), 300.0));

        let mut view = auction.bids().to_vec();
        view.clear();

        assert_eq!(auction.len(), 1);
    }

    #[test]
    fn test_bidder_display() {
        assert_eq!(Bidder::new("Maria").to_string(), "Maria");
        assert_eq!(Bidder::new("Maria").name(), "Maria");
    }
}
