//! Fluent construction of auctions.

use crate::types::{Amount, Auction, Bid, Bidder};

/// Builds an [`Auction`] in one expression.
///
/// ```
/// use auction_core::{AuctionBuilder, Bidder};
///
/// let joao = Bidder::new("Joao");
/// let auction = AuctionBuilder::new("Playstation 3 Novo")
///     .bid(&joao, 250.0)
///     .bid(&joao, 300.0)
///     .build();
/// assert_eq!(auction.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AuctionBuilder {
    auction: Auction,
}

impl AuctionBuilder {
    /// Start an auction for the described item.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            auction: Auction::new(description),
        }
    }

    /// Propose a bid.
    pub fn bid(mut self, bidder: &Bidder, value: Amount) -> Self {
        self.auction.propose(Bid::new(bidder.clone(), value));
        self
    }

    /// Finish building.
    pub fn build(self) -> Auction {
        self.auction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_build_without_bids() {
        let auction = AuctionBuilder::new("Iphone 7").build();
        assert_eq!(auction.description(), "Iphone 7");
        assert!(auction.is_empty());
    }

    #[test]
    fn test_bids_keep_chaining_order() {
        let joao = Bidder::new("Joao");
        let maria = Bidder::new("Maria");

        let auction = AuctionBuilder::new("Playstation 3 Novo")
            .bid(&joao, 200.0)
            .bid(&maria, 450.0)
            .bid(&joao, 120.0)
            .build();

        let bids = auction.bids();
        assert_eq!(bids.len(), 3);
        assert_eq!(bids[0].bidder(), &joao);
        assert_abs_diff_eq!(bids[1].value(), 450.0);
        assert_eq!(bids[1].bidder(), &maria);
        assert_abs_diff_eq!(bids[2].value(), 120.0);
    }
}
