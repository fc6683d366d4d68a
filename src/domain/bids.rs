// src/domain/bids.rs
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::auctions::{Auction, AuctionId};
use super::users::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    #[serde(rename = "auction")]
    pub for_auction: AuctionId,
    pub bidder: User,
    #[serde(rename = "value")]
    pub bid_amount: Amount,
}

impl Bid {
    pub fn new(auction: &Auction, bidder: User, bid_amount: Amount) -> Self {
        Bid {
            for_auction: auction.description().to_string(),
            bidder,
            bid_amount,
        }
    }
}
