// src/domain/auctions.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::bids::Bid;
use super::users::User;

/// Auctions are identified by their description.
pub type AuctionId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    description: String,
    #[serde(rename = "startingValue")]
    starting_value: Amount,
    owner: User,
    #[serde(rename = "openedAt")]
    opened_at: DateTime<Utc>,
    #[serde(default)]
    bids: Vec<Bid>,
    #[serde(default)]
    closed: bool,
    #[serde(rename = "winningBid", default, skip_serializing_if = "Option::is_none")]
    winning_bid: Option<Bid>,
}

impl Auction {
    pub fn new(description: impl Into<String>, starting_value: Amount, owner: User) -> Self {
        Self::opened_on(description, starting_value, owner, Utc::now())
    }

    pub fn opened_on(
        description: impl Into<String>,
        starting_value: Amount,
        owner: User,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Auction {
            description: description.into(),
            starting_value,
            owner,
            opened_at,
            bids: Vec::new(),
            closed: false,
            winning_bid: None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn starting_value(&self) -> Amount {
        self.starting_value
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Bids in the order they were proposed.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn winning_bid(&self) -> Option<&Bid> {
        self.winning_bid.as_ref()
    }

    pub fn propose(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    /// Highest bid so far. Among equal amounts the earliest proposed one wins.
    pub fn determine_winner(&self) -> Option<&Bid> {
        let mut best: Option<&Bid> = None;
        for bid in &self.bids {
            match best {
                Some(current) if bid.bid_amount <= current.bid_amount => {}
                _ => best = Some(bid),
            }
        }
        best
    }

    /// Fixes the winner and marks the auction closed. An auction without
    /// bids still closes, with no winner.
    pub fn close(&mut self) {
        self.winning_bid = self.determine_winner().cloned();
        self.closed = true;
    }

    pub fn is_expired(&self, now: DateTime<Utc>, bidding_window: Duration) -> bool {
        !self.closed
            && self
                .opened_at
                .checked_add_signed(bidding_window)
                .is_some_and(|ends_at| ends_at <= now)
    }
}
