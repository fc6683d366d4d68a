#![allow(dead_code)]
use auction_finalizer::domain::{Auction, Bid, User};
use auction_finalizer::money::Amount;
use chrono::{DateTime, TimeZone, Utc};
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn amount(value: &str) -> Amount {
    value.parse().unwrap()
}

pub fn sample_opened_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 1, 1, 8, 28, 0).unwrap()
}

pub fn owner() -> User {
    User::new("Fulano")
}

pub fn beltrano() -> User {
    User::new("Beltrano")
}

pub fn ciclano() -> User {
    User::new("Ciclano").with_email("ciclano@example.com")
}

pub fn empty_auction(description: &str, starting_value: &str) -> Auction {
    Auction::opened_on(description, amount(starting_value), owner(), sample_opened_at())
}

pub fn place(auction: &mut Auction, bidder: User, value: &str) -> Bid {
    let bid = Bid::new(auction, bidder, amount(value));
    auction.propose(bid.clone());
    bid
}

/// "Celular" starting at 500 with bids 600 (Beltrano) then 900 (Ciclano).
pub fn celular() -> Auction {
    let mut auction = empty_auction("Celular", "500");
    place(&mut auction, beltrano(), "600");
    place(&mut auction, ciclano(), "900");
    auction
}
