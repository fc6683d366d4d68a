//! Winner notifications.
//!
//! The batch only needs "tell the winner"; how the message leaves the
//! process is up to the [`EmailNotifier`] implementation. [`LogEmailNotifier`]
//! renders the message and writes it to the log.

use log::info;

use crate::domain::Bid;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait EmailNotifier: Send + Sync {
    fn send_winner_email(&self, winning_bid: &Bid);
}

/// Email sent to the bidder who won an auction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl WinnerEmail {
    /// Recipient is the bidder's address, or their name when none is known.
    pub fn for_bid(winning_bid: &Bid) -> Self {
        let bidder = &winning_bid.bidder;
        let to = bidder
            .email()
            .map(str::to_string)
            .unwrap_or_else(|| bidder.name().to_string());

        Self {
            to,
            subject: format!("You won the auction \"{}\"", winning_bid.for_auction),
            body: format!(
                "Congratulations {}! Your bid of {} is the winning bid for \"{}\".",
                bidder.name(),
                winning_bid.bid_amount,
                winning_bid.for_auction
            ),
        }
    }
}

/// Notifier that logs emails instead of delivering them.
#[derive(Debug, Default, Clone)]
pub struct LogEmailNotifier;

impl LogEmailNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl EmailNotifier for LogEmailNotifier {
    fn send_winner_email(&self, winning_bid: &Bid) {
        let email = WinnerEmail::for_bid(winning_bid);
        info!(
            "Email to {}: {} | {}",
            email.to, email.subject, email.body
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Auction, User};
    use crate::money::Amount;

    fn winning_bid(bidder: User) -> Bid {
        let starting_value = "500".parse::<Amount>().unwrap();
        let auction = Auction::new("Celular", starting_value, User::new("Fulano"));
        Bid::new(&auction, bidder, "900".parse().unwrap())
    }

    #[test]
    fn email_goes_to_bidder_address_when_known() {
        let bid = winning_bid(User::new("Ciclano").with_email("ciclano@example.com"));
        let email = WinnerEmail::for_bid(&bid);

        assert_eq!(email.to, "ciclano@example.com");
        assert!(email.subject.contains("Celular"));
        assert!(email.body.contains("900"));
        assert!(email.body.contains("Ciclano"));
    }

    #[test]
    fn email_falls_back_to_bidder_name() {
        let bid = winning_bid(User::new("Ciclano"));
        let email = WinnerEmail::for_bid(&bid);

        assert_eq!(email.to, "Ciclano");
    }
}
