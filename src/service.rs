//! Batch that closes expired auctions and notifies their winners.

use std::sync::Arc;

use log::{debug, error, info};

use crate::domain::{Auction, AuctionId};
use crate::notification::EmailNotifier;
use crate::persistence::{AuctionRepository, PersistenceError};

/// Outcome of one finalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub notified: usize,
    /// Auctions whose closed state could not be saved.
    pub failed: Vec<AuctionId>,
}

pub struct FinalizeAuctionService {
    repository: Arc<dyn AuctionRepository>,
    notifier: Arc<dyn EmailNotifier>,
}

impl FinalizeAuctionService {
    pub fn new(repository: Arc<dyn AuctionRepository>, notifier: Arc<dyn EmailNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Closes every expired auction, one at a time, in the order the
    /// repository returns them.
    ///
    /// A failed save is logged and skips that auction's email; the rest of
    /// the batch still runs. Only a failure to fetch the batch is returned.
    pub fn finalize_expired_auctions(&self) -> Result<BatchSummary, PersistenceError> {
        let auctions = self.repository.fetch_expired_auctions()?;
        let mut summary = BatchSummary::default();

        for mut auction in auctions {
            summary.processed += 1;
            match self.finalize(&mut auction) {
                Ok(notified) => {
                    if notified {
                        summary.notified += 1;
                    }
                }
                Err(e) => {
                    error!("Could not save auction \"{}\": {}", auction.description(), e);
                    summary.failed.push(auction.description().to_string());
                }
            }
        }

        info!(
            "Finalized {} auction(s): {} winner(s) notified, {} failed to save",
            summary.processed,
            summary.notified,
            summary.failed.len()
        );
        Ok(summary)
    }

    fn finalize(&self, auction: &mut Auction) -> Result<bool, PersistenceError> {
        auction.close();
        debug!("Closed auction \"{}\"", auction.description());

        self.repository.save(auction)?;

        match auction.winning_bid() {
            Some(winning_bid) => {
                self.notifier.send_winner_email(winning_bid);
                info!(
                    "Notified {} of winning \"{}\" with {}",
                    winning_bid.bidder.name(),
                    auction.description(),
                    winning_bid.bid_amount
                );
                Ok(true)
            }
            None => {
                debug!("Auction \"{}\" closed without bids", auction.description());
                Ok(false)
            }
        }
    }
}
