// src/persistence/mod.rs
pub mod json_file;

use thiserror::Error;
use crate::domain::{Auction, AuctionId};

#[cfg(test)]
use mockall::automock;

pub use self::json_file::JsonFileRepository;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not (de)serialize auctions: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Write rejected: {0}")]
    Rejected(String),

    #[error("More than one auction named \"{0}\" in the store")]
    DuplicateAuction(AuctionId),
}

/// Storage for auctions awaiting finalization.
#[cfg_attr(test, automock)]
pub trait AuctionRepository: Send + Sync {
    /// Open auctions whose bidding window has elapsed, in storage order.
    fn fetch_expired_auctions(&self) -> Result<Vec<Auction>, PersistenceError>;

    fn save(&self, auction: &Auction) -> Result<(), PersistenceError>;
}
