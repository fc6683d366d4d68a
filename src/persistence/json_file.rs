use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde_json::{from_str, to_string_pretty};
use crate::domain::Auction;
use super::{AuctionRepository, PersistenceError};

pub const DEFAULT_BIDDING_WINDOW_DAYS: i64 = 7;

/// Keeps every auction in one JSON array on disk.
pub struct JsonFileRepository {
    path: PathBuf,
    bidding_window: Duration,
    clock: Option<DateTime<Utc>>,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileRepository {
            path: path.as_ref().to_path_buf(),
            bidding_window: Duration::days(DEFAULT_BIDDING_WINDOW_DAYS),
            clock: None,
        }
    }

    pub fn with_bidding_window(mut self, bidding_window: Duration) -> Self {
        self.bidding_window = bidding_window;
        self
    }

    /// Pins "now" used to decide which auctions have expired.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.unwrap_or_else(Utc::now)
    }

    pub fn read_auctions(&self) -> Result<Vec<Auction>, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let auctions: Vec<Auction> = from_str(&text)?;
        ensure_unique(&auctions)?;
        Ok(auctions)
    }

    pub fn write_auctions(&self, auctions: &[Auction]) -> Result<(), PersistenceError> {
        ensure_unique(auctions)?;
        let json = to_string_pretty(auctions)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

/// The description is an auction's identity, so it may appear only once.
fn ensure_unique(auctions: &[Auction]) -> Result<(), PersistenceError> {
    let mut seen = HashSet::new();
    for auction in auctions {
        if !seen.insert(auction.description()) {
            return Err(PersistenceError::DuplicateAuction(auction.description().to_string()));
        }
    }
    Ok(())
}

impl AuctionRepository for JsonFileRepository {
    fn fetch_expired_auctions(&self) -> Result<Vec<Auction>, PersistenceError> {
        let now = self.now();
        let expired: Vec<Auction> = self
            .read_auctions()?
            .into_iter()
            .filter(|auction| auction.is_expired(now, self.bidding_window))
            .collect();

        debug!("{} expired auction(s) in {}", expired.len(), self.path.display());
        Ok(expired)
    }

    fn save(&self, auction: &Auction) -> Result<(), PersistenceError> {
        let mut auctions = self.read_auctions()?;

        match auctions
            .iter_mut()
            .find(|stored| stored.description() == auction.description())
        {
            Some(stored) => *stored = auction.clone(),
            None => auctions.push(auction.clone()),
        }

        self.write_auctions(&auctions)
    }
}
