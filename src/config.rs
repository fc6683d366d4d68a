//! Command-line settings for a finalization run.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use clap::Parser;

use crate::persistence::json_file::DEFAULT_BIDDING_WINDOW_DAYS;

/// Roughly a century.
pub const MAX_BIDDING_WINDOW_DAYS: i64 = 36_500;

/// Closes expired auctions and emails their winners
#[derive(Parser, Debug, Clone)]
#[command(name = "auction-finalizer")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// JSON file holding the auctions
    #[arg(short, long, default_value = "auctions.json", env = "AUCTION_STORE")]
    pub store: PathBuf,

    /// Days an auction accepts bids after it opens
    #[arg(
        long,
        default_value_t = DEFAULT_BIDDING_WINDOW_DAYS,
        env = "BIDDING_WINDOW_DAYS",
        value_parser = clap::value_parser!(i64).range(1..=MAX_BIDDING_WINDOW_DAYS)
    )]
    pub bidding_window_days: i64,

    /// Treat this RFC 3339 instant as the current time
    #[arg(long, env = "FINALIZE_NOW")]
    pub now: Option<DateTime<Utc>>,
}

impl Config {
    pub fn bidding_window(&self) -> Duration {
        Duration::days(self.bidding_window_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_a_week_long_window() {
        let config = Config::try_parse_from(["auction-finalizer"]).unwrap();

        assert_eq!(config.store, PathBuf::from("auctions.json"));
        assert_eq!(config.bidding_window(), Duration::days(7));
        assert!(config.now.is_none());
    }

    #[test]
    fn parses_explicit_arguments() {
        let config = Config::try_parse_from([
            "auction-finalizer",
            "--store",
            "/tmp/store.json",
            "--bidding-window-days",
            "3",
            "--now",
            "2024-05-01T12:00:00Z",
        ])
        .unwrap();

        assert_eq!(config.store, PathBuf::from("/tmp/store.json"));
        assert_eq!(config.bidding_window(), Duration::days(3));
        assert_eq!(config.now.unwrap().to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn rejects_window_outside_bounds() {
        for days in ["0", "-3", "36501", "1000000000", "9000000000000"] {
            let result = Config::try_parse_from([
                "auction-finalizer",
                "--bidding-window-days",
                days,
            ]);
            assert!(result.is_err(), "accepted {} days", days);
        }
    }

    #[test]
    fn accepts_largest_window() {
        let config = Config::try_parse_from([
            "auction-finalizer",
            "--bidding-window-days",
            "36500",
        ])
        .unwrap();

        assert_eq!(config.bidding_window(), Duration::days(MAX_BIDDING_WINDOW_DAYS));
    }
}
