use std::sync::Arc;

use auction_finalizer::config::Config;
use auction_finalizer::notification::LogEmailNotifier;
use auction_finalizer::persistence::{JsonFileRepository, PersistenceError};
use auction_finalizer::FinalizeAuctionService;
use clap::Parser;
use log::info;

fn run(config: Config) -> Result<(), PersistenceError> {
    let mut repository = JsonFileRepository::new(&config.store)
        .with_bidding_window(config.bidding_window());
    if let Some(now) = config.now {
        repository = repository.with_clock(now);
    }

    info!("Finalizing expired auctions in {}", config.store.display());

    let service = FinalizeAuctionService::new(
        Arc::new(repository),
        Arc::new(LogEmailNotifier::new()),
    );
    let summary = service.finalize_expired_auctions()?;

    if !summary.failed.is_empty() {
        info!("Will retry next run: {}", summary.failed.join(", "));
    }
    Ok(())
}

fn main() -> Result<(), PersistenceError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(Config::parse())
}
