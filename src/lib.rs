// src/lib.rs
pub mod config;
pub mod domain;
pub mod money;
pub mod notification;
pub mod persistence;
pub mod service;

pub use domain::*;
pub use money::*;
pub use service::{BatchSummary, FinalizeAuctionService};
