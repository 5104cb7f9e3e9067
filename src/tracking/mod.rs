use thiserror::Error;

pub mod entry;
pub mod export;
pub mod filter;
pub mod session;
pub mod store;
pub mod summary;

#[cfg(test)]
mod entry_tests;

/// Transport label that makes the parking expense field meaningful.
pub const CAR: &str = "car";
/// Transport label counted by the metro-days summary.
pub const METRO: &str = "metro";

#[derive(Debug, PartialEq, Error)]
pub enum EntryError {
    #[error("date is required")]
    MissingDate,
    #[error("location is required")]
    MissingLocation,
    #[error("transport is required")]
    MissingTransport,
}
