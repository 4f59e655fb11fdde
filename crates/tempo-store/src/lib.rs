//! # tempo-store
//!
//! Persistence and registry layer for tempo.
//!
//! Both registries ([`jobs::JobBook`] and [`schedules::SchedulePlanner`])
//! own an in-memory record list loaded from a single JSON document at
//! construction and rewrite the whole document after every mutation. There
//! is no locking: a registry instance is single-threaded, and concurrent
//! processes writing the same file may clobber each other. Persistence is
//! fire-and-forget — a failed save is reported as an error, but the
//! in-memory mutation is kept.

pub mod csv_import;
pub mod document;
pub mod error;
pub mod jobs;
pub mod plan;
pub mod schedules;

#[cfg(test)]
mod test_support;

pub use error::StoreError;
