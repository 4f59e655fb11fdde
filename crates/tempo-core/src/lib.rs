//! # tempo-core
//!
//! Core types shared across all tempo crates:
//! - Entity structs for the two record kinds (jobs and schedules)
//! - The schedule status enum with its wire form
//! - Flexible two-granularity timestamp parsing and formatting
//! - Human-friendly duration parsing ("1.5 hours", "30 minutes")
//! - CLI response types
//! - Cross-cutting error types

pub mod duration;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod stamp;
