//! # IO Module
//!
//! The boundary between the presentation layer and the domain.
//!
//! - **mappers**: conversions between `shared` records/DTOs and domain types
//! - **journal_api**: the facade the UI calls, returning display-ready rows

pub mod journal_api;
pub mod mappers;

pub use journal_api::JournalApi;
