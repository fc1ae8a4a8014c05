//! # Domain Module
//!
//! Contains the business logic of the archery journal.
//!
//! ## Module Organization
//!
//! - **participant_service**: roster CRUD with validation and persistence
//! - **session_service**: session recording with title uniqueness and defaults
//! - **session_draft**: editable session form state
//! - **participant_view** / **session_view**: pure table projections
//! - **labels**: localized strings that appear inside computed values
//! - **collation**: name ordering and matching
//!
//! ## Business Rules
//!
//! - Participants need a non-blank first and last name
//! - Session titles are optional but unique (trimmed, case-insensitive)
//! - A session needs at least one participant, each athlete at most once
//! - From 70 m on, sessions default to hits-only scoring
//! - Rejected input is a no-op returned as a validation error, never a panic

pub mod collation;
pub mod commands;
pub mod labels;
pub mod models;
pub mod participant_service;
pub mod participant_view;
pub mod session_draft;
pub mod session_service;
pub mod session_view;

pub use labels::Locale;
pub use participant_service::ParticipantService;
pub use session_draft::{DraftValidation, SessionDraft};
pub use session_service::SessionService;
pub use session_view::SessionLabels;
