//! Core business logic for Fransuite.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Storage is reached through the [`currency::PreferenceRepository`] port.
//!
//! # Modules
//!
//! - `currency` - Display currency presets, money formatting and the
//!   process-wide currency preference store

pub mod currency;
