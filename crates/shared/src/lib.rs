//! Shared types, errors, and configuration for Fransuite.
//!
//! This crate provides common types used across all other crates:
//! - Display currency codes and symbol placement
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
