//! Common types and utilities for the typecompat workspace.
//!
//! This crate provides the pieces every other crate leans on:
//! - The error type shared by all fallible operations (`Error`, `Result`)
//! - The argument-presence assertion helper (`argument_not_null`)
//! - Centralized limits and thresholds

// Contract and range violations
pub mod error;
pub use error::{Error, Result, argument_not_null};

// Centralized limits and thresholds
pub mod limits;
