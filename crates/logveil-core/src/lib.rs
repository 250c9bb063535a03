//! LogVeil Core Types
//!
//! This crate provides the fundamental types shared throughout LogVeil:
//! - The `PIIType` enumeration
//! - Core error types
//! - String utilities for value-token handling (quotes, digits)

pub mod error;
pub mod pii;
pub mod strings;

pub use error::{Error, Result};
pub use pii::PIIType;
