//! LogVeil Masking Engine
//!
//! This crate provides keyword-driven PII masking for formatted log lines:
//! - Tokenizer for `key=value` / `key: value` pairs
//! - Forbidden-key policy and PII keyword dictionary
//! - Per-type masking strategies (RRN, phone, account, card)
//! - The `MaskingEngine` orchestrator

pub mod dictionary;
pub mod engine;
pub mod masker;
pub mod policy;
pub mod registry;
pub mod tokenizer;

pub use dictionary::PiiKeywordDictionary;
pub use engine::MaskingEngine;
pub use masker::{
    AccountMasker, CardMasker, PIIMasker, PhoneMasker, PhoneMode, PhonePolicy, RrnMasker,
};
pub use policy::{ForbiddenKeyMode, ForbiddenKeyPolicy};
pub use registry::MaskerRegistry;
pub use tokenizer::{Token, scan};
