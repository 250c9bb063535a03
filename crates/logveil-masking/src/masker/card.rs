//! Payment card number (PAN) masking

use crate::masker::PIIMasker;
use logveil_core::PIIType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly 16 digits, hyphen-delimited in groups of 4
static PAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2})\d{2}-\d{4}-(\d{4})$").expect("PAN pattern is valid")
});

/// Masks `1234-5678-1234-5678` to `1234-56**-****-5678`
///
/// Keeps the first 6 digits (issuer identification) and the last 4. Any
/// other length or delimiter pattern is rejected, not partially masked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardMasker;

impl CardMasker {
    pub fn new() -> Self {
        Self
    }
}

impl PIIMasker for CardMasker {
    fn pii_type(&self) -> PIIType {
        PIIType::Card
    }

    fn mask(&self, value: &str) -> Option<String> {
        let caps = PAN_PATTERN.captures(value)?;
        Some(format!("{}**-****-{}", &caps[1], &caps[2]))
    }
}
