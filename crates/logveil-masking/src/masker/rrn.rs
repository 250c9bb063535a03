//! Resident registration number masking

use crate::masker::PIIMasker;
use logveil_core::PIIType;
use once_cell::sync::Lazy;
use regex::Regex;

/// 6 digits, hyphen, leading digit 1-8, then 6 more digits
static RRN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6}-[1-8]\d{6}$").expect("RRN pattern is valid"));

const MASK_TAIL: &str = "******";

/// Masks `950101-1234567` to `950101-1******`
///
/// Keeps the birth date and the leading digit of the second group, which
/// together are enough for debugging without identifying the person.
#[derive(Debug, Clone, Copy, Default)]
pub struct RrnMasker;

impl RrnMasker {
    pub fn new() -> Self {
        Self
    }
}

impl PIIMasker for RrnMasker {
    fn pii_type(&self) -> PIIType {
        PIIType::RRN
    }

    fn mask(&self, value: &str) -> Option<String> {
        if !RRN_PATTERN.is_match(value) {
            return None;
        }
        // First 8 chars: 6 birth-date digits, hyphen, gender/century digit
        Some(format!("{}{}", &value[..8], MASK_TAIL))
    }
}
