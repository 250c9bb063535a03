//! Bank account number masking
//!
//! Works on the digit-only projection of the value; every non-digit
//! character (hyphen, space) stays in its original position.

use crate::masker::PIIMasker;
use logveil_core::{PIIType, strings::digits_only};

const REVEAL_PREFIX: usize = 3;
const REVEAL_SUFFIX: usize = 3;

/// Masks account numbers while preserving the original separator layout
///
/// `123-456-789012` becomes `123-***-***012`; short numbers (6 digits or
/// fewer) reveal only the last digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountMasker;

impl AccountMasker {
    pub fn new() -> Self {
        Self
    }
}

impl PIIMasker for AccountMasker {
    fn pii_type(&self) -> PIIType {
        PIIType::Account
    }

    fn mask(&self, value: &str) -> Option<String> {
        let digits = digits_only(value);
        let n = digits.len();
        if n == 0 {
            return None;
        }

        let (prefix, suffix) = if n <= REVEAL_PREFIX + REVEAL_SUFFIX {
            // Short numbers: revealing 3+3 would leak too much
            (0, 1.min(n))
        } else {
            (REVEAL_PREFIX, REVEAL_SUFFIX)
        };

        let masked_digits: String = digits
            .chars()
            .enumerate()
            .map(|(i, d)| if i < prefix || i >= n - suffix { d } else { '*' })
            .collect();

        // Walk the original string, substituting digits positionally
        let mut di = masked_digits.chars();
        let out = value
            .chars()
            .map(|ch| {
                if ch.is_ascii_digit() {
                    di.next().expect("one masked digit per source digit")
                } else {
                    ch
                }
            })
            .collect();

        Some(out)
    }
}
