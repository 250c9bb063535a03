//! Korean phone number masking
//!
//! Recognizes mobile (`010`, `011`, `016`-`019`), Seoul (`02`), and other
//! area codes (`0` + 2-3 digits), followed by a 3-4 digit middle group and a
//! fixed 4-digit final group, with optional hyphen/space separators.
//!
//! The `regex` crate has no lookaround, so the "bounded by non-digits"
//! condition from the original pattern is enforced by explicit checks on the
//! characters adjacent to each candidate match; a rejected candidate resumes
//! the scan one character later so a shifted match is still found.

use crate::masker::PIIMasker;
use logveil_core::PIIType;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(01[016789]|02|0\d{2,3})[-\s]?(\d{3,4})[-\s]?(\d{4})")
        .expect("phone pattern is valid")
});

/// Masking behavior for matched numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneMode {
    /// `010-****-5678` / `02-***-4567`, middle-group length preserved
    #[default]
    Partial,

    /// Every matched number replaced wholesale by the redaction token
    Redact,
}

/// Phone masking policy, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonePolicy {
    /// Character used for masked middle-group digits
    pub mask_char: char,

    /// Separator emitted between groups in partial mode
    pub separator: String,

    pub mode: PhoneMode,

    /// Replacement token in redact mode
    pub redacted_token: String,
}

impl Default for PhonePolicy {
    fn default() -> Self {
        Self {
            mask_char: '*',
            separator: "-".to_string(),
            mode: PhoneMode::Partial,
            redacted_token: "[REDACTED_PHONE]".to_string(),
        }
    }
}

/// Masks every Korean phone number occurrence in a value
#[derive(Debug, Clone, Default)]
pub struct PhoneMasker {
    policy: PhonePolicy,
}

impl PhoneMasker {
    pub fn new() -> Self {
        Self::with_policy(PhonePolicy::default())
    }

    pub fn with_policy(policy: PhonePolicy) -> Self {
        Self { policy }
    }

    fn replacement(&self, area: &str, mid: &str, last: &str) -> String {
        match self.policy.mode {
            PhoneMode::Redact => self.policy.redacted_token.clone(),
            PhoneMode::Partial => {
                let mut out = String::with_capacity(area.len() + mid.len() + last.len() + 2);
                out.push_str(area);
                out.push_str(&self.policy.separator);
                for _ in 0..mid.chars().count() {
                    out.push(self.policy.mask_char);
                }
                out.push_str(&self.policy.separator);
                out.push_str(last);
                out
            }
        }
    }
}

impl PIIMasker for PhoneMasker {
    fn pii_type(&self) -> PIIType {
        PIIType::Phone
    }

    fn mask(&self, value: &str) -> Option<String> {
        let mut out = String::with_capacity(value.len());
        let mut last_end = 0;
        let mut search = 0;
        let mut matched = false;

        while let Some(caps) = PHONE_PATTERN.captures(&value[search..]) {
            let m = caps.get(0).expect("whole match always present");
            let (start, end) = (search + m.start(), search + m.end());

            if !bounded_by_non_digits(value, start, end) {
                // Candidate sits inside a longer digit run; retry one
                // character later (matches always start at ASCII '0').
                search = start + 1;
                continue;
            }

            let area = caps.get(1).expect("area group").as_str();
            let mid = caps.get(2).expect("middle group").as_str();
            let last = caps.get(3).expect("final group").as_str();

            out.push_str(&value[last_end..start]);
            out.push_str(&self.replacement(area, mid, last));
            last_end = end;
            search = end;
            matched = true;
        }

        if !matched {
            return None;
        }
        out.push_str(&value[last_end..]);
        Some(out)
    }
}

/// True iff neither neighbor of the span is an ASCII digit
fn bounded_by_non_digits(value: &str, start: usize, end: usize) -> bool {
    let before_ok = value[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_ascii_digit());
    let after_ok = value[end..]
        .chars()
        .next()
        .is_none_or(|c| !c.is_ascii_digit());
    before_ok && after_ok
}
