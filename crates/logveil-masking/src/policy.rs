//! Forbidden-key policy
//!
//! Some keys must never have their values appear in logs regardless of PII
//! classification (passwords, PINs, one-time codes). The policy owns the set
//! of such keys and the replacement behavior.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What to do with the value of a forbidden key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForbiddenKeyMode {
    /// Replace the value with the `<REDACTED>` sentinel
    #[default]
    Redact,

    /// Replace the value with an empty string
    DropValue,

    /// Leave the value unchanged
    Pass,
}

/// Immutable set of forbidden key names plus a redaction mode
///
/// Key lookup is normalized (trim + lowercase, locale-invariant), matching
/// the dictionary's normalization.
#[derive(Debug, Clone)]
pub struct ForbiddenKeyPolicy {
    forbidden_keys: HashSet<String>,
    mode: ForbiddenKeyMode,
}

impl ForbiddenKeyPolicy {
    /// Build a policy from raw key names; normalization is applied here
    pub fn new<I, S>(keys: I, mode: ForbiddenKeyMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            forbidden_keys: keys.into_iter().map(|k| normalize(k.as_ref())).collect(),
            mode,
        }
    }

    /// True iff the normalized key is in the forbidden set
    pub fn is_forbidden(&self, key: &str) -> bool {
        self.forbidden_keys.contains(&normalize(key))
    }

    pub fn mode(&self) -> ForbiddenKeyMode {
        self.mode
    }

    /// Recommended default forbidden key set
    pub fn default_keys() -> Vec<&'static str> {
        vec![
            "password",
            "passwd",
            "pwd",
            "pin",
            "otp",
            "cvv",
            "cvc",
            "authcode",
            "auth_code",
            "verificationcode",
            "verification_code",
        ]
    }
}

impl Default for ForbiddenKeyPolicy {
    fn default() -> Self {
        Self::new(Self::default_keys(), ForbiddenKeyMode::Redact)
    }
}

/// Key normalization: trim + lowercase, locale-invariant, total
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
