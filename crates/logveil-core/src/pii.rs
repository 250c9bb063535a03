//! PII type enumeration

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Types of PII a log key can resolve to
///
/// Closed enumeration: adding a kind of PII means adding a variant here plus
/// registering a masker for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PIIType {
    /// Korean resident registration number
    #[serde(rename = "rrn")]
    RRN,

    /// Korean domestic phone number (mobile or landline)
    Phone,

    /// Bank account number
    Account,

    /// Payment card number (PAN)
    Card,
}

impl PIIType {
    /// All variants, in registry order
    pub const ALL: [PIIType; 4] = [
        PIIType::RRN,
        PIIType::Phone,
        PIIType::Account,
        PIIType::Card,
    ];

    /// Lowercase name used in configuration sources
    pub fn as_str(&self) -> &'static str {
        match self {
            PIIType::RRN => "rrn",
            PIIType::Phone => "phone",
            PIIType::Account => "account",
            PIIType::Card => "card",
        }
    }
}

impl fmt::Display for PIIType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PIIType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rrn" => Ok(PIIType::RRN),
            "phone" => Ok(PIIType::Phone),
            "account" => Ok(PIIType::Account),
            "card" => Ok(PIIType::Card),
            other => Err(Error::UnknownPiiType(other.to_string())),
        }
    }
}
