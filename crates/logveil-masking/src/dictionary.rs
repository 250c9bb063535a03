//! PII keyword dictionary
//!
//! Maps normalized log keys (trim + lowercase) to a `PIIType`. A key with no
//! mapping is simply not PII; resolution never fails.

use crate::policy::normalize;
use logveil_core::PIIType;
use std::collections::HashMap;

/// Immutable alias → PII type mapping, built once at configuration time
#[derive(Debug, Clone)]
pub struct PiiKeywordDictionary {
    alias_to_type: HashMap<String, PIIType>,
}

impl PiiKeywordDictionary {
    /// Build a dictionary from `(alias, type)` pairs
    ///
    /// Aliases are normalized; on duplicates the last entry wins.
    pub fn new<I, S>(mappings: I) -> Self
    where
        I: IntoIterator<Item = (S, PIIType)>,
        S: AsRef<str>,
    {
        Self {
            alias_to_type: mappings
                .into_iter()
                .map(|(alias, ty)| (normalize(alias.as_ref()), ty))
                .collect(),
        }
    }

    /// Resolve a raw key to its PII type, if any
    pub fn resolve(&self, key: &str) -> Option<PIIType> {
        self.alias_to_type.get(&normalize(key)).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.alias_to_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_to_type.is_empty()
    }

    /// Built-in default alias sets
    pub fn default_dictionary() -> Self {
        let mut mappings: Vec<(&str, PIIType)> = Vec::new();

        for alias in ["rrn", "residentno", "residentnumber", "jumin", "ssn_kr"] {
            mappings.push((alias, PIIType::RRN));
        }
        for alias in ["phone", "mobile", "tel", "contact", "msisdn"] {
            mappings.push((alias, PIIType::Phone));
        }
        for alias in [
            "account",
            "acct",
            "accountno",
            "bankaccount",
            "withdrawaccount",
            "depositaccount",
        ] {
            mappings.push((alias, PIIType::Account));
        }
        for alias in ["card", "cardno", "cardnumber", "pan"] {
            mappings.push((alias, PIIType::Card));
        }

        Self::new(mappings)
    }
}

impl Default for PiiKeywordDictionary {
    fn default() -> Self {
        Self::default_dictionary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_normalized_aliases() {
        let dict = PiiKeywordDictionary::default_dictionary();
        assert_eq!(dict.resolve("phone"), Some(PIIType::Phone));
        assert_eq!(dict.resolve("RESIDENTNO"), Some(PIIType::RRN));
        assert_eq!(dict.resolve(" cardNo "), Some(PIIType::Card));
        assert_eq!(dict.resolve("level"), None);
    }

    #[test]
    fn last_write_wins_on_duplicates() {
        let dict =
            PiiKeywordDictionary::new([("no", PIIType::Phone), ("NO", PIIType::Account)]);
        assert_eq!(dict.resolve("no"), Some(PIIType::Account));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn contains_matches_resolve() {
        let dict = PiiKeywordDictionary::default_dictionary();
        assert!(dict.contains("mobile"));
        assert!(!dict.contains("msg"));
    }
}
