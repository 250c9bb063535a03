//! Masker registry
//!
//! Immutable mapping from `PIIType` to its masking strategy, built once at
//! configuration time. A resolved type without a registered masker is not an
//! error; the engine leaves such values untouched.

use crate::masker::{AccountMasker, CardMasker, PIIMasker, PhoneMasker, PhonePolicy, RrnMasker};
use logveil_core::PIIType;
use std::collections::HashMap;

pub struct MaskerRegistry {
    by_type: HashMap<PIIType, Box<dyn PIIMasker>>,
}

impl MaskerRegistry {
    /// Build a registry from masker instances, keyed by their reported type
    ///
    /// On duplicates the last masker wins.
    pub fn new(maskers: Vec<Box<dyn PIIMasker>>) -> Self {
        let mut by_type = HashMap::with_capacity(maskers.len());
        for masker in maskers {
            by_type.insert(masker.pii_type(), masker);
        }
        Self { by_type }
    }

    /// The standard registry: one masker per variant, default policies
    pub fn standard() -> Self {
        Self::with_phone_policy(PhonePolicy::default())
    }

    /// The standard registry with a custom phone policy
    pub fn with_phone_policy(phone: PhonePolicy) -> Self {
        Self::new(vec![
            Box::new(RrnMasker::new()),
            Box::new(PhoneMasker::with_policy(phone)),
            Box::new(AccountMasker::new()),
            Box::new(CardMasker::new()),
        ])
    }

    /// Look up the masker for a type, if one is registered
    pub fn for_type(&self, ty: PIIType) -> Option<&dyn PIIMasker> {
        self.by_type.get(&ty).map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl Default for MaskerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for MaskerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskerRegistry")
            .field("types", &self.by_type.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_covers_all_types() {
        let registry = MaskerRegistry::standard();
        for ty in PIIType::ALL {
            assert!(registry.for_type(ty).is_some(), "missing masker for {ty}");
        }
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn missing_type_is_not_an_error() {
        let registry = MaskerRegistry::new(vec![Box::new(RrnMasker::new())]);
        assert!(registry.for_type(PIIType::RRN).is_some());
        assert!(registry.for_type(PIIType::Card).is_none());
    }

    #[test]
    fn last_masker_wins_on_duplicate_type() {
        let registry = MaskerRegistry::new(vec![
            Box::new(RrnMasker::new()),
            Box::new(RrnMasker::new()),
        ]);
        assert_eq!(registry.len(), 1);
    }
}
