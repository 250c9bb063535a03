//! The masking engine orchestrator
//!
//! Single pass over the tokenizer's match set in left-to-right order. Per
//! token, in priority order: forbidden-key policy, then dictionary → registry
//! → masker. Every other token passes through unchanged. The call is total:
//! no input string makes it panic, and a per-token anomaly degrades to
//! "leave that token's value exactly as found".

use crate::dictionary::PiiKeywordDictionary;
use crate::policy::{ForbiddenKeyMode, ForbiddenKeyPolicy};
use crate::registry::MaskerRegistry;
use crate::tokenizer::{Token, scan};

/// Fixed sentinel spliced in for forbidden keys under `Redact` mode
pub const REDACTED_SENTINEL: &str = "<REDACTED>";

/// Immutable, shareable line-masking engine
///
/// Construct once at configuration time; `mask` is a pure synchronous
/// transform safe to call from any number of threads.
#[derive(Debug)]
pub struct MaskingEngine {
    dictionary: PiiKeywordDictionary,
    policy: ForbiddenKeyPolicy,
    registry: MaskerRegistry,
}

impl MaskingEngine {
    pub fn new(
        dictionary: PiiKeywordDictionary,
        policy: ForbiddenKeyPolicy,
        registry: MaskerRegistry,
    ) -> Self {
        Self {
            dictionary,
            policy,
            registry,
        }
    }

    /// Engine with the default dictionary, forbidden keys, and maskers
    pub fn with_defaults() -> Self {
        Self::new(
            PiiKeywordDictionary::default_dictionary(),
            ForbiddenKeyPolicy::default(),
            MaskerRegistry::standard(),
        )
    }

    /// Mask one formatted log line
    ///
    /// Replacements are computed against the original line's spans; the
    /// output is assembled by appending the untouched segments between
    /// matches, which keeps later spans correct regardless of earlier
    /// replacements changing length.
    pub fn mask(&self, line: &str) -> String {
        let tokens = scan(line);
        if tokens.is_empty() {
            return line.to_string();
        }

        let mut out = String::with_capacity(line.len());
        let mut last_end = 0;

        for token in &tokens {
            if let Some(replacement) = self.replacement_for(token) {
                out.push_str(&line[last_end..token.value_span.start]);
                out.push_str(&replacement);
                last_end = token.value_span.end;
            }
        }

        out.push_str(&line[last_end..]);
        out
    }

    /// Optional-line variant: absent input yields absent output
    pub fn mask_opt(&self, line: Option<&str>) -> Option<String> {
        line.map(|l| self.mask(l))
    }

    /// Compute the replacement for one token's value span, or `None` to
    /// leave it as found
    fn replacement_for(&self, token: &Token) -> Option<String> {
        // Forbidden-key handling wins over PII classification
        if self.policy.is_forbidden(&token.key) {
            return match self.policy.mode() {
                ForbiddenKeyMode::Redact => Some(REDACTED_SENTINEL.to_string()),
                ForbiddenKeyMode::DropValue => Some(String::new()),
                ForbiddenKeyMode::Pass => None,
            };
        }

        let ty = self.dictionary.resolve(&token.key)?;
        let masker = self.registry.for_type(ty)?;

        let cleaned = token.unquoted_value();
        if !masker.supports(cleaned) {
            return None;
        }
        let masked = masker.mask(cleaned)?;

        Some(token.quote.apply(&masked))
    }
}

#[cfg(test)]
mod tests;
