//! Per-type masking strategies

mod account;
mod card;
mod phone;
mod rrn;

pub use account::AccountMasker;
pub use card::CardMasker;
pub use phone::{PhoneMasker, PhoneMode, PhonePolicy};
pub use rrn::RrnMasker;

use logveil_core::PIIType;

/// Capability contract for one PII type's masking algorithm
///
/// Implementations are stateless (configuration fixed at construction) and
/// safely shared across concurrent calls. A masker must never panic across
/// this boundary; strict internal validation is converted into `None`,
/// meaning "cannot mask, leave the original value unchanged".
pub trait PIIMasker: Send + Sync {
    /// The PII type this masker handles
    fn pii_type(&self) -> PIIType;

    /// Cheap precondition check before `mask` is attempted
    fn supports(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Mask the (unquoted) value, or `None` if the value doesn't have the
    /// expected shape for this type
    fn mask(&self, value: &str) -> Option<String>;
}
