//! LogVeil host integration for `tracing`
//!
//! The masking engine exposes a single `mask(line)` call; this crate binds
//! it into `tracing-subscriber` so every formatted log line is masked before
//! it reaches the sink:
//! - `MaskingMakeWriter` wraps any `MakeWriter` and filters complete lines
//!   through a shared engine
//! - `init_tracing` installs an env-filtered fmt subscriber using it

pub mod writer;

pub use writer::{MaskingMakeWriter, MaskingWriter};

use logveil_masking::MaskingEngine;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber whose output passes through the engine
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Returns an error if a
/// global subscriber is already set.
pub fn init_tracing(
    engine: Arc<MaskingEngine>,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(MaskingMakeWriter::new(engine, std::io::stdout))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
