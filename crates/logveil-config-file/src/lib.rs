//! File-based masking configuration for LogVeil deployments
//!
//! This crate loads the masking setup (keyword dictionary, forbidden keys,
//! phone policy) from a YAML file and builds a ready `MaskingEngine`.
//! Configuration is read once at startup; the engine does not support
//! hot-reload, so there is no file watching here.
//!
//! # Example
//! ```no_run
//! # use logveil_config_file::MaskingConfig;
//! # fn example() -> logveil_core::Result<()> {
//! let config = MaskingConfig::load("~/.logveil/masking.yaml")?;
//! let engine = config.build_engine();
//! assert_eq!(engine.mask("phone=010-1234-5678"), "phone=010-****-5678");
//! # Ok(())
//! # }
//! ```

mod file_store;

pub use file_store::{DictionaryConfig, ForbiddenConfig, MaskingConfig, PhoneConfig};
