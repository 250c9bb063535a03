//! YAML-backed masking configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

use logveil_core::{Error, PIIType, Result};
use logveil_masking::{
    ForbiddenKeyMode, ForbiddenKeyPolicy, MaskerRegistry, MaskingEngine, PhoneMode, PhonePolicy,
    PiiKeywordDictionary,
};

/// PII type name → alias list, as written in the config file
///
/// Example:
/// ```yaml
/// dictionary:
///   rrn: [rrn, residentNo, jumin]
///   phone: [phone, mobile, tel]
/// ```
pub type DictionaryConfig = HashMap<PIIType, Vec<String>>;

/// Forbidden-key section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForbiddenConfig {
    /// Key names whose values must never appear in logs
    pub keys: Vec<String>,

    /// Replacement behavior for forbidden keys
    pub mode: ForbiddenKeyMode,
}

impl Default for ForbiddenConfig {
    fn default() -> Self {
        Self {
            keys: ForbiddenKeyPolicy::default_keys()
                .into_iter()
                .map(String::from)
                .collect(),
            mode: ForbiddenKeyMode::Redact,
        }
    }
}

/// Phone strategy section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    pub mode: PhoneMode,
    pub mask_char: char,
    pub separator: String,
    pub redacted_token: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        let policy = PhonePolicy::default();
        Self {
            mode: policy.mode,
            mask_char: policy.mask_char,
            separator: policy.separator,
            redacted_token: policy.redacted_token,
        }
    }
}

impl From<&PhoneConfig> for PhonePolicy {
    fn from(config: &PhoneConfig) -> Self {
        Self {
            mask_char: config.mask_char,
            separator: config.separator.clone(),
            mode: config.mode,
            redacted_token: config.redacted_token.clone(),
        }
    }
}

/// Full masking configuration
///
/// Omitted sections fall back to the built-in defaults; `MaskingConfig::default()`
/// describes the same engine the original ships with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingConfig {
    /// PII keyword dictionary; `None` uses the built-in alias sets
    pub dictionary: Option<DictionaryConfig>,

    pub forbidden: ForbiddenConfig,

    pub phone: PhoneConfig,
}

impl MaskingConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// - `Error::ConfigNotFound` if the file doesn't exist
    /// - `Error::Io` if it can't be read
    /// - `Error::Config` if it isn't valid YAML for this schema
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = expand_tilde(path.into())?;

        if !path.exists() {
            return Err(Error::ConfigNotFound);
        }

        let contents = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml_str(&contents)?;

        info!("Loaded masking configuration from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).map_err(|e| Error::Config(format!("Invalid YAML: {}", e)))
    }

    /// Load from a file, falling back to defaults when the file is missing
    /// or unparseable
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(path.clone()) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Masking config {:?} unavailable ({}); using defaults",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Build the immutable engine this configuration describes
    ///
    /// Intended to be called once, before concurrent use begins.
    pub fn build_engine(&self) -> MaskingEngine {
        let dictionary = match &self.dictionary {
            Some(sections) => PiiKeywordDictionary::new(
                sections
                    .iter()
                    .flat_map(|(ty, aliases)| aliases.iter().map(move |a| (a.as_str(), *ty))),
            ),
            None => PiiKeywordDictionary::default_dictionary(),
        };

        let policy = ForbiddenKeyPolicy::new(&self.forbidden.keys, self.forbidden.mode);
        let registry = MaskerRegistry::with_phone_policy(PhonePolicy::from(&self.phone));

        MaskingEngine::new(dictionary, policy, registry)
    }
}

/// Expand a leading `~` to the user's home directory
fn expand_tilde(path: PathBuf) -> Result<PathBuf> {
    if path.starts_with("~") {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;
        Ok(home.join(path.strip_prefix("~").expect("checked prefix")))
    } else {
        Ok(path)
    }
}
