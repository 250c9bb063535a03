//! String utilities for log value tokens: quote handling and digit extraction

use serde::{Deserialize, Serialize};

/// Quoting detected around a value token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// Not quoted
    None,

    /// Wrapped in double quotes
    Double,

    /// Wrapped in single quotes
    Single,
}

impl QuoteStyle {
    /// Detect the quoting of a raw value token
    ///
    /// Only a matched pair counts; an unterminated quote is `None`.
    pub fn detect(token: &str) -> Self {
        let bytes = token.as_bytes();
        if bytes.len() >= 2 {
            match (bytes[0], bytes[bytes.len() - 1]) {
                (b'"', b'"') => return QuoteStyle::Double,
                (b'\'', b'\'') => return QuoteStyle::Single,
                _ => {}
            }
        }
        QuoteStyle::None
    }

    /// Strip this style's quotes from a token
    pub fn strip<'a>(&self, token: &'a str) -> &'a str {
        match self {
            QuoteStyle::None => token,
            QuoteStyle::Double | QuoteStyle::Single => &token[1..token.len() - 1],
        }
    }

    /// Wrap a masked value back in this style's quotes
    pub fn apply(&self, masked: &str) -> String {
        match self {
            QuoteStyle::None => masked.to_string(),
            QuoteStyle::Double => format!("\"{}\"", masked),
            QuoteStyle::Single => format!("'{}'", masked),
        }
    }
}

/// Strip one pair of matching surrounding quotes (double or single)
pub fn strip_quotes(v: &str) -> &str {
    QuoteStyle::detect(v).strip(v)
}

/// Re-wrap a masked value in the quotes the original token carried, if any
pub fn reapply_quotes(original_token: &str, masked: &str) -> String {
    QuoteStyle::detect(original_token).apply(masked)
}

/// Keep only ASCII digits
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
