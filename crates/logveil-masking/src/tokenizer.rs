//! Tokenizer for `key=value` / `key: value` pairs in a formatted log line

use logveil_core::strings::QuoteStyle;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Key/value token pattern
///
/// Key: letters, digits, underscore, hyphen, Hangul. Separator: `=` or `:`
/// with optional padding. Value: longest run not containing whitespace,
/// comma, or a closing bracket. Keys match case-insensitively.
static KV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([a-z0-9_\-가-힣]+)\s*[=:]\s*([^\s,\)\]\}]+)")
        .expect("key/value pattern is valid")
});

/// A parsed key/value occurrence in a log line
///
/// Spans are byte offsets into the original, unmodified line. Once any
/// replacement has been spliced in, spans must be corrected by the cumulative
/// length delta of earlier replacements before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw matched key text
    pub key: String,

    /// Key position in the original line
    pub key_span: Range<usize>,

    /// Value position in the original line
    pub value_span: Range<usize>,

    /// Quoting around the value token
    pub quote: QuoteStyle,

    /// Value token text, quotes included if present
    pub raw_value: String,
}

impl Token {
    /// The value with surrounding quotes stripped
    pub fn unquoted_value(&self) -> &str {
        self.quote.strip(&self.raw_value)
    }
}

/// Scan a line for key/value tokens, left to right, non-overlapping
///
/// Operates only against the original text; replacements applied later never
/// feed back into the match set.
pub fn scan(line: &str) -> Vec<Token> {
    KV_PATTERN
        .captures_iter(line)
        .map(|caps| {
            let key = caps.get(1).expect("key group always present");
            let value = caps.get(2).expect("value group always present");
            Token {
                key: key.as_str().to_string(),
                key_span: key.start()..key.end(),
                value_span: value.start()..value.end(),
                quote: QuoteStyle::detect(value.as_str()),
                raw_value: value.as_str().to_string(),
            }
        })
        .collect()
}
