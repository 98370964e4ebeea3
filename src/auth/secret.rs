//! Field lookup in decrypted secret text
//!
//! A secret is a newline-delimited `key: value` document. Values are stored
//! base64-encoded; whitespace anywhere inside a value is insignificant.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a key name is matched against a secret line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMatch {
    /// The line starts with the key name. There is no field boundary, so the
    /// key `tok` also matches a `token: ...` line.
    #[default]
    Prefix,

    /// The line is `key`, optional whitespace, then `:`.
    Strict,
}

/// Fetch and decode the value of `key` from a secret document.
///
/// Returns an empty string when the key is absent, its value is blank, or the
/// value is not valid base64 of UTF-8 text. Callers treat empty as missing.
pub fn fetch_key(document: &str, key: &str, matching: KeyMatch) -> String {
    let Some(raw) = find_raw_value(document, key, matching) else {
        tracing::debug!("Key '{}' not present in secret", key);
        return String::new();
    };

    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return String::new();
    }

    match decode(&compact) {
        Some(value) => value,
        None => {
            tracing::warn!("Value for '{}' is not valid base64-encoded text", key);
            String::new()
        }
    }
}

/// Raw text after the first colon of the first line matching `key`.
/// Lines without a colon are not `key: value` lines and never match.
fn find_raw_value<'a>(document: &'a str, key: &str, matching: KeyMatch) -> Option<&'a str> {
    match matching {
        KeyMatch::Prefix => {
            document
                .lines()
                .filter(|line| line.starts_with(key))
                .find_map(|line| line.split_once(':'))
                .map(|(_, value)| value)
        }
        KeyMatch::Strict => {
            let re = Regex::new(&format!(r"^{}\s*:", regex::escape(key))).ok()?;
            document
                .lines()
                .find_map(|line| re.find(line).map(|m| &line[m.end()..]))
        }
    }
}

fn decode(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}
