//! Secret text in, exec credential JSON out

use crate::Result;
use super::exec_credential;
use super::extractor::{extract, AuthMode};
use super::secret::KeyMatch;

/// Turns decrypted secret text into an exec credential document
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthDispatcher {
    matching: KeyMatch,
}

impl AuthDispatcher {
    pub fn new(matching: KeyMatch) -> Self {
        Self { matching }
    }

    /// Extract, validate and format the credential for `mode`.
    ///
    /// Nothing is rendered unless every field the mode requires is present.
    pub fn respond(&self, mode: AuthMode, document: &str) -> Result<String> {
        let bundle = extract(document, mode, self.matching)?;
        exec_credential::format(bundle)
    }
}
