//! Mode-specific credential extraction

use std::fmt;
use std::str::FromStr;

use crate::Result;
use crate::error::Error;
use super::secret::{fetch_key, KeyMatch};

pub const CLIENT_CERTIFICATE_DATA: &str = "client-certificate-data";
pub const CLIENT_KEY_DATA: &str = "client-key-data";
pub const TOKEN: &str = "token";
pub const EXPIRATION_TIMESTAMP: &str = "expirationTimestamp";

/// Which kind of credential to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// X.509 client certificate and private key
    Pem,
    /// Bearer token with optional expiry
    Token,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pem => "pem",
            Self::Token => "token",
        }
    }

    /// Secret keys reported when this mode's required fields are missing
    pub fn required_keys(&self) -> Vec<&'static str> {
        match self {
            Self::Pem => vec![CLIENT_CERTIFICATE_DATA, CLIENT_KEY_DATA],
            Self::Token => vec![TOKEN, EXPIRATION_TIMESTAMP],
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pem" => Ok(Self::Pem),
            "token" => Ok(Self::Token),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// Decoded credential fields, ready to be formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialBundle {
    Pem {
        client_certificate_data: String,
        client_key_data: String,
    },
    Token {
        token: String,
        expiration_timestamp: Option<String>,
    },
}

impl CredentialBundle {
    pub fn mode(&self) -> AuthMode {
        match self {
            Self::Pem { .. } => AuthMode::Pem,
            Self::Token { .. } => AuthMode::Token,
        }
    }
}

/// Extract the fields `mode` needs from a decrypted secret
pub fn extract(document: &str, mode: AuthMode, matching: KeyMatch) -> Result<CredentialBundle> {
    let bundle = match mode {
        AuthMode::Pem => {
            let client_certificate_data = fetch_key(document, CLIENT_CERTIFICATE_DATA, matching);
            let client_key_data = fetch_key(document, CLIENT_KEY_DATA, matching);

            if client_certificate_data.is_empty() || client_key_data.is_empty() {
                return Err(missing(mode));
            }

            CredentialBundle::Pem {
                client_certificate_data,
                client_key_data,
            }
        }
        AuthMode::Token => {
            let token = fetch_key(document, TOKEN, matching);
            if token.is_empty() {
                return Err(missing(mode));
            }

            let expiration_timestamp = Some(fetch_key(document, EXPIRATION_TIMESTAMP, matching))
                .filter(|ts| !ts.is_empty());

            if let Some(ts) = &expiration_timestamp {
                if chrono::DateTime::parse_from_rfc3339(ts).is_err() {
                    tracing::warn!("{} '{}' is not an RFC3339 timestamp", EXPIRATION_TIMESTAMP, ts);
                }
            }

            CredentialBundle::Token {
                token,
                expiration_timestamp,
            }
        }
    };

    tracing::debug!("Extracted {} credential", mode);
    Ok(bundle)
}

fn missing(mode: AuthMode) -> Error {
    Error::MissingFields {
        mode,
        keys: mode.required_keys(),
    }
}
