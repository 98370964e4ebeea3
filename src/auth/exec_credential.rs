//! `ExecCredential` documents for the client.authentication.k8s.io protocol
//!
//! The plugin prints exactly one of these to stdout per invocation.

use serde::{Deserialize, Serialize};

use crate::Result;
use super::extractor::CredentialBundle;

pub const API_VERSION: &str = "client.authentication.k8s.io/v1beta1";
pub const KIND: &str = "ExecCredential";

/// Top-level exec credential object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecCredential {
    pub api_version: String,
    pub kind: String,
    pub status: ExecCredentialStatus,
}

/// Credential payload, shaped by the auth mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExecCredentialStatus {
    Certificate(CertificateStatus),
    Token(TokenStatus),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStatus {
    pub client_certificate_data: String,
    pub client_key_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatus {
    pub token: String,

    /// RFC3339 expiry, empty when the secret carries none.
    /// client-go parses this as `metav1.Time`, which rejects an empty string.
    #[serde(default)]
    pub expiration_timestamp: String,
}

impl ExecCredential {
    pub fn new(status: ExecCredentialStatus) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            status,
        }
    }
}

impl From<CredentialBundle> for ExecCredential {
    fn from(bundle: CredentialBundle) -> Self {
        let status = match bundle {
            CredentialBundle::Pem {
                client_certificate_data,
                client_key_data,
            } => ExecCredentialStatus::Certificate(CertificateStatus {
                client_certificate_data,
                client_key_data,
            }),
            CredentialBundle::Token {
                token,
                expiration_timestamp,
            } => ExecCredentialStatus::Token(TokenStatus {
                token,
                expiration_timestamp: expiration_timestamp.unwrap_or_default(),
            }),
        };
        Self::new(status)
    }
}

/// Render a bundle as a pretty-printed exec credential JSON document
pub fn format(bundle: CredentialBundle) -> Result<String> {
    let credential = ExecCredential::from(bundle);
    Ok(serde_json::to_string_pretty(&credential)?)
}
