//! Credential extraction and exec credential rendering
//!
//! This module provides:
//! - Field lookup and base64 decoding over decrypted secret text
//! - Mode-specific extraction and validation of credential fields
//! - Serialization of `ExecCredential` documents
//! - AuthDispatcher, the pipeline the CLI drives

mod secret;
mod extractor;
mod exec_credential;
mod dispatcher;

pub use secret::{fetch_key, KeyMatch};
pub use extractor::{
    extract, AuthMode, CredentialBundle, CLIENT_CERTIFICATE_DATA, CLIENT_KEY_DATA,
    EXPIRATION_TIMESTAMP, TOKEN,
};
pub use exec_credential::{
    format, CertificateStatus, ExecCredential, ExecCredentialStatus, TokenStatus, API_VERSION,
    KIND,
};
pub use dispatcher::AuthDispatcher;
