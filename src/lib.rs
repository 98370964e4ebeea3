//! kube-pass-auth - Kubernetes exec credential plugin backed by pass
//!
//! Reads a decrypted password-store entry, pulls out a client certificate
//! and key or a bearer token, and renders a
//! `client.authentication.k8s.io/v1beta1` `ExecCredential` document.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod store;
pub mod ui;

pub use error::{Error, Result};
