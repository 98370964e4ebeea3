//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::Result;
use crate::auth::AuthMode;
use crate::config::CONFIG_ENV;
use crate::error::Error;

const USAGE_EXAMPLE: &str = r#"Exit status:
  0  credential printed    2  missing sub-command    3  missing pass entry
  4  secret unreadable     5  unknown sub-command    6  missing fields
  7  pass not installed    8  invalid configuration  9  invalid arguments

Secret entries hold base64-encoded values, one `key: value` per line:
  client-certificate-data, client-key-data   (pem)
  token, expirationTimestamp                 (token)

Kubeconfig usage:
  users:
  - name: prod-admin
    user:
      exec:
        apiVersion: client.authentication.k8s.io/v1beta1
        command: kube-pass-auth
        args: ["pem", "k8s/prod/admin"]
        interactiveMode: IfAvailable"#;

#[derive(Parser, Debug)]
#[command(name = "kube-pass-auth")]
#[command(about = "Kubernetes exec credential plugin backed by the pass password store")]
#[command(version)]
#[command(after_help = USAGE_EXAMPLE)]
pub struct Cli {
    /// Credential type to produce: pem or token
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Password store entry holding the credential
    #[arg(value_name = "PASS_ENTRY")]
    pub entry: Option<String>,

    /// Config file path
    #[arg(short, long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: AuthMode,
    pub entry: String,
}

impl Cli {
    /// Resolve positional arguments into typed options
    pub fn resolve(&self) -> Result<Options> {
        let mode = self.mode.as_deref().ok_or(Error::MissingMode)?.parse()?;
        let entry = self
            .entry
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or(Error::MissingEntry)?
            .to_string();

        Ok(Options { mode, entry })
    }
}
