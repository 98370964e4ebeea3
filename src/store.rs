//! Secret store access through the `pass` command-line tool

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::Result;
use crate::error::Error;

/// Source of decrypted secret text, keyed by entry path
pub trait SecretStore {
    /// Decrypt and return the full text of `entry`
    fn show(&self, entry: &str) -> Result<String>;
}

/// Reads entries by running `<program> show <entry>`
#[derive(Debug, Clone)]
pub struct PassStore {
    program: String,
    store_dir: Option<PathBuf>,
}

impl PassStore {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            store_dir: None,
        }
    }

    /// Point the child at a specific password store directory
    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for PassStore {
    fn default() -> Self {
        Self::new("pass")
    }
}

impl SecretStore for PassStore {
    fn show(&self, entry: &str) -> Result<String> {
        let unreadable = |reason: String| Error::SecretUnreadable {
            entry: entry.to_string(),
            reason,
        };

        let mut command = Command::new(&self.program);
        command.arg("show").arg(entry);
        if let Some(dir) = &self.store_dir {
            command.env("PASSWORD_STORE_DIR", dir);
        }

        tracing::debug!("Running {} show {}", self.program, entry);

        let output = command
            .output()
            .map_err(|e| unreadable(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(unreadable(format!(
                "{} exited with code {}: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|_| unreadable("secret is not valid UTF-8".to_string()))?;

        if text.trim().is_empty() {
            return Err(unreadable("secret is empty".to_string()));
        }

        tracing::debug!("Read {} bytes from {}", text.len(), entry);
        Ok(text)
    }
}

/// Check that `program` can be executed, either as a path or from `PATH`
pub fn ensure_available(program: &str) -> Result<()> {
    if program.contains(std::path::MAIN_SEPARATOR) {
        if Path::new(program).exists() {
            return Ok(());
        }
        return Err(Error::Prerequisite(format!("{} does not exist", program)));
    }

    match which::which(program) {
        Ok(path) => {
            tracing::debug!("Found {} at {:?}", program, path);
            Ok(())
        }
        Err(_) => Err(Error::Prerequisite(format!(
            "'{}' not found in PATH. Install pass from https://www.passwordstore.org/",
            program
        ))),
    }
}
