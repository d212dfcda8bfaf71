//! Adapter enumeration through a PowerShell `Get-NetAdapter` query.

use std::process::{Command, Output};

#[cfg(windows)]
use std::os::windows::process::CommandExt;

use super::{AdapterRecord, AdapterSource, EnumerationError, parse_adapter_json};

/// Windows `CREATE_NO_WINDOW` flag to prevent a console window from flashing.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Query listing adapters that have an interface GUID, as compact JSON.
///
/// Output encoding is forced to UTF-8 so adapter descriptions with
/// non-ASCII characters survive the pipe.
pub const ADAPTER_QUERY: &str = "[Console]::OutputEncoding = [System.Text.Encoding]::UTF8; \
     Get-NetAdapter | Select-Object Name, InterfaceDescription, InterfaceGuid | \
     Where-Object {$_.InterfaceGuid -ne $null} | ConvertTo-Json -Compress";

/// Captured result of one query invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Whether the process reported success.
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Raw standard output.
    pub stdout: Vec<u8>,
    /// Raw standard error.
    pub stderr: Vec<u8>,
}

impl From<Output> for QueryResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

impl QueryResult {
    /// Turns the captured output into adapter records.
    ///
    /// # Errors
    ///
    /// - [`EnumerationError::CommandFailed`] if the process did not succeed
    /// - [`EnumerationError::Unexpected`] if stdout is not valid UTF-8
    /// - [`EnumerationError::MalformedOutput`] if stdout is not adapter JSON
    pub fn into_adapters(self) -> Result<Vec<AdapterRecord>, EnumerationError> {
        if !self.success {
            return Err(EnumerationError::CommandFailed {
                code: self.code,
                stderr: String::from_utf8_lossy(&self.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(self.stdout).map_err(|e| EnumerationError::Unexpected {
            message: format!("query output is not valid UTF-8: {e}"),
        })?;

        parse_adapter_json(&stdout).map_err(|source| EnumerationError::MalformedOutput {
            source,
            raw: stdout,
        })
    }
}

/// [`AdapterSource`] backed by a non-elevated PowerShell process.
///
/// Runs `<shell> -NoProfile -Command <query>` with no console window and
/// captures its output.
#[derive(Debug, Clone)]
pub struct PowerShellSource {
    shell: String,
    query: String,
}

impl PowerShellSource {
    /// Creates a source that runs [`ADAPTER_QUERY`] with the given shell.
    #[must_use]
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            query: ADAPTER_QUERY.to_string(),
        }
    }

    /// Replaces the query text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns the shell executable.
    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Returns the arguments passed to the shell.
    #[must_use]
    pub fn args(&self) -> [&str; 3] {
        ["-NoProfile", "-Command", self.query.as_str()]
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.args(self.args());

        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);

        cmd
    }
}

impl AdapterSource for PowerShellSource {
    fn fetch(&self) -> Result<Vec<AdapterRecord>, EnumerationError> {
        tracing::debug!(shell = %self.shell, query = %self.query, "Running adapter query");

        let output = self
            .command()
            .output()
            .map_err(|source| EnumerationError::Spawn {
                program: self.shell.clone(),
                source,
            })?;

        QueryResult::from(output).into_adapters()
    }
}
