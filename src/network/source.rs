//! Adapter source trait and error types.

use thiserror::Error;

use super::AdapterRecord;

/// Error type for adapter enumeration.
///
/// Every variant is terminal for the current run: the caller must abort
/// rather than treat the failure as "zero adapters available".
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// The query command ran but exited unsuccessfully.
    #[error("Error getting network adapters from PowerShell: {}\nStderr: {stderr}", describe_exit(*.code))]
    CommandFailed {
        /// Exit code, if the process exited normally.
        code: Option<i32>,
        /// Captured error stream.
        stderr: String,
    },

    /// The query output could not be parsed as the expected JSON shape.
    #[error("Error decoding JSON from PowerShell adapter list: {source}\nRaw output: {raw}")]
    MalformedOutput {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
        /// The raw output, kept for diagnosis.
        raw: String,
    },

    /// The query command could not be started.
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Any other failure during enumeration.
    #[error("An unexpected error occurred while getting adapters: {message}")]
    Unexpected {
        /// Description of the failure.
        message: String,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(
        || "process terminated without an exit code".to_string(),
        |c| format!("exit code {c}"),
    )
}

/// Trait for listing the network adapters available on this machine.
///
/// The production implementation runs a PowerShell query
/// ([`PowerShellSource`](super::PowerShellSource)); tests substitute
/// canned results.
pub trait AdapterSource {
    /// Lists adapters that have an interface identifier, in query order.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError`] when the query fails to run, exits
    /// unsuccessfully, or prints output that cannot be parsed.
    fn fetch(&self) -> Result<Vec<AdapterRecord>, EnumerationError>;
}

impl<S: AdapterSource + ?Sized> AdapterSource for &S {
    fn fetch(&self) -> Result<Vec<AdapterRecord>, EnumerationError> {
        (**self).fetch()
    }
}
