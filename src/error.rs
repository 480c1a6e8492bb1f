/// Error types shared across the application
///
/// Ingestion errors travel inside UI messages, so they must be `Clone`
/// and carry their reasons as strings rather than `io::Error`.

use thiserror::Error;

/// Notification title shown when a file is rejected
pub const UNSUPPORTED_TITLE: &str = "Unsupported File Type";

/// Notification body shown when a file is rejected
pub const UNSUPPORTED_DESCRIPTION: &str = "JPG files are not supported.";

/// Why a selected file did not make it into the record collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The file name ends with the rejected suffix.
    /// Surfaced to the user as a blocking dialog.
    #[error("Unsupported File Type: {name}")]
    UnsupportedFileType { name: String },

    /// Reading the file's bytes failed.
    /// Only logged; the user is not notified.
    #[error("Error reading file {name}: {reason}")]
    Decode { name: String, reason: String },
}

impl IngestError {
    /// Name of the file this error is about
    pub fn file_name(&self) -> &str {
        match self {
            IngestError::UnsupportedFileType { name } => name,
            IngestError::Decode { name, .. } => name,
        }
    }
}

/// Failures while loading the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}
