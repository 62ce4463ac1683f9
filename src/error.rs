use std::io;
use thiserror::Error;

/// Errors surfaced while configuring or running a scan.
///
/// None of these abort a walk: unreadable directories are collected into
/// the [`ScanOutcome`](crate::filesystem::ScanOutcome) and the walk moves on.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory unreadable: {path}: {source}")]
    UnreadableDirectory {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Suffix '{suffix}' exceeds {max} bytes and can never match")]
    OversizedSuffix { suffix: String, max: usize },
}

impl ScanError {
    /// Path of the directory that failed to open, if this is a read failure.
    pub fn path(&self) -> Option<&str> {
        match self {
            ScanError::UnreadableDirectory { path, .. } => Some(path),
            _ => None,
        }
    }
}
