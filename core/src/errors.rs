use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a catalog file.
///
/// The filter itself cannot fail: absence of a match is a valid outcome,
/// surfaced by the UI as an empty-state message rather than an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog TOML")]
    Parse(#[from] toml::de::Error),

    #[error("invalid catalog: project #{index}: {reason}")]
    Invalid { index: usize, reason: String },
}
