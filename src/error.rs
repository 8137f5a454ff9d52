use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a tester run.
#[derive(Debug, Error)]
pub enum TesterError {
    #[error("self-update failed: {0}")]
    SelfUpdate(String),

    #[error("directory chooser failed: {0}")]
    Chooser(String),

    #[error("failed to read cache file {}: {source}", .path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write cache file {}: {source}", .path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("test variant {} not found", .0.display())]
    MissingVariant(PathBuf),

    #[error("failed to stage {} into {}: {source}", .from.display(), .to.display())]
    Stage {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove staged file {}: {source}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch `{command}`: {reason}")]
    Launch { command: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TesterError>;
