//! Error types for the simulator.
//!
//! Only conditions that stop a run are errors. TLB misses, page-table misses
//! and page faults are ordinary events and are counted instead.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

use super::constants::BACKING_STORE_SIZE;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    /// A file or stream could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing store image has the wrong size.
    #[error(
        "backing store {} is {len} bytes, expected exactly {}",
        .path.display(),
        BACKING_STORE_SIZE
    )]
    BackingStoreSize { path: PathBuf, len: usize },

    /// A reference-file line is not an address in 0..=65535.
    #[error("line {line}: invalid logical address {text:?}")]
    InvalidAddress { line: usize, text: String },

    /// Frame count outside 1..=256.
    #[error("frame count {0} out of range, expected 1..=256")]
    InvalidFrameCount(usize),

    /// TLB must hold at least one entry.
    #[error("TLB size {0} out of range, expected at least 1")]
    InvalidTlbSize(usize),

    /// Replacement algorithm name not recognised.
    #[error("unknown page replacement algorithm {0:?}, expected FIFO, LRU or OPT")]
    UnknownPolicy(String),

    /// Config file is not valid JSON for [`crate::config::SimConfig`].
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SimError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } => ExitCode::from(3),
            Self::BackingStoreSize { .. } => ExitCode::from(4),
            Self::InvalidAddress { .. } => ExitCode::from(5),
            Self::InvalidFrameCount(_) | Self::InvalidTlbSize(_) | Self::UnknownPolicy(_) => {
                ExitCode::from(2)
            }
            Self::ConfigParse(_) => ExitCode::from(6),
        }
    }
}
