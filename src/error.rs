// ============================================================
// Error Types
// ============================================================
// Every failure the data pipeline can raise. None of these are
// recovered internally: a missing array or an unknown speaker
// means the preprocessed directory is inconsistent, so the error
// travels straight back to whoever asked for the sample.
//
// The binary wraps these in anyhow with extra context.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// Reading a text file (manifest, config, speaker map) failed
    #[error("cannot read '{path}': {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A YAML config did not match the expected structure
    #[error("invalid config '{path}': {source}")]
    Config {
        path:   PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A config parsed but holds an unusable value
    #[error("invalid config value: {0}")]
    InvalidConfig(String),

    /// A manifest line did not split into exactly three fields
    #[error("{path}:{line}: expected 3 '|'-separated fields, found {found}")]
    Manifest {
        path:  PathBuf,
        line:  usize,
        found: usize,
    },

    /// An expected per-example array file does not exist
    #[error("missing array file '{0}'")]
    MissingFile(PathBuf),

    /// An array file exists but could not be decoded
    #[error("cannot decode '{path}': {source}")]
    Npy {
        path:   PathBuf,
        #[source]
        source: ndarray_npy::ReadNpyError,
    },

    /// speakers.json is not a `{name: int}` object
    #[error("invalid speaker map '{path}': {source}")]
    SpeakerMap {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Closed-set lookup miss
    #[error("speaker '{0}' is not in the speaker map")]
    UnknownSpeaker(String),

    #[error("unknown text cleaner '{0}'")]
    UnknownCleaner(String),

    /// Arrays that must agree on a dimension do not
    #[error("shape mismatch: {0}")]
    Shape(String),

    #[error("index {index} out of range for dataset of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
