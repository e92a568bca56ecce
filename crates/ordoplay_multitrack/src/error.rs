// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for the coordinator and its tracks.

/// Result alias used throughout the crate
pub type Result<T, E = SequencerError> = std::result::Result<T, E>;

/// Error raised by a coordinator or by one of its tracks
#[derive(Debug, thiserror::Error)]
pub enum SequencerError {
    /// Indexed track access outside `[0, len)`
    #[error("Track index {index} out of range (track count {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of tracks held
        len: usize,
    },

    /// Error reported by a track's own update
    #[error("Track error: {0}")]
    Track(String),

    /// A shared track handle was already borrowed during an update
    #[error("Shared track is already borrowed")]
    SharedTrackBusy,

    /// Configuration could not be loaded or saved
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error while loading or saving a [`SequencerConfig`](crate::config::SequencerConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The RON text could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The config could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),

    /// The file was written by a newer format version
    #[error("Config version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Newest version this build understands
        supported: u32,
    },
}
