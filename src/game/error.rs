//! Load-time error types.
//!
//! The per-frame simulation is infallible. Everything that can be wrong
//! with assets, maps or tuning is caught here, before the first frame.

use thiserror::Error;

use crate::game::entity::ActorKind;

/// Errors in tuning configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Value must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: String, value: f32 },

    /// Value must not be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: f32 },

    /// Health must start at one or more.
    #[error("{field} must be at least 1, got {value}")]
    NoHealth { field: String, value: i32 },

    /// Fraction outside [0, 1).
    #[error("{field} must be in [0, 1), got {value}")]
    OutOfRange { field: String, value: f32 },
}

/// Errors while building a world from assets and a map layout.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An actor has no animation for a status it can enter.
    #[error("{kind} has no animation '{key}'")]
    MissingAnimation { kind: ActorKind, key: String },

    /// An animation exists but has no frames.
    #[error("{kind} animation '{key}' has no frames")]
    EmptyAnimation { kind: ActorKind, key: String },

    /// Attack trigger frame can never be reached.
    #[error("{kind} trigger frame {frame} is past the end of '{key}' ({len} frames)")]
    TriggerOutOfRange {
        kind: ActorKind,
        key: String,
        frame: u32,
        len: usize,
    },

    /// Map must place exactly one player.
    #[error("Map must place exactly one player, found {0}")]
    PlayerCount(usize),

    /// Map file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Map JSON parsing failed.
    #[error("Map parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tuning rejected.
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
}
