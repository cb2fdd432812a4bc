//! Error types for SkillsJars extraction.
//!
//! Only two kinds of failure end a run on purpose: a missing output
//! directory parameter and a path conflict between artefacts. The remaining
//! variants cover I/O and archive failures that cannot be absorbed without
//! silently dropping output.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can terminate an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A required invocation parameter is absent or blank.
    #[error("the '{name}' parameter is required; use --{name} <path>")]
    MissingParameter {
        /// Name of the missing parameter.
        name: &'static str,
    },

    /// Two extracted entries map to the same output location.
    #[error("path conflict detected: {key} exists in both {existing} and {current}")]
    PathConflict {
        /// Conflict key (`skillsjars__<flattened-root>/<remainder>`).
        key: String,
        /// Artefact that wrote the key first.
        existing: String,
        /// Artefact that attempted the second write.
        current: String,
    },

    /// An artefact coordinate is not of the form `group:name:version`.
    #[error("invalid artifact coordinate \"{value}\": {reason}")]
    InvalidCoordinate {
        /// The rejected coordinate.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// The project manifest could not be read or parsed.
    #[error("invalid manifest at {path}: {reason}")]
    Manifest {
        /// Path to the manifest.
        path: Utf8PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// An archive could not be opened or read.
    #[error("failed to read archive {path}")]
    Archive {
        /// Path to the archive.
        path: Utf8PathBuf,
        /// The underlying archive error.
        #[source]
        source: zip::result::ZipError,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
