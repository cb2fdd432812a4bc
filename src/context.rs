//! Host build context abstraction.
//!
//! The engine never resolves dependencies itself. A [`BuildContext`]
//! exposes the host's named resolution scopes and the artefacts each one
//! resolves to.

use crate::artifact::ArtifactId;
use camino::Utf8PathBuf;
use thiserror::Error;

/// An artefact produced by resolving a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Identity of the artefact.
    pub id: ArtifactId,
    /// Archive file backing the artefact. It may be absent on disk.
    pub file: Utf8PathBuf,
}

/// Errors raised while resolving a single scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The scope does not exist or cannot be resolved.
    #[error("scope {scope} is not resolvable")]
    NotResolvable {
        /// Name of the scope.
        scope: String,
    },

    /// A declared dependency could not be found in any repository.
    #[error("could not find {coordinate} in any repository")]
    NotFound {
        /// Coordinate of the missing dependency.
        coordinate: String,
    },

    /// A declared dependency is not a valid coordinate.
    #[error("invalid dependency coordinate \"{value}\": {reason}")]
    InvalidCoordinate {
        /// The rejected coordinate.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },
}

/// Access to the host's dependency resolution scopes.
#[cfg_attr(test, mockall::automock)]
pub trait BuildContext {
    /// Names of every scope the host knows about, in declaration order.
    fn scope_names(&self) -> Vec<String>;

    /// Whether `scope` exists and can be resolved.
    fn is_resolvable(&self, scope: &str) -> bool;

    /// Resolve `scope` to its artefacts.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] when any part of the scope cannot be
    /// resolved.
    fn resolve(&self, scope: &str) -> Result<Vec<ResolvedArtifact>, ResolutionError>;
}
