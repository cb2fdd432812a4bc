//! Artefact identities and resolved artefact references.
//!
//! An artefact is identified by its `group:name:version` coordinate. The
//! selector pairs each identity with the archive file the host context
//! resolved for it.

use crate::error::{ExtractError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use std::str::FromStr;

/// A `group:name:version` artefact identity.
///
/// # Examples
///
/// ```
/// use skillsjars::artifact::ArtifactId;
///
/// let id: ArtifactId = "com.skillsjars:test-skill:1.0.0".parse()?;
/// assert_eq!(id.group(), "com.skillsjars");
/// assert_eq!(id.to_string(), "com.skillsjars:test-skill:1.0.0");
/// # Ok::<(), skillsjars::error::ExtractError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactId {
    group: String,
    name: String,
    version: String,
}

impl ArtifactId {
    /// Create an identity from its components.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// The group (organisation namespace) component.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The artefact name component.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version component.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl FromStr for ArtifactId {
    type Err = ExtractError;

    fn from_str(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split(':').collect();
        let [group, name, version] = parts.as_slice() else {
            return Err(ExtractError::InvalidCoordinate {
                value: value.to_owned(),
                reason: format!("expected 3 components, found {}", parts.len()),
            });
        };

        if [group, name, version].iter().any(|part| part.trim().is_empty()) {
            return Err(ExtractError::InvalidCoordinate {
                value: value.to_owned(),
                reason: "components must not be blank".to_owned(),
            });
        }

        Ok(Self::new(*group, *name, *version))
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// An artefact identity paired with its resolved archive file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    id: ArtifactId,
    file: Utf8PathBuf,
}

impl ArtifactRef {
    /// Pair an identity with the archive the host resolved for it.
    #[must_use]
    pub fn new(id: ArtifactId, file: Utf8PathBuf) -> Self {
        Self { id, file }
    }

    /// The artefact identity.
    #[must_use]
    pub fn id(&self) -> &ArtifactId {
        &self.id
    }

    /// Path to the resolved archive. The file may not exist.
    #[must_use]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }
}
