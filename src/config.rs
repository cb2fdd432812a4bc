//! Project manifest loader.
//!
//! A `skills.toml` manifest plays the part of the host build script: it
//! declares the repositories to resolve from, the dependency scopes, and
//! optional defaults for the extraction task itself. Unknown keys are
//! rejected so that typos surface immediately instead of being ignored.

use crate::error::{ExtractError, Result};
use camino::Utf8Path;
use serde::Deserialize;

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "skills.toml";

/// Top-level manifest contents.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectManifest {
    /// Defaults for the extraction task.
    pub extract: ExtractSettings,
    /// Repository directories, searched in order.
    pub repositories: Vec<RepositoryConfig>,
    /// Dependency scopes, in declaration order.
    pub scopes: Vec<ScopeConfig>,
}

impl ProjectManifest {
    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Manifest`] if the file cannot be read or is
    /// not a valid manifest.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ExtractError::Manifest {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        Self::parse(path, &source)
    }

    /// Parse manifest `source`, attributing errors to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Manifest`] if the source is not a valid
    /// manifest.
    pub fn parse(path: &Utf8Path, source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ExtractError::Manifest {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }
}

/// Task-level settings, overridable from the command line.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractSettings {
    /// Output directory, relative to the manifest when not absolute.
    pub dir: Option<String>,
    /// Scopes to extract from; empty means every resolvable scope.
    pub scopes: Vec<String>,
}

/// A Maven-layout repository directory.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Repository root, relative to the manifest when not absolute.
    pub path: String,
}

/// A named dependency scope.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScopeConfig {
    /// Scope name.
    pub name: String,
    /// Whether the scope can be resolved directly.
    #[serde(default = "ScopeConfig::default_resolvable")]
    pub resolvable: bool,
    /// Scopes whose dependencies this scope inherits.
    #[serde(default)]
    pub extends: Vec<String>,
    /// Declared `group:name:version` coordinates.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ScopeConfig {
    const fn default_resolvable() -> bool {
        true
    }
}
