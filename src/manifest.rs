//! Manifest-backed [`BuildContext`] resolving from Maven-layout
//! repositories.
//!
//! A coordinate `g:n:v` resolves to the first repository containing
//! `<g with '.' replaced by '/'>/<n>/<v>/`. The artefact file is
//! `<n>-<v>.jar` inside that directory and may be missing (for example a
//! POM-only module); the extraction run reports such artefacts.

use crate::artifact::ArtifactId;
use crate::config::{ProjectManifest, ScopeConfig};
use crate::context::{BuildContext, ResolutionError, ResolvedArtifact};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;

/// Dependency scopes and repositories declared in a project manifest.
#[derive(Debug, Clone)]
pub struct ManifestContext {
    scopes: Vec<ScopeConfig>,
    repositories: Vec<Utf8PathBuf>,
}

impl ManifestContext {
    /// Build a context from `manifest`, resolving relative repository
    /// paths against `base_dir`.
    #[must_use]
    pub fn new(manifest: &ProjectManifest, base_dir: &Utf8Path) -> Self {
        let repositories = manifest
            .repositories
            .iter()
            .map(|repo| base_dir.join(&repo.path))
            .collect();

        Self {
            scopes: manifest.scopes.clone(),
            repositories,
        }
    }

    /// Repository roots in search order.
    #[must_use]
    pub fn repositories(&self) -> &[Utf8PathBuf] {
        &self.repositories
    }

    fn scope(&self, name: &str) -> Option<&ScopeConfig> {
        self.scopes.iter().find(|scope| scope.name == name)
    }

    /// Coordinates declared by `name` and, first, by every scope it
    /// extends. Each scope contributes once even when extension chains
    /// form a cycle.
    fn declared_coordinates(&self, name: &str) -> Vec<&str> {
        let mut visited = HashSet::new();
        let mut coordinates = Vec::new();
        self.collect_coordinates(name, &mut visited, &mut coordinates);
        coordinates
    }

    fn collect_coordinates<'a>(
        &'a self,
        name: &str,
        visited: &mut HashSet<String>,
        coordinates: &mut Vec<&'a str>,
    ) {
        if !visited.insert(name.to_owned()) {
            return;
        }
        let Some(scope) = self.scope(name) else {
            return;
        };

        for parent in &scope.extends {
            self.collect_coordinates(parent, visited, coordinates);
        }
        coordinates.extend(scope.dependencies.iter().map(String::as_str));
    }

    /// Locate the archive for `id` in the first repository that has its
    /// version directory.
    fn locate(&self, id: &ArtifactId) -> Option<Utf8PathBuf> {
        let relative = module_directory(id);
        self.repositories
            .iter()
            .map(|repo| repo.join(&relative))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(format!("{}-{}.jar", id.name(), id.version())))
    }

    fn resolve_coordinate(&self, coordinate: &str) -> Result<ResolvedArtifact, ResolutionError> {
        let id = coordinate
            .parse::<ArtifactId>()
            .map_err(|e| ResolutionError::InvalidCoordinate {
                value: coordinate.to_owned(),
                reason: e.to_string(),
            })?;

        let file = self
            .locate(&id)
            .ok_or_else(|| ResolutionError::NotFound {
                coordinate: coordinate.to_owned(),
            })?;

        Ok(ResolvedArtifact { id, file })
    }
}

/// Repository-relative directory holding one version of a module.
fn module_directory(id: &ArtifactId) -> Utf8PathBuf {
    let mut dir: Utf8PathBuf = id.group().split('.').collect();
    dir.push(id.name());
    dir.push(id.version());
    dir
}

impl BuildContext for ManifestContext {
    fn scope_names(&self) -> Vec<String> {
        self.scopes.iter().map(|scope| scope.name.clone()).collect()
    }

    fn is_resolvable(&self, scope: &str) -> bool {
        self.scope(scope).is_some_and(|config| config.resolvable)
    }

    fn resolve(&self, scope: &str) -> Result<Vec<ResolvedArtifact>, ResolutionError> {
        if !self.is_resolvable(scope) {
            return Err(ResolutionError::NotResolvable {
                scope: scope.to_owned(),
            });
        }

        self.declared_coordinates(scope)
            .into_iter()
            .map(|coordinate| self.resolve_coordinate(coordinate))
            .collect()
    }
}
