//! Output-path collision detection across artefacts.

use crate::artifact::ArtifactId;
use crate::error::{ExtractError, Result};
use std::collections::HashMap;

/// Records which artefact first wrote each output location during a run.
///
/// The table only grows. It is owned by the extraction loop and lent to
/// each archive's extraction in turn.
#[derive(Debug, Default)]
pub struct ConflictTable {
    owners: HashMap<String, ArtifactId>,
}

impl ConflictTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` as written by `artifact`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PathConflict`] when the key is already owned,
    /// including when the earlier owner is `artifact` itself. The table is
    /// left unchanged in that case.
    pub fn claim(&mut self, key: &str, artifact: &ArtifactId) -> Result<()> {
        if let Some(existing) = self.owners.get(key) {
            return Err(ExtractError::PathConflict {
                key: key.to_owned(),
                existing: existing.to_string(),
                current: artifact.to_string(),
            });
        }

        self.owners.insert(key.to_owned(), artifact.clone());
        Ok(())
    }

    /// Artefact that owns `key`, if any.
    #[must_use]
    pub fn owner(&self, key: &str) -> Option<&ArtifactId> {
        self.owners.get(key)
    }

    /// Number of claimed keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns `true` when nothing has been claimed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
