//! Skill root discovery.
//!
//! The first pass over an archive finds every `SKILL.md` marker below a
//! recognised namespace and records its parent directory as a skill root.
//! Roots are keyed with a trailing `/` so that `foo/` never claims entries
//! under `foobar/`.

use crate::archive::{ArchiveEntry, SkillsJar};
use crate::error::Result;
use crate::namespace::{SKILL_MARKER, flatten_root, is_safe_relative_path, strip_namespace};
use camino::Utf8Path;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Skill roots discovered in one archive, mapped to their flattened names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillRoots {
    roots: BTreeMap<String, String>,
}

/// The skill root that owns a namespace-relative entry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMatch<'roots, 'path> {
    /// Flattened name of the owning root.
    pub flattened: &'roots str,
    /// Entry path relative to the root directory.
    pub remainder: &'path str,
}

impl SkillRoots {
    /// Build the root map from archive entries.
    ///
    /// Directory entries, entries outside every namespace, and markers whose
    /// root would be empty or unsafe contribute nothing.
    #[must_use]
    pub fn from_entries(entries: &[ArchiveEntry]) -> Self {
        let mut roots = Self::default();
        for entry in entries.iter().filter(|entry| !entry.is_dir) {
            if let Some(relative) = strip_namespace(&entry.name) {
                roots.record_marker(relative);
            }
        }
        roots
    }

    fn record_marker(&mut self, relative: &str) {
        let Some(root) = relative.strip_suffix(SKILL_MARKER) else {
            return;
        };

        if root.is_empty() {
            warn!("Ignoring {SKILL_MARKER} at the top of the skills namespace");
            return;
        }

        // `xSKILL.md` is not a marker; the marker must be a whole file name.
        let Some(trimmed) = root.strip_suffix('/') else {
            return;
        };

        if !is_safe_relative_path(root) {
            warn!("Ignoring skill root with unsafe path: {root}");
            return;
        }

        self.roots.insert(root.to_owned(), flatten_root(trimmed));
    }

    /// Number of discovered roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` when the archive contained no skill markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterate over `(root prefix, flattened name)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roots
            .iter()
            .map(|(root, flattened)| (root.as_str(), flattened.as_str()))
    }

    /// Find the root that owns `relative`, preferring the longest matching
    /// prefix when skill directories are nested.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillsjars::archive::ArchiveEntry;
    /// use skillsjars::discovery::SkillRoots;
    ///
    /// let entries = vec![
    ///     ArchiveEntry { index: 0, name: "skills/a/SKILL.md".into(), is_dir: false },
    ///     ArchiveEntry { index: 1, name: "skills/a/b/SKILL.md".into(), is_dir: false },
    /// ];
    /// let roots = SkillRoots::from_entries(&entries);
    ///
    /// let found = roots.resolve("a/b/notes.txt").map(|m| m.flattened);
    /// assert_eq!(found, Some("a__b"));
    /// ```
    #[must_use]
    pub fn resolve<'path>(&self, relative: &'path str) -> Option<RootMatch<'_, 'path>> {
        self.roots
            .iter()
            .filter_map(|(root, flattened)| {
                relative
                    .strip_prefix(root.as_str())
                    .map(|remainder| (root.len(), flattened.as_str(), remainder))
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, flattened, remainder)| RootMatch {
                flattened,
                remainder,
            })
    }
}

/// Open the archive at `path` and discover its skill roots.
///
/// An archive without markers yields an empty map rather than an error.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or its entries listed.
pub fn discover_roots(path: &Utf8Path) -> Result<SkillRoots> {
    let mut jar = SkillsJar::open(path)?;
    let roots = SkillRoots::from_entries(&jar.entries()?);
    debug!("Discovered {} skill root(s) in {}", roots.len(), jar.path());
    Ok(roots)
}
