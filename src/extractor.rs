//! Conflict-checked extraction of skill files.
//!
//! The second pass over an archive maps each file below a discovered skill
//! root to `<output>/skillsjars__<flattened-root>/<remainder>` and copies it
//! out. Every output location is claimed in the run's [`ConflictTable`]
//! before any byte is written, so a collision aborts without touching the
//! colliding file.

use crate::archive::SkillsJar;
use crate::artifact::ArtifactRef;
use crate::conflict::ConflictTable;
use crate::discovery::SkillRoots;
use crate::error::Result;
use crate::namespace::{OUTPUT_DIR_PREFIX, is_safe_relative_path, strip_namespace};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, trace, warn};

/// Conflict key for a file inside a flattened skill directory.
///
/// # Examples
///
/// ```
/// use skillsjars::extractor::conflict_key;
///
/// assert_eq!(conflict_key("a__b", "docs/x.md"), "skillsjars__a__b/docs/x.md");
/// ```
#[must_use]
pub fn conflict_key(flattened: &str, remainder: &str) -> String {
    format!("{OUTPUT_DIR_PREFIX}{flattened}/{remainder}")
}

/// Output path for a file inside a flattened skill directory.
#[must_use]
pub fn output_path(output_dir: &Utf8Path, flattened: &str, remainder: &str) -> Utf8PathBuf {
    output_dir
        .join(format!("{OUTPUT_DIR_PREFIX}{flattened}"))
        .join(remainder)
}

/// Extract every file of `artifact` that lies below one of `roots`.
///
/// Returns the number of files written.
///
/// # Errors
///
/// Returns [`crate::error::ExtractError::PathConflict`] as soon as an
/// entry maps to a key already present in `conflicts`; files written
/// earlier in the run are left in place. Archive and I/O failures are
/// returned as they occur.
pub fn extract_archive(
    artifact: &ArtifactRef,
    roots: &SkillRoots,
    output_dir: &Utf8Path,
    conflicts: &mut ConflictTable,
) -> Result<usize> {
    let mut jar = SkillsJar::open(artifact.file())?;
    let mut written = 0;

    for entry in jar.entries()? {
        if entry.is_dir {
            continue;
        }

        let Some(relative) = strip_namespace(&entry.name) else {
            trace!("Skipping entry outside the skills namespace: {}", entry.name);
            continue;
        };

        if !is_safe_relative_path(relative) {
            warn!("Skipping entry with unsafe path: {}", entry.name);
            continue;
        }

        let Some(found) = roots.resolve(relative) else {
            warn!("Skipping file not under a SKILL.md root: {relative}");
            continue;
        };

        let key = conflict_key(found.flattened, found.remainder);
        conflicts.claim(&key, artifact.id())?;

        let target = output_path(output_dir, found.flattened, found.remainder);
        jar.copy_entry(entry.index, &target)?;
        written += 1;

        debug!("Extracted: {key}");
    }

    Ok(written)
}
