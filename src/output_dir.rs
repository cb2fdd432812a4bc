//! Output directory lifecycle.
//!
//! Every run starts from an empty output directory. Stale content is
//! removed deepest-first; entries that cannot be removed are reported and
//! left behind rather than aborting the run.

use crate::error::Result;
use camino::Utf8Path;
use log::warn;
use std::fs;
use walkdir::WalkDir;

/// Remove everything under `path` (including `path` itself) and recreate it
/// as an empty directory, creating missing parents.
///
/// # Errors
///
/// Returns an error only if the directory cannot be recreated. Failures to
/// delete individual entries are logged as warnings.
pub fn prepare_output_dir(path: &Utf8Path) -> Result<()> {
    if path.exists() {
        clean(path);
    }

    fs::create_dir_all(path)?;
    Ok(())
}

fn clean(path: &Utf8Path) {
    for entry in WalkDir::new(path).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to inspect {path} during cleanup: {e}");
                continue;
            }
        };

        let removal = if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())
        } else {
            fs::remove_file(entry.path())
        };

        if let Err(e) = removal {
            warn!("Failed to delete: {} ({e})", entry.path().display());
        }
    }
}
