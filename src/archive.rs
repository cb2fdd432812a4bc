//! Read-only access to SkillsJar archives.
//!
//! Each pass over an archive opens its own [`SkillsJar`]; the underlying
//! file handle is released when the value is dropped, on every exit path.

use crate::error::{ExtractError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{File, OpenOptions};
use std::io;
use zip::ZipArchive;

/// Name and kind of a single archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Position of the entry within the archive.
    pub index: usize,
    /// Full entry name, using `/` separators.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// An open, read-only SkillsJar archive.
pub struct SkillsJar {
    path: Utf8PathBuf,
    archive: ZipArchive<File>,
}

impl SkillsJar {
    /// Open the archive at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Io`] if the file cannot be opened and
    /// [`ExtractError::Archive`] if it is not a readable zip archive.
    pub fn open(path: &Utf8Path) -> Result<Self> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file).map_err(|source| ExtractError::Archive {
            path: path.to_owned(),
            source,
        })?;

        Ok(Self {
            path: path.to_owned(),
            archive,
        })
    }

    /// Path of the open archive.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// List every entry in archive order without decompressing anything.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Archive`] if an entry header cannot be read.
    pub fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        (0..self.archive.len())
            .map(|index| {
                let entry = self
                    .archive
                    .by_index_raw(index)
                    .map_err(|source| ExtractError::Archive {
                        path: self.path.clone(),
                        source,
                    })?;
                Ok(ArchiveEntry {
                    index,
                    name: entry.name().to_owned(),
                    is_dir: entry.is_dir(),
                })
            })
            .collect()
    }

    /// Copy the decompressed bytes of entry `index` into a new file at
    /// `dest`, creating missing parent directories.
    ///
    /// The destination must not already exist.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Archive`] if the entry cannot be read and
    /// [`ExtractError::Io`] if the destination cannot be written.
    pub fn copy_entry(&mut self, index: usize, dest: &Utf8Path) -> Result<u64> {
        let mut entry = self
            .archive
            .by_index(index)
            .map_err(|source| ExtractError::Archive {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut output = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dest)?;
        Ok(io::copy(&mut entry, &mut output)?)
    }
}
