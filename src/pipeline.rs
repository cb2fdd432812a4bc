//! Extraction run orchestration.
//!
//! A run prepares the output directory, selects the SkillsJars from the
//! host context, and then processes them strictly one at a time: a
//! discovery pass followed by a conflict-checked extraction pass, each with
//! its own archive handle. A single [`ConflictTable`] is threaded through
//! the whole run.

use crate::artifact::ArtifactRef;
use crate::conflict::ConflictTable;
use crate::context::BuildContext;
use crate::discovery::discover_roots;
use crate::error::{ExtractError, Result};
use crate::extractor::extract_archive;
use crate::namespace::SKILLSJARS_GROUP;
use crate::output_dir::prepare_output_dir;
use crate::selector::select_skill_archives;
use camino::{Utf8Path, Utf8PathBuf};
use log::{info, warn};

/// Validated parameters for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    output_dir: Utf8PathBuf,
    scopes: Vec<String>,
    group: String,
}

impl ExtractRequest {
    /// Validate the run parameters.
    ///
    /// `scopes` may be empty, meaning every resolvable scope.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingParameter`] naming `dir` when the
    /// output directory is absent or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillsjars::pipeline::ExtractRequest;
    ///
    /// assert!(ExtractRequest::new(Some("build/skills"), Vec::new()).is_ok());
    /// assert!(ExtractRequest::new(Some("  "), Vec::new()).is_err());
    /// assert!(ExtractRequest::new(None, Vec::new()).is_err());
    /// ```
    pub fn new(output_dir: Option<&str>, scopes: Vec<String>) -> Result<Self> {
        let dir = output_dir
            .filter(|dir| !dir.trim().is_empty())
            .ok_or(ExtractError::MissingParameter { name: "dir" })?;

        Ok(Self {
            output_dir: Utf8PathBuf::from(dir),
            scopes,
            group: SKILLSJARS_GROUP.to_owned(),
        })
    }

    /// Output directory for extracted skills.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// Requested scope names; empty means every resolvable scope.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Group namespace artefacts must belong to.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }
}

/// Totals for a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// SkillsJars selected from the host context.
    pub archives: usize,
    /// Skill roots discovered across all archives.
    pub skills: usize,
    /// Files written to the output directory.
    pub files: usize,
}

/// Run a complete extraction.
///
/// # Errors
///
/// Returns [`ExtractError::PathConflict`] when two entries map to the same
/// output location; output written before the conflict is kept. Archive
/// and I/O failures are also returned. Scope resolution failures, missing
/// artefact files, and stray entries are only logged.
pub fn run_extraction(
    context: &dyn BuildContext,
    request: &ExtractRequest,
) -> Result<ExtractionSummary> {
    let output_dir = request.output_dir();
    info!("Extracting SkillsJars to: {output_dir}");

    prepare_output_dir(output_dir)?;

    let artifacts = select_skill_archives(context, request.scopes(), request.group());
    info!("Found {} SkillsJar(s)", artifacts.len());

    let mut conflicts = ConflictTable::new();
    let mut summary = ExtractionSummary {
        archives: artifacts.len(),
        ..ExtractionSummary::default()
    };

    for artifact in &artifacts {
        let (skills, files) = process_artifact(artifact, output_dir, &mut conflicts)?;
        summary.skills += skills;
        summary.files += files;
    }

    info!("Successfully extracted SkillsJars");
    Ok(summary)
}

/// Discover and extract one artefact, returning `(skills, files)`.
fn process_artifact(
    artifact: &ArtifactRef,
    output_dir: &Utf8Path,
    conflicts: &mut ConflictTable,
) -> Result<(usize, usize)> {
    if !artifact.file().exists() {
        warn!("Artifact file not found: {}", artifact.id());
        return Ok((0, 0));
    }

    info!("Extracting: {}", artifact.id());

    let roots = discover_roots(artifact.file())?;
    // The second pass also runs for archives without roots so that their
    // namespace entries are reported.
    let files = extract_archive(artifact, &roots, output_dir, conflicts)?;
    Ok((roots.len(), files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MockBuildContext, ResolvedArtifact};
    use rstest::rstest;

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    fn missing_output_dir_is_rejected(#[case] dir: Option<&str>) {
        let err = ExtractRequest::new(dir, Vec::new()).expect_err("dir is required");
        assert!(err.to_string().contains("dir"));
    }

    #[test]
    fn request_defaults_to_the_skillsjars_group() {
        let request =
            ExtractRequest::new(Some("out"), vec!["runtimeClasspath".to_owned()]).expect("valid");
        assert_eq!(request.group(), "com.skillsjars");
        assert_eq!(request.scopes(), vec!["runtimeClasspath".to_owned()].as_slice());
        assert_eq!(request.output_dir(), Utf8Path::new("out"));
    }

    #[test]
    fn missing_artifact_files_contribute_nothing() {
        let temp = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("utf-8 path");
        let missing = root.join("absent-1.0.0.jar");

        let mut context = MockBuildContext::new();
        context
            .expect_scope_names()
            .return_const(vec!["runtimeClasspath".to_owned()]);
        context.expect_is_resolvable().return_const(true);
        context.expect_resolve().returning(move |_| {
            Ok(vec![ResolvedArtifact {
                id: "com.skillsjars:absent:1.0.0".parse().expect("coordinate"),
                file: missing.clone(),
            }])
        });

        let request = ExtractRequest::new(Some(root.join("out").as_str()), Vec::new())
            .expect("valid request");
        let summary = run_extraction(&context, &request).expect("run succeeds");

        assert_eq!(
            summary,
            ExtractionSummary {
                archives: 1,
                skills: 0,
                files: 0,
            }
        );
        assert!(root.join("out").is_dir());
    }
}
