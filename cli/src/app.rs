//! Settings merge and run orchestration for the binary.
//!
//! Command line values win over the manifest's `[extract]` table. Paths on
//! the command line are relative to the working directory; paths in the
//! manifest are relative to the manifest's own directory.

use crate::cli::Cli;
use camino::{Utf8Path, Utf8PathBuf};
use skillsjars::{
    ExtractRequest, ExtractionSummary, ManifestContext, ProjectManifest, Result, run_extraction,
};

/// Load the manifest named by `cli`, run the extraction, and return its
/// totals.
///
/// # Errors
///
/// Returns manifest, parameter, conflict, archive, and I/O errors from the
/// engine unchanged.
pub fn run(cli: &Cli, cwd: &Utf8Path) -> Result<ExtractionSummary> {
    let manifest_path = cwd.join(&cli.manifest);
    let manifest = ProjectManifest::load(&manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or(cwd);

    let request = build_request(cli, &manifest, cwd, base_dir)?;
    let context = ManifestContext::new(&manifest, base_dir);
    run_extraction(&context, &request)
}

/// Merge command line overrides with manifest defaults.
///
/// # Errors
///
/// Returns [`skillsjars::ExtractError::MissingParameter`] when neither
/// source names an output directory.
pub fn build_request(
    cli: &Cli,
    manifest: &ProjectManifest,
    cwd: &Utf8Path,
    base_dir: &Utf8Path,
) -> Result<ExtractRequest> {
    let output_dir: Option<Utf8PathBuf> = cli
        .dir
        .as_ref()
        .filter(|dir| !dir.as_str().trim().is_empty())
        .map(|dir| cwd.join(dir))
        .or_else(|| {
            manifest
                .extract
                .dir
                .as_deref()
                .filter(|dir| !dir.trim().is_empty())
                .map(|dir| base_dir.join(dir))
        });

    let scopes = if cli.scopes.is_empty() {
        manifest.extract.scopes.clone()
    } else {
        cli.scopes.clone()
    };

    ExtractRequest::new(output_dir.as_ref().map(Utf8PathBuf::as_path).map(Utf8Path::as_str), scopes)
}

/// One-line report of a successful run.
#[must_use]
pub fn summary_line(summary: &ExtractionSummary) -> String {
    format!(
        "Extracted {} file(s) from {} skill(s) in {} SkillsJar(s)",
        summary.files, summary.skills, summary.archives
    )
}
