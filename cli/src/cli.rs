//! CLI argument definitions for the `skillsjars` binary.

use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use skillsjars::config::DEFAULT_MANIFEST;

/// Extract SkillsJar skill bundles into a flat output directory.
#[derive(Parser, Debug, Default)]
#[command(name = "skillsjars")]
#[command(version, about)]
#[command(long_about = concat!(
    "Extract SkillsJar skill bundles into a flat output directory.\n\n",
    "Dependencies are resolved from the scopes and repositories declared in ",
    "the project manifest. Every artefact in the com.skillsjars group is ",
    "scanned for SKILL.md markers, and each skill directory is copied to ",
    "skillsjars__<flattened path> under the output directory. The output ",
    "directory is emptied first. Two artefacts writing the same file is an ",
    "error.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Extract every resolvable scope into build/skills:\n",
    "    $ skillsjars --dir build/skills\n\n",
    "  Restrict extraction to the runtime classpath:\n",
    "    $ skillsjars -d build/skills -s runtimeClasspath\n\n",
    "  Use a manifest elsewhere:\n",
    "    $ skillsjars -m project/skills.toml",
))]
pub struct Cli {
    /// Project manifest declaring repositories and scopes.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    pub manifest: Utf8PathBuf,

    /// Output directory, overriding the manifest's `[extract] dir`.
    #[arg(short, long, value_name = "DIR", env = "SKILLSJARS_DIR")]
    pub dir: Option<Utf8PathBuf>,

    /// Scope to extract from (repeatable). Replaces the manifest's list.
    #[arg(short, long = "scope", value_name = "NAME")]
    pub scopes: Vec<String>,

    /// Increase logging detail (-v debug, -vv trace).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Only report warnings and errors.
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by `--verbose` and `--quiet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use skillsjars_cli::cli::Cli;
    /// use tracing_subscriber::filter::LevelFilter;
    ///
    /// let cli = Cli::parse_from(["skillsjars", "-vv"]);
    /// assert_eq!(cli.log_level(), LevelFilter::TRACE);
    /// ```
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::WARN;
        }
        match self.verbosity {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
