//! SkillsJars extraction engine.
//!
//! SkillsJars are dependency archives that carry AI-agent skills below a
//! fixed namespace. This crate selects the SkillsJars a host build context
//! resolves, discovers the skills inside each archive by their `SKILL.md`
//! marker, and copies them into a flat, conflict-checked directory layout:
//!
//! ```text
//! <output>/skillsjars__<flattened-root>/<file path below the skill root>
//! ```
//!
//! # Modules
//!
//! - [`archive`] - Read-only archive access
//! - [`artifact`] - Artefact identities and resolved references
//! - [`config`] - Project manifest loading
//! - [`conflict`] - Output-path collision detection
//! - [`context`] - Host build context abstraction
//! - [`discovery`] - Skill root discovery
//! - [`error`] - Error types
//! - [`extractor`] - Conflict-checked extraction
//! - [`manifest`] - Manifest-backed build context
//! - [`namespace`] - Namespace prefixes and path helpers
//! - [`output_dir`] - Output directory lifecycle
//! - [`pipeline`] - Run orchestration
//! - [`selector`] - SkillsJar selection

pub mod archive;
pub mod artifact;
pub mod config;
pub mod conflict;
pub mod context;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod manifest;
pub mod namespace;
pub mod output_dir;
pub mod pipeline;
pub mod selector;

pub use config::ProjectManifest;
pub use error::{ExtractError, Result};
pub use manifest::ManifestContext;
pub use pipeline::{ExtractRequest, ExtractionSummary, run_extraction};
