//! Command line front end for the SkillsJars extraction engine.
//!
//! The binary plays the part of the host build tool's task: it loads the
//! project manifest, merges command line overrides, and hands the validated
//! request to [`skillsjars::run_extraction`]. The engine's `log` records are
//! rendered by a `tracing-subscriber` formatter on stderr.

pub mod app;
pub mod cli;
