//! Shared fixtures for the extraction suites.
//!
//! [`Project`] owns a scratch directory holding a Maven-layout repository
//! and knows how to publish fixture jars into it and describe the result as
//! a [`ManifestContext`]. Skill fixtures carry content derived from their
//! coordinate and root so that tests can tell which artefact wrote a file.

use camino::{Utf8Path, Utf8PathBuf};
use skillsjars::ManifestContext;
use skillsjars::config::{ProjectManifest, RepositoryConfig, ScopeConfig};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Scope every fixture dependency is declared in unless stated otherwise.
pub const DEFAULT_SCOPE: &str = "runtimeClasspath";

const REPOSITORY: &str = "repo";

/// A scratch project with a local repository and declared scopes.
pub struct Project {
    _temp: TempDir,
    root: Utf8PathBuf,
    scopes: BTreeMap<String, Vec<String>>,
}

impl Project {
    /// Create an empty project in a fresh temporary directory.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("utf-8 temp path");
        Self {
            _temp: temp,
            root,
            scopes: BTreeMap::new(),
        }
    }

    /// Project directory.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Publish a jar for `coordinate` and declare it in `scope`.
    pub fn publish(&mut self, scope: &str, coordinate: &str, entries: &[(String, Vec<u8>)]) {
        let dir = self.module_dir(coordinate);
        fs::create_dir_all(&dir).expect("module dir");
        write_jar(&dir.join(jar_name(coordinate)), entries);
        self.declare(scope, coordinate);
    }

    /// Create the module directory for `coordinate` without its jar.
    pub fn publish_without_jar(&mut self, scope: &str, coordinate: &str) {
        fs::create_dir_all(self.module_dir(coordinate)).expect("module dir");
        self.declare(scope, coordinate);
    }

    /// Declare `coordinate` in `scope` without publishing anything.
    pub fn declare(&mut self, scope: &str, coordinate: &str) {
        self.scopes
            .entry(scope.to_owned())
            .or_default()
            .push(coordinate.to_owned());
    }

    /// Manifest describing the declared scopes and the local repository.
    pub fn manifest(&self) -> ProjectManifest {
        ProjectManifest {
            repositories: vec![RepositoryConfig {
                path: REPOSITORY.to_owned(),
            }],
            scopes: self
                .scopes
                .iter()
                .map(|(name, dependencies)| ScopeConfig {
                    name: name.clone(),
                    resolvable: true,
                    extends: Vec::new(),
                    dependencies: dependencies.clone(),
                })
                .collect(),
            ..ProjectManifest::default()
        }
    }

    /// Resolution context rooted at the project directory.
    pub fn context(&self) -> ManifestContext {
        ManifestContext::new(&self.manifest(), &self.root)
    }

    fn module_dir(&self, coordinate: &str) -> Utf8PathBuf {
        let (group, name, version) = split(coordinate);
        self.root
            .join(REPOSITORY)
            .join(group.replace('.', "/"))
            .join(name)
            .join(version)
    }
}

/// Entries for a skill rooted at `root` under `skills/`: the marker, a
/// README, and a nested script.
pub fn skill_entries(coordinate: &str, root: &str) -> Vec<(String, Vec<u8>)> {
    ["SKILL.md", "README.md", "scripts/run.sh"]
        .iter()
        .map(|file| {
            (
                format!("skills/{root}/{file}"),
                skill_content(coordinate, root, file),
            )
        })
        .collect()
}

/// Content a fixture file carries.
pub fn skill_content(coordinate: &str, root: &str, file: &str) -> Vec<u8> {
    format!("{file} of {root} from {coordinate}\n").into_bytes()
}

/// Files below `dir`, relative and `/`-separated, sorted.
pub fn listing(dir: &Utf8Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .map(|entry| entry.expect("walk output"))
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let path = Utf8PathBuf::try_from(entry.into_path()).expect("utf-8 output path");
            path.strip_prefix(dir)
                .expect("path below output dir")
                .as_str()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

fn write_jar(path: &Utf8Path, entries: &[(String, Vec<u8>)]) {
    let file = File::create(path).expect("create jar");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(name.as_str(), options).expect("start entry");
        writer.write_all(content).expect("write entry");
    }
    writer.finish().expect("finish jar");
}

fn jar_name(coordinate: &str) -> String {
    let (_, name, version) = split(coordinate);
    format!("{name}-{version}.jar")
}

fn split(coordinate: &str) -> (&str, &str, &str) {
    let mut parts = coordinate.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(group), Some(name), Some(version)) => (group, name, version),
        _ => panic!("fixture coordinate must be group:name:version, got {coordinate}"),
    }
}
