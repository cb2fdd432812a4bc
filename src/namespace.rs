//! Recognised archive namespaces and entry-path helpers.
//!
//! Skills live below one of a fixed, ordered set of namespace prefixes
//! inside an archive. Prefixes are tried in order and the first match wins.

/// Group whose artefacts are treated as SkillsJars.
pub const SKILLSJARS_GROUP: &str = "com.skillsjars";

/// Accepted namespace prefixes, in priority order.
pub const NAMESPACE_PREFIXES: &[&str] = &["META-INF/resources/skills/", "skills/"];

/// File name marking the root directory of a skill.
pub const SKILL_MARKER: &str = "SKILL.md";

/// Prefix of every top-level output directory.
pub const OUTPUT_DIR_PREFIX: &str = "skillsjars__";

/// Separator substituted for `/` when flattening a skill root.
const FLATTEN_SEPARATOR: &str = "__";

/// Strip the first matching namespace prefix from an archive entry name.
///
/// Returns `None` for entries outside every recognised namespace.
///
/// # Examples
///
/// ```
/// use skillsjars::namespace::strip_namespace;
///
/// assert_eq!(
///     strip_namespace("META-INF/resources/skills/org/skill/SKILL.md"),
///     Some("org/skill/SKILL.md")
/// );
/// assert_eq!(strip_namespace("com/example/Main.class"), None);
/// ```
#[must_use]
pub fn strip_namespace(entry_name: &str) -> Option<&str> {
    NAMESPACE_PREFIXES
        .iter()
        .find_map(|prefix| entry_name.strip_prefix(prefix))
}

/// Flatten a skill root (without its trailing separator) into a single
/// directory name component.
///
/// # Examples
///
/// ```
/// use skillsjars::namespace::flatten_root;
///
/// assert_eq!(flatten_root("org/repo/skill"), "org__repo__skill");
/// ```
#[must_use]
pub fn flatten_root(root: &str) -> String {
    root.replace('/', FLATTEN_SEPARATOR)
}

/// Return `true` when a namespace-relative path is safe to join onto the
/// output directory.
///
/// Absolute paths, `..` and `.` components, empty components, and
/// backslashes are rejected so that no entry can escape its skill directory.
#[must_use]
pub fn is_safe_relative_path(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') || path.contains('\\') {
        return false;
    }

    path.trim_end_matches('/')
        .split('/')
        .all(|component| !matches!(component, "" | "." | ".."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::resources("META-INF/resources/skills/a/SKILL.md", Some("a/SKILL.md"))]
    #[case::bare("skills/a/b/SKILL.md", Some("a/b/SKILL.md"))]
    #[case::outside("META-INF/MANIFEST.MF", None)]
    #[case::sibling_namespace("skillset/a/SKILL.md", None)]
    fn strips_recognised_prefixes(#[case] entry: &str, #[case] expected: Option<&str>) {
        assert_eq!(strip_namespace(entry), expected);
    }

    #[test]
    fn prefixes_are_tried_in_priority_order() {
        assert_eq!(NAMESPACE_PREFIXES.first(), Some(&"META-INF/resources/skills/"));
    }

    #[rstest]
    #[case::single("skill", "skill")]
    #[case::nested("a/b", "a__b")]
    #[case::deep("org/repo/skill", "org__repo__skill")]
    fn flattens_separators(#[case] root: &str, #[case] expected: &str) {
        assert_eq!(flatten_root(root), expected);
    }

    #[rstest]
    #[case::plain("a/b/file.txt", true)]
    #[case::directory("a/b/", true)]
    #[case::parent("a/../../etc/passwd", false)]
    #[case::current("a/./b", false)]
    #[case::absolute("/etc/passwd", false)]
    #[case::double_slash("a//b", false)]
    #[case::backslash("a\\..\\b", false)]
    #[case::empty("", false)]
    fn classifies_relative_paths(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_safe_relative_path(path), expected);
    }
}
