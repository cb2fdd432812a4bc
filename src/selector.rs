//! SkillsJar selection from resolved dependency scopes.

use crate::artifact::{ArtifactId, ArtifactRef};
use crate::context::BuildContext;
use log::{debug, warn};
use std::collections::HashSet;

/// Collect the artefacts of `group` from the requested scopes.
///
/// With no scope names every resolvable scope is considered; otherwise only
/// named scopes that exist and are resolvable, in the order given. A scope
/// that fails to resolve is logged and skipped. Duplicate identities keep
/// their first occurrence, so the result order is stable for a given
/// context.
#[must_use]
pub fn select_skill_archives(
    context: &dyn BuildContext,
    scopes: &[String],
    group: &str,
) -> Vec<ArtifactRef> {
    let mut seen: HashSet<ArtifactId> = HashSet::new();
    let mut selected = Vec::new();

    for scope in candidate_scopes(context, scopes) {
        let artifacts = match context.resolve(&scope) {
            Ok(artifacts) => artifacts,
            Err(e) => {
                warn!("Could not resolve scope {scope}: {e}");
                continue;
            }
        };

        for artifact in artifacts {
            if artifact.id.group() != group {
                continue;
            }
            if seen.insert(artifact.id.clone()) {
                selected.push(ArtifactRef::new(artifact.id, artifact.file));
            }
        }
    }

    selected
}

fn candidate_scopes(context: &dyn BuildContext, requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        return context
            .scope_names()
            .into_iter()
            .filter(|name| context.is_resolvable(name))
            .collect();
    }

    requested
        .iter()
        .filter(|name| {
            let usable = context.is_resolvable(name);
            if !usable {
                debug!("Ignoring unknown or unresolvable scope {name}");
            }
            usable
        })
        .cloned()
        .collect()
}
