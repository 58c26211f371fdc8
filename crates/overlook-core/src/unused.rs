//! Unused-override detection.

use crate::types::{OverrideDeclaration, OverrideUsage, UnusedOverride};
use std::collections::HashSet;

/// Declared overrides never found exercised in the resolved graph.
///
/// A declaration counts as used when any usage is attributed to its name:
/// directly, or through the declared name an alias usage carries. The
/// declared spec value is reported verbatim, since no resolved version
/// exists for an unexercised override. Declaration order is preserved.
pub fn find_unused(
    declared: &[OverrideDeclaration],
    found: &[OverrideUsage],
) -> Vec<UnusedOverride> {
    let used: HashSet<&str> = found
        .iter()
        .map(|usage| usage.aliased_from.as_deref().unwrap_or(&usage.name))
        .collect();

    declared
        .iter()
        .filter(|declaration| !used.contains(declaration.name.as_str()))
        .map(|declaration| UnusedOverride {
            name: declaration.name.clone(),
            spec: declaration.spec.clone(),
        })
        .collect()
}
