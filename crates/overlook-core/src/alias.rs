//! Alias override resolution.
//!
//! An override value of the form `npm:<actualName>@<range>` redirects the
//! declared name to a different published package. The dependency graph only
//! knows the actual package, so queries must go out under that name while the
//! final report still shows the declared one.

use crate::types::OverrideDeclaration;
use std::collections::HashMap;

/// Marker prefix identifying an alias override value
pub const ALIAS_MARKER: &str = "npm:";

/// Result of splitting declarations into query names and alias bindings
#[derive(Debug, Clone, Default)]
pub struct AliasResolution {
    /// Names to query the package manager for, in declaration order, deduped
    pub query_names: Vec<String>,
    /// declared name -> actual package name, alias declarations only
    pub aliases: HashMap<String, String>,
}

impl AliasResolution {
    /// Declared name for an actual package name, when an alias binds them
    pub fn declared_for(&self, actual: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(_, a)| a.as_str() == actual)
            .map(|(declared, _)| declared.as_str())
    }

    fn push_query(&mut self, name: &str) {
        if !self.query_names.iter().any(|n| n == name) {
            self.query_names.push(name.to_string());
        }
    }
}

/// Split declarations into the names to query and the alias bindings.
///
/// Non-alias declarations are queried under their declared name. Alias
/// declarations are queried under the actual package name, obtained by
/// stripping the marker and cutting at the last `@` that is not the leading
/// `@` of a scope; a last `@` at index zero or none at all means the value
/// carries no version suffix and the whole remainder is the name.
pub fn resolve_aliases(declarations: &[OverrideDeclaration]) -> AliasResolution {
    let mut resolution = AliasResolution::default();

    for declaration in declarations {
        match alias_target(&declaration.spec) {
            Some(actual) if actual != declaration.name => {
                resolution.push_query(&actual);
                resolution.aliases.insert(declaration.name.clone(), actual);
            }
            _ => resolution.push_query(&declaration.name),
        }
    }

    resolution
}

/// Actual package name an alias value redirects to, `None` for plain values
fn alias_target(spec: &str) -> Option<String> {
    let rest = spec.strip_prefix(ALIAS_MARKER)?;
    match rest.rfind('@') {
        Some(at) if at > 0 => Some(rest[..at].to_string()),
        // No version suffix: `npm:@scope/pkg` or `npm:pkg`
        _ => Some(rest.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(name: &str, spec: &str) -> OverrideDeclaration {
        OverrideDeclaration::new(name, spec)
    }

    #[test]
    fn test_plain_override_queried_as_declared() {
        let resolution = resolve_aliases(&[decl("send", "0.19.1")]);
        assert_eq!(resolution.query_names, vec!["send"]);
        assert!(resolution.aliases.is_empty());
    }

    #[test]
    fn test_alias_round_trip() {
        let resolution = resolve_aliases(&[decl("rollup", "npm:@rollup/wasm-node@^4.22.5")]);
        assert_eq!(resolution.query_names, vec!["@rollup/wasm-node"]);
        assert_eq!(
            resolution.aliases.get("rollup").map(String::as_str),
            Some("@rollup/wasm-node")
        );
        assert_eq!(resolution.declared_for("@rollup/wasm-node"), Some("rollup"));
    }

    #[test]
    fn test_scoped_alias_without_version_suffix() {
        let resolution = resolve_aliases(&[decl("rollup", "npm:@rollup/wasm-node")]);
        assert_eq!(resolution.query_names, vec!["@rollup/wasm-node"]);
        assert_eq!(
            resolution.aliases.get("rollup").map(String::as_str),
            Some("@rollup/wasm-node")
        );
    }

    #[test]
    fn test_unscoped_alias_without_version_suffix() {
        let resolution = resolve_aliases(&[decl("trim", "npm:trim-newlines")]);
        assert_eq!(resolution.query_names, vec!["trim-newlines"]);
        assert_eq!(
            resolution.aliases.get("trim").map(String::as_str),
            Some("trim-newlines")
        );
    }

    #[test]
    fn test_self_alias_is_not_recorded() {
        let resolution = resolve_aliases(&[decl("lodash", "npm:lodash@^4.17.21")]);
        assert_eq!(resolution.query_names, vec!["lodash"]);
        assert!(resolution.aliases.is_empty());
    }

    #[test]
    fn test_query_names_deduped_in_declaration_order() {
        let resolution = resolve_aliases(&[
            decl("send", "0.19.1"),
            decl("send-compat", "npm:send@0.19.1"),
            decl("trim", "0.0.3"),
        ]);
        assert_eq!(resolution.query_names, vec!["send", "trim"]);
        assert_eq!(resolution.declared_for("send"), Some("send-compat"));
    }
}
