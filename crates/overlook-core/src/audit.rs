//! Audit orchestration.
//!
//! Ties the pipeline together: alias resolution, one batched explain query,
//! chain extraction per overridden package, and unused detection. Collaborator
//! failures never escape [`audit`]; they degrade to an empty result with a
//! diagnostic, so the caller always gets a report to present.

use crate::alias::resolve_aliases;
use crate::chains::extract_chains;
use crate::error::Result;
use crate::types::{ExplainEntry, OverrideDeclaration, OverrideUsage, UnusedOverride};
use crate::unused::find_unused;
use serde::Serialize;

/// Seam to the package manager's dependency-explain facility.
///
/// One batched call per audit run: `names` holds every alias-resolved query
/// name. Implementations return one entry per resolved instance of a queried
/// package and simply omit names not present in the graph; only a total
/// invocation failure is an error.
pub trait Explainer {
    /// Explain why each of `names` is installed.
    ///
    /// # Errors
    /// Returns an error when the invocation could not produce usable output
    /// at all (tool missing, directory invalid, unparseable response).
    fn explain(&self, names: &[String]) -> Result<Vec<ExplainEntry>>;
}

/// Everything one audit run found
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    /// Overrides actually exercised in the resolved graph, in declaration
    /// order of their attributed name
    pub usages: Vec<OverrideUsage>,
    /// Declared overrides never found exercised, in declaration order
    pub unused: Vec<UnusedOverride>,
    /// Messages from degraded collaborator failures
    pub diagnostics: Vec<String>,
}

/// Audit the declared overrides against the resolved dependency graph.
///
/// With no declarations the explainer is never invoked. An explainer failure
/// is recorded as a diagnostic and treated as "no usages found", which also
/// reports every declaration as unused.
pub fn audit(declarations: &[OverrideDeclaration], explainer: &impl Explainer) -> AuditReport {
    if declarations.is_empty() {
        return AuditReport::default();
    }

    let resolution = resolve_aliases(declarations);

    let mut diagnostics = Vec::new();
    let entries = match explainer.explain(&resolution.query_names) {
        Ok(entries) => entries,
        Err(err) => {
            diagnostics.push(err.to_string());
            Vec::new()
        }
    };

    let mut usages: Vec<OverrideUsage> = entries
        .iter()
        .filter(|entry| entry.is_overridden())
        .map(|entry| OverrideUsage {
            name: entry.name.clone(),
            version: entry.version.clone(),
            chains: extract_chains(entry),
            aliased_from: resolution.declared_for(&entry.name).map(String::from),
        })
        .collect();

    // Deterministic output: declaration order, not response order
    let declared_index = |name: &str| {
        declarations
            .iter()
            .position(|d| d.name == name)
            .unwrap_or(usize::MAX)
    };
    usages.sort_by_key(|usage| {
        declared_index(usage.aliased_from.as_deref().unwrap_or(&usage.name))
    });

    let unused = find_unused(declarations, &usages);

    AuditReport {
        usages,
        unused,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct StaticExplainer(Vec<ExplainEntry>);

    impl Explainer for StaticExplainer {
        fn explain(&self, names: &[String]) -> Result<Vec<ExplainEntry>> {
            Ok(self
                .0
                .iter()
                .filter(|entry| names.iter().any(|n| n == &entry.name))
                .cloned()
                .collect())
        }
    }

    struct FailingExplainer;

    impl Explainer for FailingExplainer {
        fn explain(&self, _names: &[String]) -> Result<Vec<ExplainEntry>> {
            Err(Error::Query("npm not available".to_string()))
        }
    }

    fn entry(json: &str) -> ExplainEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_no_declarations_short_circuits() {
        let report = audit(&[], &FailingExplainer);
        assert!(report.usages.is_empty());
        assert!(report.unused.is_empty());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_failed_query_degrades_to_empty_with_diagnostic() {
        let declared = vec![OverrideDeclaration::new("send", "0.19.1")];
        let report = audit(&declared, &FailingExplainer);

        assert!(report.usages.is_empty());
        assert_eq!(report.unused.len(), 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].contains("npm not available"));
    }

    #[test]
    fn test_non_overridden_entries_are_ignored() {
        let declared = vec![OverrideDeclaration::new("send", "0.19.1")];
        let explainer = StaticExplainer(vec![entry(
            r#"{"name": "send", "version": "0.19.1", "overridden": false}"#,
        )]);
        let report = audit(&declared, &explainer);

        assert!(report.usages.is_empty());
        assert_eq!(report.unused.len(), 1);
        assert_eq!(report.unused[0].name, "send");
    }

    #[test]
    fn test_usages_follow_declaration_order() {
        let declared = vec![
            OverrideDeclaration::new("zzz", "1.0.0"),
            OverrideDeclaration::new("aaa", "2.0.0"),
        ];
        let explainer = StaticExplainer(vec![
            entry(r#"{"name": "aaa", "version": "2.0.0", "overridden": true}"#),
            entry(r#"{"name": "zzz", "version": "1.0.0", "overridden": true}"#),
        ]);
        let report = audit(&declared, &explainer);

        let names: Vec<&str> = report.usages.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["zzz", "aaa"]);
    }

    #[test]
    fn test_alias_usage_is_attributed_to_declared_name() {
        let declared = vec![OverrideDeclaration::new(
            "rollup",
            "npm:@rollup/wasm-node@^4.22.5",
        )];
        let explainer = StaticExplainer(vec![entry(
            r#"{"name": "@rollup/wasm-node", "version": "4.22.5", "overridden": true}"#,
        )]);
        let report = audit(&declared, &explainer);

        assert_eq!(report.usages.len(), 1);
        assert_eq!(report.usages[0].name, "@rollup/wasm-node");
        assert_eq!(report.usages[0].aliased_from.as_deref(), Some("rollup"));
        assert!(report.unused.is_empty());
    }

    #[test]
    fn test_multiple_resolved_versions_become_separate_usages() {
        let declared = vec![OverrideDeclaration::new("b", "^2")];
        let explainer = StaticExplainer(vec![
            entry(r#"{"name": "b", "version": "2.0.0", "overridden": true}"#),
            entry(r#"{"name": "b", "version": "2.1.0", "overridden": true}"#),
        ]);
        let report = audit(&declared, &explainer);
        assert_eq!(report.usages.len(), 2);
    }
}
