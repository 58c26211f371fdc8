//! Core types for override auditing

use serde::{Deserialize, Serialize};

/// A single entry from the manifest's override map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideDeclaration {
    /// Name the override is declared under
    pub name: String,
    /// Declared value: a plain version range or an alias form
    /// (`npm:<actualName>@<range>`)
    pub spec: String,
}

impl OverrideDeclaration {
    /// Create a declaration from a manifest entry
    pub fn new(name: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
        }
    }
}

/// One step in a dependent chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSegment {
    /// `<packageName>@<resolvedVersion>` of the package at this step
    pub identity: String,
    /// Version range the parent requested before the override rewrote it.
    /// Absent for the root segment, which has no parent in the chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_spec: Option<String>,
}

impl PathSegment {
    /// Create a segment with no original specifier (the chain root)
    pub fn root(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            original_spec: None,
        }
    }

    /// Create a dependent segment
    pub fn new(identity: impl Into<String>, original_spec: Option<String>) -> Self {
        Self {
            identity: identity.into(),
            original_spec,
        }
    }
}

/// An ordered root-to-leaf path from an overridden package up through the
/// packages that depend on it.
///
/// The first segment is always the overridden package's own identity and
/// carries no specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyChain(
    /// Segments in root-to-leaf order
    pub Vec<PathSegment>,
);

impl DependencyChain {
    /// Segments in root-to-leaf order
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Number of segments in the chain
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the chain has no segments
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One overridden package actually found in the resolved graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverrideUsage {
    /// Resolved package name (the actual package for alias overrides)
    pub name: String,
    /// Resolved version
    pub version: String,
    /// Every distinct dependent chain, no duplicates
    pub chains: Vec<DependencyChain>,
    /// Declared name the override was written under, when it differs from
    /// the actual package (alias overrides)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliased_from: Option<String>,
}

impl OverrideUsage {
    /// Merge this usage's chains into a single prefix-sharing tree
    pub fn unified_tree(&self) -> crate::Result<UnifiedTreeNode> {
        crate::unify::unify(&self.chains)
    }
}

/// A node in the unified dependent tree for one overridden package
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnifiedTreeNode {
    /// `<packageName>@<resolvedVersion>`
    pub identity: String,
    /// Specifier the parent originally requested, absent at the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_spec: Option<String>,
    /// Child nodes in insertion order; identities are unique per node
    pub children: Vec<UnifiedTreeNode>,
}

impl UnifiedTreeNode {
    /// Create a childless node
    pub fn new(identity: impl Into<String>, original_spec: Option<String>) -> Self {
        Self {
            identity: identity.into(),
            original_spec,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(UnifiedTreeNode::node_count).sum::<usize>()
    }
}

/// An override that was declared but never found exercised in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnusedOverride {
    /// Declared override name
    pub name: String,
    /// Declared value verbatim (no resolved version exists by definition)
    pub spec: String,
}

/// One target package's raw explain response.
///
/// Field names follow npm's `explain --json` output; other managers' invokers
/// adapt into this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainEntry {
    /// Resolved package name
    pub name: String,
    /// Resolved version
    pub version: String,
    /// Whether an override was applied to this package
    #[serde(default)]
    pub overridden: bool,
    /// Forest of dependent records, one per direct dependent
    #[serde(default)]
    pub dependents: Vec<DependentEdge>,
}

impl ExplainEntry {
    /// `<name>@<version>` of the explained package
    pub fn identity(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Whether this entry shows an exercised override.
    ///
    /// npm marks the node on newer versions and the incoming edges on older
    /// ones, so both are honored.
    pub fn is_overridden(&self) -> bool {
        self.overridden || self.dependents.iter().any(|d| d.overridden)
    }
}

/// A dependent record: one edge from a dependent package down to the package
/// being explained (or to another dependent one step closer to it).
#[derive(Debug, Clone, Deserialize)]
pub struct DependentEdge {
    /// Effective specifier on the edge (post-override when one applied)
    #[serde(default)]
    pub spec: Option<String>,
    /// Specifier the dependent originally wrote, untouched by overrides
    #[serde(default, rename = "rawSpec")]
    pub raw_spec: Option<String>,
    /// Whether an override rewrote this edge
    #[serde(default)]
    pub overridden: bool,
    /// The dependent package itself, with its own dependents nested
    #[serde(default)]
    pub from: Option<DependentNode>,
}

impl DependentEdge {
    /// Specifier-before-override for this edge: the raw specifier when the
    /// response carries one, the general specifier otherwise.
    pub fn original_spec(&self) -> Option<String> {
        self.raw_spec.clone().or_else(|| self.spec.clone())
    }
}

/// The dependent package on the far side of a [`DependentEdge`]
#[derive(Debug, Clone, Deserialize)]
pub struct DependentNode {
    /// Package name; absent on synthetic records
    #[serde(default)]
    pub name: Option<String>,
    /// Resolved version; the workspace root may not carry one
    #[serde(default)]
    pub version: Option<String>,
    /// This package's own dependents, one step further from the explained
    /// package
    #[serde(default)]
    pub dependents: Vec<DependentEdge>,
}

impl DependentNode {
    /// `<name>@<version>` when the record resolves to a package, bare name
    /// when it has no version, `None` when it has no name at all
    pub fn identity(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        Some(match self.version.as_deref() {
            Some(version) => format!("{name}@{version}"),
            None => name.to_string(),
        })
    }
}
