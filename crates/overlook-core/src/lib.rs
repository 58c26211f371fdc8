//! # overlook-core
//!
//! Override auditing for JavaScript package manifests.
//!
//! This crate provides functionality to:
//! - Resolve alias overrides (`npm:<name>@<range>`) to the package they redirect to
//! - Extract dependent chains from a package manager's "why is this installed" response
//! - Unify all chains for one overridden package into a single prefix-sharing tree
//! - Detect overrides that are declared but never exercised in the resolved graph
//! - Render unified trees as indented text
//!
//! ## Architecture
//!
//! The crate is a pure transform over collaborator responses: the only seam to
//! the outside world is the [`Explainer`] trait, implemented by `overlook-npm`
//! for the real package manager and by test doubles in integration tests.
//! [`audit`] orchestrates the whole pipeline and never propagates collaborator
//! failures; it degrades to an empty report carrying diagnostics instead.
//!
//! ## Example
//!
//! ```rust,no_run
//! use overlook_core::{audit, Explainer, OverrideDeclaration};
//!
//! # fn example(explainer: &impl Explainer) {
//! let declared = vec![OverrideDeclaration::new("send", "0.19.1")];
//! let report = audit(&declared, explainer);
//!
//! for usage in &report.usages {
//!     println!("{}@{} is overridden", usage.name, usage.version);
//! }
//! for unused in &report.unused {
//!     println!("{} ({}) is never exercised", unused.name, unused.spec);
//! }
//! # }
//! ```

#![warn(missing_docs)]

pub mod alias;
pub mod audit;
pub mod chains;
pub mod error;
pub mod render;
pub mod types;
pub mod unify;
pub mod unused;

// Re-export main types and entry points
pub use alias::{resolve_aliases, AliasResolution, ALIAS_MARKER};
pub use audit::{audit, AuditReport, Explainer};
pub use chains::extract_chains;
pub use error::{Error, Result};
pub use render::render;
pub use types::{
    DependencyChain, DependentEdge, DependentNode, ExplainEntry, OverrideDeclaration,
    OverrideUsage, PathSegment, UnifiedTreeNode, UnusedOverride,
};
pub use unify::unify;
pub use unused::find_unused;
