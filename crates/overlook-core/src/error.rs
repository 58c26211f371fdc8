//! Error types for overlook-core.

use thiserror::Error;

/// Result type alias using overlook-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in overlook-core
#[derive(Debug, Error)]
pub enum Error {
    /// Tree unification was asked to merge zero chains.
    ///
    /// This is a caller invariant violation: the orchestrator only unifies
    /// chain sets produced by extraction, which are never empty.
    #[error("cannot unify an empty set of dependent chains")]
    EmptyChains,

    /// The dependency-explain query could not produce usable output.
    #[error("dependency query failed: {0}")]
    Query(String),
}
