//! Specifier-chain extraction.
//!
//! Walks the nested dependent records of one explain response and emits, for
//! every distinct path from the explained package up to a root, an ordered
//! chain of `(identity, original specifier)` segments. No merging happens
//! here; shared prefixes are collapsed later by [`crate::unify`].

use crate::types::{DependencyChain, DependentEdge, ExplainEntry, PathSegment};

/// Extract every distinct dependent chain from one explain response.
///
/// The first segment of every chain is the explained package itself with no
/// specifier. A response with no dependents still yields the single
/// one-segment chain, so the override's existence stays visible. Duplicate
/// chains are dropped, first occurrence kept.
pub fn extract_chains(entry: &ExplainEntry) -> Vec<DependencyChain> {
    let root = PathSegment::root(entry.identity());

    if entry.dependents.is_empty() {
        return vec![DependencyChain(vec![root])];
    }

    let mut chains = Vec::new();
    let mut path = vec![root];
    for edge in &entry.dependents {
        walk(edge, &mut path, &mut chains);
    }
    chains
}

fn walk(edge: &DependentEdge, path: &mut Vec<PathSegment>, chains: &mut Vec<DependencyChain>) {
    let identity = edge.from.as_ref().and_then(|from| from.identity());
    let Some(identity) = identity else {
        // A record with no resolvable parent carries no further information:
        // emit what was accumulated, unless the path never left the root.
        if path.len() > 1 {
            push_chain(chains, path.clone());
        }
        return;
    };

    path.push(PathSegment::new(identity, edge.original_spec()));

    // `from` is present, identity() proved that above
    let nested = edge.from.as_ref().map(|f| f.dependents.as_slice()).unwrap_or(&[]);
    if nested.is_empty() {
        push_chain(chains, path.clone());
    } else {
        for next in nested {
            walk(next, path, chains);
        }
    }

    path.pop();
}

fn push_chain(chains: &mut Vec<DependencyChain>, segments: Vec<PathSegment>) {
    let chain = DependencyChain(segments);
    if !chains.contains(&chain) {
        chains.push(chain);
    }
}
