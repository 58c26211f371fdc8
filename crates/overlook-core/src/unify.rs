//! Tree unification.
//!
//! Merges every dependent chain for a single overridden package into one
//! tree: shared prefixes collapse into one node, and each node keeps the
//! specifier its parent originally requested.

use crate::error::{Error, Result};
use crate::types::{DependencyChain, PathSegment, UnifiedTreeNode};

/// Merge a non-empty set of chains into a single prefix-sharing tree.
///
/// All chains for one package share the same root by construction, so the
/// root identity is taken from the first chain. A segment's specifier
/// describes a parent-to-child edge and should be identical on every
/// occurrence of that edge; on a disagreement the first non-absent value
/// recorded wins and later ones are ignored.
///
/// # Errors
/// Returns [`Error::EmptyChains`] when called with no chains. Callers must
/// special-case zero usages before invoking.
pub fn unify(chains: &[DependencyChain]) -> Result<UnifiedTreeNode> {
    let root_segment = chains
        .first()
        .and_then(|chain| chain.segments().first())
        .ok_or(Error::EmptyChains)?;

    let mut root = UnifiedTreeNode::new(root_segment.identity.clone(), None);

    for chain in chains {
        let mut node = &mut root;
        for segment in chain.segments().iter().skip(1) {
            node = fold_segment(node, segment);
        }
    }

    Ok(root)
}

/// Descend into the child matching `segment`, creating it when absent and
/// backfilling an absent specifier when present on the incoming segment.
fn fold_segment<'a>(node: &'a mut UnifiedTreeNode, segment: &PathSegment) -> &'a mut UnifiedTreeNode {
    match node
        .children
        .iter()
        .position(|child| child.identity == segment.identity)
    {
        Some(index) => {
            let child = &mut node.children[index];
            if child.original_spec.is_none() {
                child.original_spec = segment.original_spec.clone();
            }
            child
        }
        None => {
            node.children.push(UnifiedTreeNode::new(
                segment.identity.clone(),
                segment.original_spec.clone(),
            ));
            node.children.last_mut().unwrap()
        }
    }
}
