//! Textual rendering of unified trees.

use crate::types::UnifiedTreeNode;
use std::fmt::Write;

/// Serialize a unified tree to indented text.
///
/// The root identity stands alone on the first line; every descendant gets
/// one `- `-prefixed line indented by depth, with the original specifier in
/// parentheses when one is present. Children print in insertion order, the
/// order their identities were first encountered during unification.
pub fn render(tree: &UnifiedTreeNode) -> String {
    let mut out = String::new();
    out.push_str(&tree.identity);
    out.push('\n');
    for child in &tree.children {
        render_node(child, 1, &mut out);
    }
    out
}

fn render_node(node: &UnifiedTreeNode, depth: usize, out: &mut String) {
    let indent = " ".repeat(depth * 2 - 1);
    match &node.original_spec {
        Some(spec) => {
            let _ = writeln!(out, "{indent}- {} ({spec})", node.identity);
        }
        None => {
            let _ = writeln!(out, "{indent}- {}", node.identity);
        }
    }
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DependencyChain, PathSegment};
    use crate::unify::unify;

    fn chain(segments: &[(&str, Option<&str>)]) -> DependencyChain {
        DependencyChain(
            segments
                .iter()
                .map(|(identity, spec)| PathSegment::new(*identity, spec.map(String::from)))
                .collect(),
        )
    }

    #[test]
    fn test_render_single_dependent() {
        let tree = unify(&[chain(&[
            ("send@0.19.1", None),
            ("honkit@6.0.3", Some("^0.17.2")),
        ])])
        .unwrap();

        assert_eq!(render(&tree), "send@0.19.1\n - honkit@6.0.3 (^0.17.2)\n");
    }

    #[test]
    fn test_render_root_only() {
        let tree = unify(&[chain(&[("send@0.19.1", None)])]).unwrap();
        assert_eq!(render(&tree), "send@0.19.1\n");
    }

    #[test]
    fn test_render_without_spec_omits_parentheses() {
        let tree = unify(&[chain(&[("a@1", None), ("my-project", None)])]).unwrap();
        assert_eq!(render(&tree), "a@1\n - my-project\n");
    }

    #[test]
    fn test_render_indents_by_depth_in_insertion_order() {
        let tree = unify(&[
            chain(&[("a@1", None), ("b@2", Some("^1")), ("c@3", Some("^2"))]),
            chain(&[("a@1", None), ("b@2", Some("^1")), ("d@4", Some("~2"))]),
        ])
        .unwrap();

        let rendered = render(&tree);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec!["a@1", " - b@2 (^1)", "   - c@3 (^2)", "   - d@4 (~2)"]
        );
    }
}
