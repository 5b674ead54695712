//! Point queries over a parsed tree.

use super::node::{NodeKind, ParsedNode};
use crate::base::SourcePos;

/// Find the element or attribute whose name (or attribute value) covers
/// `position`.
///
/// Descends by nearest left neighbour: at each level the last attribute or
/// child starting at or before `position` is followed, which relies on
/// siblings being stored in source order. The node reached last must
/// actually contain `position`, otherwise there is no match.
pub fn find_node_at(root: &ParsedNode, position: SourcePos) -> Option<&ParsedNode> {
    let mut current = root;
    while let Some(next) = nearest_left(current, position) {
        current = next;
    }
    covers(current, position).then_some(current)
}

/// Like [`find_node_at`], but returns every node on the way down, from
/// `root` to the match.
pub fn find_path_at(root: &ParsedNode, position: SourcePos) -> Option<Vec<&ParsedNode>> {
    let mut path = vec![root];
    let mut current = root;
    while let Some(next) = nearest_left(current, position) {
        path.push(next);
        current = next;
    }
    covers(current, position).then_some(path)
}

fn nearest_left(node: &ParsedNode, position: SourcePos) -> Option<&ParsedNode> {
    // Every attribute starts inside the opening tag, before any child.
    let children = node.children.partition_point(|child| child.start <= position);
    if children > 0 {
        return node.children.get(children - 1);
    }
    let attributes = node.attributes.partition_point(|attr| attr.start <= position);
    attributes.checked_sub(1).and_then(|i| node.attributes.get(i))
}

fn covers(node: &ParsedNode, position: SourcePos) -> bool {
    let in_name = node.name_span().is_some_and(|span| span.contains(position));
    match node.kind {
        NodeKind::Element => in_name,
        NodeKind::Attribute => {
            in_name || node.value_span().is_some_and(|span| span.contains(position))
        }
        NodeKind::Document | NodeKind::Text => false,
    }
}
