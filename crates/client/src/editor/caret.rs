//! Caret preservation across wholesale content replacement
//!
//! The editor re-parses and re-inserts its displayed content rather than
//! patching it incrementally, which loses the text cursor unless its
//! position is captured before and restored after each replacement.
//!
//! The algorithm is UI-framework agnostic: it operates on an abstract
//! content tree, measuring the caret as the count of characters in all text
//! preceding it in depth-first pre-order. The rendering layer maps its real
//! node handles to and from [`CaretPosition`] paths.

/// Abstract content tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// A text leaf; caret offsets land inside these
    Text(String),
    /// An element containing child nodes in document order
    Element { children: Vec<ContentNode> },
}

impl ContentNode {
    pub fn element(children: Vec<ContentNode>) -> Self {
        ContentNode::Element { children }
    }

    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text(value.into())
    }
}

/// A caret location: path of child indices from the root to a text node,
/// plus a character offset within that node's text.
///
/// An empty path with offset 0 denotes "start of content" and is the only
/// valid position in a tree without text nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaretPosition {
    pub path: Vec<usize>,
    pub offset: usize,
}

/// Count of characters preceding the caret, scanning text nodes in
/// depth-first pre-order. Returns 0 when the caret does not point inside
/// the tree (no active selection).
pub fn capture_offset(root: &ContentNode, caret: &CaretPosition) -> usize {
    let mut preceding = 0usize;
    if walk_capture(root, &caret.path, caret.offset, &mut preceding) {
        preceding
    } else {
        0
    }
}

/// Place a zero-width caret at the text node and intra-node index
/// corresponding to `offset` characters of preceding text.
///
/// Offsets past the end of content clamp to end-of-content; an empty tree
/// yields the start-of-content position.
pub fn restore_offset(root: &ContentNode, offset: usize) -> CaretPosition {
    let mut remaining = offset;
    let mut last_text: Option<CaretPosition> = None;
    let mut path = Vec::new();

    if let Some(position) = walk_restore(root, &mut remaining, &mut path, &mut last_text) {
        return position;
    }

    // Ran out of text: clamp to the end of the last text node, or the
    // start of an empty tree.
    last_text.unwrap_or_default()
}

/// Total character count of all text in the tree.
pub fn text_length(root: &ContentNode) -> usize {
    match root {
        ContentNode::Text(text) => text.chars().count(),
        ContentNode::Element { children } => children.iter().map(text_length).sum(),
    }
}

/// Accumulate preceding text until the caret's node is reached.
/// Returns true once the caret position was found and accounted for.
fn walk_capture(
    node: &ContentNode,
    path: &[usize],
    offset: usize,
    preceding: &mut usize,
) -> bool {
    match node {
        ContentNode::Text(text) => {
            if path.is_empty() {
                *preceding += offset.min(text.chars().count());
                true
            } else {
                // Path descends below a leaf: not a valid caret target
                false
            }
        }
        ContentNode::Element { children } => {
            let Some((&target, rest)) = path.split_first() else {
                // Caret on an element itself: treat as before its content
                return true;
            };
            if target >= children.len() {
                return false;
            }
            for child in &children[..target] {
                *preceding += text_length(child);
            }
            walk_capture(&children[target], rest, offset, preceding)
        }
    }
}

fn walk_restore(
    node: &ContentNode,
    remaining: &mut usize,
    path: &mut Vec<usize>,
    last_text: &mut Option<CaretPosition>,
) -> Option<CaretPosition> {
    match node {
        ContentNode::Text(text) => {
            let len = text.chars().count();
            if *remaining <= len {
                return Some(CaretPosition {
                    path: path.clone(),
                    offset: *remaining,
                });
            }
            *remaining -= len;
            *last_text = Some(CaretPosition {
                path: path.clone(),
                offset: len,
            });
            None
        }
        ContentNode::Element { children } => {
            for (index, child) in children.iter().enumerate() {
                path.push(index);
                if let Some(position) = walk_restore(child, remaining, path, last_text) {
                    return Some(position);
                }
                path.pop();
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ContentNode {
        // <root><p>INT. LAB - NIGHT</p><p><strong>MARA</strong> waits.</p></root>
        ContentNode::element(vec![
            ContentNode::element(vec![ContentNode::text("INT. LAB - NIGHT")]),
            ContentNode::element(vec![
                ContentNode::element(vec![ContentNode::text("MARA")]),
                ContentNode::text(" waits."),
            ]),
        ])
    }

    #[test]
    fn round_trip_is_identity_for_every_offset() {
        let tree = sample_tree();
        let total = text_length(&tree);
        for offset in 0..=total {
            let position = restore_offset(&tree, offset);
            assert_eq!(
                capture_offset(&tree, &position),
                offset,
                "offset {offset} did not round-trip"
            );
        }
    }

    #[test]
    fn restore_lands_in_the_right_text_node() {
        let tree = sample_tree();
        // "INT. LAB - NIGHT" is 16 chars; offset 18 is 2 chars into "MARA"
        let position = restore_offset(&tree, 18);
        assert_eq!(position.path, vec![1, 0, 0]);
        assert_eq!(position.offset, 2);
    }

    #[test]
    fn past_end_offsets_clamp_to_end_of_content() {
        let tree = sample_tree();
        let total = text_length(&tree);
        let position = restore_offset(&tree, total + 100);
        assert_eq!(capture_offset(&tree, &position), total);
    }

    #[test]
    fn empty_tree_restores_to_start() {
        let tree = ContentNode::element(vec![]);
        assert_eq!(restore_offset(&tree, 5), CaretPosition::default());
        assert_eq!(text_length(&tree), 0);
    }

    #[test]
    fn invalid_caret_captures_as_zero() {
        let tree = sample_tree();
        let bogus = CaretPosition {
            path: vec![7, 7],
            offset: 3,
        };
        assert_eq!(capture_offset(&tree, &bogus), 0);
    }

    #[test]
    fn boundary_between_nodes_prefers_the_earlier_node_end() {
        let tree = sample_tree();
        // Exactly at the end of the first paragraph's text
        let position = restore_offset(&tree, 16);
        assert_eq!(position.path, vec![0, 0]);
        assert_eq!(position.offset, 16);
        assert_eq!(capture_offset(&tree, &position), 16);
    }
}
