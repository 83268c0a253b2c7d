//! Debug dumps of layout trees.

use core::fmt::Write;

use crate::node::Node;

/// Render `node` and its descendants as an indented outline, one node per
/// line: `Kind(width, height) @ (x, y)`.
///
/// Dimensions that cannot be resolved yet print as `?`; offsets are the
/// ones the node was added with.
///
/// ```
/// use boxdraw_layout::prelude::*;
/// use boxdraw_layout::debug::outline;
///
/// let tree = VLayout::new()
///     .child(Rectangle::new(20, 10))
///     .child_at(Text::new("hi"), Point::new(0, 4));
///
/// assert_eq!(
///     outline(&tree),
///     "VLayout(?, ?)\n  Rectangle(20, 10) @ (0, 0)\n  Text(?, ?) @ (0, 4)\n"
/// );
/// ```
pub fn outline(node: &dyn Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0, None);
    out
}

fn write_node(out: &mut String, node: &dyn Node, depth: usize, offset: Option<(i32, i32)>) {
    let width = node.width().map_or_else(|_| "?".to_owned(), |w| w.to_string());
    let height = node.height().map_or_else(|_| "?".to_owned(), |h| h.to_string());

    let indent = depth.saturating_mul(2);
    let _ = write!(out, "{:indent$}{}({width}, {height})", "", node.kind());
    if let Some((x, y)) = offset {
        let _ = write!(out, " @ ({x}, {y})");
    }
    out.push('\n');

    for child in node.children() {
        let offset = child.offset();
        write_node(out, child.node(), depth.saturating_add(1), Some((offset.x, offset.y)));
    }
}
