//! The layout tree's base abstraction.
//!
//! Every element of a drawing is a [`Node`]: it has a width and height, a
//! [`Style`] and an ordered list of children, each placed at an offset
//! relative to its parent. Trees are consumed by a two-pass traversal:
//!
//! 1. **Prepare (post-order)**: nodes whose size depends on the backend,
//!    such as text, measure themselves through the [`Renderer`].
//! 2. **Render (pre-order)**: each node draws itself at the absolute
//!    position handed down by its parent, then renders its children at
//!    `position + offset`.
//!
//! Sizes come in two flavours. Leaf-like nodes store a [`Dimension`] that
//! is either fixed or not yet known; stacking layouts derive their size from
//! their children on every read and reject forced overrides.
//!
//! ```
//! use boxdraw_layout::prelude::*;
//!
//! let mut group = Group::sized(100, 40);
//! group.add_at(Rectangle::new(20, 20), Point::new(5, 5));
//!
//! assert_eq!(group.width().unwrap(), 100);
//! assert_eq!(group.children().len(), 1);
//! assert_eq!(group.children()[0].offset(), Point::new(5, 5));
//! ```

use core::fmt;

use crate::error::{Axis, LayoutError, Result};
use crate::geometry::Point;
use crate::renderer::Renderer;
use crate::style::Style;

/// A stored node dimension.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Dimension {
    /// Not known yet; measured during prepare or supplied by a default.
    #[default]
    Auto,

    /// Fixed pixel size.
    Px(i32),
}

impl Dimension {
    /// The pixel value, or [`LayoutError::UnsetDimension`] for `Auto`.
    pub fn resolve(self, node: &'static str, axis: Axis) -> Result<i32> {
        match self {
            Dimension::Px(px) => Ok(px),
            Dimension::Auto => Err(LayoutError::UnsetDimension { node, axis }),
        }
    }

    /// The pixel value if fixed.
    pub fn px(self) -> Option<i32> {
        match self {
            Dimension::Px(px) => Some(px),
            Dimension::Auto => None,
        }
    }

    /// Returns `true` if this dimension is `Auto`.
    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Dimension::Px(px)
    }
}

impl From<Option<i32>> for Dimension {
    fn from(px: Option<i32>) -> Self {
        px.map_or(Dimension::Auto, Dimension::Px)
    }
}

/// A child node and its offset from the parent's position.
#[derive(Debug)]
pub struct Child {
    pub(crate) node: Box<dyn Node>,
    pub(crate) offset: Point,
}

impl Child {
    /// Wrap a boxed node with an offset.
    pub fn new(node: Box<dyn Node>, offset: Point) -> Self {
        Self { node, offset }
    }

    /// The child node.
    pub fn node(&self) -> &dyn Node {
        self.node.as_ref()
    }

    /// The child node, mutably.
    pub fn node_mut(&mut self) -> &mut dyn Node {
        self.node.as_mut()
    }

    /// Offset from the parent's position.
    pub fn offset(&self) -> Point {
        self.offset
    }
}

/// State shared by every node variant.
#[derive(Debug, Default)]
pub struct NodeCore {
    /// Stored width.
    pub width: Dimension,
    /// Stored height.
    pub height: Dimension,
    /// Effective style.
    pub style: Style,
    children: Vec<Child>,
}

impl NodeCore {
    /// Core with the given dimensions and style, and no children.
    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>, style: Style) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            style,
            children: Vec::new(),
        }
    }

    /// Append a child.
    pub fn push(&mut self, child: Child) {
        self.children.push(child);
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Children in insertion order, mutably.
    pub fn children_mut(&mut self) -> &mut [Child] {
        &mut self.children
    }

    /// Prepare every child in insertion order.
    pub fn prepare_children(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        for child in &mut self.children {
            child.node.prepare(renderer)?;
        }
        Ok(())
    }

    /// Render every child at `position + offset`.
    // SAFETY: positions and offsets are display coordinates; their sum stays within i32.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn render_children(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        for child in &self.children {
            tracing::trace!(node = child.node.kind(), offset = ?child.offset, "render child");
            child.node.render(renderer, position + child.offset)?;
        }
        Ok(())
    }
}

/// A composable element of the layout tree.
///
/// Implementors provide [`kind`](Node::kind) and access to their
/// [`NodeCore`]; every other method has a default that treats the node as a
/// plain container of its children. Variants override the parts that differ:
/// stacks derive their size, shapes draw before rendering their children,
/// text measures itself during prepare.
///
/// Ownership flows strictly from parent to child. Adding the same node
/// twice is impossible by construction and there is no parent link.
pub trait Node: fmt::Debug {
    /// Variant name, used in logs and errors.
    fn kind(&self) -> &'static str;

    /// Shared node state.
    fn core(&self) -> &NodeCore;

    /// Shared node state, mutably.
    fn core_mut(&mut self) -> &mut NodeCore;

    /// Width in pixels.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnsetDimension`] if the width was never set and the
    /// node cannot derive it.
    fn width(&self) -> Result<i32> {
        self.core().width.resolve(self.kind(), Axis::Horizontal)
    }

    /// Height in pixels.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnsetDimension`] if the height was never set and the
    /// node cannot derive it.
    fn height(&self) -> Result<i32> {
        self.core().height.resolve(self.kind(), Axis::Vertical)
    }

    /// Force the width.
    ///
    /// # Errors
    ///
    /// [`LayoutError::DerivedDimension`] on nodes whose width is derived.
    fn set_width(&mut self, width: i32) -> Result<()> {
        self.core_mut().width = Dimension::Px(width);
        Ok(())
    }

    /// Force the height.
    ///
    /// # Errors
    ///
    /// [`LayoutError::DerivedDimension`] on nodes whose height is derived.
    fn set_height(&mut self, height: i32) -> Result<()> {
        self.core_mut().height = Dimension::Px(height);
        Ok(())
    }

    /// Returns `true` if width and height are derived from the children, so
    /// [`set_width`](Node::set_width) and [`set_height`](Node::set_height)
    /// always fail.
    fn has_derived_size(&self) -> bool {
        false
    }

    /// Effective style.
    fn style(&self) -> &Style {
        &self.core().style
    }

    /// Replace the style.
    fn set_style(&mut self, style: Style) {
        self.core_mut().style = style;
    }

    /// Children in render order.
    fn children(&self) -> &[Child] {
        self.core().children()
    }

    /// Append an already boxed child at `offset`.
    fn add_boxed(&mut self, child: Box<dyn Node>, offset: Point) {
        self.core_mut().push(Child::new(child, offset));
    }

    /// Append a child at the parent's origin.
    fn add<N: Node + 'static>(&mut self, child: N)
    where
        Self: Sized,
    {
        self.add_at(child, Point::zero());
    }

    /// Append a child at `offset`.
    fn add_at<N: Node + 'static>(&mut self, child: N, offset: Point)
    where
        Self: Sized,
    {
        self.add_boxed(Box::new(child), offset);
    }

    /// Builder form of [`add`](Node::add).
    fn child<N: Node + 'static>(mut self, child: N) -> Self
    where
        Self: Sized,
    {
        self.add(child);
        self
    }

    /// Builder form of [`add_at`](Node::add_at).
    fn child_at<N: Node + 'static>(mut self, child: N, offset: Point) -> Self
    where
        Self: Sized,
    {
        self.add_at(child, offset);
        self
    }

    /// Builder form of [`set_style`](Node::set_style).
    fn styled(mut self, style: Style) -> Self
    where
        Self: Sized,
    {
        self.set_style(style);
        self
    }

    /// Resolve backend-dependent sizes. Children are prepared first, in
    /// insertion order.
    fn prepare(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        self.core_mut().prepare_children(renderer)
    }

    /// Draw this node with its top-left corner at `position`, then its
    /// children.
    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        self.core().render_children(renderer, position)
    }
}

/// The plain node variant: an optional explicit size and children, nothing
/// drawn of its own.
#[derive(Debug, Default)]
pub struct Group {
    core: NodeCore,
}

impl Group {
    /// A group with no size set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A group with an explicit size.
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            core: NodeCore::new(width, height, Style::default()),
        }
    }
}

impl Node for Group {
    fn kind(&self) -> &'static str {
        "Group"
    }

    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_dimension_fails() {
        let group = Group::new();
        assert_eq!(
            group.width(),
            Err(LayoutError::UnsetDimension {
                node: "Group",
                axis: Axis::Horizontal
            })
        );
        assert_eq!(
            group.height(),
            Err(LayoutError::UnsetDimension {
                node: "Group",
                axis: Axis::Vertical
            })
        );
    }

    #[test]
    fn test_set_dimensions() {
        let mut group = Group::new();
        group.set_width(30).unwrap();
        group.set_height(0).unwrap();
        assert_eq!(group.width(), Ok(30));
        assert_eq!(group.height(), Ok(0));
    }

    #[test]
    fn test_add_preserves_order_and_offsets() {
        let group = Group::sized(10, 10)
            .child(Group::sized(1, 1))
            .child_at(Group::sized(2, 2), Point::new(3, 4));

        let children = group.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].offset(), Point::zero());
        assert_eq!(children[0].node().width(), Ok(1));
        assert_eq!(children[1].offset(), Point::new(3, 4));
        assert_eq!(children[1].node().width(), Ok(2));
    }

    #[test]
    fn test_styled_replaces_style() {
        let group = Group::new().styled(Style::default().with_padding(2));
        assert_eq!(group.style().padding, 2);
    }

    #[test]
    fn test_dimension_conversions() {
        assert_eq!(Dimension::from(5), Dimension::Px(5));
        assert_eq!(Dimension::from(None), Dimension::Auto);
        assert_eq!(Dimension::from(Some(7)).px(), Some(7));
        assert!(Dimension::default().is_auto());
    }
}
