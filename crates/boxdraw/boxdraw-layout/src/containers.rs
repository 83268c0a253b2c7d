//! Stacking containers.
//!
//! Containers place their children one after another along a main axis and
//! derive their own size from the children on every read, so a change to a
//! child is always reflected in the parent.
//!
//! # Components
//!
//! - [`VLayout`] - Vertical stack, children centred horizontally
//! - [`HLayout`] - Horizontal stack, children placed left to right
//! - [`Table`] - Horizontal stack whose cells share one height
//!
//! # Example
//!
//! ```
//! use boxdraw_layout::prelude::*;
//!
//! let column = VLayout::new()
//!     .child(Rectangle::new(40, 10))
//!     .child_at(Rectangle::new(20, 10), Point::new(0, 5));
//!
//! assert_eq!(column.width().unwrap(), 40);
//! assert_eq!(column.height().unwrap(), 25);
//! ```

use crate::error::{Axis, LayoutError, Result};
use crate::geometry::{floor_half, Point};
use crate::node::{Child, Node, NodeCore};
use crate::renderer::Renderer;
use crate::style::Align;

/// Sum of `extent + offset` over all children.
// SAFETY: child extents and offsets are display sized; their sum stays within i32.
#[allow(clippy::arithmetic_side_effects)]
fn main_axis_extent(
    children: &[Child],
    extent: impl Fn(&dyn Node) -> Result<i32>,
    offset: impl Fn(Point) -> i32,
) -> Result<i32> {
    children.iter().try_fold(0, |total, child| {
        Ok(total + extent(child.node())? + offset(child.offset()))
    })
}

/// Maximum of `extent + offset` over all children, never below zero.
// SAFETY: child extents and offsets are display sized; their sum stays within i32.
#[allow(clippy::arithmetic_side_effects)]
fn cross_axis_extent(
    children: &[Child],
    extent: impl Fn(&dyn Node) -> Result<i32>,
    offset: impl Fn(Point) -> i32,
) -> Result<i32> {
    children.iter().try_fold(0, |widest, child| {
        Ok(widest.max(extent(child.node())? + offset(child.offset())))
    })
}

/// Vertical stack.
///
/// - width = max over children of `child.width + offset.x`
/// - height = sum over children of `child.height + offset.y`
///
/// Children are rendered top to bottom and centred on the layout's
/// horizontal centre. The declared [`Align`] is stored but only centring is
/// realised.
#[derive(Debug, Default)]
pub struct VLayout {
    core: NodeCore,
    align: Align,
}

impl VLayout {
    /// An empty vertical stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared cross-axis alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// The declared cross-axis alignment.
    pub fn alignment(&self) -> Align {
        self.align
    }
}

impl Node for VLayout {
    fn kind(&self) -> &'static str {
        "VLayout"
    }

    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn width(&self) -> Result<i32> {
        cross_axis_extent(self.children(), |node| node.width(), |offset| offset.x)
    }

    fn height(&self) -> Result<i32> {
        main_axis_extent(self.children(), |node| node.height(), |offset| offset.y)
    }

    fn set_width(&mut self, _width: i32) -> Result<()> {
        Err(LayoutError::DerivedDimension {
            node: self.kind(),
            axis: Axis::Horizontal,
        })
    }

    fn set_height(&mut self, _height: i32) -> Result<()> {
        Err(LayoutError::DerivedDimension {
            node: self.kind(),
            axis: Axis::Vertical,
        })
    }

    fn has_derived_size(&self) -> bool {
        true
    }

    // SAFETY: all arithmetic here combines display coordinates and child sizes,
    // bounded by the canvas dimensions. No overflow is possible.
    #[allow(clippy::arithmetic_side_effects)]
    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        let center_x = position.x + floor_half(self.width()?);
        tracing::debug!(node = self.kind(), ?position, center_x, "render");

        let mut y = position.y;
        for child in self.children() {
            let node = child.node();
            let offset = child.offset();
            let child_x = position.x + offset.x;
            let child_center_x = child_x + floor_half(node.width()?);
            let child_position = Point::new(child_x + center_x - child_center_x, y + offset.y);

            tracing::trace!(node = node.kind(), ?offset, ?child_position, "place child");
            node.render(renderer, child_position)?;
            y += node.height()? + offset.y;
        }
        Ok(())
    }
}

/// Horizontal stack.
///
/// - width = sum over children of `child.width + offset.x`
/// - height = max over children of `child.height + offset.y`
///
/// Children are rendered left to right at their offsets with no vertical
/// alignment; the declared [`Align`] is stored but not applied.
#[derive(Debug, Default)]
pub struct HLayout {
    core: NodeCore,
    align: Align,
}

impl HLayout {
    /// An empty horizontal stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared cross-axis alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// The declared cross-axis alignment.
    pub fn alignment(&self) -> Align {
        self.align
    }
}

impl Node for HLayout {
    fn kind(&self) -> &'static str {
        "HLayout"
    }

    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn width(&self) -> Result<i32> {
        main_axis_extent(self.children(), |node| node.width(), |offset| offset.x)
    }

    fn height(&self) -> Result<i32> {
        cross_axis_extent(self.children(), |node| node.height(), |offset| offset.y)
    }

    fn set_width(&mut self, _width: i32) -> Result<()> {
        Err(LayoutError::DerivedDimension {
            node: self.kind(),
            axis: Axis::Horizontal,
        })
    }

    fn set_height(&mut self, _height: i32) -> Result<()> {
        Err(LayoutError::DerivedDimension {
            node: self.kind(),
            axis: Axis::Vertical,
        })
    }

    fn has_derived_size(&self) -> bool {
        true
    }

    // SAFETY: positions and child widths are display sized; sums stay within i32.
    #[allow(clippy::arithmetic_side_effects)]
    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        tracing::debug!(node = self.kind(), ?position, "render");

        let mut x = position.x;
        for child in self.children() {
            let node = child.node();
            let offset = child.offset();
            let child_position = Point::new(x + offset.x, position.y + offset.y);

            tracing::trace!(node = node.kind(), ?offset, ?child_position, "place child");
            node.render(renderer, child_position)?;
            x += node.width()? + offset.x;
        }
        Ok(())
    }
}

/// A row of cells with equal heights.
///
/// Lays out like an [`HLayout`]. After its cells have been prepared, every
/// cell's height is forced to the tallest cell's height. Cells must be
/// nodes with a stored height; a stacking layout as a cell makes
/// [`prepare`](Node::prepare) fail with [`LayoutError::DerivedDimension`]
/// before any cell is changed.
///
/// ```
/// use boxdraw_layout::prelude::*;
///
/// struct NoText;
/// # impl Renderer for NoText {
/// #     fn rectangle(&mut self, _: Point, _: Point, _: &Style) {}
/// #     fn line(&mut self, _: Point, _: Point, _: &Style) {}
/// #     fn text(&mut self, _: &str, _: Point, _: &Style) {}
/// #     fn text_bbox(&mut self, _: &str, _: &Style) -> TextBounds { TextBounds::default() }
/// #     fn set_dimensions(&mut self, _: Size) {}
/// # }
///
/// let mut row = Table::new()
///     .child(Rectangle::new(10, 10))
///     .child(Rectangle::new(10, 25));
///
/// row.prepare(&mut NoText).unwrap();
/// assert_eq!(row.children()[0].node().height().unwrap(), 25);
/// ```
#[derive(Debug, Default)]
pub struct Table {
    row: HLayout,
}

impl Table {
    /// An empty table row.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Table {
    fn kind(&self) -> &'static str {
        "Table"
    }

    fn core(&self) -> &NodeCore {
        self.row.core()
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        self.row.core_mut()
    }

    fn width(&self) -> Result<i32> {
        self.row.width()
    }

    fn height(&self) -> Result<i32> {
        self.row.height()
    }

    fn set_width(&mut self, _width: i32) -> Result<()> {
        Err(LayoutError::DerivedDimension {
            node: self.kind(),
            axis: Axis::Horizontal,
        })
    }

    fn set_height(&mut self, _height: i32) -> Result<()> {
        Err(LayoutError::DerivedDimension {
            node: self.kind(),
            axis: Axis::Vertical,
        })
    }

    fn has_derived_size(&self) -> bool {
        true
    }

    fn prepare(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        self.core_mut().prepare_children(renderer)?;

        let mut tallest = 0;
        for cell in self.children() {
            let node = cell.node();
            if node.has_derived_size() {
                return Err(LayoutError::DerivedDimension {
                    node: node.kind(),
                    axis: Axis::Vertical,
                });
            }
            tallest = tallest.max(node.height()?);
        }
        tracing::debug!(node = self.kind(), tallest, "equalise cell heights");

        for cell in self.core_mut().children_mut() {
            cell.node_mut().set_height(tallest)?;
        }
        Ok(())
    }

    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        self.row.render(renderer, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::node::Group;
    use crate::renderer::TextBounds;
    use crate::style::Style;

    struct NoText;

    impl Renderer for NoText {
        fn rectangle(&mut self, _: Point, _: Point, _: &Style) {}
        fn line(&mut self, _: Point, _: Point, _: &Style) {}
        fn text(&mut self, _: &str, _: Point, _: &Style) {}
        fn text_bbox(&mut self, _: &str, _: &Style) -> TextBounds {
            TextBounds::default()
        }
        fn set_dimensions(&mut self, _: Size) {}
    }

    #[test]
    fn test_empty_layouts_are_zero_sized() {
        assert_eq!(VLayout::new().width(), Ok(0));
        assert_eq!(VLayout::new().height(), Ok(0));
        assert_eq!(HLayout::new().width(), Ok(0));
        assert_eq!(HLayout::new().height(), Ok(0));
    }

    #[test]
    fn test_vlayout_size_formula() {
        let layout = VLayout::new()
            .child_at(Group::sized(30, 10), Point::new(5, 0))
            .child_at(Group::sized(50, 20), Point::new(-10, 4))
            .child_at(Group::sized(20, 5), Point::new(0, 1));

        // max(35, 40, 20), (10 + 0) + (20 + 4) + (5 + 1)
        assert_eq!(layout.width(), Ok(40));
        assert_eq!(layout.height(), Ok(40));
    }

    #[test]
    fn test_hlayout_size_formula() {
        let layout = HLayout::new()
            .child_at(Group::sized(30, 10), Point::new(5, 0))
            .child_at(Group::sized(50, 20), Point::new(-10, 4));

        assert_eq!(layout.width(), Ok(75));
        assert_eq!(layout.height(), Ok(24));
    }

    #[test]
    fn test_negative_extents_clamp_cross_axis_at_zero() {
        let layout = VLayout::new().child_at(Group::sized(5, 5), Point::new(-20, 0));
        assert_eq!(layout.width(), Ok(0));
        assert_eq!(layout.height(), Ok(5));
    }

    #[test]
    fn test_derived_size_is_live() {
        let mut layout = VLayout::new().child(Group::sized(10, 10));
        assert_eq!(layout.width(), Ok(10));

        layout.core_mut().children_mut()[0]
            .node_mut()
            .set_width(70)
            .unwrap();
        assert_eq!(layout.width(), Ok(70));
    }

    #[test]
    fn test_unset_child_propagates() {
        let layout = HLayout::new().child(Group::new());
        assert_eq!(
            layout.width(),
            Err(LayoutError::UnsetDimension {
                node: "Group",
                axis: Axis::Horizontal
            })
        );
    }

    #[test]
    fn test_layouts_reject_forced_dimensions() {
        let mut v = VLayout::new();
        let mut h = HLayout::new();
        let mut t = Table::new();
        assert!(matches!(v.set_width(1), Err(LayoutError::DerivedDimension { .. })));
        assert!(matches!(h.set_height(1), Err(LayoutError::DerivedDimension { .. })));
        assert!(matches!(t.set_height(1), Err(LayoutError::DerivedDimension { .. })));
    }

    #[test]
    fn test_declared_alignment_is_kept() {
        assert_eq!(VLayout::new().alignment(), Align::Center);
        assert_eq!(HLayout::new().align(Align::Top).alignment(), Align::Top);
    }

    #[test]
    fn test_table_rejects_derived_cell_before_stretching() {
        let mut table = Table::new()
            .child(Group::sized(10, 10))
            .child(VLayout::new().child(Group::sized(5, 40)));

        assert_eq!(
            table.prepare(&mut NoText),
            Err(LayoutError::DerivedDimension {
                node: "VLayout",
                axis: Axis::Vertical
            })
        );
        assert_eq!(table.children()[0].node().height(), Ok(10));
    }

    #[test]
    fn test_only_stacks_have_derived_size() {
        assert!(VLayout::new().has_derived_size());
        assert!(HLayout::new().has_derived_size());
        assert!(Table::new().has_derived_size());
        assert!(!Group::new().has_derived_size());
    }

    #[test]
    fn test_table_sizes_like_hlayout() {
        let table = Table::new()
            .child(Group::sized(10, 10))
            .child_at(Group::sized(10, 25), Point::new(2, 0));
        assert_eq!(table.width(), Ok(22));
        assert_eq!(table.height(), Ok(25));
    }
}
