//! Drawing backend interface.
//!
//! The layout tree never touches pixels. Everything it draws or measures
//! goes through a [`Renderer`], which a caller implements for its backend
//! (see [`DrawTargetRenderer`](crate::render::DrawTargetRenderer) for an
//! embedded-graphics one).
//!
//! Renderer calls cannot fail from the tree's point of view. A backend that
//! can fail keeps its own error state and reports it once rendering is over.

use crate::geometry::{Point, Size};
use crate::style::Style;

/// Bounding box of measured text, relative to the text origin.
///
/// The layout engine uses `right` as the text width and `bottom` as its
/// height.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TextBounds {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl TextBounds {
    /// Create bounds from the four edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Capabilities a drawing backend provides to the layout tree.
pub trait Renderer {
    /// Draw a rectangle spanning the two corners, stroked and filled per `style`.
    fn rectangle(&mut self, top_left: Point, bottom_right: Point, style: &Style);

    /// Draw a straight segment.
    fn line(&mut self, start: Point, end: Point, style: &Style);

    /// Draw `text` anchored at `position` according to `style.anchor`.
    fn text(&mut self, text: &str, position: Point, style: &Style);

    /// Measure `text` as it would be drawn with `style`.
    fn text_bbox(&mut self, text: &str, style: &Style) -> TextBounds;

    /// Final canvas size, reported once after a canvas has rendered.
    fn set_dimensions(&mut self, size: Size);
}
