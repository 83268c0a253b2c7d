//! Shape nodes.
//!
//! # Components
//!
//! - [`Rectangle`] - Stroked/filled box that can host children
//! - [`Line`] - Straight segment
//! - [`DottedLine`] - Segment drawn as evenly spaced dashes
//! - [`Arrow`] - Segment with a fixed-angle arrowhead at one or both ends
//! - [`Spacer`] - Empty space inside a stack

use crate::error::{LayoutError, Result};
use crate::geometry::{Direction, Point, PointExt};
use crate::node::{Node, NodeCore};
use crate::renderer::Renderer;
use crate::style::Style;

/// A rectangle spanning `position` to `position + (width, height)`.
///
/// Children are rendered on top of it, at their offsets from its top-left
/// corner.
#[derive(Debug)]
pub struct Rectangle {
    core: NodeCore,
}

impl Rectangle {
    /// A rectangle of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            core: NodeCore::new(width, height, Style::default()),
        }
    }
}

impl Node for Rectangle {
    fn kind(&self) -> &'static str {
        "Rectangle"
    }

    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    // SAFETY: position plus the rectangle's size stays within display coordinates.
    #[allow(clippy::arithmetic_side_effects)]
    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        let bottom_right = position + Point::new(self.width()?, self.height()?);
        renderer.rectangle(position, bottom_right, self.style());
        self.core.render_children(renderer, position)
    }
}

/// A straight segment between two points relative to the node's position.
///
/// The width and height are taken once, when the line is built, as the
/// larger x and y of the two endpoints. Moving an endpoint afterwards does
/// not change them.
#[derive(Debug)]
pub struct Line {
    core: NodeCore,
    start: Point,
    end: Point,
}

impl Line {
    /// A line from the origin to `end`.
    pub fn new(end: Point) -> Self {
        Self::between(Point::zero(), end)
    }

    /// A line from `start` to `end`.
    pub fn between(start: Point, end: Point) -> Self {
        Self {
            core: NodeCore::new(start.x.max(end.x), start.y.max(end.y), Style::default()),
            start,
            end,
        }
    }

    /// Start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Move the start point. The node's size is left as it was.
    pub fn set_start(&mut self, start: Point) {
        self.start = start;
    }

    /// Move the end point. The node's size is left as it was.
    pub fn set_end(&mut self, end: Point) {
        self.end = end;
    }
}

impl Node for Line {
    fn kind(&self) -> &'static str {
        "Line"
    }

    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    // SAFETY: endpoints are display coordinates; adding the position cannot overflow.
    #[allow(clippy::arithmetic_side_effects)]
    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        renderer.line(self.start + position, self.end + position, self.style());
        Ok(())
    }
}

/// Default dash length of a [`DottedLine`].
pub const DEFAULT_DASH_LEN: i32 = 10;

/// A line drawn as dashes.
///
/// `floor(length / dash_len)` dashes are drawn, each `dash_len / 2` long and
/// starting `dash_len` after the previous one. Vertical lines always step
/// downwards from the start point.
///
/// ```
/// use boxdraw_layout::prelude::*;
///
/// let dots = DottedLine::new(Point::new(100, 0)).dash_len(10);
/// assert_eq!(dots.dash_count(), 10);
/// assert_eq!(dots.width().unwrap(), 100);
/// ```
#[derive(Debug)]
pub struct DottedLine {
    line: Line,
    dash_len: i32,
}

impl DottedLine {
    /// A dotted line from the origin to `end`.
    pub fn new(end: Point) -> Self {
        Self::between(Point::zero(), end)
    }

    /// A dotted line from `start` to `end`.
    pub fn between(start: Point, end: Point) -> Self {
        Self {
            line: Line::between(start, end),
            dash_len: DEFAULT_DASH_LEN,
        }
    }

    /// Set the distance between dash starts.
    pub fn dash_len(mut self, dash_len: i32) -> Self {
        self.dash_len = dash_len;
        self
    }

    /// The underlying segment.
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Number of dashes drawn; zero for a non-positive dash length.
    // SAFETY: the quotient of a display length and a positive dash length fits in usize.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn dash_count(&self) -> usize {
        if self.dash_len <= 0 {
            return 0;
        }
        let length = (self.line.end - self.line.start).length();
        (length / self.dash_len as f32).floor() as usize
    }
}

impl Node for DottedLine {
    fn kind(&self) -> &'static str {
        "DottedLine"
    }

    fn core(&self) -> &NodeCore {
        self.line.core()
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        self.line.core_mut()
    }

    // SAFETY: dash distances are bounded by the segment length, a display size.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        if self.dash_len <= 0 {
            return Err(LayoutError::InvalidDashLength(self.dash_len));
        }

        let direction = Direction::between(self.line.start, self.line.end);
        let origin = self.line.start + position;
        let half = (self.dash_len / 2) as f32;

        for dash in 0..self.dash_count() {
            let distance = (dash as f32) * self.dash_len as f32;
            let from = direction.advance(origin, distance);
            let to = direction.advance(origin, distance + half);
            renderer.line(from, to, self.style());
        }
        Ok(())
    }
}

/// Default arrowhead stroke length of an [`Arrow`].
pub const DEFAULT_ARROW_LENGTH: i32 = 10;

/// A line with an arrowhead at its end, and optionally at its start.
///
/// The arrowhead does not follow the line's angle: at the tip it is drawn
/// as strokes to `tip - (len, 0)` and `tip + (-len, len)`. The start head
/// mirrors it with strokes to `start + (len, 0)` and `start + (len, -len)`.
#[derive(Debug)]
pub struct Arrow {
    line: Line,
    double_sided: bool,
    arrow_length: i32,
}

impl Arrow {
    /// An arrow from the origin to `end`.
    pub fn new(end: Point) -> Self {
        Self::between(Point::zero(), end)
    }

    /// An arrow from `start` to `end`.
    pub fn between(start: Point, end: Point) -> Self {
        Self {
            line: Line::between(start, end),
            double_sided: false,
            arrow_length: DEFAULT_ARROW_LENGTH,
        }
    }

    /// Draw an arrowhead at the start as well.
    pub fn double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    /// Set the length of the arrowhead strokes.
    pub fn arrow_length(mut self, arrow_length: i32) -> Self {
        self.arrow_length = arrow_length;
        self
    }

    /// The underlying segment.
    pub fn line(&self) -> &Line {
        &self.line
    }
}

impl Node for Arrow {
    fn kind(&self) -> &'static str {
        "Arrow"
    }

    fn core(&self) -> &NodeCore {
        self.line.core()
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        self.line.core_mut()
    }

    // SAFETY: arrowhead points are display coordinates offset by a small stroke length.
    #[allow(clippy::arithmetic_side_effects)]
    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        let style = self.style();
        let len = self.arrow_length;
        let start = self.line.start + position;
        let tip = self.line.end + position;

        renderer.line(start, tip, style);
        renderer.line(tip, tip - Point::new(len, 0), style);
        renderer.line(tip, tip + Point::new(-len, len), style);

        if self.double_sided {
            renderer.line(start, start + Point::new(len, -len), style);
            renderer.line(start, start + Point::new(len, 0), style);
        }
        Ok(())
    }
}

/// Empty space.
///
/// A spacer without an explicit size takes its style's padding on both
/// axes.
///
/// ```
/// use boxdraw_layout::prelude::*;
///
/// let gap = Spacer::new().styled(Style::default().with_padding(6));
/// assert_eq!(gap.width().unwrap(), 6);
/// assert_eq!(Spacer::sized(0, 12).height().unwrap(), 12);
/// ```
#[derive(Debug, Default)]
pub struct Spacer {
    core: NodeCore,
}

impl Spacer {
    /// A spacer sized by its style's padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// A spacer with an explicit size.
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            core: NodeCore::new(width, height, Style::default()),
        }
    }
}

impl Node for Spacer {
    fn kind(&self) -> &'static str {
        "Spacer"
    }

    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn width(&self) -> Result<i32> {
        Ok(self.core.width.px().unwrap_or(self.core.style.padding))
    }

    fn height(&self) -> Result<i32> {
        Ok(self.core.height.px().unwrap_or(self.core.style.padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Dimension;

    #[test]
    fn test_rectangle_size() {
        let rect = Rectangle::new(40, 20);
        assert_eq!(rect.width(), Ok(40));
        assert_eq!(rect.height(), Ok(20));
    }

    #[test]
    fn test_line_size_from_endpoints() {
        let line = Line::between(Point::new(10, 30), Point::new(50, 5));
        assert_eq!(line.width(), Ok(50));
        assert_eq!(line.height(), Ok(30));
    }

    #[test]
    fn test_line_size_ignores_later_moves() {
        let mut line = Line::new(Point::new(20, 10));
        line.set_end(Point::new(200, 100));
        assert_eq!(line.end(), Point::new(200, 100));
        assert_eq!(line.width(), Ok(20));
        assert_eq!(line.height(), Ok(10));
    }

    #[test]
    fn test_dash_count_floors() {
        assert_eq!(DottedLine::new(Point::new(100, 0)).dash_count(), 10);
        assert_eq!(DottedLine::new(Point::new(105, 0)).dash_count(), 10);
        assert_eq!(DottedLine::new(Point::new(0, 25)).dash_len(5).dash_count(), 5);
        assert_eq!(DottedLine::new(Point::zero()).dash_count(), 0);
        assert_eq!(DottedLine::new(Point::new(50, 0)).dash_len(0).dash_count(), 0);
    }

    #[test]
    fn test_spacer_defaults_to_padding() {
        let spacer = Spacer::new();
        assert_eq!(spacer.width(), Ok(10));
        assert_eq!(spacer.height(), Ok(10));
    }

    #[test]
    fn test_spacer_explicit_size_wins() {
        let spacer = Spacer::sized(3, 0).styled(Style::default().with_padding(40));
        assert_eq!(spacer.width(), Ok(3));
        assert_eq!(spacer.height(), Ok(0));
    }

    #[test]
    fn test_spacer_partial_size() {
        let mut spacer = Spacer::new();
        spacer.set_height(25).unwrap();
        assert_eq!(spacer.width(), Ok(10));
        assert_eq!(spacer.height(), Ok(25));
        assert_eq!(spacer.core().width, Dimension::Auto);
    }

    #[test]
    fn test_arrow_and_dotted_sizes_follow_line() {
        let arrow = Arrow::between(Point::new(5, 5), Point::new(60, 0)).double_sided(true);
        assert_eq!(arrow.width(), Ok(60));
        assert_eq!(arrow.height(), Ok(5));
        assert_eq!(arrow.line().start(), Point::new(5, 5));

        let dots = DottedLine::between(Point::new(0, 8), Point::new(0, 40));
        assert_eq!(dots.height(), Ok(40));
        assert_eq!(dots.line().end(), Point::new(0, 40));
    }
}
