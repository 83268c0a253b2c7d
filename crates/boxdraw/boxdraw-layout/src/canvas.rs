//! The root of a layout tree.
//!
//! A [`Canvas`] owns the top-level nodes and drives the whole traversal:
//! for each top-level child it runs the prepare pass, renders the child
//! inset by the canvas padding, and grows its own size to fit. Once every
//! child is drawn the final size is reported to the renderer.
//!
//! # Example
//!
//! ```
//! use boxdraw_layout::prelude::*;
//!
//! # struct Backend;
//! # impl Renderer for Backend {
//! #     fn rectangle(&mut self, _: Point, _: Point, _: &Style) {}
//! #     fn line(&mut self, _: Point, _: Point, _: &Style) {}
//! #     fn text(&mut self, _: &str, _: Point, _: &Style) {}
//! #     fn text_bbox(&mut self, _: &str, _: &Style) -> TextBounds { TextBounds::default() }
//! #     fn set_dimensions(&mut self, _: Size) {}
//! # }
//! let mut canvas = Canvas::new().child(Rectangle::new(50, 30));
//!
//! let size = canvas.render(&mut Backend, Point::zero())?;
//! assert_eq!(size, Size::new(70, 50));
//! # Ok::<(), LayoutError>(())
//! ```

use crate::error::{Axis, Result};
use crate::geometry::{Point, PointExt, Size};
use crate::node::{Child, Dimension, Node, NodeCore};
use crate::renderer::Renderer;
use crate::style::{Style, StyleContext};

/// Root node of a drawing.
///
/// The canvas size is only accurate for a single top-level child: with
/// several, each one is measured against the running maximum but their
/// footprints are not combined, and the renderer only learns the final
/// size after everything has been drawn.
#[derive(Debug, Default)]
pub struct Canvas {
    core: NodeCore,
}

impl Canvas {
    /// An empty canvas with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty canvas using the context's current default style.
    pub fn new_in(styles: &StyleContext) -> Self {
        Self::new().styled(styles.style())
    }

    /// Append a top-level node at the canvas origin.
    pub fn add<N: Node + 'static>(&mut self, node: N) {
        self.add_at(node, Point::zero());
    }

    /// Append a top-level node at `offset` from the padded origin.
    pub fn add_at<N: Node + 'static>(&mut self, node: N, offset: Point) {
        self.core.push(Child::new(Box::new(node), offset));
    }

    /// Builder form of [`add`](Canvas::add).
    pub fn child<N: Node + 'static>(mut self, node: N) -> Self {
        self.add(node);
        self
    }

    /// Builder form of [`add_at`](Canvas::add_at).
    pub fn child_at<N: Node + 'static>(mut self, node: N, offset: Point) -> Self {
        self.add_at(node, offset);
        self
    }

    /// Replace the canvas style; its padding insets every top-level node.
    pub fn styled(mut self, style: Style) -> Self {
        self.core.style = style;
        self
    }

    /// The canvas style.
    pub fn style(&self) -> &Style {
        &self.core.style
    }

    /// Top-level nodes in render order.
    pub fn children(&self) -> &[Child] {
        self.core.children()
    }

    /// Width computed by the last [`render`](Canvas::render).
    pub fn width(&self) -> Result<i32> {
        self.core.width.resolve("Canvas", Axis::Horizontal)
    }

    /// Height computed by the last [`render`](Canvas::render).
    pub fn height(&self) -> Result<i32> {
        self.core.height.resolve("Canvas", Axis::Vertical)
    }

    /// Prepare and render every top-level node, then report the canvas size
    /// to the renderer.
    ///
    /// Each node is drawn at `origin + (padding, padding) + offset`. The
    /// canvas grows to the largest `node size + draw position` seen, plus the
    /// padding once more on each axis. Calling this again recomputes the
    /// size from scratch.
    ///
    /// # Errors
    ///
    /// Any [`LayoutError`](crate::error::LayoutError) raised while preparing
    /// or rendering a node; the renderer is then not told a size.
    // SAFETY: sizes and positions are display coordinates; sums stay within i32.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn render(&mut self, renderer: &mut dyn Renderer, origin: Point) -> Result<Size> {
        let padding = self.core.style.padding;
        let inset = origin + Point::splat(padding);
        let mut width = padding;
        let mut height = padding;

        for child in self.core.children_mut() {
            let offset = child.offset();
            let node = child.node_mut();
            tracing::debug!(node = node.kind(), ?offset, "canvas child");

            node.prepare(renderer)?;
            tracing::trace!(tree = %crate::debug::outline(&*node), "prepared");

            let position = inset + offset;
            node.render(renderer, position)?;

            width = width.max(node.width()? + position.x);
            height = height.max(node.height()? + position.y);
        }

        width += padding;
        height += padding;
        self.core.width = Dimension::Px(width);
        self.core.height = Dimension::Px(height);

        let size = Size::new(clamp_to_size(width), clamp_to_size(height));
        tracing::debug!(?size, "canvas dimensions");
        renderer.set_dimensions(size);
        Ok(size)
    }
}

fn clamp_to_size(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
