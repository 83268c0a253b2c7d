//! Boxdraw Layout Engine
//!
//! Declarative layout tree for composing rectangles, lines, text and
//! tables into a drawing that sizes itself and renders through a pluggable
//! backend.
//!
//! # Architecture
//!
//! - Core types: Point, Style, Anchor, Dimension
//! - Node tree: `Node` trait, shared `NodeCore`, plain `Group`
//! - Containers: VLayout, HLayout, Table
//! - Shapes: Rectangle, Line, DottedLine, Arrow, Spacer
//! - Text: Text, TextBox
//! - Root: Canvas (prepare, render, report size)
//! - Rendering: `Renderer` trait and an embedded-graphics backend
//!
//! # Example
//!
//! ```
//! use boxdraw_layout::prelude::*;
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::Gray4;
//!
//! let small = Style::default().with_font_size(10).with_padding(2);
//!
//! let mut canvas = Canvas::new().styled(small.clone()).child(
//!     VLayout::new()
//!         .child(TextBox::new("A", 20, 12).styled(small.clone()))
//!         .child(Spacer::sized(0, 4))
//!         .child(Arrow::new(Point::new(0, 10)).styled(small)),
//! );
//!
//! let mut display = MockDisplay::<Gray4>::new();
//! display.set_allow_overdraw(true);
//! let mut renderer = DrawTargetRenderer::new(&mut display);
//!
//! let size = canvas.render(&mut renderer, Point::zero())?;
//! assert_eq!(size, Size::new(24, 30));
//! # Ok::<(), LayoutError>(())
//! ```

#![forbid(unsafe_code)]

pub mod canvas;
pub mod containers;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod node;
pub mod render;
pub mod renderer;
pub mod shapes;
pub mod style;
pub mod text;

pub mod prelude {
    //! Everything needed to build and render a tree.

    pub use crate::canvas::Canvas;
    pub use crate::containers::{HLayout, Table, VLayout};
    pub use crate::error::{LayoutError, Result};
    pub use crate::geometry::{Point, PointExt, Size};
    pub use crate::node::{Child, Dimension, Group, Node, NodeCore};
    pub use crate::render::DrawTargetRenderer;
    pub use crate::renderer::{Renderer, TextBounds};
    pub use crate::shapes::{Arrow, DottedLine, Line, Rectangle, Spacer};
    pub use crate::style::{Align, Anchor, Style, StyleContext};
    pub use crate::text::{Text, TextBox};
}
