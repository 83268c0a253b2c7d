//! Text nodes.
//!
//! [`Text`] is the only node whose size can depend on the backend: any
//! dimension not given up front is measured through
//! [`Renderer::text_bbox`] during the prepare pass. [`TextBox`] is a
//! rectangle with a single text child centred inside it.

use crate::error::Result;
use crate::geometry::{floor_half, Point};
use crate::node::{Child, Dimension, Node, NodeCore};
use crate::renderer::Renderer;
use crate::shapes::Rectangle;
use crate::style::{Align, Anchor, Style};

/// A run of text.
///
/// Right-aligned text is drawn from its right edge: the draw position is
/// shifted right by the text's width and the anchor becomes
/// [`Anchor::TopRight`]. Any other alignment draws at the node's position
/// with the style's own anchor.
#[derive(Debug)]
pub struct Text {
    core: NodeCore,
    content: String,
    align: Align,
}

impl Text {
    /// Text whose size will be measured during prepare.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            core: NodeCore::default(),
            content: content.into(),
            align: Align::Left,
        }
    }

    /// Fix both dimensions so no measurement is needed.
    pub fn fixed_size(mut self, width: i32, height: i32) -> Self {
        self.core.width = Dimension::Px(width);
        self.core.height = Dimension::Px(height);
        self
    }

    /// Fix the width; the height is still measured.
    pub fn fixed_width(mut self, width: i32) -> Self {
        self.core.width = Dimension::Px(width);
        self
    }

    /// Fix the height; the width is still measured.
    pub fn fixed_height(mut self, height: i32) -> Self {
        self.core.height = Dimension::Px(height);
        self
    }

    /// Set the horizontal alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// The text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The horizontal alignment.
    pub fn alignment(&self) -> Align {
        self.align
    }
}

impl Node for Text {
    fn kind(&self) -> &'static str {
        "Text"
    }

    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn prepare(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        self.core.prepare_children(renderer)?;

        if self.core.width.is_auto() || self.core.height.is_auto() {
            let bounds = renderer.text_bbox(&self.content, &self.core.style);
            tracing::trace!(text = %self.content, ?bounds, "measured");

            if self.core.width.is_auto() {
                self.core.width = Dimension::Px(bounds.right);
            }
            if self.core.height.is_auto() {
                self.core.height = Dimension::Px(bounds.bottom);
            }
        }
        Ok(())
    }

    // SAFETY: position plus the text width stays within display coordinates.
    #[allow(clippy::arithmetic_side_effects)]
    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        if self.align == Align::Right {
            let right_edge = position + Point::new(self.width()?, 0);
            let style = self.core.style.clone().with_anchor(Anchor::TopRight);
            renderer.text(&self.content, right_edge, &style);
        } else {
            renderer.text(&self.content, position, &self.core.style);
        }
        Ok(())
    }
}

/// A rectangle holding one [`Text`] child.
///
/// With the default [`Anchor::MiddleMiddle`] the text is offset to the
/// rectangle's centre and its own anchor is set to `MiddleMiddle` so the
/// backend centres the glyphs on that point. Any other anchor leaves the
/// text at the rectangle's top-left corner with the box's style.
///
/// Changing the box's height moves the text to the box's centre, whatever
/// the anchor; changing its width does not move it.
///
/// ```
/// use boxdraw_layout::prelude::*;
///
/// let mut label = TextBox::new("Play", 80, 31);
/// assert_eq!(label.children()[0].offset(), Point::new(40, 15));
///
/// label.set_height(50).unwrap();
/// assert_eq!(label.children()[0].offset(), Point::new(40, 25));
/// ```
#[derive(Debug)]
pub struct TextBox {
    rect: Rectangle,
    anchor: Anchor,
}

impl TextBox {
    /// A box with its text centred.
    pub fn new(content: impl Into<String>, width: i32, height: i32) -> Self {
        Self::with_anchor(content, width, height, Anchor::MiddleMiddle)
    }

    /// A box with an explicit text anchor.
    pub fn with_anchor(
        content: impl Into<String>,
        width: i32,
        height: i32,
        anchor: Anchor,
    ) -> Self {
        let mut rect = Rectangle::new(width, height);
        let (style, offset) = text_placement(rect.style(), anchor, width, height);
        let text = Text::new(content)
            .fixed_size(width, height)
            .styled(style);
        rect.core_mut().push(Child::new(Box::new(text), offset));
        Self { rect, anchor }
    }

    /// The anchor the text was placed with.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    fn is_centered(&self) -> bool {
        self.anchor == Anchor::MiddleMiddle
    }
}

/// Style and offset of a text box's child for the given anchor.
fn text_placement(style: &Style, anchor: Anchor, width: i32, height: i32) -> (Style, Point) {
    if anchor == Anchor::MiddleMiddle {
        (
            style.clone().with_anchor(Anchor::MiddleMiddle),
            Point::new(floor_half(width), floor_half(height)),
        )
    } else {
        (style.clone(), Point::zero())
    }
}

impl Node for TextBox {
    fn kind(&self) -> &'static str {
        "TextBox"
    }

    fn core(&self) -> &NodeCore {
        self.rect.core()
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        self.rect.core_mut()
    }

    fn set_height(&mut self, height: i32) -> Result<()> {
        self.rect.set_height(height)?;

        let center = Point::new(floor_half(self.width()?), floor_half(height));
        if let Some(text) = self.core_mut().children_mut().first_mut() {
            text.offset = center;
        }
        Ok(())
    }

    fn set_style(&mut self, style: Style) {
        let text_style = if self.is_centered() {
            style.clone().with_anchor(Anchor::MiddleMiddle)
        } else {
            style.clone()
        };
        self.rect.set_style(style);
        if let Some(text) = self.core_mut().children_mut().first_mut() {
            text.node_mut().set_style(text_style);
        }
    }

    fn render(&self, renderer: &mut dyn Renderer, position: Point) -> Result<()> {
        self.rect.render(renderer, position)
    }
}
