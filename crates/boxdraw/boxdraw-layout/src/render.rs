//! embedded-graphics backend for the layout tree.
//!
//! [`DrawTargetRenderer`] implements [`Renderer`] for any `DrawTarget` with
//! `Gray4` pixels, so a layout can be drawn straight onto a display, a
//! framebuffer or a `MockDisplay` in tests.
//!
//! # Mapping
//!
//! - Colours: `black`, `white`, `gray`/`grey`, `#rrggbb` (converted to luma)
//!   and `none`/`transparent`. Unknown names are not drawn.
//! - Fonts: the font identifier is ignored; the mono font is chosen by
//!   `font_size` (6x10 up to 10x20).
//! - Anchors: horizontal part to [`Alignment`], vertical part to [`Baseline`].
//!
//! # Example
//!
//! ```
//! use boxdraw_layout::prelude::*;
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::Gray4;
//!
//! let mut display = MockDisplay::<Gray4>::new();
//! display.set_allow_overdraw(true);
//! let mut renderer = DrawTargetRenderer::new(&mut display);
//!
//! let mut canvas = Canvas::new()
//!     .styled(Style::default().with_padding(2))
//!     .child(Rectangle::new(10, 5));
//! canvas.render(&mut renderer, Point::zero())?;
//!
//! assert_eq!(renderer.finish(), Ok(Some(Size::new(14, 9))));
//! # Ok::<(), LayoutError>(())
//! ```

use core::fmt;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_6X13, FONT_9X15, FONT_9X18},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::{Gray4, GrayColor},
    prelude::*,
    primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle},
    text::{renderer::TextRenderer, Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::renderer::{Renderer, TextBounds};
use crate::style::{Anchor, Style};

/// A [`Renderer`] drawing onto an embedded-graphics `DrawTarget`.
///
/// Drawing errors do not interrupt the layout pass. The first error is kept,
/// later draw calls are skipped, and [`finish`](DrawTargetRenderer::finish)
/// returns it.
pub struct DrawTargetRenderer<'a, D: DrawTarget<Color = Gray4>> {
    target: &'a mut D,
    error: Option<D::Error>,
    dimensions: Option<Size>,
}

impl<'a, D> DrawTargetRenderer<'a, D>
where
    D: DrawTarget<Color = Gray4>,
    D::Error: fmt::Debug,
{
    /// Wrap a draw target.
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            error: None,
            dimensions: None,
        }
    }

    /// Canvas size reported by the last completed render, if any.
    pub fn dimensions(&self) -> Option<Size> {
        self.dimensions
    }

    /// Finish drawing: the reported canvas size, or the first draw error.
    pub fn finish(self) -> Result<Option<Size>, D::Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.dimensions),
        }
    }

    fn draw(&mut self, draw: impl FnOnce(&mut D) -> Result<(), D::Error>) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = draw(self.target) {
            tracing::warn!(?error, "draw target failed; skipping remaining draws");
            self.error = Some(error);
        }
    }
}

impl<D> Renderer for DrawTargetRenderer<'_, D>
where
    D: DrawTarget<Color = Gray4>,
    D::Error: fmt::Debug,
{
    fn rectangle(&mut self, top_left: Point, bottom_right: Point, style: &Style) {
        let mut builder = PrimitiveStyleBuilder::<Gray4>::new();
        if let Some(stroke) = parse_color(&style.stroke_color) {
            builder = builder.stroke_color(stroke).stroke_width(1);
        }
        if let Some(fill) = parse_color(&style.fill_color) {
            builder = builder.fill_color(fill);
        }
        let primitive_style = builder.build();

        self.draw(|target| {
            Rectangle::with_corners(top_left, bottom_right)
                .into_styled(primitive_style)
                .draw(target)
        });
    }

    fn line(&mut self, start: Point, end: Point, style: &Style) {
        let Some(stroke) = parse_color(&style.stroke_color) else {
            return;
        };
        self.draw(|target| {
            Line::new(start, end)
                .into_styled(PrimitiveStyle::with_stroke(stroke, 1))
                .draw(target)
        });
    }

    fn text(&mut self, text: &str, position: Point, style: &Style) {
        let Some(color) = parse_color(&style.font_color) else {
            return;
        };
        let (alignment, baseline) = text_layout(style.anchor);
        let character_style = MonoTextStyle::new(font_for_size(style.font_size), color);
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();

        self.draw(|target| {
            Text::with_text_style(text, position, character_style, text_style)
                .draw(target)
                .map(|_| ())
        });
    }

    fn text_bbox(&mut self, text: &str, style: &Style) -> TextBounds {
        measure_text(text, style.font_size)
    }

    fn set_dimensions(&mut self, size: Size) {
        self.dimensions = Some(size);
    }
}

/// Text alignment and baseline for an anchor.
pub fn text_layout(anchor: Anchor) -> (Alignment, Baseline) {
    match anchor {
        Anchor::TopLeft => (Alignment::Left, Baseline::Top),
        Anchor::TopMiddle => (Alignment::Center, Baseline::Top),
        Anchor::TopRight => (Alignment::Right, Baseline::Top),
        Anchor::MiddleLeft => (Alignment::Left, Baseline::Middle),
        Anchor::MiddleMiddle => (Alignment::Center, Baseline::Middle),
        Anchor::MiddleRight => (Alignment::Right, Baseline::Middle),
        Anchor::BottomLeft => (Alignment::Left, Baseline::Bottom),
        Anchor::BottomMiddle => (Alignment::Center, Baseline::Bottom),
        Anchor::BottomRight => (Alignment::Right, Baseline::Bottom),
    }
}

/// Mono font used for a font size in pixels.
pub fn font_for_size(font_size: u32) -> &'static MonoFont<'static> {
    match font_size {
        0..=10 => &FONT_6X10,
        11..=13 => &FONT_6X13,
        14..=15 => &FONT_9X15,
        16..=18 => &FONT_9X18,
        _ => &FONT_10X20,
    }
}

/// Bounding box of `text` drawn top-left anchored at the origin.
pub fn measure_text(text: &str, font_size: u32) -> TextBounds {
    let character_style = MonoTextStyle::new(font_for_size(font_size), Gray4::BLACK);
    let bounds = character_style
        .measure_string(text, Point::zero(), Baseline::Top)
        .bounding_box;

    let width = i32::try_from(bounds.size.width).unwrap_or(i32::MAX);
    let height = i32::try_from(bounds.size.height).unwrap_or(i32::MAX);
    TextBounds::new(
        bounds.top_left.x,
        bounds.top_left.y,
        bounds.top_left.x.saturating_add(width),
        bounds.top_left.y.saturating_add(height),
    )
}

/// Parse a colour identifier into a grayscale level.
///
/// Returns `None` for `none`/`transparent` and for anything unrecognised.
///
/// ```
/// use boxdraw_layout::render::parse_color;
/// use embedded_graphics::pixelcolor::{Gray4, GrayColor};
///
/// assert_eq!(parse_color("black"), Some(Gray4::BLACK));
/// assert_eq!(parse_color("#ffffff"), Some(Gray4::WHITE));
/// assert_eq!(parse_color("none"), None);
/// ```
pub fn parse_color(color: &str) -> Option<Gray4> {
    match color.trim().to_ascii_lowercase().as_str() {
        "black" => Some(Gray4::BLACK),
        "white" => Some(Gray4::WHITE),
        "gray" | "grey" => Some(Gray4::new(0x8)),
        "none" | "transparent" => None,
        hex => parse_hex(hex),
    }
}

// SAFETY: channel values are u8; the weighted sum (max 255_000) fits in u32.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
fn parse_hex(hex: &str) -> Option<Gray4> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: core::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .map(u32::from)
    };
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    let luma = (r * 299 + g * 587 + b * 114) / 1000;
    Some(Gray4::new((luma >> 4) as u8))
}
