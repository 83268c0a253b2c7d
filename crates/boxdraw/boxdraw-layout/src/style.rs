//! Visual attributes for layout nodes.
//!
//! A [`Style`] is an immutable value: nodes own a snapshot of the style they
//! were built with, and new styles are derived from existing ones by
//! overriding only the fields that differ.
//!
//! # Core Types
//!
//! - [`Anchor`] - Text origin alignment handed to the renderer
//! - [`Align`] - Cross-axis alignment declared on stacking layouts
//! - [`Style`] - Padding, font and colours
//! - [`StyleContext`] - Replaceable default style used when building trees
//!
//! # Example
//!
//! ```
//! use boxdraw_layout::style::*;
//!
//! let base = Style::default();
//! let warning = base.clone().with_font_color("red").with_font_size(24);
//!
//! assert_eq!(warning.font_color, "red");
//! assert_eq!(warning.padding, base.padding);
//! assert_eq!(warning.anchor, Anchor::TopLeft);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;
use crate::node::Node;

/// Text anchor: where the text origin sits relative to the drawn glyphs.
///
/// The two-letter codes follow the usual horizontal-then-vertical
/// convention (`l`/`m`/`r`, then `a`scender/`m`iddle/`d`escender).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// Top edge, left side.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "la"))]
    TopLeft,
    /// Top edge, horizontally centred.
    #[cfg_attr(feature = "serde", serde(rename = "ma"))]
    TopMiddle,
    /// Top edge, right side.
    #[cfg_attr(feature = "serde", serde(rename = "ra"))]
    TopRight,
    /// Vertically centred, left side.
    #[cfg_attr(feature = "serde", serde(rename = "lm"))]
    MiddleLeft,
    /// Centred on both axes.
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    MiddleMiddle,
    /// Vertically centred, right side.
    #[cfg_attr(feature = "serde", serde(rename = "rm"))]
    MiddleRight,
    /// Bottom edge, left side.
    #[cfg_attr(feature = "serde", serde(rename = "ld"))]
    BottomLeft,
    /// Bottom edge, horizontally centred.
    #[cfg_attr(feature = "serde", serde(rename = "md"))]
    BottomMiddle,
    /// Bottom edge, right side.
    #[cfg_attr(feature = "serde", serde(rename = "rd"))]
    BottomRight,
}

impl Anchor {
    /// All nine anchors, row by row.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopMiddle,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleMiddle,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomMiddle,
        Anchor::BottomRight,
    ];

    /// The two-letter anchor code (`"la"`, `"mm"`, `"rd"`, ...).
    pub const fn as_code(self) -> &'static str {
        match self {
            Anchor::TopLeft => "la",
            Anchor::TopMiddle => "ma",
            Anchor::TopRight => "ra",
            Anchor::MiddleLeft => "lm",
            Anchor::MiddleMiddle => "mm",
            Anchor::MiddleRight => "rm",
            Anchor::BottomLeft => "ld",
            Anchor::BottomMiddle => "md",
            Anchor::BottomRight => "rd",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for Anchor {
    type Err = LayoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.as_code() == code)
            .ok_or_else(|| LayoutError::UnknownAnchor(code.to_owned()))
    }
}

/// Cross-axis alignment for stacking layouts and text.
///
/// Only part of this is realised: [`VLayout`](crate::containers::VLayout)
/// always centres its children horizontally, [`HLayout`](crate::containers::HLayout)
/// never aligns vertically, and [`Text`](crate::text::Text) distinguishes
/// `Right` from everything else.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Align to the top edge.
    Top,
    /// Centre on the cross axis.
    #[default]
    Center,
    /// Align to the bottom edge.
    Bottom,
    /// Align to the right edge.
    Right,
    /// Align to the left edge.
    Left,
}

/// Immutable visual attributes of a node.
///
/// Colours and the font are opaque identifiers; only the renderer gives
/// them meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Padding in pixels (canvas margin, default spacer size).
    pub padding: i32,
    /// Font identifier, typically a font file name.
    pub font: String,
    /// Font size in pixels.
    pub font_size: u32,
    /// Text anchor.
    pub anchor: Anchor,
    /// Outline colour.
    pub stroke_color: String,
    /// Fill colour.
    pub fill_color: String,
    /// Text colour.
    pub font_color: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: 10,
            font: "Roboto-Regular.ttf".to_owned(),
            font_size: 32,
            anchor: Anchor::TopLeft,
            stroke_color: "black".to_owned(),
            fill_color: "white".to_owned(),
            font_color: "black".to_owned(),
        }
    }
}

impl Style {
    /// Derive a style with a different padding.
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Derive a style with a different font.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Derive a style with a different font size.
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Derive a style with a different anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Derive a style with a different stroke colour.
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Derive a style with a different fill colour.
    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }

    /// Derive a style with a different font colour.
    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = color.into();
        self
    }
}

/// Holder for the default style used while building a tree.
///
/// Nodes built through [`build`](StyleContext::build) take a copy of the
/// current default, so replacing the default here never changes nodes that
/// were already built. Nodes constructed directly start from
/// [`Style::default`].
///
/// ```
/// use boxdraw_layout::prelude::*;
///
/// let mut ctx = StyleContext::default();
/// let before = ctx.build(Spacer::new());
///
/// ctx.set_default_style(Style::default().with_padding(4));
/// let after = ctx.build(Spacer::new());
///
/// assert_eq!(before.width().unwrap(), 10);
/// assert_eq!(after.width().unwrap(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleContext {
    default: Style,
}

impl StyleContext {
    /// Create a context with the given default style.
    pub fn new(default: Style) -> Self {
        Self { default }
    }

    /// Replace the default style for nodes built from now on.
    pub fn set_default_style(&mut self, style: Style) {
        tracing::debug!(?style, "default style replaced");
        self.default = style;
    }

    /// Borrow the current default style.
    pub fn default_style(&self) -> &Style {
        &self.default
    }

    /// Snapshot of the current default style.
    pub fn style(&self) -> Style {
        self.default.clone()
    }

    /// Give a freshly constructed node the current default style.
    pub fn build<N: Node>(&self, node: N) -> N {
        node.styled(self.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = Style::default();
        assert_eq!(style.padding, 10);
        assert_eq!(style.font, "Roboto-Regular.ttf");
        assert_eq!(style.font_size, 32);
        assert_eq!(style.anchor, Anchor::TopLeft);
        assert_eq!(style.stroke_color, "black");
        assert_eq!(style.fill_color, "white");
        assert_eq!(style.font_color, "black");
    }

    #[test]
    fn test_derive_font_color_only() {
        let base = Style::default().with_padding(3).with_anchor(Anchor::BottomRight);
        let derived = base.clone().with_font_color("red");

        assert_eq!(derived.font_color, "red");
        assert_eq!(
            Style {
                font_color: base.font_color.clone(),
                ..derived.clone()
            },
            base
        );
    }

    #[test]
    fn test_derive_leaves_source_untouched() {
        let base = Style::default();
        let _ = base.clone().with_fill_color("gray").with_font("Mono.ttf");
        assert_eq!(base, Style::default());
    }

    #[test]
    fn test_anchor_codes_round_trip() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.as_code().parse::<Anchor>().unwrap(), anchor);
        }
        assert_eq!(Anchor::MiddleMiddle.to_string(), "mm");
    }

    #[test]
    fn test_unknown_anchor_code() {
        assert_eq!(
            "xx".parse::<Anchor>(),
            Err(LayoutError::UnknownAnchor("xx".to_owned()))
        );
    }

    #[test]
    fn test_context_snapshot() {
        let mut ctx = StyleContext::default();
        let snapshot = ctx.style();
        ctx.set_default_style(Style::default().with_font_size(12));

        assert_eq!(snapshot.font_size, 32);
        assert_eq!(ctx.default_style().font_size, 12);
    }

    #[test]
    fn test_context_build_applies_current_default() {
        use crate::text::TextBox;

        let mut ctx = StyleContext::default();
        ctx.set_default_style(Style::default().with_stroke_color("gray"));
        let label = ctx.build(TextBox::new("x", 10, 10));

        ctx.set_default_style(Style::default());
        let plain = ctx.build(TextBox::new("y", 10, 10));

        assert_eq!(label.style().stroke_color, "gray");
        assert_eq!(label.children()[0].node().style().stroke_color, "gray");
        assert_eq!(plain.style().stroke_color, "black");
    }

    #[test]
    fn test_align_default_is_center() {
        assert_eq!(Align::default(), Align::Center);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_style_from_partial_json() {
        let style: Style =
            serde_json::from_str(r#"{ "padding": 4, "anchor": "mm", "font_color": "gray" }"#)
                .unwrap();
        assert_eq!(style.padding, 4);
        assert_eq!(style.anchor, Anchor::MiddleMiddle);
        assert_eq!(style.font_color, "gray");
        assert_eq!(style.font_size, 32);
    }
}
