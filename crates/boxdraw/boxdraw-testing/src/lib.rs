//! Boxdraw Testing Utilities
//!
//! Headless harness for layout trees: a [`RecordingRenderer`] that keeps
//! every drawing command instead of drawing it, with fixed glyph metrics so
//! text sizes are predictable.
//!
//! # Quick start
//!
//! ```
//! use boxdraw_layout::prelude::*;
//! use boxdraw_testing::{DrawCommand, RecordingRenderer};
//!
//! let mut canvas = Canvas::new().child(Rectangle::new(50, 30));
//! let mut r = RecordingRenderer::new();
//! canvas.render(&mut r, Point::zero()).unwrap();
//!
//! r.assert_dimensions(Size::new(70, 50)).unwrap();
//! r.assert_contains(&DrawCommand::Rectangle {
//!     top_left: Point::new(10, 10),
//!     bottom_right: Point::new(60, 40),
//! })
//! .unwrap();
//! ```
//!
//! Assertion helpers return `Result<(), String>` with a description of the
//! recorded commands on failure, so tests can `.unwrap()` them and get a
//! readable panic message.

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use boxdraw_layout::prelude::{Anchor, Point, Renderer, Size, Style, TextBounds};

/// Default glyph advance of the [`RecordingRenderer`].
pub const GLYPH_WIDTH: i32 = 6;

/// Default line height of the [`RecordingRenderer`].
pub const GLYPH_HEIGHT: i32 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// DrawCommand
// ─────────────────────────────────────────────────────────────────────────────

/// One call made on a [`Renderer`].
///
/// Styles are reduced to the parts tests care about: text keeps its anchor
/// since that is what alignment changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// [`Renderer::rectangle`]
    Rectangle {
        /// Top-left corner.
        top_left: Point,
        /// Bottom-right corner.
        bottom_right: Point,
    },
    /// [`Renderer::line`]
    Line {
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
    },
    /// [`Renderer::text`]
    Text {
        /// Text content.
        content: String,
        /// Draw position.
        position: Point,
        /// Anchor the text was drawn with.
        anchor: Anchor,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// RecordingRenderer
// ─────────────────────────────────────────────────────────────────────────────

/// A [`Renderer`] that records commands.
///
/// Text is measured as `chars * glyph_width` by `glyph_height`, regardless
/// of font, so expected sizes can be written down by hand.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    styles: Vec<Style>,
    dimensions: Vec<Size>,
    measured: Vec<String>,
    glyph_width: i32,
    glyph_height: i32,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    /// A recorder with the default glyph metrics.
    pub fn new() -> Self {
        Self::with_glyph_size(GLYPH_WIDTH, GLYPH_HEIGHT)
    }

    /// A recorder with custom glyph metrics.
    pub fn with_glyph_size(glyph_width: i32, glyph_height: i32) -> Self {
        Self {
            commands: Vec::new(),
            styles: Vec::new(),
            dimensions: Vec::new(),
            measured: Vec::new(),
            glyph_width,
            glyph_height,
        }
    }

    /// Every command in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Style passed with each command, parallel to [`commands`](Self::commands).
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Only the line commands, as `(start, end)`.
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line { start, end } => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    /// Only the rectangle commands, as `(top_left, bottom_right)`.
    pub fn rectangles(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rectangle {
                    top_left,
                    bottom_right,
                } => Some((*top_left, *bottom_right)),
                _ => None,
            })
            .collect()
    }

    /// Only the text commands.
    pub fn texts(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Text { .. }))
            .collect()
    }

    /// Every size reported through [`Renderer::set_dimensions`].
    pub fn dimensions(&self) -> &[Size] {
        &self.dimensions
    }

    /// Strings passed to [`Renderer::text_bbox`], in call order.
    pub fn measured(&self) -> &[String] {
        &self.measured
    }

    /// Number of [`Renderer::text_bbox`] calls.
    pub fn measure_count(&self) -> usize {
        self.measured.len()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.styles.clear();
        self.dimensions.clear();
        self.measured.clear();
    }

    // ── assertions ──────────────────────────────────────────────────────────

    /// Assert the exact number of recorded commands.
    pub fn assert_command_count(&self, expected: usize) -> Result<(), String> {
        if self.commands.len() == expected {
            Ok(())
        } else {
            Err(format!(
                "expected {} commands, recorded {}: {}",
                expected,
                self.commands.len(),
                self.describe()
            ))
        }
    }

    /// Assert that `command` was recorded at least once.
    #[allow(clippy::use_debug)]
    pub fn assert_contains(&self, command: &DrawCommand) -> Result<(), String> {
        if self.commands.contains(command) {
            Ok(())
        } else {
            Err(format!("{command:?} not recorded: {}", self.describe()))
        }
    }

    /// Assert that the canvas size was reported exactly once, as `expected`.
    pub fn assert_dimensions(&self, expected: Size) -> Result<(), String> {
        match self.dimensions.as_slice() {
            [size] if *size == expected => Ok(()),
            [size] => Err(format!(
                "canvas reported {}x{}, expected {}x{}",
                size.width, size.height, expected.width, expected.height
            )),
            sizes => Err(format!(
                "set_dimensions called {} times, expected once",
                sizes.len()
            )),
        }
    }

    /// Assert that `text` was measured exactly `expected` times.
    #[allow(clippy::use_debug)]
    pub fn assert_measured(&self, text: &str, expected: usize) -> Result<(), String> {
        let count = self.measured.iter().filter(|m| *m == text).count();
        if count == expected {
            Ok(())
        } else {
            Err(format!(
                "{text:?} measured {count} times, expected {expected} (all: {:?})",
                self.measured
            ))
        }
    }

    #[allow(clippy::use_debug)]
    fn describe(&self) -> String {
        self.commands
            .iter()
            .map(|command| format!("{command:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn record(&mut self, command: DrawCommand, style: &Style) {
        self.commands.push(command);
        self.styles.push(style.clone());
    }
}

impl Renderer for RecordingRenderer {
    fn rectangle(&mut self, top_left: Point, bottom_right: Point, style: &Style) {
        self.record(
            DrawCommand::Rectangle {
                top_left,
                bottom_right,
            },
            style,
        );
    }

    fn line(&mut self, start: Point, end: Point, style: &Style) {
        self.record(DrawCommand::Line { start, end }, style);
    }

    fn text(&mut self, text: &str, position: Point, style: &Style) {
        self.record(
            DrawCommand::Text {
                content: text.to_owned(),
                position,
                anchor: style.anchor,
            },
            style,
        );
    }

    fn text_bbox(&mut self, text: &str, _style: &Style) -> TextBounds {
        self.measured.push(text.to_owned());
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        TextBounds::new(0, 0, chars.saturating_mul(self.glyph_width), self.glyph_height)
    }

    fn set_dimensions(&mut self, size: Size) {
        self.dimensions.push(size);
    }
}

/// Install a `tracing` subscriber honouring `RUST_LOG`, writing through the
/// test harness so output only shows for failing tests.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
