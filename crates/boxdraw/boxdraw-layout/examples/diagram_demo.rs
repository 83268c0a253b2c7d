//! Diagram Demo
//!
//! Builds a small signal-chain diagram and prints every drawing command.
//!
//! ```text
//! RUST_LOG=boxdraw_layout=trace cargo run -p boxdraw-layout --example diagram_demo
//! ```

#![allow(missing_docs)]
#![allow(clippy::print_stdout, clippy::use_debug)]

use boxdraw_layout::debug::outline;
use boxdraw_layout::prelude::*;
use boxdraw_layout::render::measure_text;
use tracing_subscriber::EnvFilter;

/// Prints each command instead of drawing it. Text is measured with the
/// same mono fonts the embedded-graphics backend uses.
#[derive(Default)]
struct Console {
    commands: usize,
}

impl Renderer for Console {
    fn rectangle(&mut self, top_left: Point, bottom_right: Point, style: &Style) {
        self.commands = self.commands.saturating_add(1);
        println!(
            "rect   {:?} -> {:?} stroke={} fill={}",
            top_left, bottom_right, style.stroke_color, style.fill_color
        );
    }

    fn line(&mut self, start: Point, end: Point, style: &Style) {
        self.commands = self.commands.saturating_add(1);
        println!("line   {:?} -> {:?} stroke={}", start, end, style.stroke_color);
    }

    fn text(&mut self, text: &str, position: Point, style: &Style) {
        self.commands = self.commands.saturating_add(1);
        println!("text   {:?} {:?} anchor={}", text, position, style.anchor);
    }

    fn text_bbox(&mut self, text: &str, style: &Style) -> TextBounds {
        measure_text(text, style.font_size)
    }

    fn set_dimensions(&mut self, size: Size) {
        println!("canvas {}x{}", size.width, size.height);
    }
}

fn main() -> Result<(), LayoutError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut styles = StyleContext::default();
    styles.set_default_style(Style::default().with_font_size(13).with_padding(8));

    let stage = |name: &str| styles.build(TextBox::new(name, 90, 30));

    let header = Table::new()
        .child(styles.build(Text::new("Stage")))
        .child(Rectangle::new(4, 18).styled(styles.style().with_fill_color("gray")))
        .child(styles.build(Text::new("Rate").align(Align::Right)));

    let chain = VLayout::new()
        .child(header)
        .child(styles.build(Spacer::new()))
        .child(stage("Decoder"))
        .child(styles.build(Arrow::new(Point::new(0, 20))))
        .child(stage("Resampler"))
        .child(DottedLine::new(Point::new(0, 30)).dash_len(6))
        .child(stage("DAC"));

    let mut canvas = Canvas::new_in(&styles).child(chain);

    let mut console = Console::default();
    let size = canvas.render(&mut console, Point::zero())?;

    if let Some(root) = canvas.children().first() {
        println!("\n{}", outline(root.node()));
    }
    println!("{} commands, canvas {:?}", console.commands, size);
    Ok(())
}
