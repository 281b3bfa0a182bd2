use std::io::Write;

use crossterm::style::{Color, Stylize};

pub(crate) const SEPARATOR: &str =
    "============================================================";

const TITLE: &str = "🤖 Job Tracker Extension API Tester";

const TITLE_RGB: (u8, u8, u8) = (0x80, 0x4c, 0xff);
const SUBTITLE_RGB: (u8, u8, u8) = (0xff, 0x5f, 0xc8);

pub(crate) fn write_banner<W: Write>(out: &mut W, use_color: bool) -> std::io::Result<()> {
    let description = format!(
        "capture-probe v{} | capture API smoke test",
        env!("CARGO_PKG_VERSION")
    );
    if use_color {
        writeln!(out, "{}", TITLE.with(rgb(TITLE_RGB)).bold())?;
        writeln!(out, "{}", description.with(rgb(SUBTITLE_RGB)))?;
    } else {
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", description)?;
    }
    writeln!(out, "{}", SEPARATOR)
}

const fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}
