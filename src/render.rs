use crate::models::TodoItem;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

/// Colour settings shared by every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Colour only when stdout is an interactive terminal
    pub fn for_stdout() -> Self {
        Palette::new(io::stdout().is_terminal())
    }

    pub fn mark(&self, item: &TodoItem) -> String {
        let icon = item.icon();
        match (self.enabled, item.done) {
            (false, _) => icon.to_string(),
            (true, true) => icon.bright_green().bold().to_string(),
            (true, false) => icon.bright_red().bold().to_string(),
        }
    }

    pub fn prompt(&self, text: &str) -> String {
        if self.enabled {
            text.bright_cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

/// One line per item: mark, `#id` padded to four columns, text
pub fn render_item(item: &TodoItem, palette: &Palette) -> String {
    format!("{} #{:<4} {}", palette.mark(item), item.id, item.text)
}

pub fn write_items<W: Write + ?Sized>(
    out: &mut W,
    items: &[TodoItem],
    palette: &Palette,
) -> io::Result<()> {
    for item in items {
        writeln!(out, "{}", render_item(item, palette))?;
    }
    Ok(())
}
