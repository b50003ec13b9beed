//! Console color control
//!
//! Maps a semantic color to the ANSI SGR escape sequence understood by
//! terminals. Escape bytes are written as-is; a non-terminal destination
//! simply receives them verbatim.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Reset all attributes.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Red,
    Green,
    Yellow,
    Blue,
    Gray,
    Reset,
}

impl ConsoleColor {
    fn as_colored(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            ConsoleColor::Red => Some(Red),
            ConsoleColor::Green => Some(Green),
            ConsoleColor::Yellow => Some(Yellow),
            ConsoleColor::Blue => Some(Blue),
            ConsoleColor::Gray => Some(BrightBlack),
            ConsoleColor::Reset => None,
        }
    }

    /// The full escape sequence for this color, e.g. `"\x1b[32m"` for green.
    pub fn escape_sequence(&self) -> String {
        match self.as_colored() {
            Some(color) => format!("\x1b[{}m", color.to_fg_str()),
            None => RESET_SEQUENCE.to_string(),
        }
    }
}

/// Write the escape sequence for `color` to `out`.
pub fn set_color<W: Write + ?Sized>(out: &mut W, color: ConsoleColor) -> io::Result<()> {
    out.write_all(color.escape_sequence().as_bytes())
}

/// When the console branch emits color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when the console is the process stdout and it is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
