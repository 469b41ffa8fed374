//! Console printer utility with color support.
//!
//! The profile display surface prints section banners in bold yellow and
//! body lines uncolored, so only the handful of colors that surface uses
//! are defined here.

use serde::{Deserialize, Serialize};

/// Available colors for printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterColor {
    Yellow,
    Cyan,
    BoldYellow,
    BoldCyan,
    BoldRed,
}

impl PrinterColor {
    /// ANSI escape code for this color.
    fn ansi_code(&self) -> &'static str {
        match self {
            Self::Yellow => "\x1b[33m",
            Self::Cyan => "\x1b[36m",
            Self::BoldYellow => "\x1b[1;33m",
            Self::BoldCyan => "\x1b[1;36m",
            Self::BoldRed => "\x1b[1;31m",
        }
    }
}

/// ANSI reset code.
const RESET: &str = "\x1b[0m";

/// Printer for console output with color support.
#[derive(Debug, Clone, Default)]
pub struct Printer;

impl Printer {
    /// Create a new `Printer`.
    pub fn new() -> Self {
        Self
    }

    /// Print a message with the specified color.
    pub fn print(&self, content: &str, color: PrinterColor) {
        println!("{}{}{}", color.ansi_code(), content, RESET);
    }

    /// Print a message without any coloring.
    pub fn print_plain(&self, content: &str) {
        println!("{content}");
    }
}
