//! Color identifiers, the per-field color record, and the resolved palette.
//!
//! # Examples
//!
//! ```rust
//! use glyphbar::style::{BarColor, Color, Palette};
//!
//! let colors = BarColor {
//!     graph: Some(Color::Green),
//!     graph_back: Some(Color::Black),
//!     ..BarColor::default()
//! };
//!
//! // A palette with color disabled leaves every segment untouched.
//! let palette = Palette::new(false);
//! assert_eq!(palette.paint("[███ ]", colors.graph, colors.graph_back), "[███ ]");
//! ```

use console::Style;

/// Terminal colors a bar field can be drawn with.
///
/// The same identifier is used as a foreground or a background color depending
/// on the field it is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl Color {
    fn to_console(self) -> console::Color {
        match self {
            Color::Black => console::Color::Black,
            Color::White => console::Color::White,
            Color::Red => console::Color::Red,
            Color::Blue => console::Color::Blue,
            Color::Green => console::Color::Green,
            Color::Yellow => console::Color::Yellow,
            Color::Purple => console::Color::Magenta,
        }
    }
}

/// Per-field colors of a bar. `None` renders the field without color codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarColor {
    /// Label text.
    pub describe: Option<Color>,
    /// Glyph bar foreground.
    pub graph: Option<Color>,
    /// Glyph bar background.
    pub graph_back: Option<Color>,
    /// Percent field.
    pub percent: Option<Color>,
    /// Current/total ratio field.
    pub ratio: Option<Color>,
    /// Remaining-time field.
    pub duration: Option<Color>,
}

/// Where a bar's repaints go, as far as color detection is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
    /// Any other writer: a file, a pipe, a buffer.
    Writer,
}

/// Whether the output supports color, resolved once when a bar is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Create a palette with an explicit color capability.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Ask the terminal behind `target` (and `CLICOLOR`/`CLICOLOR_FORCE`) whether
    /// color is supported.
    ///
    /// A [`OutputTarget::Writer`] is not a terminal and never gets color unless
    /// it is forced with [`Palette::new`].
    pub fn detect(target: OutputTarget) -> Self {
        let enabled = match target {
            OutputTarget::Stdout => console::colors_enabled(),
            OutputTarget::Stderr => console::colors_enabled_stderr(),
            OutputTarget::Writer => false,
        };
        Self::new(enabled)
    }

    /// Return `true` if segments may carry color codes.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `text` in the given foreground/background directives.
    ///
    /// The text comes back unchanged when the palette is disabled or neither
    /// color is set.
    pub fn paint(&self, text: &str, fg: Option<Color>, bg: Option<Color>) -> String {
        if !self.enabled || (fg.is_none() && bg.is_none()) {
            return text.to_string();
        }

        let mut style = Style::new().force_styling(true);
        if let Some(fg) = fg {
            style = style.fg(fg.to_console());
        }
        if let Some(bg) = bg {
            style = style.bg(bg.to_console());
        }
        style.apply_to(text).to_string()
    }
}
