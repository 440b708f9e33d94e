//! Configuration structures and defaults for a bar.
//!
//! [`Options`] is the plain record accepted by [`Bar::with_options`]; the
//! internal `BarConfig` carries everything [`BarBuilder`] can set, including the
//! output stream and the ETA ticker interval.
//!
//! # Examples
//!
//! ```rust
//! use glyphbar::{Bar, BarColor, Color, Options};
//!
//! let options = Options {
//!     describe: "indexing".to_string(),
//!     show_percent: true,
//!     color: Some(BarColor {
//!         describe: Some(Color::Blue),
//!         ..BarColor::default()
//!     }),
//!     ..Options::default()
//! };
//! let bar = Bar::with_options(120, options);
//! assert_eq!(bar.total(), 120);
//! ```
//!
//! [`Bar::with_options`]: crate::Bar::with_options
//! [`BarBuilder`]: crate::BarBuilder

use crate::style::{BarColor, Glyphs, OutputTarget};

use std::fmt;
use std::io::Write;
use std::time::Duration;

/// Display options for [`Bar::with_options`](crate::Bar::with_options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Fill glyph. An empty string selects the default `"█"`.
    pub graph: String,
    /// Label printed in front of the bar. Empty means no label.
    pub describe: String,
    /// Show the ratio as humanized bytes, followed by the transfer rate.
    pub is_bytes: bool,
    /// Show the percent field.
    pub show_percent: bool,
    /// Show the remaining-time estimate.
    pub show_duration: bool,
    /// Per-field colors. `None` leaves every field uncolored.
    pub color: Option<BarColor>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            graph: Glyphs::DEFAULT_GRAPH.to_string(),
            describe: String::new(),
            is_bytes: false,
            show_percent: false,
            show_duration: false,
            color: None,
        }
    }
}

/// Configuration structure for a bar.
pub(crate) struct BarConfig {
    /// Value that represents completion.
    pub total: i64,
    /// Fill glyph.
    pub graph: String,
    /// Number of cells in the glyph bar.
    pub graph_total: usize,
    /// Label text.
    pub describe: String,
    /// Humanized byte ratio and rate.
    pub show_bytes: bool,
    /// Percent field.
    pub show_percent: bool,
    /// Remaining-time field.
    pub show_duration: bool,
    /// Per-field colors.
    pub colors: BarColor,
    /// Forced color capability. `None` asks the terminal behind `output_target`.
    pub colors_enabled: Option<bool>,
    /// What `output` writes to, for color detection.
    pub output_target: OutputTarget,
    /// Period of the ETA ticker.
    pub tick_interval: Duration,
    /// Stream every repaint is written to.
    pub output: Box<dyn Write + Send>,
}

impl BarConfig {
    /// Period of the ETA ticker unless configured otherwise.
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(total: i64) -> Self {
        Self {
            total,
            graph: Glyphs::DEFAULT_GRAPH.to_string(),
            graph_total: Glyphs::DEFAULT_GRAPH_TOTAL,
            describe: String::new(),
            show_bytes: false,
            show_percent: false,
            show_duration: false,
            colors: BarColor::default(),
            colors_enabled: None,
            output_target: OutputTarget::Stdout,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            output: Box::new(console::Term::stdout()),
        }
    }

    pub fn from_options(total: i64, options: Options) -> Self {
        Self {
            graph: options.graph,
            describe: options.describe,
            show_bytes: options.is_bytes,
            show_percent: options.show_percent,
            show_duration: options.show_duration,
            colors: options.color.unwrap_or_default(),
            ..Self::new(total)
        }
    }
}

impl fmt::Debug for BarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarConfig")
            .field("total", &self.total)
            .field("graph", &self.graph)
            .field("graph_total", &self.graph_total)
            .field("describe", &self.describe)
            .field("show_bytes", &self.show_bytes)
            .field("show_percent", &self.show_percent)
            .field("show_duration", &self.show_duration)
            .field("colors", &self.colors)
            .field("colors_enabled", &self.colors_enabled)
            .field("output_target", &self.output_target)
            .field("tick_interval", &self.tick_interval)
            .finish_non_exhaustive()
    }
}
