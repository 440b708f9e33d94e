//! Builder pattern implementation for creating Bar instances.
//!
//! # Examples
//!
//! ```rust
//! use glyphbar::{BarBuilder, BarColor, Color};
//!
//! let bar = BarBuilder::new(4096)
//!     .describe("upload")
//!     .percent(true)
//!     .graph("#")
//!     .graph_total(20)
//!     .color(BarColor {
//!         graph: Some(Color::Green),
//!         ..BarColor::default()
//!     })
//!     .colors_enabled(false)
//!     .output(std::io::sink())
//!     .build();
//!
//! bar.update(1024);
//! assert_eq!(bar.render(), " upload 25%[#####               ] 1024/4096");
//! ```

use super::{bar::Bar, config::BarConfig};
use crate::style::{BarColor, OutputTarget};
use crate::Options;

use std::io::Write;
use std::time::Duration;

/// A builder used to create a [`Bar`].
///
/// ```rust
/// # fn main()  {
/// use glyphbar::BarBuilder;
///
/// let bar = BarBuilder::new(100).percent(true).output(std::io::sink()).build();
/// # }
/// ```
#[derive(Debug)]
pub struct BarBuilder {
    config: BarConfig,
}

impl BarBuilder {
    /// Creates a builder with the default options.
    pub fn new(total: i64) -> Self {
        Self {
            config: BarConfig::new(total),
        }
    }

    /// Creates a builder seeded from an [`Options`] record.
    pub fn from_options(total: i64, options: Options) -> Self {
        Self {
            config: BarConfig::from_options(total, options),
        }
    }

    /// Set the fill glyph.
    pub fn graph(mut self, graph: impl Into<String>) -> Self {
        self.config.graph = graph.into();
        self
    }

    /// Set the number of cells in the glyph bar.
    pub fn graph_total(mut self, graph_total: usize) -> Self {
        self.config.graph_total = graph_total;
        self
    }

    /// Set the label printed in front of the bar.
    pub fn describe(mut self, describe: impl Into<String>) -> Self {
        self.config.describe = describe.into();
        self
    }

    /// Show the ratio as humanized bytes with the transfer rate.
    pub fn bytes(mut self, show: bool) -> Self {
        self.config.show_bytes = show;
        self
    }

    /// Show the percent field.
    pub fn percent(mut self, show: bool) -> Self {
        self.config.show_percent = show;
        self
    }

    /// Show the remaining-time estimate.
    pub fn duration(mut self, show: bool) -> Self {
        self.config.show_duration = show;
        self
    }

    /// Set the per-field colors.
    pub fn color(mut self, colors: BarColor) -> Self {
        self.config.colors = colors;
        self
    }

    /// Force color on or off instead of asking the terminal.
    ///
    /// Without this, standard output and standard error are asked whether they
    /// support color, and any other [`output`](Self::output) stays uncolored.
    pub fn colors_enabled(mut self, enabled: bool) -> Self {
        self.config.colors_enabled = Some(enabled);
        self
    }

    /// Set the ETA ticker interval.
    ///
    /// A zero interval keeps the default of one second.
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.config.tick_interval = interval;
        }
        self
    }

    /// Write repaints to standard error instead of standard output.
    pub fn stderr(mut self) -> Self {
        self.config.output = Box::new(console::Term::stderr());
        self.config.output_target = OutputTarget::Stderr;
        self
    }

    /// Write repaints to `output` instead of standard output.
    pub fn output<W>(mut self, output: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.config.output = Box::new(output);
        self.config.output_target = OutputTarget::Writer;
        self
    }

    /// Create the [`Bar`] with the specified options.
    ///
    /// The ETA ticker starts right away when duration or byte display is on.
    pub fn build(self) -> Bar {
        Bar::from_config(self.config)
    }
}
