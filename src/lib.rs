//! Glyphbar is a crate drawing a single-line terminal progress bar: a glyph
//! bar, a percentage, a current/total ratio (optionally as bytes), a live
//! remaining-time estimate and an optional colored label, repainted in place.
//!
//! # Quick Start
//!
//! ```rust
//! use glyphbar::Bar;
//!
//! let bar = Bar::builder(200)
//!     .describe("copying")
//!     .percent(true)
//!     .colors_enabled(false)
//!     .output(std::io::sink())
//!     .build();
//!
//! for current in (0..=200).step_by(10) {
//!     bar.update(current);
//! }
//! bar.finish();
//! assert!(bar.is_finished());
//! ```
//!
//! # Module Organization
//!
//! - [`bar`] - The [`Bar`] handle, [`BarBuilder`] and [`Options`]
//! - [`style`] - Glyphs, colors and color capability
//! - [`ticker`] - The background task refreshing the remaining-time estimate
//! - [`utils`] - Byte and duration formatting
//! - [`error`] - Errors of the fallible internals

pub mod bar;
pub mod error;
pub mod style;
pub mod ticker;
pub mod utils;

pub use bar::{Bar, BarBuilder, Options};
pub use error::{Error, Result};
pub use style::{BarColor, Color, Glyphs, OutputTarget, Palette};
pub use ticker::TickerState;
pub use utils::{format_bytes, format_time};
