//! Bar styling: glyphs, colors and color capability.
//!
//! # Overview
//!
//! - `color` - color identifiers, the per-field [`BarColor`] record and the
//!   [`Palette`] that decides whether color codes are emitted at all
//! - `glyph` - the fill and track cells of the glyph bar
//!
//! # Examples
//!
//! ```rust
//! use glyphbar::style::{Color, Glyphs, Palette};
//!
//! let glyphs = Glyphs::new("=");
//! let palette = Palette::new(false);
//! let segment = palette.paint(&glyphs.render(2, 4), Some(Color::Yellow), None);
//! assert_eq!(segment, "[==  ]");
//! ```

pub(crate) mod color;
pub(crate) mod glyph;

pub use color::{BarColor, Color, OutputTarget, Palette};
pub use glyph::Glyphs;
