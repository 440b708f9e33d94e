//! Shared utility functions.
//!
//! This module contains the pure formatting helpers used by the bar when it
//! composes a line and by the ETA ticker when it refreshes its estimate.
//!
//! # Examples
//!
//! ```rust
//! use glyphbar::utils::{format_bytes, format_time};
//!
//! assert_eq!(format_bytes(2048), "2.0 kB");
//! assert_eq!(format_time(125), "2m5s");
//! ```

pub mod format;

pub use format::{format_bytes, format_time};
