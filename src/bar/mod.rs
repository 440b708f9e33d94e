//! Bar module containing the progress bar handle, its builder and configuration.
//!
//! # Overview
//!
//! - `bar` - the [`Bar`] handle: updates, mutators and finalization
//! - `builder` - [`BarBuilder`] for configuring a bar before it starts
//! - `config` - the [`Options`] record and configuration defaults
//! - `state` - the lock-guarded state shared with the ETA ticker
//!
//! # Examples
//!
//! ```rust
//! use glyphbar::bar::Bar;
//!
//! let bar = Bar::builder(10).percent(true).output(std::io::sink()).build();
//! for i in 1..=10 {
//!     bar.update(i);
//! }
//! assert_eq!(bar.percent(), 100);
//! bar.finish();
//! ```

#[allow(clippy::module_inception)]
pub mod bar;
pub mod builder;
pub mod config;
pub(crate) mod state;

pub use bar::Bar;
pub use builder::BarBuilder;
pub use config::Options;
pub use state::{fill_count, percent};
