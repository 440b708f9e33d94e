//! Error handling for the glyphbar library.
//!
//! The public bar operations never fail: a progress display must not take the
//! caller down. The fallible internals (writing a repaint to the output stream,
//! spawning the ETA ticker) return these errors, and the bar logs them with
//! `tracing` before carrying on.

use std::io;
use thiserror::Error;

/// Errors that can happen inside a bar.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// Returned when the output stream rejects a repaint or the final newline,
    /// or when the ETA ticker cannot get a runtime or a thread to run on.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for fallible glyphbar internals.
pub type Result<T> = std::result::Result<T, Error>;
