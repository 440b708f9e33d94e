//! The progress bar handle.
//!
//! A [`Bar`] is shared between the caller, who pushes new values with
//! [`Bar::update`], and its ETA ticker. Both go through the same lock, so a
//! `Bar` can also be wrapped in an `Arc` and updated from several threads.
//!
//! # Examples
//!
//! ```rust
//! use glyphbar::Bar;
//!
//! let bar = Bar::builder(200).output(std::io::sink()).build();
//! bar.update(50);
//! assert_eq!(bar.percent(), 25);
//! assert_eq!(bar.fill_count(), 12);
//!
//! bar.update(200);
//! assert_eq!(bar.fill_count(), 50);
//! bar.finish();
//! ```
//!
//! ## Remaining Time
//!
//! ```rust,no_run
//! use glyphbar::Bar;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let bar = Bar::builder(1000).duration(true).build();
//! for current in (0..=1000).step_by(50) {
//!     bar.update(current);
//!     tokio::time::sleep(Duration::from_millis(200)).await;
//! }
//! bar.finish();
//! # }
//! ```

use super::{builder::BarBuilder, config::BarConfig, state::BarState};
use crate::style::{Color, Glyphs};
use crate::ticker::{EtaTicker, TickerState};
use crate::Options;

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A single-line terminal progress bar.
pub struct Bar {
    shared: Arc<Mutex<BarState>>,
    ticker: Mutex<EtaTicker>,
}

impl fmt::Debug for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bar")
            .field("state", &*self.shared.lock())
            .field("ticker", &self.ticker_state())
            .finish()
    }
}

impl Bar {
    /// Create a bar with the default options, drawing to standard output.
    pub fn new(total: i64) -> Self {
        BarBuilder::new(total).build()
    }

    /// Create a bar from an [`Options`] record.
    pub fn with_options(total: i64, options: Options) -> Self {
        BarBuilder::from_options(total, options).build()
    }

    /// Start building a bar.
    pub fn builder(total: i64) -> BarBuilder {
        BarBuilder::new(total)
    }

    pub(crate) fn from_config(config: BarConfig) -> Self {
        let ticker = EtaTicker::new(config.tick_interval);
        let state = BarState::new(config);
        let needs_ticker = state.needs_ticker();

        let bar = Self {
            shared: Arc::new(Mutex::new(state)),
            ticker: Mutex::new(ticker),
        };
        if needs_ticker {
            bar.ensure_ticker();
        }
        bar
    }

    /// Push a new absolute value and repaint the line.
    ///
    /// Does nothing once the bar is finished.
    pub fn update(&self, current: i64) {
        let mut state = self.shared.lock();
        if state.finished {
            return;
        }

        state.set_current(current);
        if let Err(e) = state.paint() {
            warn!("Failed to repaint progress bar: {e}");
        }
    }

    /// Stop the ticker and move the cursor to a fresh line.
    ///
    /// Only the first call has an effect.
    pub fn finish(&self) {
        {
            let mut state = self.shared.lock();
            if state.finished {
                return;
            }
            state.finished = true;
            if let Err(e) = state.write_newline() {
                warn!("Failed to finish progress bar: {e}");
            }
        }

        self.ticker.lock().stop();
        debug!("Progress bar finished");
    }

    /// Compose the current line without writing it.
    pub fn render(&self) -> String {
        self.shared.lock().compose()
    }

    /// Set the fill glyph. The track cell is resized to match its width.
    pub fn set_graph(&self, graph: impl Into<String>) {
        let glyphs = Glyphs::new(graph);
        self.configure(|state| state.glyphs = glyphs);
    }

    /// Set the number of cells in the glyph bar.
    pub fn set_graph_total(&self, graph_total: usize) {
        self.configure(|state| state.graph_total = graph_total);
    }

    /// Set the glyph bar foreground color.
    pub fn set_graph_color(&self, color: Color) {
        self.configure(|state| state.colors.graph = Some(color));
    }

    /// Set the glyph bar background color.
    pub fn set_graph_back_color(&self, color: Color) {
        self.configure(|state| state.colors.graph_back = Some(color));
    }

    /// Set the label color.
    pub fn set_describe_color(&self, color: Color) {
        self.configure(|state| state.colors.describe = Some(color));
    }

    /// Set the percent color.
    pub fn set_percent_color(&self, color: Color) {
        self.configure(|state| state.colors.percent = Some(color));
    }

    /// Set the ratio color.
    pub fn set_ratio_color(&self, color: Color) {
        self.configure(|state| state.colors.ratio = Some(color));
    }

    /// Set the remaining-time color.
    pub fn set_duration_color(&self, color: Color) {
        self.configure(|state| state.colors.duration = Some(color));
    }

    /// Set the label printed in front of the bar.
    pub fn set_describe(&self, describe: impl Into<String>) {
        let describe = describe.into();
        self.configure(|state| state.describe = describe);
    }

    /// Toggle the humanized byte ratio. Turning it on starts the ticker.
    pub fn show_bytes(&self, show: bool) {
        if self.configure(|state| state.show_bytes = show) && show {
            self.ensure_ticker();
        }
    }

    /// Toggle the percent field.
    pub fn show_percent(&self, show: bool) {
        self.configure(|state| state.show_percent = show);
    }

    /// Toggle the remaining-time field. Turning it on starts the ticker.
    pub fn show_duration(&self, show: bool) {
        if self.configure(|state| state.show_duration = show) && show {
            self.ensure_ticker();
        }
    }

    pub fn current(&self) -> i64 {
        self.shared.lock().current
    }

    pub fn total(&self) -> i64 {
        self.shared.lock().total
    }

    pub fn percent(&self) -> i64 {
        self.shared.lock().percent
    }

    /// Number of filled cells in the glyph bar.
    pub fn fill_count(&self) -> usize {
        self.shared.lock().fill_count()
    }

    /// Latest remaining-time estimate, e.g. `0m18s`.
    pub fn eta_text(&self) -> String {
        self.shared.lock().eta_text.clone()
    }

    /// Latest transfer rate, e.g. `1.5 kB/s`.
    pub fn rate_text(&self) -> String {
        self.shared.lock().rate_text.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.shared.lock().finished
    }

    pub fn ticker_state(&self) -> TickerState {
        self.ticker.lock().state()
    }

    /// Apply a configuration change unless the bar is finished.
    fn configure(&self, change: impl FnOnce(&mut BarState)) -> bool {
        let mut state = self.shared.lock();
        if state.finished {
            return false;
        }
        change(&mut state);
        true
    }

    fn ensure_ticker(&self) {
        let mut ticker = self.ticker.lock();
        if ticker.state() != TickerState::Idle {
            return;
        }
        if let Err(e) = ticker.start(Arc::clone(&self.shared)) {
            warn!("Remaining time will not refresh: {e}");
        }
    }
}
