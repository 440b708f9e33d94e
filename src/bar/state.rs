//! Shared bar state: counters, derived fields and line composition.
//!
//! Everything here is guarded by the bar's single lock. The caller's thread
//! reaches it through [`Bar`](crate::Bar), the ETA ticker through
//! [`BarState::sample`].

use super::config::BarConfig;
use crate::error::Result;
use crate::style::{BarColor, Glyphs, Palette};
use crate::utils::{format_bytes, format_time};

use std::fmt;
use std::io::Write;
use std::time::Duration;

/// Percent of `total` reached by `current`, truncated toward zero.
///
/// Anything under `total / 100` reads as 0%, and a zero total always reads 0%.
pub fn percent(current: i64, total: i64) -> i64 {
    if current == 0 || total == 0 {
        return 0;
    }
    let percent = i128::from(current) * 100 / i128::from(total);
    percent.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Number of filled cells out of `graph_total` for a given percent.
///
/// 100% fills the bar exactly; out-of-range percents are clamped to the bar.
pub fn fill_count(percent: i64, graph_total: usize) -> usize {
    if percent == 100 {
        return graph_total;
    }
    let cells = i128::from(percent) * graph_total as i128 / 100;
    cells.clamp(0, graph_total as i128) as usize
}

/// The state block shared by a bar and its ETA ticker.
pub(crate) struct BarState {
    pub current: i64,
    pub total: i64,
    pub last_sampled: i64,
    pub percent: i64,
    pub glyphs: Glyphs,
    pub graph_total: usize,
    pub describe: String,
    pub show_bytes: bool,
    pub show_percent: bool,
    pub show_duration: bool,
    pub colors: BarColor,
    pub palette: Palette,
    pub eta_text: String,
    pub rate_text: String,
    pub finished: bool,
    output: Box<dyn Write + Send>,
}

impl fmt::Debug for BarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarState")
            .field("current", &self.current)
            .field("total", &self.total)
            .field("last_sampled", &self.last_sampled)
            .field("percent", &self.percent)
            .field("eta_text", &self.eta_text)
            .field("rate_text", &self.rate_text)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl BarState {
    pub fn new(config: BarConfig) -> Self {
        let palette = config
            .colors_enabled
            .map(Palette::new)
            .unwrap_or_else(|| Palette::detect(config.output_target));

        Self {
            current: 0,
            total: config.total,
            last_sampled: 0,
            percent: percent(0, config.total),
            glyphs: Glyphs::new(config.graph),
            graph_total: config.graph_total,
            describe: config.describe,
            show_bytes: config.show_bytes,
            show_percent: config.show_percent,
            show_duration: config.show_duration,
            colors: config.colors,
            palette,
            eta_text: format_time(0),
            rate_text: format!("{}/s", format_bytes(0).trim_start()),
            finished: false,
            output: config.output,
        }
    }

    /// Store a new current value and refresh the percent.
    pub fn set_current(&mut self, current: i64) {
        self.current = current;
        self.percent = percent(current, self.total);
    }

    pub fn fill_count(&self) -> usize {
        fill_count(self.percent, self.graph_total)
    }

    /// Whether the ticker has anything to refresh.
    pub fn needs_ticker(&self) -> bool {
        self.show_duration || self.show_bytes
    }

    /// Compose the line: label, percent, glyph bar, ratio, remaining time.
    pub fn compose(&self) -> String {
        let palette = &self.palette;
        let mut line = String::new();

        if !self.describe.is_empty() {
            line.push(' ');
            line.push_str(&palette.paint(&self.describe, self.colors.describe, None));
        }

        if self.show_percent {
            line.push(' ');
            line.push_str(&palette.paint(
                &format!("{}%", self.percent),
                self.colors.percent,
                None,
            ));
        }

        line.push_str(&palette.paint(
            &self.glyphs.render(self.fill_count(), self.graph_total),
            self.colors.graph,
            self.colors.graph_back,
        ));

        let ratio = if self.show_bytes {
            format!(
                "({}/{}, {})",
                format_bytes(self.current.max(0) as u64),
                format_bytes(self.total.max(0) as u64),
                self.rate_text
            )
        } else {
            format!("{}/{}", self.current, self.total)
        };
        line.push(' ');
        line.push_str(&palette.paint(&ratio, self.colors.ratio, None));

        if self.show_duration {
            line.push(' ');
            line.push_str(&palette.paint(
                &format!("[{}]", self.eta_text),
                self.colors.duration,
                None,
            ));
        }

        line
    }

    /// Overwrite the terminal line with the composed bar.
    ///
    /// Two spaces of padding erase leftovers of a longer previous line.
    pub fn paint(&mut self) -> Result<()> {
        let line = self.compose();
        write!(self.output, "\r{line}  ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Move the cursor past the bar for good.
    pub fn write_newline(&mut self) -> Result<()> {
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// One ETA tick: extrapolate the last interval's throughput.
    pub fn sample(&mut self, period: Duration) {
        if self.current <= 0 {
            return;
        }

        let delta = self.current.saturating_sub(self.last_sampled);
        if delta > 0 {
            let intervals_left = self.total.saturating_sub(self.current) / delta;
            let period_ms = i64::try_from(period.as_millis()).unwrap_or(i64::MAX);
            let remaining = intervals_left.saturating_mul(period_ms) / 1000;
            self.eta_text = format_time(remaining);

            let per_second = delta as f64 / period.as_secs_f64();
            self.rate_text = format!("{}/s", format_bytes(per_second as u64));
        }
        self.last_sampled = self.current;
    }
}
