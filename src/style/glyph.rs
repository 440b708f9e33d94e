//! Fill and track cells of the glyph bar.

use console::measure_text_width;

/// Define the glyphs a bar is drawn with.
///
/// The track (empty) cell is made of as many spaces as the fill glyph is wide,
/// so the bar keeps the same length while it fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    graph: String,
    track: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(Glyphs::DEFAULT_GRAPH)
    }
}

impl Glyphs {
    /// Full block, one column wide: `"█"`.
    pub const DEFAULT_GRAPH: &'static str = "█";
    /// Number of cells in a bar unless configured otherwise.
    pub const DEFAULT_GRAPH_TOTAL: usize = 50;

    /// Create new [`Glyphs`] around a fill glyph.
    ///
    /// An empty glyph falls back to [`Glyphs::DEFAULT_GRAPH`].
    pub fn new(graph: impl Into<String>) -> Self {
        let mut graph = graph.into();
        if graph.is_empty() {
            graph = Self::DEFAULT_GRAPH.to_string();
        }
        let width = measure_text_width(&graph).max(1);

        Self {
            track: " ".repeat(width),
            graph,
        }
    }

    /// The filled cell.
    pub fn graph(&self) -> &str {
        &self.graph
    }

    /// The empty cell.
    pub fn track(&self) -> &str {
        &self.track
    }

    /// Draw `filled` fill cells out of `total`, wrapped in brackets.
    ///
    /// `filled` is clamped to `total`.
    ///
    /// ```rust
    /// use glyphbar::style::Glyphs;
    ///
    /// let glyphs = Glyphs::new("#");
    /// assert_eq!(glyphs.render(3, 5), "[###  ]");
    /// ```
    pub fn render(&self, filled: usize, total: usize) -> String {
        let filled = filled.min(total);
        format!(
            "[{}{}]",
            self.graph.repeat(filled),
            self.track.repeat(total - filled)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_glyphs() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.graph(), "█");
        assert_eq!(glyphs.track(), " ");
    }

    #[test]
    fn test_wide_glyph_gets_wide_track() {
        let glyphs = Glyphs::new("🚀");
        assert_eq!(glyphs.track(), "  ");
        assert_eq!(
            measure_text_width(&glyphs.render(2, 4)),
            measure_text_width(&glyphs.render(4, 4))
        );
    }

    #[test]
    fn test_empty_glyph_falls_back() {
        assert_eq!(Glyphs::new(""), Glyphs::default());
    }

    #[test]
    fn test_render_clamps_fill() {
        let glyphs = Glyphs::new("=");
        assert_eq!(glyphs.render(0, 3), "[   ]");
        assert_eq!(glyphs.render(9, 3), "[===]");
    }
}
