//! Text measurement and line breaking.
//!
//! This module provides the [`TextShaper`] trait that the layout engine
//! measures text through, plus two implementations:
//!
//! - [`SystemShaper`] - measures with `cosmic-text` against the fonts
//!   installed on the host, sharing a single `FontSystem`
//! - [`FixedAdvanceShaper`] - a deterministic shaper with a constant
//!   per-character advance, for tests and headless environments
//!
//! Shapers only *measure*; actually emitting glyphs is the back-ends' job.
//! Word wrapping is shaper-independent and provided by
//! [`TextShaper::break_text`].

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;

use crate::{font::FontSpec, geometry::Size};

/// Conversion factor from font points to pixels at standard DPI.
const PT_TO_PX: f32 = 1.33;

/// Line height as a multiple of the pixel font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Vertical metrics of a line of text in a given font.
///
/// Per-line extent is `ascent + descent`; consecutive lines are separated by
/// an additional `line_gap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl LineMetrics {
    /// Returns the vertical extent of a single line (ascent plus descent)
    pub fn line_extent(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// A single visually-fitting line produced by line breaking.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    text: String,
    width: f32,
}

impl Line {
    pub fn new(text: String, width: f32) -> Self {
        Self { text, width }
    }

    /// Returns the text of this line
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the measured width of this line
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Measures text for layout purposes.
///
/// All layout code depends on this trait rather than on a concrete text
/// stack, so the deterministic [`FixedAdvanceShaper`] can stand in for
/// [`SystemShaper`] in tests.
pub trait TextShaper {
    /// Measures a single run of text (no wrapping) in the given font.
    fn measure(&self, text: &str, font: &FontSpec) -> Size;

    /// Returns the vertical metrics of a line in the given font.
    fn line_metrics(&self, font: &FontSpec) -> LineMetrics;

    /// Breaks text into lines that fit within `max_width`.
    ///
    /// Greedy word wrapping: words are packed onto a line until the next
    /// word would exceed `max_width`. A single word wider than `max_width`
    /// gets a line of its own and may exceed the limit; that is the only
    /// case where a returned line is wider than requested. Empty input
    /// yields no lines.
    fn break_text(&self, text: &str, font: &FontSpec, max_width: f32) -> Vec<Line> {
        let mut lines = Vec::new();
        for paragraph in text.lines() {
            let words: Vec<&str> = paragraph.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            let mut current = String::new();
            for word in words {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if self.measure(&candidate, font).width() <= max_width || current.is_empty() {
                    current = candidate;
                } else {
                    let width = self.measure(&current, font).width();
                    lines.push(Line::new(std::mem::take(&mut current), width));
                    current = word.to_string();
                }
            }
            if !current.is_empty() {
                let width = self.measure(&current, font).width();
                lines.push(Line::new(current, width));
            }
        }
        lines
    }
}

/// Text shaper backed by `cosmic-text` and the host's installed fonts.
///
/// It maintains a reusable `FontSystem` instance to avoid expensive
/// recreation; all `SystemShaper` values share the process-wide instance.
pub struct SystemShaper {
    font_system: Arc<Mutex<FontSystem>>,
}

// Process-wide FontSystem, initialized on first use
static FONT_SYSTEM: OnceLock<Arc<Mutex<FontSystem>>> = OnceLock::new();

impl Default for SystemShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemShaper {
    /// Creates a shaper sharing the process-wide `FontSystem`.
    pub fn new() -> Self {
        let font_system = FONT_SYSTEM
            .get_or_init(|| {
                info!("Initializing FontSystem");
                Arc::new(Mutex::new(FontSystem::new()))
            })
            .clone();
        Self { font_system }
    }
}

impl TextShaper for SystemShaper {
    /// Calculate the actual size of text in pixels using cosmic-text.
    ///
    /// This provides an accurate measurement based on real font metrics and
    /// shaping, including proper handling of ligatures, kerning, and other
    /// advanced typography features. Falls back to an estimated width when
    /// no font matches.
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = font.size() * PT_TO_PX;
        let line_height = font_size_px * LINE_HEIGHT_FACTOR;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if font.bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new()
            .family(Family::Name(font.family()))
            .weight(weight);

        // Unlimited buffer size so the text flows as one run per input line
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            // No matching font; estimate from the character count
            max_width = text.len() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }

    fn line_metrics(&self, font: &FontSpec) -> LineMetrics {
        derived_line_metrics(font)
    }
}

/// Deterministic shaper with a constant per-character advance.
///
/// Every character is `advance_factor * font size` wide, regardless of
/// family or installed fonts. Layout driven by this shaper is fully
/// reproducible, which is what the layout tests rely on.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceShaper {
    advance_factor: f32,
}

impl FixedAdvanceShaper {
    pub fn new(advance_factor: f32) -> Self {
        Self { advance_factor }
    }
}

impl Default for FixedAdvanceShaper {
    fn default() -> Self {
        // Roughly the average advance of a proportional face
        Self::new(0.6)
    }
}

impl TextShaper for FixedAdvanceShaper {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let advance = self.advance_factor * font.size();
        let lines: Vec<&str> = text.lines().collect();
        let max_chars = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_height = font.size() * PT_TO_PX * LINE_HEIGHT_FACTOR;
        Size::new(
            max_chars as f32 * advance,
            lines.len().max(1) as f32 * line_height,
        )
    }

    fn line_metrics(&self, font: &FontSpec) -> LineMetrics {
        derived_line_metrics(font)
    }
}

/// Line metrics derived from the pixel font size.
///
/// `ascent + descent` equals the pixel font size and the gap brings the
/// advance to `LINE_HEIGHT_FACTOR` times it, matching the `Metrics` the
/// system shaper measures with.
fn derived_line_metrics(font: &FontSpec) -> LineMetrics {
    let px = font.size() * PT_TO_PX;
    LineMetrics {
        ascent: px * 0.8,
        descent: px * 0.2,
        line_gap: px * (LINE_HEIGHT_FACTOR - 1.0),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn shaper() -> FixedAdvanceShaper {
        FixedAdvanceShaper::new(0.5)
    }

    #[test]
    fn test_measure_empty_is_zero() {
        let font = FontSpec::new("Arial", 10.0);
        assert!(shaper().measure("", &font).is_zero());
    }

    #[test]
    fn test_fixed_advance_measure() {
        let font = FontSpec::new("Arial", 10.0);
        // 5 chars * 0.5 * 10.0
        let size = shaper().measure("hello", &font);
        assert_approx_eq!(f32, size.width(), 25.0);
        assert!(size.height() > 0.0);
    }

    #[test]
    fn test_line_metrics_consistent_with_line_height() {
        let font = FontSpec::new("Arial", 10.0);
        let metrics = shaper().line_metrics(&font);
        let px = 10.0 * PT_TO_PX;
        assert_approx_eq!(f32, metrics.line_extent(), px, epsilon = 0.01);
        assert_approx_eq!(
            f32,
            metrics.line_extent() + metrics.line_gap,
            px * LINE_HEIGHT_FACTOR,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_break_text_empty() {
        let font = FontSpec::new("Arial", 10.0);
        assert!(shaper().break_text("", &font, 100.0).is_empty());
        assert!(shaper().break_text("   ", &font, 100.0).is_empty());
    }

    #[test]
    fn test_break_text_fits_on_one_line() {
        let font = FontSpec::new("Arial", 10.0);
        let lines = shaper().break_text("one two", &font, 100.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "one two");
    }

    #[test]
    fn test_break_text_wraps_words() {
        let font = FontSpec::new("Arial", 10.0);
        // each char is 5.0 wide; "aaaa bbbb" = 45.0, limit 30.0
        let lines = shaper().break_text("aaaa bbbb", &font, 30.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "aaaa");
        assert_eq!(lines[1].text(), "bbbb");
        assert!(lines[0].width() <= 30.0);
        assert!(lines[1].width() <= 30.0);
    }

    #[test]
    fn test_break_text_oversized_word_gets_own_line() {
        let font = FontSpec::new("Arial", 10.0);
        let lines = shaper().break_text("tiny enormousword", &font, 25.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text(), "enormousword");
        // the unbreakable word is the only line allowed to exceed the limit
        assert!(lines[1].width() > 25.0);
    }

    #[test]
    fn test_break_text_respects_explicit_newlines() {
        let font = FontSpec::new("Arial", 10.0);
        let lines = shaper().break_text("ab\ncd", &font, 100.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "ab");
        assert_eq!(lines[1].text(), "cd");
    }

    #[test]
    fn test_break_text_widths_match_measure() {
        let s = shaper();
        let font = FontSpec::new("Arial", 10.0);
        for line in s.break_text("the quick brown fox jumps", &font, 60.0) {
            let measured = s.measure(line.text(), &font).width();
            assert_approx_eq!(f32, line.width(), measured);
        }
    }
}
