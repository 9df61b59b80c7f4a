//! The legend text layout engine.
//!
//! Lays a string out inside a rectangle: line breaking through the shaper,
//! one of four horizontal alignments per line, vertical centering of the
//! whole text block, and silent clipping of lines that do not fit. The
//! engine works in two passes over the same line layout: [`measure_text`]
//! totals the vertical space a draw would consume without touching the
//! target, and [`draw_text`] emits the runs. Both report the same value, so
//! callers can reserve space with the measure pass and fill it with the
//! draw pass.

use cartouche_core::{
    color::Color,
    font::FontSpec,
    geometry::{Point, Rect},
    item::Alignment,
    text::{Line, LineMetrics, TextShaper},
};

use crate::target::Painter;

struct LineLayout {
    lines: Vec<Line>,
    metrics: LineMetrics,
    /// Vertical space consumed by the kept lines
    total: f32,
}

/// Breaks the text and drops trailing lines that exceed the box height.
fn layout_lines(shaper: &dyn TextShaper, text: &str, font: &FontSpec, rect: Rect) -> LineLayout {
    let metrics = shaper.line_metrics(font);
    let mut lines = shaper.break_text(text, font, rect.width());

    let extent = metrics.line_extent();
    let mut kept = 0;
    let mut total = 0.0;
    for i in 0..lines.len() {
        let with_line = if i == 0 {
            extent
        } else {
            total + metrics.line_gap + extent
        };
        if with_line > rect.height() {
            break;
        }
        total = with_line;
        kept = i + 1;
    }
    lines.truncate(kept);

    LineLayout {
        lines,
        metrics,
        total,
    }
}

/// Measures the vertical space [`draw_text`] would consume in `rect`.
///
/// Returns the ceiling of the consumed height; zero for empty text or a box
/// too small for a single line.
pub fn measure_text(shaper: &dyn TextShaper, text: &str, font: &FontSpec, rect: Rect) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    layout_lines(shaper, text, font, rect).total.ceil()
}

/// Draws `text` into `rect` and returns the vertical space consumed.
///
/// The text block is centered vertically; each line is placed horizontally
/// per `alignment`. Lines that do not fit the box height are silently
/// dropped. The return value is identical to what [`measure_text`] reports
/// for the same inputs.
pub fn draw_text(
    painter: &mut Painter,
    text: &str,
    font: &FontSpec,
    color: Color,
    rect: Rect,
    alignment: Alignment,
) -> f32 {
    if text.is_empty() {
        return 0.0;
    }

    let layout = layout_lines(painter.shaper(), text, font, rect);
    let line_count = layout.lines.len();
    let advance = layout.metrics.line_extent() + layout.metrics.line_gap;

    // center the whole block vertically in the box
    let top = rect.y() + (rect.height() - layout.total) / 2.0;

    for (index, line) in layout.lines.iter().enumerate() {
        let baseline = top + index as f32 * advance + layout.metrics.ascent;
        let is_last = index == line_count - 1;
        match alignment {
            Alignment::Justified if !is_last => {
                draw_justified_line(painter, line, font, color, rect, baseline);
            }
            _ => {
                let offset = match alignment {
                    Alignment::Left | Alignment::Justified => 0.0,
                    Alignment::Right => rect.width() - line.width(),
                    Alignment::Center => (rect.width() - line.width()) / 2.0,
                };
                painter.draw_text_run(
                    line.text(),
                    Point::new(rect.x() + offset, baseline),
                    font,
                    color,
                );
            }
        }
    }

    layout.total.ceil()
}

/// Draws one line with inter-word gaps stretched to fill the box width.
fn draw_justified_line(
    painter: &mut Painter,
    line: &Line,
    font: &FontSpec,
    color: Color,
    rect: Rect,
    baseline: f32,
) {
    let words: Vec<&str> = line.text().split_whitespace().collect();
    if words.len() < 2 {
        painter.draw_text_run(line.text(), Point::new(rect.x(), baseline), font, color);
        return;
    }

    let word_widths: Vec<f32> = words
        .iter()
        .map(|word| painter.shaper().measure(word, font).width())
        .collect();
    let words_total: f32 = word_widths.iter().sum();
    let gap = (rect.width() - words_total) / (words.len() - 1) as f32;

    let mut x = rect.x();
    for (word, width) in words.iter().zip(&word_widths) {
        painter.draw_text_run(word, Point::new(x, baseline), font, color);
        x += width + gap;
    }
}
