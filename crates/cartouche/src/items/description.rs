//! Key/value description content renderer.

use cartouche_core::{
    block::Block,
    geometry::Rect,
    item::{Alignment, ItemBody, LegendItem},
};

use crate::{
    render::{frame::ContentRenderer, text::draw_text},
    target::Painter,
};

/// Gap between the key column and the value column.
const COLUMN_GUTTER: f32 = 4.0;

/// Stacked key/value rows: keys right-aligned in the left half of the body,
/// values left-aligned in the right half. Rows that overflow the body are
/// silently dropped.
pub struct DescriptionRenderer;

impl ContentRenderer for DescriptionRenderer {
    fn render_content(
        &self,
        painter: &mut Painter,
        body: Rect,
        item: &mut LegendItem,
        _root: &mut Block,
    ) {
        let ItemBody::Description {
            entries,
            font,
            color,
        } = &item.body
        else {
            return;
        };

        let metrics = painter.shaper().line_metrics(font);
        let row_height = metrics.line_extent() + metrics.line_gap;
        let half_width = body.width() / 2.0 - COLUMN_GUTTER / 2.0;

        let mut y = body.y();
        for entry in entries {
            if y + row_height > body.max_y() {
                break;
            }
            let key_rect = Rect::from_xywh(body.x(), y, half_width, row_height);
            let value_rect = Rect::from_xywh(
                body.x() + half_width + COLUMN_GUTTER,
                y,
                half_width,
                row_height,
            );
            draw_text(painter, &entry.key, font, *color, key_rect, Alignment::Right);
            draw_text(
                painter,
                &entry.value,
                font,
                *color,
                value_rect,
                Alignment::Left,
            );
            y += row_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::target::{DisplayList, DrawOp, Target, View};
    use cartouche_core::{
        color::Color,
        font::FontSpec,
        geometry::Point,
        item::DescriptionEntry,
        text::{FixedAdvanceShaper, TextShaper},
    };

    fn item(entries: Vec<DescriptionEntry>) -> LegendItem {
        LegendItem::new(
            0,
            200.0,
            100.0,
            ItemBody::Description {
                entries,
                font: FontSpec::new("Arial", 10.0),
                color: Color::default(),
            },
        )
    }

    fn runs(target: &Target) -> Vec<(String, Point)> {
        let Target::Canvas(list) = target else {
            unreachable!()
        };
        list.ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::TextRun { text, anchor, .. } => Some((text.clone(), *anchor)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_keys_end_at_the_column_divide() {
        let shaper = FixedAdvanceShaper::new(0.5);
        let mut target = Target::Canvas(DisplayList::new(View::identity()));
        let mut painter = Painter::new(&mut target, &shaper);

        let mut item = item(vec![DescriptionEntry {
            key: "nodes".to_string(),
            value: "42".to_string(),
        }]);
        let body = Rect::from_xywh(0.0, 0.0, 200.0, 100.0);
        let mut root = Block::root(Rect::default());
        DescriptionRenderer.render_content(&mut painter, body, &mut item, &mut root);

        let runs = runs(&target);
        assert_eq!(runs.len(), 2);

        let half = body.width() / 2.0 - COLUMN_GUTTER / 2.0;
        let font = FontSpec::new("Arial", 10.0);
        let key_width = shaper.measure("nodes", &font).width();
        // key right-aligned against the divide
        assert_approx_eq!(f32, runs[0].1.x() + key_width, half, epsilon = 0.01);
        // value flush left in the right half
        assert_approx_eq!(f32, runs[1].1.x(), half + COLUMN_GUTTER, epsilon = 0.01);
    }

    #[test]
    fn test_rows_stack_and_clip() {
        let shaper = FixedAdvanceShaper::new(0.5);
        let mut target = Target::Canvas(DisplayList::new(View::identity()));
        let mut painter = Painter::new(&mut target, &shaper);

        let entries: Vec<DescriptionEntry> = (0..50)
            .map(|i| DescriptionEntry {
                key: format!("k{i}"),
                value: format!("v{i}"),
            })
            .collect();
        let mut item = item(entries);
        let body = Rect::from_xywh(0.0, 0.0, 200.0, 60.0);
        let mut root = Block::root(Rect::default());
        DescriptionRenderer.render_content(&mut painter, body, &mut item, &mut root);

        let runs = runs(&target);
        // two runs per surviving row, never past the body bottom
        assert!(runs.len() < 100);
        assert!(runs.len() % 2 == 0);
        assert!(runs.iter().all(|(_, anchor)| anchor.y() <= body.max_y()));
    }
}
