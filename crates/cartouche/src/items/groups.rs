//! Partition/group summary content renderer.

use cartouche_core::{
    block::{Block, BlockRole},
    font::FontSpec,
    geometry::Rect,
    item::{Alignment, ItemBody, LegendItem},
};

use crate::{
    items::draw_shape,
    render::{
        frame::{ContentRenderer, upsert_child},
        text::draw_text,
    },
    target::Painter,
};

/// Gap between a swatch and its label.
const LABEL_GAP: f32 = 4.0;

/// Fraction of a group's column its swatch may occupy horizontally.
const SWATCH_WIDTH_RATIO: f32 = 0.6;

/// One column per group: a value-normalized shape swatch with the group
/// label beneath it. Columns share the body width evenly; swatch heights
/// are proportional to each group's value relative to the largest.
pub struct GroupsRenderer;

impl ContentRenderer for GroupsRenderer {
    fn render_content(
        &self,
        painter: &mut Painter,
        body: Rect,
        item: &mut LegendItem,
        root: &mut Block,
    ) {
        let ItemBody::Groups(groups) = &item.body else {
            return;
        };
        if groups.is_empty() {
            return;
        }

        let label_font = FontSpec::default();
        let metrics = painter.shaper().line_metrics(&label_font);
        let label_height = metrics.line_extent().ceil();
        let swatch_area = (body.height() - label_height - LABEL_GAP).max(0.0);

        let max_value = groups.iter().map(|g| g.value).fold(0.0f32, f32::max);
        let column_width = body.width() / groups.len() as f32;

        for (index, group) in groups.iter().enumerate() {
            let column = Rect::from_xywh(
                body.x() + index as f32 * column_width,
                body.y(),
                column_width,
                body.height(),
            );
            upsert_child(root, BlockRole::Group { index }, column);

            // swatches are skipped entirely when no value is positive
            if max_value > 0.0 && group.value > 0.0 {
                let height = group.value / max_value * swatch_area;
                let width = column_width * SWATCH_WIDTH_RATIO;
                let swatch = Rect::from_xywh(
                    column.center().x() - width / 2.0,
                    body.y() + swatch_area - height,
                    width,
                    height,
                );
                draw_shape(painter, group.shape, swatch, group.color);
            }

            let label_rect = Rect::from_xywh(
                column.x(),
                body.y() + swatch_area + LABEL_GAP,
                column_width,
                label_height,
            );
            draw_text(
                painter,
                &group.label,
                &label_font,
                group.color,
                label_rect,
                Alignment::Center,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::target::{DisplayList, DrawOp, Target, View};
    use cartouche_core::{
        color::Color, geometry::Rect, item::Group, table::ShapeKind, text::FixedAdvanceShaper,
    };

    fn groups_item(values: &[f32]) -> LegendItem {
        let groups = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Group {
                label: format!("g{i}"),
                value,
                shape: ShapeKind::Rectangle,
                color: Color::default(),
            })
            .collect();
        LegendItem::new(0, 300.0, 100.0, ItemBody::Groups(groups))
    }

    fn render(item: &mut LegendItem, body: Rect) -> (Target, Block) {
        let shaper = FixedAdvanceShaper::new(0.5);
        let mut target = Target::Canvas(DisplayList::new(View::identity()));
        let mut painter = Painter::new(&mut target, &shaper);
        let mut root = Block::root(Rect::default());
        GroupsRenderer.render_content(&mut painter, body, item, &mut root);
        (target, root)
    }

    #[test]
    fn test_columns_share_body_evenly() {
        let body = Rect::from_xywh(0.0, 0.0, 300.0, 100.0);
        let (_, root) = render(&mut groups_item(&[1.0, 2.0, 3.0]), body);

        for index in 0..3 {
            let column = root.child(BlockRole::Group { index }).unwrap().rect();
            assert_approx_eq!(f32, column.width(), 100.0);
            assert_approx_eq!(f32, column.x(), index as f32 * 100.0);
        }
    }

    #[test]
    fn test_swatch_heights_normalized_to_largest() {
        let body = Rect::from_xywh(0.0, 0.0, 300.0, 100.0);
        let (target, _) = render(&mut groups_item(&[1.0, 2.0, 4.0]), body);

        let Target::Canvas(list) = &target else {
            unreachable!()
        };
        let swatches: Vec<&Rect> = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, .. } => Some(rect),
                _ => None,
            })
            .collect();
        assert_eq!(swatches.len(), 3);
        assert_approx_eq!(f32, swatches[0].height() / swatches[2].height(), 0.25);
        assert_approx_eq!(f32, swatches[1].height() / swatches[2].height(), 0.5);
        // bottom-anchored: all share the same baseline
        assert_approx_eq!(f32, swatches[0].max_y(), swatches[2].max_y());
    }

    #[test]
    fn test_non_positive_values_draw_labels_only() {
        let body = Rect::from_xywh(0.0, 0.0, 300.0, 100.0);
        let (target, _) = render(&mut groups_item(&[0.0, 0.0]), body);

        let Target::Canvas(list) = &target else {
            unreachable!()
        };
        assert!(!list
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::FillRect { .. })));
        assert!(list
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::TextRun { .. })));
    }
}
