//! The table content renderer.
//!
//! Lays the table grid out inside the body rectangle and draws every cell.
//! Column widths start from a uniform share of the body; when the table is
//! not occupying the full width, each column shrinks to its widest content
//! (inflated 5%) and the slack it frees is redistributed to the columns
//! after it. The finished table is centered in the body.
//!
//! Cell blocks (and the editors cached on them) are rebuilt from scratch
//! whenever the model reports a structural change; geometry alone is
//! refreshed on every pass. When spacing, padding, and border size are all
//! too small to host the per-gap controls, table-wide bulk-edit controls
//! are attached to every cell editor instead, exactly once per rebuild.

use log::{debug, warn};

use cartouche_core::{
    block::{Block, BlockRole},
    editor::{EditorAction, InplaceEditor, Widget},
    geometry::Rect,
    item::{ItemBody, LegendItem},
    property::{CellProp, PropertyKey, PropertyRef},
    table::{Cell, CellKind, TableModel},
    text::TextShaper,
};

use crate::{
    items::draw_shape,
    render::{
        frame::{ContentRenderer, draw_border_bars, upsert_child},
        text::draw_text,
    },
    target::Painter,
};

/// Inflation applied to measured content when sizing a column.
const CONTENT_INFLATION: f32 = 1.05;

/// Below these thresholds there is no room for the per-gap table controls,
/// so bulk controls move onto the cell editors.
const MIN_SPACING_FOR_CONTROLS: f32 = 5.0;
const MIN_PADDING_FOR_CONTROLS: f32 = 5.0;
const MIN_BORDER_FOR_CONTROLS: f32 = 5.0;

/// Renders the table body.
pub struct TableRenderer;

impl ContentRenderer for TableRenderer {
    fn render_content(
        &self,
        painter: &mut Painter,
        body: Rect,
        item: &mut LegendItem,
        root: &mut Block,
    ) {
        let index = item.index;
        let ItemBody::Table(model) = &mut item.body else {
            return;
        };
        render_table(painter, model, index, body, root);
    }
}

/// Resolved geometry of one table layout pass.
struct TableLayout {
    rect: Rect,
    col_widths: Vec<f32>,
    row_height: f32,
}

impl TableLayout {
    /// Full extent of one cell: content plus padding plus border.
    fn cell_outer(&self, model: &TableModel, row: usize, col: usize) -> Rect {
        let trim = 2.0 * (model.cell_padding + model.cell_border_size);
        let mut x = self.rect.x() + model.cell_spacing;
        for width in &self.col_widths[..col] {
            x += width + trim + model.cell_spacing;
        }
        let outer_h = self.row_height + trim;
        let y = self.rect.y() + model.cell_spacing + row as f32 * (outer_h + model.cell_spacing);
        Rect::from_xywh(x, y, self.col_widths[col] + trim, outer_h)
    }
}

/// Computes column widths, the row height, and the centered table rect.
///
/// Returns `None` when the body cannot hold even the overhead, in which
/// case the table renders nothing this pass.
fn compute_layout(model: &TableModel, body: Rect, shaper: &dyn TextShaper) -> Option<TableLayout> {
    let rows = model.row_count();
    let cols = model.col_count();
    if rows == 0 || cols == 0 {
        return None;
    }

    let trim = model.cell_padding + model.cell_border_size;
    let h_overhead = (cols + 1) as f32 * model.cell_spacing + 2.0 * cols as f32 * trim;
    let v_overhead = (rows + 1) as f32 * model.cell_spacing + 2.0 * rows as f32 * trim;

    let mean_col_width = (body.width() - h_overhead) / cols as f32;
    let row_height = (body.height() - v_overhead) / rows as f32;
    if mean_col_width <= 0.0 || row_height <= 0.0 {
        debug!(
            mean_col_width = mean_col_width,
            row_height = row_height;
            "Body too small for table overhead"
        );
        return None;
    }

    let col_widths = if model.occupy_full_width {
        vec![mean_col_width; cols]
    } else {
        // shrink columns to content, passing freed slack to later columns
        let mut extra_space = 0.0;
        let mut widths = Vec::with_capacity(cols);
        for col in 0..cols {
            let desired = (0..rows)
                .filter_map(|row| model.cell(row, col))
                .map(|cell| cell.active_width(shaper))
                .fold(0.0f32, f32::max)
                * CONTENT_INFLATION;
            let available = mean_col_width + extra_space;
            let width = if desired <= available {
                extra_space = available - desired;
                desired
            } else {
                // oversized columns fall back to the mean and do not
                // consume the slack carried for later columns
                mean_col_width
            };
            widths.push(width);
        }
        widths
    };

    let table_width: f32 = col_widths.iter().sum::<f32>() + h_overhead;
    let table_height = rows as f32 * row_height + v_overhead;
    let rect = Rect::from_xywh(
        body.x() + (body.width() - table_width) / 2.0,
        body.y() + (body.height() - table_height) / 2.0,
        table_width,
        table_height,
    );

    Some(TableLayout {
        rect,
        col_widths,
        row_height,
    })
}

fn render_table(
    painter: &mut Painter,
    model: &mut TableModel,
    item_index: usize,
    body: Rect,
    root: &mut Block,
) {
    let Some(layout) = compute_layout(model, body, painter.shaper()) else {
        return;
    };

    upsert_child(root, BlockRole::Table, layout.rect);
    let table_block = root
        .child_mut(BlockRole::Table)
        .expect("table block was just upserted");

    // structural change: throw the whole cell tree away and rebuild it
    if model.structure_changed() || table_block.children().is_empty() {
        debug!(rows = model.row_count(), cols = model.col_count(); "Rebuilding cell blocks");
        table_block.remove_all_children();
        for (row, col, cell) in model.cells() {
            let block = table_block.add_child(Rect::default(), BlockRole::Cell { row, col });
            block.set_editor(build_cell_editor(item_index, row, col, cell.kind));
        }
        table_block.set_controls_attached(false);
        model.clear_structure_changed();
    }

    let cramped = model.cell_spacing < MIN_SPACING_FOR_CONTROLS
        && model.cell_padding < MIN_PADDING_FOR_CONTROLS
        && model.cell_border_size < MIN_BORDER_FOR_CONTROLS;
    if cramped && !table_block.controls_attached() {
        for block in table_block.children_mut() {
            if let Some(editor) = block.editor_mut() {
                attach_bulk_controls(editor, item_index);
            }
        }
        table_block.set_controls_attached(true);
    }

    // geometry is refreshed every pass, rebuilt or not
    for row in 0..model.row_count() {
        for col in 0..model.col_count() {
            let outer = layout.cell_outer(model, row, col);
            upsert_child(table_block, BlockRole::Cell { row, col }, outer);
        }
    }

    // max over shape-mode cells only; no shape cells means no shapes drawn
    let shape_max = model
        .cells()
        .filter(|(_, _, cell)| cell.kind == CellKind::Shape)
        .map(|(_, _, cell)| cell.shape_value)
        .fold(0.0f32, f32::max);

    for (row, col, cell) in model.cells() {
        let outer = layout.cell_outer(model, row, col);
        let background = outer.inset(model.cell_border_size);
        let content = background.inset(model.cell_padding);

        painter.fill_rect(background, cell.background_color);
        if model.cell_border_size > 0.0 {
            draw_border_bars(painter, background, model.cell_border_size, cell.border_color);
        }

        match cell.kind {
            CellKind::Text => {
                draw_text(
                    painter,
                    &cell.text,
                    &cell.font,
                    cell.font_color,
                    content,
                    cell.alignment,
                );
            }
            CellKind::Shape => {
                if shape_max > 0.0 && cell.shape_value > 0.0 {
                    let height = cell.shape_value / shape_max * content.height();
                    let width = cell.shape_width.min(content.width());
                    let swatch = Rect::from_xywh(
                        content.center().x() - width / 2.0,
                        content.max_y() - height,
                        width,
                        height,
                    );
                    draw_shape(painter, cell.shape_kind, swatch, cell.shape_color);
                }
            }
            CellKind::Image => draw_cell_image(painter, cell, content),
        }
    }
}

/// Draws the cell image centered in the content rect.
///
/// With the scaling flag set the image is aspect-fit into the cell;
/// otherwise the explicit dimensions are used. Unreadable files are
/// logged and leave the cell blank.
fn draw_cell_image(painter: &mut Painter, cell: &Cell, content: Rect) {
    let Some(path) = cell.image_path.as_deref() else {
        return;
    };
    let (natural_w, natural_h) = match image::image_dimensions(path) {
        Ok(dims) => dims,
        Err(err) => {
            warn!(path:% = path.display(), err:% = err; "Skipping unreadable cell image");
            return;
        }
    };
    if natural_w == 0 || natural_h == 0 {
        return;
    }

    let (width, height) = if cell.image_scale {
        let scale = (content.width() / natural_w as f32).min(content.height() / natural_h as f32);
        (natural_w as f32 * scale, natural_h as f32 * scale)
    } else {
        (cell.image_width, cell.image_height)
    };
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    let dest = Rect::from_xywh(
        content.center().x() - width / 2.0,
        content.center().y() - height / 2.0,
        width,
        height,
    );
    painter.draw_image(path, dest);
}

fn cell_ref(item: usize, row: usize, col: usize, prop: CellProp) -> PropertyRef {
    PropertyRef::new(item, PropertyKey::Cell { row, col, prop })
}

/// Builds the editor for one cell: the kind switch and colors, the controls
/// of the active kind, and the structural row/column commands.
fn build_cell_editor(item: usize, row: usize, col: usize, kind: CellKind) -> InplaceEditor {
    let mut editor = InplaceEditor::new();

    let first = editor.add_row();
    let column = first.add_column();
    column.add_widget(Widget::Selector {
        property: cell_ref(item, row, col, CellProp::Kind),
        options: vec!["text".to_string(), "shape".to_string(), "image".to_string()],
    });
    column.add_widget(Widget::ColorPicker {
        property: cell_ref(item, row, col, CellProp::BackgroundColor),
    });
    column.add_widget(Widget::ColorPicker {
        property: cell_ref(item, row, col, CellProp::BorderColor),
    });

    let second = editor.add_row();
    let column = second.add_column();
    match kind {
        CellKind::Text => {
            column.add_widget(Widget::TextField {
                property: cell_ref(item, row, col, CellProp::Text),
            });
            column.add_widget(Widget::FontPicker {
                property: cell_ref(item, row, col, CellProp::Font),
            });
            column.add_widget(Widget::ColorPicker {
                property: cell_ref(item, row, col, CellProp::FontColor),
            });
            column.add_widget(Widget::Selector {
                property: cell_ref(item, row, col, CellProp::Alignment),
                options: vec![
                    "left".to_string(),
                    "center".to_string(),
                    "right".to_string(),
                    "justified".to_string(),
                ],
            });
        }
        CellKind::Shape => {
            column.add_widget(Widget::Selector {
                property: cell_ref(item, row, col, CellProp::ShapeKind),
                options: vec![
                    "rectangle".to_string(),
                    "circle".to_string(),
                    "triangle".to_string(),
                ],
            });
            column.add_widget(Widget::ColorPicker {
                property: cell_ref(item, row, col, CellProp::ShapeColor),
            });
            column.add_widget(Widget::NumberField {
                property: cell_ref(item, row, col, CellProp::ShapeValue),
            });
            column.add_widget(Widget::NumberField {
                property: cell_ref(item, row, col, CellProp::ShapeWidth),
            });
        }
        CellKind::Image => {
            column.add_widget(Widget::TextField {
                property: cell_ref(item, row, col, CellProp::ImagePath),
            });
            column.add_widget(Widget::CheckBox {
                label: "scale".to_string(),
                property: cell_ref(item, row, col, CellProp::ImageScale),
            });
            column.add_widget(Widget::NumberField {
                property: cell_ref(item, row, col, CellProp::ImageWidth),
            });
            column.add_widget(Widget::NumberField {
                property: cell_ref(item, row, col, CellProp::ImageHeight),
            });
        }
    }

    let third = editor.add_row();
    let column = third.add_column();
    for (label, action) in [
        ("row above", EditorAction::InsertRowAbove),
        ("row below", EditorAction::InsertRowBelow),
        ("delete row", EditorAction::DeleteRow),
        ("column before", EditorAction::InsertColumnBefore),
        ("column after", EditorAction::InsertColumnAfter),
        ("delete column", EditorAction::DeleteColumn),
    ] {
        column.add_widget(Widget::Action {
            label: label.to_string(),
            action,
        });
    }

    editor
}

/// Table-wide bulk-edit controls, appended to a cell editor when the grid
/// is too cramped for per-gap controls.
fn attach_bulk_controls(editor: &mut InplaceEditor, _item: usize) {
    let row = editor.add_row();
    let column = row.add_column();
    for (label, action) in [
        ("all kinds", EditorAction::SetKindAll),
        ("all shapes", EditorAction::SetShapeAll),
        ("all fonts", EditorAction::SetFontAll),
        ("all font colors", EditorAction::SetFontColorAll),
    ] {
        column.add_widget(Widget::Action {
            label: label.to_string(),
            action,
        });
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::target::{DisplayList, DrawOp, Target, View};
    use cartouche_core::{table::ShapeKind, text::FixedAdvanceShaper};

    fn shaper() -> FixedAdvanceShaper {
        FixedAdvanceShaper::new(0.5)
    }

    fn render(model: &mut TableModel, body: Rect, root: &mut Block) -> Target {
        let s = shaper();
        let mut target = Target::Canvas(DisplayList::new(View::identity()));
        let mut painter = Painter::new(&mut target, &s);
        render_table(&mut painter, model, 0, body, root);
        target
    }

    fn bulk_widget() -> Widget {
        Widget::Action {
            label: "all kinds".to_string(),
            action: EditorAction::SetKindAll,
        }
    }

    // ===================
    // Layout
    // ===================

    #[test]
    fn test_full_width_conserves_body_width() {
        let model = TableModel::new(2, 2);
        let body = Rect::from_xywh(0.0, 0.0, 400.0, 200.0);
        let layout = compute_layout(&model, body, &shaper()).unwrap();

        let trim = model.cell_padding + model.cell_border_size;
        let overhead = 3.0 * model.cell_spacing + 4.0 * trim;
        let total: f32 = layout.col_widths.iter().sum::<f32>() + overhead;
        assert_approx_eq!(f32, total, body.width(), epsilon = 0.001);
        assert_approx_eq!(f32, layout.rect.width(), body.width(), epsilon = 0.001);
        // uniform columns
        assert_approx_eq!(f32, layout.col_widths[0], layout.col_widths[1]);
    }

    #[test]
    fn test_content_columns_inflate_and_redistribute() {
        let mut model = TableModel::new(1, 2);
        model.occupy_full_width = false;
        // advance is 0.5 * 12.0 = 6.0 per char with the default font
        model.cell_mut(0, 0).unwrap().text = "ab".to_string();
        model.cell_mut(0, 1).unwrap().text =
            "a very long run of text that wants far more than its share".to_string();

        let body = Rect::from_xywh(0.0, 0.0, 300.0, 100.0);
        let layout = compute_layout(&model, body, &shaper()).unwrap();

        let trim = model.cell_padding + model.cell_border_size;
        let mean = (body.width() - (3.0 * model.cell_spacing + 4.0 * trim)) / 2.0;

        // first column shrinks to its content, inflated 5%
        let narrow = 2.0 * 6.0 * CONTENT_INFLATION;
        assert_approx_eq!(f32, layout.col_widths[0], narrow, epsilon = 0.001);
        // second wants more than the mean plus freed slack: it gets the mean
        assert_approx_eq!(f32, layout.col_widths[1], mean, epsilon = 0.001);
    }

    #[test]
    fn test_oversized_column_keeps_slack_for_later_columns() {
        let mut model = TableModel::new(1, 3);
        model.occupy_full_width = false;
        model.cell_mut(0, 0).unwrap().text = "ab".to_string();
        model.cell_mut(0, 1).unwrap().text =
            "a very long run of text that wants far more than its share".to_string();
        model.cell_mut(0, 2).unwrap().text = "wide but still fits here!".to_string();

        let body = Rect::from_xywh(0.0, 0.0, 400.0, 100.0);
        let layout = compute_layout(&model, body, &shaper()).unwrap();

        let trim = model.cell_padding + model.cell_border_size;
        let mean = (body.width() - (4.0 * model.cell_spacing + 6.0 * trim)) / 3.0;

        let narrow = 2.0 * 6.0 * CONTENT_INFLATION;
        assert_approx_eq!(f32, layout.col_widths[0], narrow, epsilon = 0.001);
        // the oversized middle column falls back to the mean without
        // consuming the slack the first column freed
        assert_approx_eq!(f32, layout.col_widths[1], mean, epsilon = 0.001);
        // the last column still fits inside mean + carried slack
        let last = 25.0 * 6.0 * CONTENT_INFLATION;
        assert!(last <= mean + (mean - narrow));
        assert_approx_eq!(f32, layout.col_widths[2], last, epsilon = 0.001);
    }

    #[test]
    fn test_table_is_centered_in_body() {
        let mut model = TableModel::new(1, 1);
        model.occupy_full_width = false;
        model.cell_mut(0, 0).unwrap().text = "x".to_string();

        let body = Rect::from_xywh(50.0, 20.0, 300.0, 200.0);
        let layout = compute_layout(&model, body, &shaper()).unwrap();

        assert_approx_eq!(
            f32,
            layout.rect.center().x(),
            body.center().x(),
            epsilon = 0.001
        );
        assert_approx_eq!(
            f32,
            layout.rect.center().y(),
            body.center().y(),
            epsilon = 0.001
        );
    }

    #[test]
    fn test_body_too_small_renders_nothing() {
        let mut model = TableModel::new(3, 3);
        let body = Rect::from_xywh(0.0, 0.0, 30.0, 30.0);
        assert!(compute_layout(&model, body, &shaper()).is_none());

        let mut root = Block::root(Rect::default());
        let target = render(&mut model, body, &mut root);
        let Target::Canvas(list) = &target else {
            unreachable!()
        };
        assert!(list.ops().is_empty());
        assert!(root.child(BlockRole::Table).is_none());
    }

    #[test]
    fn test_cell_outer_geometry_tiles_the_table() {
        let model = TableModel::new(2, 2);
        let body = Rect::from_xywh(0.0, 0.0, 400.0, 200.0);
        let layout = compute_layout(&model, body, &shaper()).unwrap();

        let first = layout.cell_outer(&model, 0, 0);
        let second = layout.cell_outer(&model, 0, 1);
        assert_approx_eq!(f32, first.x(), layout.rect.x() + model.cell_spacing);
        assert_approx_eq!(
            f32,
            second.x(),
            first.max_x() + model.cell_spacing,
            epsilon = 0.001
        );

        let below = layout.cell_outer(&model, 1, 0);
        assert_approx_eq!(
            f32,
            below.y(),
            first.max_y() + model.cell_spacing,
            epsilon = 0.001
        );
        // last cell ends one spacing short of the table edge
        let last = layout.cell_outer(&model, 1, 1);
        assert_approx_eq!(
            f32,
            last.max_x() + model.cell_spacing,
            layout.rect.max_x(),
            epsilon = 0.001
        );
    }

    // ===================
    // Shape normalization
    // ===================

    #[test]
    fn test_shape_heights_normalized_against_shape_cells_only() {
        let mut model = TableModel::new(1, 4);
        for (col, value) in [(0, 2.0), (1, 4.0), (2, 8.0)] {
            let cell = model.cell_mut(0, col).unwrap();
            cell.kind = CellKind::Shape;
            cell.shape_kind = ShapeKind::Circle;
            cell.shape_value = value;
        }
        // a text cell whose width would dominate must not affect the max
        model.cell_mut(0, 3).unwrap().text = "t".to_string();

        let body = Rect::from_xywh(0.0, 0.0, 600.0, 200.0);
        let mut root = Block::root(Rect::default());
        let target = render(&mut model, body, &mut root);

        let Target::Canvas(list) = &target else {
            unreachable!()
        };
        let ovals: Vec<&Rect> = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillOval { rect, .. } => Some(rect),
                _ => None,
            })
            .collect();
        assert_eq!(ovals.len(), 3);

        let layout = compute_layout(&model, body, &shaper()).unwrap();
        let content_height = layout.row_height;
        assert_approx_eq!(f32, ovals[0].height(), 0.25 * content_height, epsilon = 0.01);
        assert_approx_eq!(f32, ovals[1].height(), 0.5 * content_height, epsilon = 0.01);
        assert_approx_eq!(f32, ovals[2].height(), content_height, epsilon = 0.01);
    }

    #[test]
    fn test_no_shape_cells_skips_shape_drawing() {
        let mut model = TableModel::new(1, 2);
        model.cell_mut(0, 0).unwrap().text = "a".to_string();
        model.cell_mut(0, 1).unwrap().text = "b".to_string();

        let body = Rect::from_xywh(0.0, 0.0, 400.0, 100.0);
        let mut root = Block::root(Rect::default());
        let target = render(&mut model, body, &mut root);

        let Target::Canvas(list) = &target else {
            unreachable!()
        };
        assert!(!list
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::FillOval { .. } | DrawOp::FillTriangle { .. })));
    }

    // ===================
    // Blocks, editors, bulk controls
    // ===================

    #[test]
    fn test_structural_change_rebuilds_cell_blocks() {
        let mut model = TableModel::new(2, 2);
        let body = Rect::from_xywh(0.0, 0.0, 400.0, 300.0);
        let mut root = Block::root(Rect::default());

        render(&mut model, body, &mut root);
        assert!(!model.structure_changed());
        assert_eq!(root.child(BlockRole::Table).unwrap().children().len(), 4);

        model.insert_row(1);
        render(&mut model, body, &mut root);
        assert!(!model.structure_changed());
        assert_eq!(root.child(BlockRole::Table).unwrap().children().len(), 6);
        // every rebuilt cell has a fresh editor
        for block in root.child(BlockRole::Table).unwrap().children() {
            assert!(block.editor().is_some());
        }
    }

    #[test]
    fn test_bulk_controls_attached_once_per_rebuild() {
        let mut model = TableModel::new(2, 2);
        model.cell_spacing = 2.0;
        model.cell_padding = 2.0;
        model.cell_border_size = 1.0;

        let body = Rect::from_xywh(0.0, 0.0, 400.0, 200.0);
        let mut root = Block::root(Rect::default());

        render(&mut model, body, &mut root);
        let table = root.child(BlockRole::Table).unwrap();
        assert!(table.controls_attached());
        for block in table.children() {
            assert_eq!(block.editor().unwrap().count(&bulk_widget()), 1);
        }

        // a second, non-structural pass must not re-attach
        render(&mut model, body, &mut root);
        let table = root.child(BlockRole::Table).unwrap();
        for block in table.children() {
            assert_eq!(block.editor().unwrap().count(&bulk_widget()), 1);
        }

        // a structural change resets the flag and re-attaches once
        model.delete_row(0);
        render(&mut model, body, &mut root);
        let table = root.child(BlockRole::Table).unwrap();
        assert!(table.controls_attached());
        for block in table.children() {
            assert_eq!(block.editor().unwrap().count(&bulk_widget()), 1);
        }
    }

    #[test]
    fn test_roomy_tables_get_no_bulk_controls() {
        let mut model = TableModel::new(2, 2);
        // default spacing/padding are above the thresholds
        let body = Rect::from_xywh(0.0, 0.0, 400.0, 200.0);
        let mut root = Block::root(Rect::default());

        render(&mut model, body, &mut root);
        let table = root.child(BlockRole::Table).unwrap();
        assert!(!table.controls_attached());
        for block in table.children() {
            assert_eq!(block.editor().unwrap().count(&bulk_widget()), 0);
        }
    }

    #[test]
    fn test_cell_editor_matches_kind() {
        let text_editor = build_cell_editor(0, 0, 0, CellKind::Text);
        assert!(text_editor.contains(&Widget::TextField {
            property: cell_ref(0, 0, 0, CellProp::Text),
        }));

        let shape_editor = build_cell_editor(0, 0, 0, CellKind::Shape);
        assert!(shape_editor.contains(&Widget::NumberField {
            property: cell_ref(0, 0, 0, CellProp::ShapeValue),
        }));
        assert!(!shape_editor.contains(&Widget::TextField {
            property: cell_ref(0, 0, 0, CellProp::Text),
        }));
    }

    #[test]
    fn test_missing_image_leaves_cell_blank() {
        let mut model = TableModel::new(1, 1);
        {
            let cell = model.cell_mut(0, 0).unwrap();
            cell.kind = CellKind::Image;
            cell.image_path = Some("/nonexistent/missing.png".into());
        }

        let body = Rect::from_xywh(0.0, 0.0, 200.0, 100.0);
        let mut root = Block::root(Rect::default());
        let target = render(&mut model, body, &mut root);

        let Target::Canvas(list) = &target else {
            unreachable!()
        };
        assert!(!list
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::Image { .. })));
    }
}
