//! The shared legend frame pipeline.
//!
//! Every item kind renders through the same ordered stages: external
//! border, background, title, body, description, selection affordances,
//! and (on the interactive target) the drag placeholder. Only the body
//! stage differs per item; it is delegated to the [`ContentRenderer`]
//! selected from the item's body payload.
//!
//! No stage raises a user-visible error: disabled or empty elements simply
//! render nothing, and the pipeline always runs to completion.

use log::debug;

use cartouche_core::{
    block::{Block, BlockRole},
    color::Color,
    editor::{InplaceEditor, Widget},
    font::FontSpec,
    geometry::{Point, Rect, Size},
    item::LegendItem,
    property::{FrameProp, PropertyKey, PropertyRef},
};

use crate::{
    items,
    render::text::{draw_text, measure_text},
    target::Painter,
};

/// Vertical margin between the title, body, and description bands.
pub const FRAME_MARGIN: f32 = 5.0;

/// Side length of a selection corner anchor.
const ANCHOR_SIZE: f32 = 20.0;

/// Rim thickness of a selection corner anchor.
const ANCHOR_RIM: f32 = 3.0;

/// Smallest font size the placeholder label is allowed to shrink to.
const PLACEHOLDER_MIN_FONT: f32 = 20.0;

/// Fraction of the placeholder width the label may occupy.
const PLACEHOLDER_WIDTH_RATIO: f32 = 0.9;

const PLACEHOLDER_LABEL: &str = "transforming…";

/// Renders one item's interior, given the body rectangle the frame
/// reserved for it.
///
/// Implementations draw through the painter only and cache blocks (with
/// their editors) under `root`; they must not touch the frame bands.
pub trait ContentRenderer {
    fn render_content(
        &self,
        painter: &mut Painter,
        body: Rect,
        item: &mut LegendItem,
        root: &mut Block,
    );
}

/// Runs the full frame pipeline for one item.
///
/// `root` is the item's persistent block; its geometry is refreshed every
/// pass while cached editors survive until a structural change.
pub fn render_item(painter: &mut Painter, item: &mut LegendItem, root: &mut Block) {
    if !item.frame.is_displaying {
        return;
    }

    let content = Rect::new(item.origin, Size::new(item.width, item.height));
    painter.set_origin(item.origin);
    root.update_geometry(content);

    debug!(item = item.index, x = content.x(), y = content.y(); "Rendering legend item");

    // while the user drags or resizes, the interactive target shows only
    // the placeholder panel and the scale anchors
    if item.transforming && painter.is_interactive() {
        draw_placeholder(painter, content);
        draw_selection(painter, content);
        return;
    }

    if item.frame.border.enabled {
        draw_border_bars(
            painter,
            content,
            item.frame.border.thickness,
            item.frame.border.color,
        );
    }

    // first pass only; afterwards the cached editor is kept as-is
    if root.editor().is_none() {
        root.set_editor(build_frame_editor(item.index));
    }

    if item.frame.background.enabled {
        painter.fill_rect(content, item.frame.background.color);
    }

    let title = &item.frame.title;
    let title_height = if title.enabled && !title.text.is_empty() {
        measure_text(painter.shaper(), &title.text, &title.font, content)
    } else {
        0.0
    };
    if title_height > 0.0 {
        let title_rect = content.with_size(Size::new(content.width(), title_height));
        upsert_child(root, BlockRole::Title, title_rect);
        draw_text(
            painter,
            &title.text,
            &title.font,
            title.color,
            title_rect,
            title.alignment,
        );
    }

    let description = &item.frame.description;
    let description_height = if description.enabled && !description.text.is_empty() {
        measure_text(painter.shaper(), &description.text, &description.font, content)
    } else {
        0.0
    };

    let body = Rect::from_xywh(
        content.x(),
        content.y() + title_height + FRAME_MARGIN,
        content.width(),
        content.height() - title_height - description_height - 2.0 * FRAME_MARGIN,
    );
    upsert_child(root, BlockRole::Body, body);

    let renderer = items::renderer_for(&item.body);
    renderer.render_content(painter, body, item, root);

    if description_height > 0.0 {
        let description = &item.frame.description;
        let description_rect = Rect::from_xywh(
            content.x(),
            body.max_y() + FRAME_MARGIN,
            content.width(),
            description_height,
        );
        upsert_child(root, BlockRole::Description, description_rect);
        draw_text(
            painter,
            &description.text,
            &description.font,
            description.color,
            description_rect,
            description.alignment,
        );
    }

    if item.selected {
        draw_selection(painter, content);
    }
}

/// Four filled bars just outside the content rectangle.
///
/// Shared with the table renderer, which borders each cell the same way.
pub(crate) fn draw_border_bars(painter: &mut Painter, content: Rect, thickness: f32, color: Color) {
    let t = thickness;
    // top and bottom bars span the corners
    painter.fill_rect(
        Rect::from_xywh(content.x() - t, content.y() - t, content.width() + 2.0 * t, t),
        color,
    );
    painter.fill_rect(
        Rect::from_xywh(content.x() - t, content.max_y(), content.width() + 2.0 * t, t),
        color,
    );
    painter.fill_rect(
        Rect::from_xywh(content.x() - t, content.y(), t, content.height()),
        color,
    );
    painter.fill_rect(
        Rect::from_xywh(content.max_x(), content.y(), t, content.height()),
        color,
    );
}

fn build_frame_editor(item: usize) -> InplaceEditor {
    let frame_ref = |prop| PropertyRef::new(item, PropertyKey::Frame(prop));

    let mut editor = InplaceEditor::new();
    let row = editor.add_row();
    let column = row.add_column();
    column.add_widget(Widget::CheckBox {
        label: "border".to_string(),
        property: frame_ref(FrameProp::BorderEnabled),
    });
    column.add_widget(Widget::ColorPicker {
        property: frame_ref(FrameProp::BorderColor),
    });
    column.add_widget(Widget::NumberField {
        property: frame_ref(FrameProp::BorderThickness),
    });

    let row = editor.add_row();
    let column = row.add_column();
    column.add_widget(Widget::CheckBox {
        label: "background".to_string(),
        property: frame_ref(FrameProp::BackgroundEnabled),
    });
    column.add_widget(Widget::ColorPicker {
        property: frame_ref(FrameProp::BackgroundColor),
    });
    editor
}

/// Selection outline plus four corner anchors.
fn draw_selection(painter: &mut Painter, content: Rect) {
    let outline = Color::default();
    draw_border_bars(painter, content, 1.0, outline);

    let rim = Color::default();
    let core = Color::new("white").expect("'white' is a valid CSS color");
    for corner in [
        content.origin(),
        Point::new(content.max_x(), content.y()),
        Point::new(content.x(), content.max_y()),
        Point::new(content.max_x(), content.max_y()),
    ] {
        let anchor = Rect::from_xywh(
            corner.x() - ANCHOR_SIZE / 2.0,
            corner.y() - ANCHOR_SIZE / 2.0,
            ANCHOR_SIZE,
            ANCHOR_SIZE,
        );
        painter.fill_rect(anchor, rim);
        painter.fill_rect(anchor.inset(ANCHOR_RIM), core);
    }
}

/// Semi-transparent panel with a centered label sized to fit.
fn draw_placeholder(painter: &mut Painter, content: Rect) {
    let border = Color::default().with_alpha(0.6);
    let fill = Color::new("gray")
        .expect("'gray' is a valid CSS color")
        .with_alpha(0.4);

    draw_border_bars(painter, content, 2.0, border);
    painter.fill_rect(content, fill);

    let font = fit_placeholder_font(painter, content.width());
    let metrics = painter.shaper().line_metrics(&font);
    let width = painter.shaper().measure(PLACEHOLDER_LABEL, &font).width();
    let anchor = Point::new(
        content.center().x() - width / 2.0,
        content.center().y() - metrics.line_extent() / 2.0 + metrics.ascent,
    );
    painter.draw_text_run(PLACEHOLDER_LABEL, anchor, &font, Color::default());
}

/// Doubles the label font while it still fits the width budget, then walks
/// back down; never below [`PLACEHOLDER_MIN_FONT`].
fn fit_placeholder_font(painter: &Painter, panel_width: f32) -> FontSpec {
    let budget = panel_width * PLACEHOLDER_WIDTH_RATIO;
    let fits = |size: f32| {
        painter
            .shaper()
            .measure(PLACEHOLDER_LABEL, &FontSpec::default().with_size(size))
            .width()
            <= budget
    };

    let mut size = PLACEHOLDER_MIN_FONT;
    while fits(size * 2.0) {
        size *= 2.0;
    }
    while size > PLACEHOLDER_MIN_FONT && !fits(size) {
        size -= 1.0;
    }
    FontSpec::default().with_size(size)
}

/// Refreshes the geometry of the child with the given role, creating it on
/// the first pass.
pub(crate) fn upsert_child(root: &mut Block, role: BlockRole, rect: Rect) {
    match root.child_mut(role) {
        Some(block) => block.update_geometry(rect),
        None => {
            root.add_child(rect, role);
        }
    }
}
