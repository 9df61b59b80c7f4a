//! Per-item content renderers.
//!
//! The frame pipeline reserves a body rectangle and hands it to the content
//! renderer matching the item's body payload:
//!
//! - [`TextRenderer`] - a single block of body text
//! - [`DescriptionRenderer`] - stacked key/value rows
//! - [`GroupsRenderer`] - partition summaries with normalized swatches
//! - [`TableRenderer`] - the table grid

pub mod description;
pub mod groups;
pub mod table;
pub mod text;

pub use description::DescriptionRenderer;
pub use groups::GroupsRenderer;
pub use table::TableRenderer;
pub use text::TextRenderer;

use cartouche_core::{
    color::Color,
    geometry::{Point, Rect},
    item::ItemBody,
    table::ShapeKind,
};

use crate::{render::frame::ContentRenderer, target::Painter};

/// Selects the content renderer for the given body payload.
pub fn renderer_for(body: &ItemBody) -> &'static dyn ContentRenderer {
    match body {
        ItemBody::Text { .. } => &TextRenderer,
        ItemBody::Description { .. } => &DescriptionRenderer,
        ItemBody::Groups(_) => &GroupsRenderer,
        ItemBody::Table(_) => &TableRenderer,
    }
}

/// Fills one shape into the given rectangle.
///
/// Triangles point upward: apex at the top-center, base along the bottom
/// edge.
pub(crate) fn draw_shape(painter: &mut Painter, kind: ShapeKind, rect: Rect, color: Color) {
    match kind {
        ShapeKind::Rectangle => painter.fill_rect(rect, color),
        ShapeKind::Circle => painter.fill_oval(rect, color),
        ShapeKind::Triangle => painter.fill_triangle(
            [
                Point::new(rect.center().x(), rect.y()),
                Point::new(rect.max_x(), rect.max_y()),
                Point::new(rect.x(), rect.max_y()),
            ],
            color,
        ),
    }
}
