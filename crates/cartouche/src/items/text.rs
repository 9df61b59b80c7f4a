//! Body-text content renderer.

use cartouche_core::{block::Block, geometry::Rect, item::{ItemBody, LegendItem}};

use crate::{
    render::{frame::ContentRenderer, text::draw_text},
    target::Painter,
};

/// Draws the item's body string through the text layout engine.
pub struct TextRenderer;

impl ContentRenderer for TextRenderer {
    fn render_content(
        &self,
        painter: &mut Painter,
        body: Rect,
        item: &mut LegendItem,
        _root: &mut Block,
    ) {
        let ItemBody::Text {
            text,
            font,
            color,
            alignment,
        } = &item.body
        else {
            return;
        };
        draw_text(painter, text, font, *color, body, *alignment);
    }
}
