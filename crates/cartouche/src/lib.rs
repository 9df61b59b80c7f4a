//! Cartouche - legend rendering for graph-visualization previews.
//!
//! Layout and rendering for annotated legend blocks: text, key/value
//! descriptions, partition summaries, and tables. Every item renders
//! through a shared frame pipeline (border, background, title, description,
//! selection affordances) that delegates its interior to a content renderer
//! matched to the item body, and every renderer draws through the same
//! multi-target façade, so the interactive preview, the SVG export, and the
//! PDF export agree on geometry.

pub mod command;
pub mod config;
pub mod items;
pub mod render;
pub mod target;

mod error;

pub use cartouche_core::{block, color, editor, font, geometry, item, property, table, text};

pub use error::Error;
pub use render::{measure_text, render_item};

use log::{debug, info};

use cartouche_core::{
    block::Block,
    geometry::{Rect, Size},
    item::LegendItem,
    text::TextShaper,
};

use target::{DisplayList, PdfSurface, SvgSurface, Target, View};

/// Margin added around the items when sizing an export canvas.
const EXPORT_MARGIN: f32 = 10.0;

/// A set of legend items together with their cached block trees.
///
/// The block tree of each item persists across render passes: geometry is
/// refreshed every pass while block identity (and the editors cached on
/// blocks) survives until a structural change discards it. Keeping items
/// and trees together ensures they stay index-aligned.
///
/// # Examples
///
/// ```
/// use cartouche::Legend;
/// use cartouche::item::{Alignment, ItemBody, LegendItem};
/// use cartouche::color::Color;
/// use cartouche::font::FontSpec;
/// use cartouche::text::FixedAdvanceShaper;
///
/// let mut legend = Legend::new();
/// legend.push(LegendItem::new(
///     0,
///     200.0,
///     100.0,
///     ItemBody::Text {
///         text: "Node count".to_string(),
///         font: FontSpec::default(),
///         color: Color::default(),
///         alignment: Alignment::Left,
///     },
/// ));
///
/// let shaper = FixedAdvanceShaper::default();
/// let svg = legend.render_svg(&shaper);
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct Legend {
    items: Vec<LegendItem>,
    roots: Vec<Block>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, creating its root block.
    pub fn push(&mut self, item: LegendItem) {
        self.roots.push(Block::root(Rect::new(
            item.origin,
            Size::new(item.width, item.height),
        )));
        self.items.push(item);
    }

    pub fn items(&self) -> &[LegendItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [LegendItem] {
        &mut self.items
    }

    /// Returns the cached block tree of the item at `index`.
    pub fn root(&self, index: usize) -> Option<&Block> {
        self.roots.get(index)
    }

    /// Smallest canvas that fits every displayed item, plus a margin.
    pub fn canvas_size(&self) -> Size {
        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for item in &self.items {
            if !item.frame.is_displaying {
                continue;
            }
            width = width.max(item.origin.x() + item.width);
            height = height.max(item.origin.y() + item.height);
        }
        if width <= 0.0 || height <= 0.0 {
            return Size::default();
        }
        Size::new(width + EXPORT_MARGIN, height + EXPORT_MARGIN)
    }

    /// Renders every item into the given target.
    pub fn render_to(&mut self, target: &mut Target, shaper: &dyn TextShaper) {
        debug!(items = self.items.len(); "Rendering legend");
        for (item, root) in self.items.iter_mut().zip(&mut self.roots) {
            let mut painter = target::Painter::new(target, shaper);
            render_item(&mut painter, item, root);
        }
    }

    /// Renders the legend to an SVG string.
    pub fn render_svg(&mut self, shaper: &dyn TextShaper) -> String {
        info!("Rendering legend to SVG");
        let mut target = Target::Vector(SvgSurface::new(self.canvas_size()));
        self.render_to(&mut target, shaper);
        let Target::Vector(surface) = target else {
            unreachable!("target variant is fixed above");
        };
        surface.into_string()
    }

    /// Renders the legend to PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF document cannot be serialized.
    pub fn render_pdf(&mut self, title: &str, shaper: &dyn TextShaper) -> Result<Vec<u8>, Error> {
        info!("Rendering legend to PDF");
        let mut target = Target::Page(PdfSurface::new(title, self.canvas_size()));
        self.render_to(&mut target, shaper);
        let Target::Page(surface) = target else {
            unreachable!("target variant is fixed above");
        };
        surface.into_bytes()
    }

    /// Renders the legend into a display list under the given view.
    pub fn render_display(&mut self, view: View, shaper: &dyn TextShaper) -> DisplayList {
        let mut target = Target::Canvas(DisplayList::new(view));
        self.render_to(&mut target, shaper);
        let Target::Canvas(list) = target else {
            unreachable!("target variant is fixed above");
        };
        list
    }
}
