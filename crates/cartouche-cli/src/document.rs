//! The TOML legend description.
//!
//! A document is a list of `[[item]]` tables, each carrying a position, an
//! extent, optional title/description bands, and a `kind` selecting the body
//! payload. [`build_legend`] converts the deserialized document into model
//! items, seeding unspecified fonts and colors from the configuration
//! defaults.
//!
//! ```toml
//! [[item]]
//! kind = "text"
//! width = 200.0
//! height = 100.0
//! title = "Degrees"
//! text = "Node degree distribution"
//! align = "center"
//! ```

use log::warn;
use serde::Deserialize;

use cartouche::{Error, Legend, config::Defaults};
use cartouche_core::{
    color::Color,
    font::FontSpec,
    geometry::Point,
    item::{Alignment, DescriptionEntry, Group, ItemBody, LegendItem},
    table::{CellKind, ShapeKind, TableModel},
};

/// Deserialized legend description.
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default, rename = "item")]
    items: Vec<ItemDoc>,
}

#[derive(Debug, Deserialize)]
struct ItemDoc {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    width: f32,
    height: f32,
    title: Option<String>,
    description: Option<String>,
    #[serde(flatten)]
    body: BodyDoc,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum BodyDoc {
    Text {
        text: String,
        #[serde(default)]
        align: Alignment,
        color: Option<String>,
        font: Option<FontSpec>,
    },
    Description {
        entries: Vec<DescriptionEntry>,
        color: Option<String>,
        font: Option<FontSpec>,
    },
    Groups {
        groups: Vec<GroupDoc>,
    },
    Table {
        rows: Option<usize>,
        cols: Option<usize>,
        spacing: Option<f32>,
        padding: Option<f32>,
        border: Option<f32>,
        full_width: Option<bool>,
        #[serde(default, rename = "cell")]
        cells: Vec<CellDoc>,
    },
}

#[derive(Debug, Deserialize)]
struct GroupDoc {
    label: String,
    value: f32,
    #[serde(default)]
    shape: ShapeKind,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CellDoc {
    row: usize,
    col: usize,
    #[serde(default)]
    kind: CellKind,
    text: Option<String>,
    shape: Option<ShapeKind>,
    value: Option<f32>,
    color: Option<String>,
    image: Option<String>,
}

/// Builds a renderable [`Legend`] from a deserialized document.
///
/// # Errors
///
/// Returns an error when a color string in the document or the
/// configuration defaults cannot be parsed.
pub fn build_legend(document: Document, defaults: &Defaults) -> Result<Legend, Error> {
    let mut legend = Legend::new();
    for (index, doc) in document.items.into_iter().enumerate() {
        legend.push(build_item(index, doc, defaults)?);
    }
    Ok(legend)
}

fn build_item(index: usize, doc: ItemDoc, defaults: &Defaults) -> Result<LegendItem, Error> {
    let body = build_body(doc.body, defaults)?;
    let mut item = LegendItem::new(index, doc.width, doc.height, body);
    item.origin = Point::new(doc.x, doc.y);

    item.frame.border.color = defaults.frame().border_color().map_err(Error::Color)?;
    item.frame.border.thickness = defaults.frame().border_thickness();
    item.frame.background.color = defaults.frame().background_color().map_err(Error::Color)?;

    item.frame.title.font = defaults.frame().title_font().clone();
    item.frame.description.font = defaults.frame().description_font().clone();
    if let Some(title) = doc.title {
        item.frame.title.text = title;
    }
    if let Some(description) = doc.description {
        item.frame.description.text = description;
    }

    Ok(item)
}

fn build_body(doc: BodyDoc, defaults: &Defaults) -> Result<ItemBody, Error> {
    match doc {
        BodyDoc::Text {
            text,
            align,
            color,
            font,
        } => Ok(ItemBody::Text {
            text,
            font: font.unwrap_or_default(),
            color: parse_color(color)?,
            alignment: align,
        }),
        BodyDoc::Description {
            entries,
            color,
            font,
        } => Ok(ItemBody::Description {
            entries,
            font: font.unwrap_or_else(|| defaults.frame().description_font().clone()),
            color: parse_color(color)?,
        }),
        BodyDoc::Groups { groups } => {
            let groups = groups
                .into_iter()
                .map(|doc| {
                    Ok(Group {
                        label: doc.label,
                        value: doc.value,
                        shape: doc.shape,
                        color: parse_color(doc.color)?,
                    })
                })
                .collect::<Result<Vec<_>, Error>>()?;
            Ok(ItemBody::Groups(groups))
        }
        BodyDoc::Table {
            rows,
            cols,
            spacing,
            padding,
            border,
            full_width,
            cells,
        } => {
            let table_defaults = defaults.table();
            let mut model = TableModel::new(
                rows.unwrap_or_else(|| table_defaults.rows()),
                cols.unwrap_or_else(|| table_defaults.cols()),
            );
            model.cell_spacing = spacing.unwrap_or_else(|| table_defaults.cell_spacing());
            model.cell_padding = padding.unwrap_or_else(|| table_defaults.cell_padding());
            model.cell_border_size = border.unwrap_or_else(|| table_defaults.cell_border_size());
            if let Some(full_width) = full_width {
                model.occupy_full_width = full_width;
            }

            for doc in cells {
                let Some(cell) = model.cell_mut(doc.row, doc.col) else {
                    warn!(row = doc.row, col = doc.col; "Cell position outside the table, skipping");
                    continue;
                };
                cell.kind = doc.kind;
                if let Some(text) = doc.text {
                    cell.text = text;
                }
                if let Some(shape) = doc.shape {
                    cell.shape_kind = shape;
                }
                if let Some(value) = doc.value {
                    cell.shape_value = value;
                }
                if let Some(color) = doc.color {
                    let color = Color::new(&color).map_err(Error::Color)?;
                    match doc.kind {
                        CellKind::Text => cell.font_color = color,
                        CellKind::Shape => cell.shape_color = color,
                        CellKind::Image => cell.border_color = color,
                    }
                }
                if let Some(image) = doc.image {
                    cell.image_path = Some(image.into());
                }
            }
            Ok(ItemBody::Table(model))
        }
    }
}

fn parse_color(raw: Option<String>) -> Result<Color, Error> {
    match raw {
        Some(raw) => Color::new(&raw).map_err(Error::Color),
        None => Ok(Color::default()),
    }
}
