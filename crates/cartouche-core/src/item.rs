//! The legend item model.
//!
//! A [`LegendItem`] is one annotated block in the preview: its saved
//! position and extent, interaction flags, the frame properties every item
//! shares (border, background, title, description), and a body payload
//! selecting which content renderer draws its interior.

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    font::FontSpec,
    geometry::Point,
    table::{ShapeKind, TableModel},
};

/// Horizontal alignment of legend text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// Border drawn around the outside of a legend frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyle {
    pub enabled: bool,
    pub color: Color,
    pub thickness: f32,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Color::default(),
            thickness: 1.0,
        }
    }
}

/// Background fill of a legend frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundStyle {
    pub enabled: bool,
    pub color: Color,
}

/// A titled text band of the frame (the title above the body, the
/// description below it).
#[derive(Debug, Clone, PartialEq)]
pub struct TextBand {
    pub enabled: bool,
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
    pub alignment: Alignment,
}

impl Default for TextBand {
    fn default() -> Self {
        Self {
            enabled: true,
            text: String::new(),
            font: FontSpec::default(),
            color: Color::default(),
            alignment: Alignment::Center,
        }
    }
}

/// Frame properties shared by every item kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameProperties {
    pub is_displaying: bool,
    pub border: BorderStyle,
    pub background: BackgroundStyle,
    pub title: TextBand,
    pub description: TextBand,
}

/// One key/value row of a description body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionEntry {
    pub key: String,
    pub value: String,
}

/// One partition group of a groups body.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    pub value: f32,
    pub shape: ShapeKind,
    pub color: Color,
}

/// Which content renderer draws the item's interior.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemBody {
    Text {
        text: String,
        font: FontSpec,
        color: Color,
        alignment: Alignment,
    },
    Description {
        entries: Vec<DescriptionEntry>,
        font: FontSpec,
        color: Color,
    },
    Groups(Vec<Group>),
    Table(TableModel),
}

/// One legend item: position, extent, interaction flags, frame properties,
/// and a body payload.
#[derive(Debug, Clone)]
pub struct LegendItem {
    pub index: usize,
    /// User-saved position of the item's top-left corner in preview space
    pub origin: Point,
    pub width: f32,
    pub height: f32,
    pub selected: bool,
    /// True while the user is dragging or resizing the item
    pub transforming: bool,
    pub frame: FrameProperties,
    pub body: ItemBody,
}

impl LegendItem {
    /// Creates a new item at the origin with the given extent and body.
    pub fn new(index: usize, width: f32, height: f32, body: ItemBody) -> Self {
        Self {
            index,
            origin: Point::default(),
            width,
            height,
            selected: false,
            transforming: false,
            frame: FrameProperties {
                is_displaying: true,
                ..FrameProperties::default()
            },
            body,
        }
    }
}
