//! Typed property keys for legend items.
//!
//! Editor widgets reference the values they edit through a [`PropertyRef`]:
//! the owning item's index plus a typed [`PropertyKey`]. The host
//! application owns the actual property storage; these keys only name
//! values, they never hold them.

/// Properties of the shared legend frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameProp {
    IsDisplaying,
    BorderEnabled,
    BorderColor,
    BorderThickness,
    BackgroundEnabled,
    BackgroundColor,
    TitleEnabled,
    TitleText,
    TitleFont,
    TitleFontColor,
    TitleAlignment,
    DescriptionEnabled,
    DescriptionText,
    DescriptionFont,
    DescriptionFontColor,
    DescriptionAlignment,
}

/// Table-wide properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableProp {
    CellSpacing,
    CellPadding,
    CellBorderSize,
    BorderColor,
    BackgroundColor,
    Font,
    FontColor,
    Alignment,
    OccupyFullWidth,
}

/// Per-cell properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellProp {
    Kind,
    BackgroundColor,
    BorderColor,
    Font,
    FontColor,
    Alignment,
    Text,
    ShapeKind,
    ShapeColor,
    ShapeValue,
    ShapeWidth,
    ImagePath,
    ImageScale,
    ImageWidth,
    ImageHeight,
}

/// A typed key into an item's property set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Frame(FrameProp),
    Table(TableProp),
    Cell {
        row: usize,
        col: usize,
        prop: CellProp,
    },
}

/// Names one property of one legend item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyRef {
    item: usize,
    key: PropertyKey,
}

impl PropertyRef {
    pub fn new(item: usize, key: PropertyKey) -> Self {
        Self { item, key }
    }

    /// Returns the index of the owning legend item
    pub fn item(&self) -> usize {
        self.item
    }

    /// Returns the typed key within the item
    pub fn key(&self) -> PropertyKey {
        self.key
    }
}
