//! The table body model.
//!
//! A [`TableModel`] is a row-major grid of [`Cell`]s plus the table-wide
//! layout parameters (spacing, padding, border size) and seed defaults for
//! new cells. Structural mutations (row/column insert and delete, table-wide
//! cell-kind changes) raise the `structure_changed` flag, which the table
//! renderer consumes to discard and rebuild the cell block tree.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    color::Color,
    font::FontSpec,
    item::Alignment,
    text::TextShaper,
};

/// Shape drawn in a shape-mode cell or a group swatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Triangle,
}

/// Which payload of a cell is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Text,
    Shape,
    Image,
}

/// One table cell.
///
/// A cell carries all three payloads (text, shape, image) at once; `kind`
/// selects which one is rendered. Switching kinds therefore never loses the
/// previously entered values.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    pub background_color: Color,
    pub border_color: Color,
    pub font: FontSpec,
    pub font_color: Color,
    pub alignment: Alignment,
    pub text: String,
    pub shape_kind: ShapeKind,
    pub shape_color: Color,
    /// Value the shape height is normalized against across the table
    pub shape_value: f32,
    pub shape_width: f32,
    pub image_path: Option<PathBuf>,
    /// When set the image is aspect-fit into the cell; otherwise the
    /// explicit width/height below are used
    pub image_scale: bool,
    pub image_width: f32,
    pub image_height: f32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            kind: CellKind::Text,
            background_color: Color::new("white").expect("'white' is a valid CSS color"),
            border_color: Color::default(),
            font: FontSpec::default(),
            font_color: Color::default(),
            alignment: Alignment::Left,
            text: String::new(),
            shape_kind: ShapeKind::Rectangle,
            shape_color: Color::default(),
            shape_value: 1.0,
            shape_width: 20.0,
            image_path: None,
            image_scale: true,
            image_width: 0.0,
            image_height: 0.0,
        }
    }
}

impl Cell {
    /// Returns the natural width of the cell's active payload.
    ///
    /// Text cells measure their content through the shaper; shape and image
    /// cells report their configured widths. Used by the non-full-width
    /// column sizing pass.
    pub fn active_width(&self, shaper: &dyn TextShaper) -> f32 {
        match self.kind {
            CellKind::Text => shaper.measure(&self.text, &self.font).width(),
            CellKind::Shape => self.shape_width,
            CellKind::Image => self.image_width,
        }
    }
}

/// Row-major table of cells with table-wide layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    cells: Vec<Vec<Cell>>,
    pub cell_spacing: f32,
    pub cell_padding: f32,
    pub cell_border_size: f32,
    pub border_color: Color,
    pub background_color: Color,
    /// Seeds applied to cells created by structural edits
    pub default_font: FontSpec,
    pub default_font_color: Color,
    pub default_alignment: Alignment,
    /// When set, columns share the body width uniformly; otherwise they
    /// shrink to their content
    pub occupy_full_width: bool,
    structure_changed: bool,
}

impl TableModel {
    /// Creates a table of default cells with the given dimensions.
    ///
    /// A table always has at least one row and one column.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            cells: (0..rows)
                .map(|_| (0..cols).map(|_| Cell::default()).collect())
                .collect(),
            cell_spacing: 10.0,
            cell_padding: 10.0,
            cell_border_size: 1.0,
            border_color: Color::default(),
            background_color: Color::new("white").expect("'white' is a valid CSS color"),
            default_font: FontSpec::default(),
            default_font_color: Color::default(),
            default_alignment: Alignment::Left,
            occupy_full_width: true,
            structure_changed: true,
        }
    }

    /// Returns the number of rows
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of columns
    pub fn col_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Returns the cell at the given position, if in range
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Returns the cell at the given position mutably, if in range
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Iterates over all cells in row-major order with their positions
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }

    /// True when a structural mutation happened since the last
    /// [`TableModel::clear_structure_changed`]
    pub fn structure_changed(&self) -> bool {
        self.structure_changed
    }

    /// Acknowledges a structural change; called by the renderer after
    /// rebuilding the cell blocks
    pub fn clear_structure_changed(&mut self) {
        self.structure_changed = false;
    }

    fn seeded_cell(&self) -> Cell {
        Cell {
            font: self.default_font.clone(),
            font_color: self.default_font_color,
            alignment: self.default_alignment,
            ..Cell::default()
        }
    }

    /// Inserts a row of seeded cells at the given index (clamped to the end).
    pub fn insert_row(&mut self, at: usize) {
        let at = at.min(self.row_count());
        let row = (0..self.col_count()).map(|_| self.seeded_cell()).collect();
        self.cells.insert(at, row);
        self.structure_changed = true;
    }

    /// Deletes the row at the given index.
    ///
    /// A no-op when the index is out of range or the table would be left
    /// without rows.
    pub fn delete_row(&mut self, at: usize) {
        if self.row_count() > 1 && at < self.row_count() {
            self.cells.remove(at);
            self.structure_changed = true;
        }
    }

    /// Inserts a column of seeded cells at the given index (clamped to the end).
    pub fn insert_column(&mut self, at: usize) {
        let at = at.min(self.col_count());
        let seed = self.seeded_cell();
        for row in &mut self.cells {
            row.insert(at, seed.clone());
        }
        self.structure_changed = true;
    }

    /// Deletes the column at the given index.
    ///
    /// A no-op when the index is out of range or the table would be left
    /// without columns.
    pub fn delete_column(&mut self, at: usize) {
        if self.col_count() > 1 && at < self.col_count() {
            for row in &mut self.cells {
                row.remove(at);
            }
            self.structure_changed = true;
        }
    }

    /// Switches every cell to the given kind.
    ///
    /// Structural from the renderer's point of view: cell editors are
    /// kind-specific, so the block tree must be rebuilt.
    pub fn set_kind_all(&mut self, kind: CellKind) {
        for row in &mut self.cells {
            for cell in row {
                cell.kind = kind;
            }
        }
        self.structure_changed = true;
    }

    /// Sets the shape kind of every cell
    pub fn set_shape_all(&mut self, shape: ShapeKind) {
        for row in &mut self.cells {
            for cell in row {
                cell.shape_kind = shape;
            }
        }
    }

    /// Sets the font of every cell
    pub fn set_font_all(&mut self, font: &FontSpec) {
        for row in &mut self.cells {
            for cell in row {
                cell.font = font.clone();
            }
        }
    }

    /// Sets the font color of every cell
    pub fn set_font_color_all(&mut self, color: Color) {
        for row in &mut self.cells {
            for cell in row {
                cell.font_color = color;
            }
        }
    }
}
