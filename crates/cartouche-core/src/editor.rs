//! Declarative in-place editor descriptors.
//!
//! Legend blocks carry a description of the controls a host UI should show
//! when the block is clicked: a grid of rows, each holding columns of
//! widgets. The descriptors are pure data; the host decides how to present
//! them, and edits flow back through [`PropertyRef`]s and
//! [`EditorAction`]s.

use crate::property::PropertyRef;

/// An in-place editor attached to a block: rows of columns of widgets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InplaceEditor {
    rows: Vec<EditorRow>,
}

impl InplaceEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row and returns a mutable reference to it
    pub fn add_row(&mut self) -> &mut EditorRow {
        self.rows.push(EditorRow::default());
        self.rows.last_mut().expect("row was just pushed")
    }

    /// Returns the rows of this editor
    pub fn rows(&self) -> &[EditorRow] {
        &self.rows
    }

    /// Returns true if the editor contains the given widget anywhere
    pub fn contains(&self, widget: &Widget) -> bool {
        self.rows
            .iter()
            .flat_map(|row| row.columns())
            .any(|col| col.widgets().contains(widget))
    }

    /// Counts occurrences of the given widget across the whole editor
    pub fn count(&self, widget: &Widget) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.columns())
            .flat_map(|col| col.widgets())
            .filter(|w| *w == widget)
            .count()
    }
}

/// A horizontal row of editor columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorRow {
    columns: Vec<EditorColumn>,
}

impl EditorRow {
    /// Appends a column and returns a mutable reference to it
    pub fn add_column(&mut self) -> &mut EditorColumn {
        self.columns.push(EditorColumn::default());
        self.columns.last_mut().expect("column was just pushed")
    }

    pub fn columns(&self) -> &[EditorColumn] {
        &self.columns
    }
}

/// A group of widgets presented together within a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorColumn {
    widgets: Vec<Widget>,
}

impl EditorColumn {
    pub fn add_widget(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }
}

/// A single editor control bound to a property or an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// On/off toggle for a boolean property
    CheckBox { label: String, property: PropertyRef },
    /// Color swatch opening a picker
    ColorPicker { property: PropertyRef },
    /// Numeric entry field
    NumberField { property: PropertyRef },
    /// Free-form text entry
    TextField { property: PropertyRef },
    /// Font family/size/weight chooser
    FontPicker { property: PropertyRef },
    /// One-of-many selector; `options` are display labels in order
    Selector {
        property: PropertyRef,
        options: Vec<String>,
    },
    /// Push button that triggers a structural or bulk action
    Action { label: String, action: EditorAction },
}

/// Structural and bulk actions an editor button can trigger.
///
/// Actions are resolved against the block the editor is attached to; row and
/// column indices come from the block's role at dispatch time, so the
/// descriptor itself stays position-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    InsertRowAbove,
    InsertRowBelow,
    DeleteRow,
    InsertColumnBefore,
    InsertColumnAfter,
    DeleteColumn,
    SetKindAll,
    SetShapeAll,
    SetFontAll,
    SetFontColorAll,
}
