//! Structural table commands with confirmation.
//!
//! Editor actions that reshape or bulk-overwrite a table funnel through
//! [`execute`]. Destructive commands (deletes and table-wide overwrites) ask
//! the host's [`Confirm`] implementation before touching the model; inserts
//! apply immediately. A declined confirmation leaves the model untouched.

use cartouche_core::{
    color::Color,
    font::FontSpec,
    table::{CellKind, ShapeKind, TableModel},
};
use log::debug;

/// One structural or bulk edit of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableCommand {
    InsertRow { at: usize },
    DeleteRow { at: usize },
    InsertColumn { at: usize },
    DeleteColumn { at: usize },
    SetKindAll(CellKind),
    SetShapeAll(ShapeKind),
    SetFontAll(FontSpec),
    SetFontColorAll(Color),
}

impl TableCommand {
    /// True for commands that destroy or overwrite existing cell content.
    fn needs_confirmation(&self) -> bool {
        !matches!(
            self,
            TableCommand::InsertRow { .. } | TableCommand::InsertColumn { .. }
        )
    }

    fn prompt(&self) -> &'static str {
        match self {
            TableCommand::InsertRow { .. } => "Insert row?",
            TableCommand::InsertColumn { .. } => "Insert column?",
            TableCommand::DeleteRow { .. } => "Delete this row?",
            TableCommand::DeleteColumn { .. } => "Delete this column?",
            TableCommand::SetKindAll(_) => "Change the kind of every cell?",
            TableCommand::SetShapeAll(_) => "Change the shape of every cell?",
            TableCommand::SetFontAll(_) => "Change the font of every cell?",
            TableCommand::SetFontColorAll(_) => "Change the font color of every cell?",
        }
    }
}

/// Host-side yes/no prompt.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Result of [`execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Cancelled,
}

/// Runs one command against the model, asking for confirmation first when
/// the command is destructive.
pub fn execute(command: TableCommand, model: &mut TableModel, confirm: &dyn Confirm) -> Outcome {
    if command.needs_confirmation() && !confirm.confirm(command.prompt()) {
        debug!(command:? = command; "Command cancelled");
        return Outcome::Cancelled;
    }

    match command {
        TableCommand::InsertRow { at } => model.insert_row(at),
        TableCommand::DeleteRow { at } => model.delete_row(at),
        TableCommand::InsertColumn { at } => model.insert_column(at),
        TableCommand::DeleteColumn { at } => model.delete_column(at),
        TableCommand::SetKindAll(kind) => model.set_kind_all(kind),
        TableCommand::SetShapeAll(shape) => model.set_shape_all(shape),
        TableCommand::SetFontAll(font) => model.set_font_all(&font),
        TableCommand::SetFontColorAll(color) => model.set_font_color_all(color),
    }
    Outcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always(bool);

    impl Confirm for Always {
        fn confirm(&self, _prompt: &str) -> bool {
            self.0
        }
    }

    #[test]
    fn test_inserts_skip_confirmation() {
        let mut model = TableModel::new(2, 2);
        // even a host that refuses everything cannot block an insert
        let outcome = execute(TableCommand::InsertRow { at: 1 }, &mut model, &Always(false));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(model.row_count(), 3);

        let outcome = execute(
            TableCommand::InsertColumn { at: 0 },
            &mut model,
            &Always(false),
        );
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(model.col_count(), 3);
    }

    #[test]
    fn test_declined_delete_leaves_model_untouched() {
        let mut model = TableModel::new(2, 2);
        model.cell_mut(0, 0).unwrap().text = "keep".to_string();
        let before = model.clone();

        let outcome = execute(TableCommand::DeleteRow { at: 0 }, &mut model, &Always(false));
        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(model, before);
    }

    #[test]
    fn test_confirmed_delete_applies() {
        let mut model = TableModel::new(3, 3);
        let outcome = execute(TableCommand::DeleteColumn { at: 2 }, &mut model, &Always(true));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(model.col_count(), 2);
    }

    #[test]
    fn test_declined_bulk_overwrite_is_cancelled() {
        let mut model = TableModel::new(2, 2);
        model.clear_structure_changed();

        let outcome = execute(
            TableCommand::SetKindAll(CellKind::Shape),
            &mut model,
            &Always(false),
        );
        assert_eq!(outcome, Outcome::Cancelled);
        assert!(model.cells().all(|(_, _, c)| c.kind == CellKind::Text));
        assert!(!model.structure_changed());
    }

    #[test]
    fn test_confirmed_bulk_overwrites_apply() {
        let mut model = TableModel::new(2, 2);
        let red = Color::new("red").unwrap();

        execute(
            TableCommand::SetFontAll(FontSpec::new("Courier", 9.0)),
            &mut model,
            &Always(true),
        );
        execute(TableCommand::SetFontColorAll(red), &mut model, &Always(true));

        for (_, _, cell) in model.cells() {
            assert_eq!(cell.font.family(), "Courier");
            assert_eq!(cell.font_color, red);
        }
    }
}
