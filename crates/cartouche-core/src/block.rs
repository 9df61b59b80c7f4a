//! The legend block layout tree.
//!
//! Every rendered region of a legend item is backed by a [`Block`]: the
//! legend root, its title/body/description bands, the table region, and one
//! block per table cell. Blocks carry the region's rectangle, a typed
//! [`BlockRole`], and optionally an in-place editor descriptor.
//!
//! Geometry is recomputed on every render pass via
//! [`Block::update_geometry`]; the blocks themselves (and the editors cached
//! on them) persist across passes and are only discarded wholesale through
//! [`Block::remove_all_children`] when the underlying model changes
//! structurally.

use crate::{editor::InplaceEditor, geometry::Rect};

/// What a block stands for within the legend.
///
/// Roles with payloads (`Cell`, `Group`) compare by their indices, so two
/// cell blocks at different positions have distinct roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    LegendRoot,
    Title,
    Body,
    Description,
    Table,
    Cell { row: usize, col: usize },
    Group { index: usize },
}

/// A node in the legend layout tree.
#[derive(Debug, Clone, Default)]
pub struct Block {
    rect: Rect,
    role: Option<BlockRole>,
    editor: Option<InplaceEditor>,
    children: Vec<Block>,
    // Cross-cutting flag side-channel; the table renderer uses it on the
    // table block to remember that bulk controls were attached.
    controls_attached: bool,
}

impl Block {
    /// Creates a root block covering the given rectangle.
    pub fn root(rect: Rect) -> Self {
        Self {
            rect,
            role: Some(BlockRole::LegendRoot),
            ..Self::default()
        }
    }

    /// Returns the rectangle this block covers
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the role of this block
    pub fn role(&self) -> Option<BlockRole> {
        self.role
    }

    /// Replaces the block's rectangle in place.
    ///
    /// Idempotent; touches geometry only, never children or editors.
    pub fn update_geometry(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Appends a child block with the given rectangle and role.
    ///
    /// Always succeeds. Duplicate roles are allowed; lookups return the
    /// first match in insertion order.
    pub fn add_child(&mut self, rect: Rect, role: BlockRole) -> &mut Block {
        self.children.push(Block {
            rect,
            role: Some(role),
            ..Self::default()
        });
        self.children.last_mut().expect("child was just pushed")
    }

    /// Returns the first child with the given role, if any
    pub fn child(&self, role: BlockRole) -> Option<&Block> {
        self.children.iter().find(|child| child.role == Some(role))
    }

    /// Returns the first child with the given role mutably, if any
    pub fn child_mut(&mut self, role: BlockRole) -> Option<&mut Block> {
        self.children
            .iter_mut()
            .find(|child| child.role == Some(role))
    }

    /// Returns all children in insertion order
    pub fn children(&self) -> &[Block] {
        &self.children
    }

    /// Returns all children mutably, in insertion order
    pub fn children_mut(&mut self) -> &mut [Block] {
        &mut self.children
    }

    /// Drops every child block, and with them all editors cached beneath
    /// this block. Called exactly when the model changes structurally.
    pub fn remove_all_children(&mut self) {
        self.children.clear();
    }

    /// Returns the editor descriptor attached to this block, if any
    pub fn editor(&self) -> Option<&InplaceEditor> {
        self.editor.as_ref()
    }

    /// Returns the attached editor mutably, if any
    pub fn editor_mut(&mut self) -> Option<&mut InplaceEditor> {
        self.editor.as_mut()
    }

    /// Attaches an editor descriptor, replacing any previous one
    pub fn set_editor(&mut self, editor: InplaceEditor) {
        self.editor = Some(editor);
    }

    /// Returns the cross-cutting flag value
    pub fn controls_attached(&self) -> bool {
        self.controls_attached
    }

    /// Sets the cross-cutting flag value
    pub fn set_controls_attached(&mut self, value: bool) {
        self.controls_attached = value;
    }
}
