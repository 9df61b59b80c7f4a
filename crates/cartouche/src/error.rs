//! Error types for Cartouche operations.
//!
//! This module provides the main error type [`Error`] which wraps the error
//! conditions that can abort a render or export. Recoverable per-cell
//! failures (a missing image file, an undecodable image) are deliberately
//! *not* represented here; those are logged and skipped so a single bad
//! property never takes down a render pass.

use std::io;

use thiserror::Error;

/// The main error type for Cartouche operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid color: {0}")]
    Color(String),

    #[error("invalid document: {0}")]
    Document(String),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary back-end failure as an export error.
    pub fn export(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Export(Box::new(err))
    }
}
