//! Font selection values for legend text.
//!
//! A [`FontSpec`] names a font the way legend properties store it: family,
//! size, and a bold flag. Resolution to an actual font face happens in the
//! text shaper (see [`crate::text`]), never here.

use serde::{Deserialize, Serialize};

/// Describes the font used for a run of legend text.
///
/// # Examples
///
/// ```
/// # use cartouche_core::font::FontSpec;
/// let mut font = FontSpec::new("Helvetica", 14.0);
/// font.set_bold(true);
/// assert_eq!(font.family(), "Helvetica");
/// assert_eq!(font.size(), 14.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    family: String,
    size: f32,
    #[serde(default)]
    bold: bool,
}

impl FontSpec {
    /// Creates a new font spec with a regular (non-bold) weight.
    pub fn new(family: &str, size: f32) -> Self {
        Self {
            family: family.to_string(),
            size,
            bold: false,
        }
    }

    /// Returns the font family name
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the font size in points
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns true if the font is bold
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// Sets the font size in points
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    /// Sets the bold flag
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Returns a copy of this spec with a different size.
    ///
    /// Used by the drag-placeholder label, which probes several sizes of the
    /// same face to find one that fits.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
            bold: self.bold,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 12.0,
            bold: false,
        }
    }
}
