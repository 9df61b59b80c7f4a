//! Configuration types for Cartouche legend rendering.
//!
//! This module provides the [`Defaults`] structure that seeds newly built
//! legend items: frame fonts and colors, border thickness, and the initial
//! table dimensions. All types implement [`serde::Deserialize`] for loading
//! from a TOML configuration file.
//!
//! # Example
//!
//! ```
//! # use cartouche::config::Defaults;
//! let defaults = Defaults::default();
//! assert!(defaults.frame().border_color().is_ok());
//! ```

use serde::Deserialize;

use cartouche_core::{color::Color, font::FontSpec};

/// Top-level defaults applied to newly built legend items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    /// Frame defaults section.
    #[serde(default)]
    frame: FrameDefaults,

    /// Table defaults section.
    #[serde(default)]
    table: TableDefaults,
}

impl Defaults {
    /// Returns the frame defaults.
    pub fn frame(&self) -> &FrameDefaults {
        &self.frame
    }

    /// Returns the table defaults.
    pub fn table(&self) -> &TableDefaults {
        &self.table
    }
}

/// Seed values for the shared legend frame.
///
/// Colors are kept as strings and parsed on access, so a bad value in the
/// configuration file surfaces as an error at use time rather than a silent
/// fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameDefaults {
    /// Font used for item titles.
    #[serde(default = "FrameDefaults::default_title_font")]
    title_font: FontSpec,

    /// Font used for item descriptions.
    #[serde(default = "FrameDefaults::default_description_font")]
    description_font: FontSpec,

    /// Border color as a CSS color string.
    #[serde(default)]
    border_color: Option<String>,

    /// Background color as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Border thickness in legend units.
    #[serde(default = "FrameDefaults::default_border_thickness")]
    border_thickness: f32,
}

impl FrameDefaults {
    fn default_title_font() -> FontSpec {
        let mut font = FontSpec::new("Arial", 16.0);
        font.set_bold(true);
        font
    }

    fn default_description_font() -> FontSpec {
        FontSpec::new("Arial", 10.0)
    }

    fn default_border_thickness() -> f32 {
        1.0
    }

    /// Returns the default title font.
    pub fn title_font(&self) -> &FontSpec {
        &self.title_font
    }

    /// Returns the default description font.
    pub fn description_font(&self) -> &FontSpec {
        &self.description_font
    }

    /// Returns the default border thickness.
    pub fn border_thickness(&self) -> f32 {
        self.border_thickness
    }

    /// Returns the parsed border [`Color`], or the stock default when not
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn border_color(&self) -> Result<Color, String> {
        parse_color(self.border_color.as_deref())
    }

    /// Returns the parsed background [`Color`], or white when not
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        match self.background_color.as_deref() {
            Some(raw) => Color::new(raw).map_err(|err| format!("invalid background color: {err}")),
            None => Color::new("white").map_err(|err| format!("invalid background color: {err}")),
        }
    }
}

impl Default for FrameDefaults {
    fn default() -> Self {
        Self {
            title_font: Self::default_title_font(),
            description_font: Self::default_description_font(),
            border_color: None,
            background_color: None,
            border_thickness: Self::default_border_thickness(),
        }
    }
}

/// Seed values for newly built tables.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDefaults {
    #[serde(default = "TableDefaults::default_rows")]
    rows: usize,

    #[serde(default = "TableDefaults::default_cols")]
    cols: usize,

    #[serde(default = "TableDefaults::default_cell_spacing")]
    cell_spacing: f32,

    #[serde(default = "TableDefaults::default_cell_padding")]
    cell_padding: f32,

    #[serde(default = "TableDefaults::default_cell_border_size")]
    cell_border_size: f32,
}

impl TableDefaults {
    fn default_rows() -> usize {
        3
    }

    fn default_cols() -> usize {
        3
    }

    fn default_cell_spacing() -> f32 {
        10.0
    }

    fn default_cell_padding() -> f32 {
        10.0
    }

    fn default_cell_border_size() -> f32 {
        1.0
    }

    /// Returns the initial number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the initial number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the default spacing between cells.
    pub fn cell_spacing(&self) -> f32 {
        self.cell_spacing
    }

    /// Returns the default padding inside cells.
    pub fn cell_padding(&self) -> f32 {
        self.cell_padding
    }

    /// Returns the default cell border thickness.
    pub fn cell_border_size(&self) -> f32 {
        self.cell_border_size
    }
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            rows: Self::default_rows(),
            cols: Self::default_cols(),
            cell_spacing: Self::default_cell_spacing(),
            cell_padding: Self::default_cell_padding(),
            cell_border_size: Self::default_cell_border_size(),
        }
    }
}

fn parse_color(raw: Option<&str>) -> Result<Color, String> {
    match raw {
        Some(raw) => Color::new(raw).map_err(|err| format!("invalid color in config: {err}")),
        None => Ok(Color::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_colors() {
        let defaults = Defaults::default();
        assert!(defaults.frame().border_color().is_ok());
        assert_eq!(
            defaults.frame().background_color().unwrap().to_string(),
            "white"
        );
    }

    #[test]
    fn test_table_defaults() {
        let defaults = TableDefaults::default();
        assert_eq!(defaults.rows(), 3);
        assert_eq!(defaults.cols(), 3);
        assert_eq!(defaults.cell_spacing(), 10.0);
    }

    #[test]
    fn test_default_title_font_is_bold() {
        let defaults = FrameDefaults::default();
        assert!(defaults.title_font().bold());
        assert!(!defaults.description_font().bold());
    }
}
