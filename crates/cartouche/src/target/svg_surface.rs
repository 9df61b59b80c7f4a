//! The SVG export back-end.
//!
//! Builds an `svg` crate document out of the primitive calls. Geometry
//! arrives in the same Y-down coordinate space SVG uses, so no conversion
//! is needed; the only target-specific concern is embedding cell images as
//! base64 data URIs so the exported file is self-contained.

use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use log::warn;
use svg::{Document, node::element as svg_element};

use cartouche_core::{
    color::Color,
    font::FontSpec,
    geometry::{Point, Rect, Size},
};

/// SVG document under construction.
pub struct SvgSurface {
    document: Document,
    size: Size,
    origin: Point,
}

impl SvgSurface {
    /// Creates a surface with the given page size in legend units.
    pub fn new(size: Size) -> Self {
        let document = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0, 0.0, size.width(), size.height()));
        Self {
            document,
            size,
            origin: Point::default(),
        }
    }

    /// Returns the page size
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    fn place(&self, rect: Rect) -> Rect {
        rect.translate(self.origin)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.place(rect);
        let node = svg_element::Rectangle::new()
            .set("x", rect.x())
            .set("y", rect.y())
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        self.document = std::mem::replace(&mut self.document, Document::new()).add(node);
    }

    pub fn fill_oval(&mut self, rect: Rect, color: Color) {
        let rect = self.place(rect);
        let node = svg_element::Ellipse::new()
            .set("cx", rect.center().x())
            .set("cy", rect.center().y())
            .set("rx", rect.width() / 2.0)
            .set("ry", rect.height() / 2.0)
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        self.document = std::mem::replace(&mut self.document, Document::new()).add(node);
    }

    pub fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        let points: Vec<String> = points
            .iter()
            .map(|p| p.add_point(self.origin))
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect();
        let node = svg_element::Polygon::new()
            .set("points", points.join(" "))
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        self.document = std::mem::replace(&mut self.document, Document::new()).add(node);
    }

    pub fn draw_text_run(&mut self, text: &str, anchor: Point, font: &FontSpec, color: Color) {
        let anchor = anchor.add_point(self.origin);
        let mut node = svg_element::Text::new(text)
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("font-family", font.family())
            .set("font-size", font.size())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        if font.bold() {
            node = node.set("font-weight", "bold");
        }
        self.document = std::mem::replace(&mut self.document, Document::new()).add(node);
    }

    /// Embeds the image file as a base64 data URI.
    ///
    /// Unreadable files are logged and skipped; the export continues.
    pub fn draw_image(&mut self, path: &Path, dest: Rect) {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path:% = path.display(), err:% = err; "Skipping unreadable image");
                return;
            }
        };
        let mime = match image::guess_format(&bytes) {
            Ok(format) => format.to_mime_type(),
            Err(err) => {
                warn!(path:% = path.display(), err:% = err; "Skipping image of unknown format");
                return;
            }
        };
        let uri = format!("data:{mime};base64,{}", BASE64.encode(bytes));

        let dest = self.place(dest);
        let node = svg_element::Image::new()
            .set("x", dest.x())
            .set("y", dest.y())
            .set("width", dest.width())
            .set("height", dest.height())
            .set("preserveAspectRatio", "none")
            .set("href", uri);
        self.document = std::mem::replace(&mut self.document, Document::new()).add(node);
    }

    /// Renders the document to an SVG string.
    pub fn into_string(self) -> String {
        self.document.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_emits_rect_markup() {
        let mut surface = SvgSurface::new(Size::new(100.0, 50.0));
        surface.set_origin(Point::new(10.0, 0.0));
        surface.fill_rect(Rect::from_xywh(5.0, 5.0, 20.0, 10.0), Color::default());

        let out = surface.into_string();
        assert!(out.contains("<rect"));
        assert!(out.contains("x=\"15\""));
        assert!(out.contains("viewBox"));
    }

    #[test]
    fn test_text_run_carries_font_attributes() {
        let mut surface = SvgSurface::new(Size::new(100.0, 50.0));
        let mut font = FontSpec::new("Courier", 9.0);
        font.set_bold(true);
        surface.draw_text_run("hi", Point::new(1.0, 2.0), &font, Color::default());

        let out = surface.into_string();
        assert!(out.contains("font-family=\"Courier\""));
        assert!(out.contains("font-weight=\"bold\""));
        assert!(out.contains("<text"));
        assert!(out.contains("hi"));
        assert!(out.contains("</text>"));
    }

    #[test]
    fn test_non_image_bytes_are_skipped() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not an image").unwrap();

        let mut surface = SvgSurface::new(Size::new(100.0, 50.0));
        surface.draw_image(file.path(), Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        assert!(!surface.into_string().contains("<image"));
    }

    #[test]
    fn test_missing_image_is_skipped() {
        let mut surface = SvgSurface::new(Size::new(100.0, 50.0));
        surface.draw_image(
            Path::new("/nonexistent/image.png"),
            Rect::from_xywh(0.0, 0.0, 10.0, 10.0),
        );
        let out = surface.into_string();
        assert!(!out.contains("<image"));
    }
}
