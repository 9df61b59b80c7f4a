//! The PDF export back-end.
//!
//! Wraps a `printpdf` document. PDF's coordinate system has its origin at
//! the bottom-left with Y increasing upward, so every rectangle is flipped
//! analytically from the page height: `y_pdf = page_height - y - height`.
//! Text anchors flip the baseline the same way. Legend units are treated as
//! CSS pixels and converted to millimeters at 96 dpi.

use std::path::Path;

use log::warn;
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, ImageTransform, ImageXObject, IndirectFontRef, Line, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Px,
};

use cartouche_core::{
    color::Color,
    font::FontSpec,
    geometry::{Point, Rect, Size},
};

use crate::error::Error;

/// Legend units (CSS px) to millimeters at 96 dpi.
const PX_TO_MM: f32 = 25.4 / 96.0;

/// Resolution images are embedded at.
const IMAGE_DPI: f32 = 300.0;

/// Segments used to approximate an oval outline.
const OVAL_SEGMENTS: usize = 32;

/// PDF page under construction.
pub struct PdfSurface {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    size: Size,
    origin: Point,
}

impl PdfSurface {
    /// Creates a one-page document with the given page size in legend units.
    pub fn new(title: &str, size: Size) -> Self {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(f64::from(size.width() * PX_TO_MM)),
            Mm(f64::from(size.height() * PX_TO_MM)),
            "legend",
        );
        let layer = doc.get_page(page).get_layer(layer);
        Self {
            doc,
            layer,
            size,
            origin: Point::default(),
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Converts a legend-space x coordinate to page millimeters
    fn x_mm(&self, x: f32) -> Mm {
        Mm(f64::from((self.origin.x() + x) * PX_TO_MM))
    }

    /// Converts a legend-space y coordinate to page millimeters, flipping
    /// the axis from the page height
    fn y_mm(&self, y: f32) -> Mm {
        Mm(f64::from((self.size.height() - (self.origin.y() + y)) * PX_TO_MM))
    }

    fn set_fill(&self, color: Color) {
        let [r, g, b] = color.rgb_components();
        self.layer
            .set_fill_color(printpdf::Color::Rgb(printpdf::Rgb::new(
                f64::from(r),
                f64::from(g),
                f64::from(b),
                None,
            )));
    }

    fn fill_polygon(&self, points: &[(f32, f32)], color: Color) {
        self.set_fill(color);
        let line = Line {
            points: points
                .iter()
                .map(|&(x, y)| (printpdf::Point::new(self.x_mm(x), self.y_mm(y)), false))
                .collect(),
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        };
        self.layer.add_shape(line);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_polygon(
            &[
                (rect.x(), rect.y()),
                (rect.max_x(), rect.y()),
                (rect.max_x(), rect.max_y()),
                (rect.x(), rect.max_y()),
            ],
            color,
        );
    }

    pub fn fill_oval(&mut self, rect: Rect, color: Color) {
        // closed polygon approximation of the ellipse
        let center = rect.center();
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        let points: Vec<(f32, f32)> = (0..OVAL_SEGMENTS)
            .map(|i| {
                let angle = (i as f32) / (OVAL_SEGMENTS as f32) * std::f32::consts::TAU;
                (center.x() + rx * angle.cos(), center.y() + ry * angle.sin())
            })
            .collect();
        self.fill_polygon(&points, color);
    }

    pub fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        self.fill_polygon(
            &[
                (points[0].x(), points[0].y()),
                (points[1].x(), points[1].y()),
                (points[2].x(), points[2].y()),
            ],
            color,
        );
    }

    pub fn draw_text_run(&mut self, text: &str, anchor: Point, font: &FontSpec, color: Color) {
        let font_ref = match self.builtin_font(font) {
            Ok(font_ref) => font_ref,
            Err(err) => {
                warn!(err:%; "Skipping text run, builtin font unavailable");
                return;
            }
        };
        self.set_fill(color);
        self.layer.use_text(
            text,
            f64::from(font.size()),
            self.x_mm(anchor.x()),
            self.y_mm(anchor.y()),
            &font_ref,
        );
    }

    /// Decodes the image and embeds it scaled into `dest`.
    ///
    /// Undecodable files are logged and skipped; the export continues.
    pub fn draw_image(&mut self, path: &Path, dest: Rect) {
        let decoded = match image::open(path) {
            Ok(decoded) => decoded.to_rgb8(),
            Err(err) => {
                warn!(path:% = path.display(), err:% = err; "Skipping undecodable image");
                return;
            }
        };
        let (px_w, px_h) = decoded.dimensions();
        if px_w == 0 || px_h == 0 {
            return;
        }

        let xobject = ImageXObject {
            width: Px(px_w as usize),
            height: Px(px_h as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: decoded.into_raw(),
            image_filter: None,
            clipping_bbox: None,
        };
        let image = printpdf::Image::from(xobject);

        // natural extent at IMAGE_DPI, scaled to the destination rect
        let natural_w_mm = px_w as f32 * 25.4 / IMAGE_DPI;
        let natural_h_mm = px_h as f32 * 25.4 / IMAGE_DPI;
        let transform = ImageTransform {
            translate_x: Some(self.x_mm(dest.x())),
            translate_y: Some(self.y_mm(dest.max_y())),
            scale_x: Some(f64::from(dest.width() * PX_TO_MM / natural_w_mm)),
            scale_y: Some(f64::from(dest.height() * PX_TO_MM / natural_h_mm)),
            dpi: Some(f64::from(IMAGE_DPI)),
            ..ImageTransform::default()
        };
        image.add_to_layer(self.layer.clone(), transform);
    }

    fn builtin_font(&self, font: &FontSpec) -> Result<IndirectFontRef, Error> {
        let family = font.family().to_ascii_lowercase();
        let builtin = match (family.as_str(), font.bold()) {
            (f, false) if f.contains("courier") => BuiltinFont::Courier,
            (f, true) if f.contains("courier") => BuiltinFont::CourierBold,
            (f, false) if f.contains("times") => BuiltinFont::TimesRoman,
            (f, true) if f.contains("times") => BuiltinFont::TimesBold,
            (_, false) => BuiltinFont::Helvetica,
            (_, true) => BuiltinFont::HelveticaBold,
        };
        self.doc.add_builtin_font(builtin).map_err(Error::export)
    }

    /// Finishes the document and returns the PDF bytes.
    pub fn into_bytes(self) -> Result<Vec<u8>, Error> {
        self.doc.save_to_bytes().map_err(Error::export)
    }
}
