//! The interactive display-list back-end.
//!
//! The preview host owns the actual canvas widget; this back-end records
//! the draw calls of a render pass as a flat list of [`DrawOp`]s in view
//! coordinates, which the host replays (and hit-tests) however it likes.
//! Recording keeps the geometry inspectable, which is also how the layout
//! tests observe what was drawn.

use std::path::PathBuf;

use cartouche_core::{
    color::Color,
    font::FontSpec,
    geometry::{Point, Rect, Size},
};

/// Pan/zoom state of the interactive preview.
///
/// The identity view (`zoom == 1`, no pan) records ops at exactly the
/// legend-space coordinates the vector back-ends receive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pan: Point,
    zoom: f32,
}

impl View {
    pub fn new(pan: Point, zoom: f32) -> Self {
        Self { pan, zoom }
    }

    /// Returns the identity view
    pub fn identity() -> Self {
        Self {
            pan: Point::default(),
            zoom: 1.0,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Maps a legend-space point into view coordinates
    pub fn transform_point(&self, point: Point) -> Point {
        point.scale(self.zoom).add_point(self.pan)
    }

    /// Maps a legend-space rectangle into view coordinates
    pub fn transform_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            self.transform_point(rect.origin()),
            Size::new(rect.width() * self.zoom, rect.height() * self.zoom),
        )
    }
}

impl Default for View {
    fn default() -> Self {
        Self::identity()
    }
}

/// One recorded draw call, in view coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillOval {
        rect: Rect,
        color: Color,
    },
    FillTriangle {
        points: [Point; 3],
        color: Color,
    },
    /// A run of text anchored at its baseline-left corner
    TextRun {
        text: String,
        anchor: Point,
        font: FontSpec,
        color: Color,
    },
    Image {
        path: PathBuf,
        dest: Rect,
    },
}

/// Records draw ops for the interactive canvas.
#[derive(Debug, Default)]
pub struct DisplayList {
    view: View,
    origin: Point,
    ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Creates an empty display list rendered under the given view.
    pub fn new(view: View) -> Self {
        Self {
            view,
            origin: Point::default(),
            ops: Vec::new(),
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Returns the recorded ops in draw order
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    fn place(&self, rect: Rect) -> Rect {
        self.view.transform_rect(rect.translate(self.origin))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect {
            rect: self.place(rect),
            color,
        });
    }

    pub fn fill_oval(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillOval {
            rect: self.place(rect),
            color,
        });
    }

    pub fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        let points = points.map(|p| self.view.transform_point(p.add_point(self.origin)));
        self.ops.push(DrawOp::FillTriangle { points, color });
    }

    pub fn draw_text_run(&mut self, text: &str, anchor: Point, font: &FontSpec, color: Color) {
        let anchor = self.view.transform_point(anchor.add_point(self.origin));
        // zoom applies to glyphs as well as positions
        let font = font.with_size(font.size() * self.view.zoom());
        self.ops.push(DrawOp::TextRun {
            text: text.to_string(),
            anchor,
            font,
            color,
        });
    }

    pub fn draw_image(&mut self, path: &std::path::Path, dest: Rect) {
        self.ops.push(DrawOp::Image {
            path: path.to_path_buf(),
            dest: self.place(dest),
        });
    }

    /// Formats the recorded ops as one line per op, for debug output.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                DrawOp::FillRect { rect, color } => {
                    out.push_str(&format!(
                        "rect {:.1},{:.1} {:.1}x{:.1} {}\n",
                        rect.x(),
                        rect.y(),
                        rect.width(),
                        rect.height(),
                        color
                    ));
                }
                DrawOp::FillOval { rect, color } => {
                    out.push_str(&format!(
                        "oval {:.1},{:.1} {:.1}x{:.1} {}\n",
                        rect.x(),
                        rect.y(),
                        rect.width(),
                        rect.height(),
                        color
                    ));
                }
                DrawOp::FillTriangle { points, color } => {
                    out.push_str(&format!(
                        "triangle ({:.1},{:.1}) ({:.1},{:.1}) ({:.1},{:.1}) {}\n",
                        points[0].x(),
                        points[0].y(),
                        points[1].x(),
                        points[1].y(),
                        points[2].x(),
                        points[2].y(),
                        color
                    ));
                }
                DrawOp::TextRun {
                    text,
                    anchor,
                    font,
                    color,
                } => {
                    out.push_str(&format!(
                        "text {:.1},{:.1} {} {:.1}pt {} \"{}\"\n",
                        anchor.x(),
                        anchor.y(),
                        font.family(),
                        font.size(),
                        color,
                        text
                    ));
                }
                DrawOp::Image { path, dest } => {
                    out.push_str(&format!(
                        "image {:.1},{:.1} {:.1}x{:.1} {}\n",
                        dest.x(),
                        dest.y(),
                        dest.width(),
                        dest.height(),
                        path.display()
                    ));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_identity_view_records_absolute_coordinates() {
        let mut list = DisplayList::new(View::identity());
        list.set_origin(Point::new(10.0, 20.0));
        list.fill_rect(Rect::from_xywh(1.0, 2.0, 3.0, 4.0), Color::default());

        match &list.ops()[0] {
            DrawOp::FillRect { rect, .. } => {
                assert_approx_eq!(f32, rect.x(), 11.0);
                assert_approx_eq!(f32, rect.y(), 22.0);
                assert_approx_eq!(f32, rect.width(), 3.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn test_view_pan_zoom_applies_to_rects_and_text() {
        let view = View::new(Point::new(100.0, 0.0), 2.0);
        let mut list = DisplayList::new(view);
        list.fill_rect(Rect::from_xywh(10.0, 10.0, 5.0, 5.0), Color::default());
        list.draw_text_run(
            "x",
            Point::new(10.0, 10.0),
            &FontSpec::new("Arial", 12.0),
            Color::default(),
        );

        match &list.ops()[0] {
            DrawOp::FillRect { rect, .. } => {
                assert_approx_eq!(f32, rect.x(), 120.0);
                assert_approx_eq!(f32, rect.width(), 10.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
        match &list.ops()[1] {
            DrawOp::TextRun { anchor, font, .. } => {
                assert_approx_eq!(f32, anchor.x(), 120.0);
                assert_approx_eq!(f32, font.size(), 24.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn test_dump_lists_one_line_per_op() {
        let mut list = DisplayList::new(View::identity());
        list.fill_rect(Rect::from_xywh(0.0, 0.0, 1.0, 1.0), Color::default());
        list.fill_oval(Rect::from_xywh(0.0, 0.0, 1.0, 1.0), Color::default());

        let dump = list.dump();
        assert_eq!(dump.lines().count(), 2);
        assert!(dump.starts_with("rect "));
    }
}
