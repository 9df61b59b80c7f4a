//! The multi-target drawing façade.
//!
//! A [`Target`] is one of the three back-ends a legend can be rendered to:
//! the interactive display list, SVG, or PDF. Every variant implements the
//! same primitive set (`fill_rect`, `fill_oval`, `fill_triangle`,
//! `draw_text_run`, `draw_image`) and a translate-only origin contract via
//! [`Target::set_origin`]; dispatch is an exhaustive `match`, so adding a
//! back-end forces every primitive to handle it.
//!
//! Renderers never touch a target directly. They draw through a
//! [`Painter`], which couples the target with the [`TextShaper`] used for
//! measurement and carries the current item origin: painters accept
//! absolute legend-space geometry and hand the target origin-relative
//! coordinates, so identical logical content yields identical geometry on
//! every back-end.

pub mod display;
pub mod svg_surface;

mod pdf_surface;

pub use display::{DisplayList, DrawOp, View};
pub use pdf_surface::PdfSurface;
pub use svg_surface::SvgSurface;

use std::path::Path;

use cartouche_core::{
    color::Color,
    font::FontSpec,
    geometry::{Point, Rect},
    text::TextShaper,
};

/// One render back-end.
pub enum Target {
    /// Interactive preview: records ops in view coordinates
    Canvas(DisplayList),
    /// SVG export
    Vector(SvgSurface),
    /// PDF export
    Page(PdfSurface),
}

impl Target {
    /// Sets the translation applied to all subsequent primitives.
    pub fn set_origin(&mut self, origin: Point) {
        match self {
            Target::Canvas(list) => list.set_origin(origin),
            Target::Vector(surface) => surface.set_origin(origin),
            Target::Page(surface) => surface.set_origin(origin),
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        match self {
            Target::Canvas(list) => list.fill_rect(rect, color),
            Target::Vector(surface) => surface.fill_rect(rect, color),
            Target::Page(surface) => surface.fill_rect(rect, color),
        }
    }

    pub fn fill_oval(&mut self, rect: Rect, color: Color) {
        match self {
            Target::Canvas(list) => list.fill_oval(rect, color),
            Target::Vector(surface) => surface.fill_oval(rect, color),
            Target::Page(surface) => surface.fill_oval(rect, color),
        }
    }

    pub fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        match self {
            Target::Canvas(list) => list.fill_triangle(points, color),
            Target::Vector(surface) => surface.fill_triangle(points, color),
            Target::Page(surface) => surface.fill_triangle(points, color),
        }
    }

    pub fn draw_text_run(&mut self, text: &str, anchor: Point, font: &FontSpec, color: Color) {
        match self {
            Target::Canvas(list) => list.draw_text_run(text, anchor, font, color),
            Target::Vector(surface) => surface.draw_text_run(text, anchor, font, color),
            Target::Page(surface) => surface.draw_text_run(text, anchor, font, color),
        }
    }

    pub fn draw_image(&mut self, path: &Path, dest: Rect) {
        match self {
            Target::Canvas(list) => list.draw_image(path, dest),
            Target::Vector(surface) => surface.draw_image(path, dest),
            Target::Page(surface) => surface.draw_image(path, dest),
        }
    }

    /// True for the interactive back-end.
    ///
    /// The drag placeholder is only meaningful while a user is interacting,
    /// so it renders on the canvas target alone.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Target::Canvas(_))
    }
}

/// Couples a target with the shaper renderers measure through, and carries
/// the current item origin.
///
/// All geometry handed to a painter is absolute (legend space); the painter
/// subtracts the origin before forwarding to the target, which re-applies
/// it under its own transform.
pub struct Painter<'a> {
    target: &'a mut Target,
    shaper: &'a dyn TextShaper,
    origin: Point,
}

impl<'a> Painter<'a> {
    pub fn new(target: &'a mut Target, shaper: &'a dyn TextShaper) -> Self {
        Self {
            target,
            shaper,
            origin: Point::default(),
        }
    }

    /// Sets the current item origin on the painter and the target.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.target.set_origin(origin);
    }

    /// Returns the shaper used for text measurement
    pub fn shaper(&self) -> &dyn TextShaper {
        self.shaper
    }

    /// True when drawing to the interactive back-end
    pub fn is_interactive(&self) -> bool {
        self.target.is_interactive()
    }

    fn localize_point(&self, point: Point) -> Point {
        point.sub_point(self.origin)
    }

    fn localize(&self, rect: Rect) -> Rect {
        rect.with_origin(self.localize_point(rect.origin()))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let local = self.localize(rect);
        self.target.fill_rect(local, color);
    }

    pub fn fill_oval(&mut self, rect: Rect, color: Color) {
        let local = self.localize(rect);
        self.target.fill_oval(local, color);
    }

    pub fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        let local = points.map(|p| self.localize_point(p));
        self.target.fill_triangle(local, color);
    }

    pub fn draw_text_run(&mut self, text: &str, anchor: Point, font: &FontSpec, color: Color) {
        let local = self.localize_point(anchor);
        self.target.draw_text_run(text, local, font, color);
    }

    pub fn draw_image(&mut self, path: &Path, dest: Rect) {
        let local = self.localize(dest);
        self.target.draw_image(path, local);
    }
}
