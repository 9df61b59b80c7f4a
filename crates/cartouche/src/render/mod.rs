//! Rendering stages shared by every legend item.
//!
//! - [`text`] - the text layout engine (line breaking, alignment, two-pass
//!   measure/draw)
//! - [`frame`] - the common frame pipeline (border, background, title,
//!   description, selection affordances, drag placeholder) that delegates
//!   the interior to a per-item [`frame::ContentRenderer`]

pub mod frame;
pub mod text;

pub use frame::{ContentRenderer, render_item};
pub use text::{draw_text, measure_text};
