//! Cartouche Core Types and Definitions
//!
//! This crate provides the foundational types for the Cartouche legend
//! renderer. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Fonts**: Font selection values ([`font::FontSpec`])
//! - **Text**: Text measurement and line breaking ([`text`] module)
//! - **Blocks**: The legend layout tree ([`block`] module)
//! - **Model**: Legend items and the table model ([`item`], [`table`])
//! - **Editors**: Declarative in-place editor descriptors ([`editor`])
//! - **Properties**: Typed property keys consumed by editors ([`property`])

pub mod block;
pub mod color;
pub mod editor;
pub mod font;
pub mod geometry;
pub mod item;
pub mod property;
pub mod table;
pub mod text;
