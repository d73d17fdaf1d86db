//! The laid-out box tree painted by `vellum-paint`.
//!
//! Geometry comes from an external layout engine and style values from an external
//! cascade; this crate only holds them. The tree is read-only during painting apart from
//! the per-box "background already painted" flag.

mod node;
mod page;
mod replaced;
pub mod style;

pub use node::{BoxKind, LayoutBox, ReplacedContent, TextFragment, sides};
pub use page::Page;
pub use replaced::{ImageReplacement, RasterImage, Replacement};
pub use style::ComputedStyle;
