//! Millimeter canvas for dial templates
//!
//! A [`Canvas`] owns an append-only list of [`Shape`] records and turns them
//! into an SVG document on demand.

pub mod config;
pub mod path;
pub mod shape;
pub mod svg;

pub use config::CanvasConfig;
pub use path::{PathSegment, SvgPath};
pub use shape::Shape;
pub use svg::Canvas;
