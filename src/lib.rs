//! Dial Pattern - printable Gray-code templates for rotary encoder dials
//!
//! This library draws the optical pattern of a rotary dial: concentric bit
//! rings in which every angular sector carries the Gray code of its
//! position, plus the reference circles and indicator needed to align the
//! printout.
//!
//! # Example
//!
//! ```rust
//! use dial_pattern::{one_dial, render};
//!
//! let svg = render(&one_dial());
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<circle").count(), 2);
//! ```

pub mod canvas;
pub mod decoder;
pub mod error;
pub mod geometry;
pub mod gray;
pub mod lint;
pub mod pattern;
pub mod stylesheet;

use std::path::{Path, PathBuf};

pub use canvas::{Canvas, CanvasConfig, Shape};
pub use decoder::DialTracker;
pub use error::GenerateError;
pub use lint::{LintCategory, LintWarning};
pub use pattern::{builtin_encoders, one_dial, select_encoders, DialLayout, EncoderSpec};
pub use stylesheet::Stylesheet;

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Page size and document options
    pub canvas: CanvasConfig,
    /// Ring radii and indicator size
    pub layout: DialLayout,
    /// Colours and stroke widths
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas configuration
    pub fn with_canvas(mut self, config: CanvasConfig) -> Self {
        self.canvas = config;
        self
    }

    /// Set the ring layout
    pub fn with_layout(mut self, layout: DialLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render an encoder spec to SVG with default configuration
pub fn render(spec: &EncoderSpec) -> String {
    pattern::render(spec, &RenderConfig::default())
}

/// Render an encoder spec to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use dial_pattern::{render_with_config, one_dial, RenderConfig, Stylesheet};
///
/// let config = RenderConfig::new().with_stylesheet(Stylesheet::default().with_ink("navy"));
/// let svg = render_with_config(&one_dial(), &config);
/// assert!(svg.contains(r#"fill="navy""#));
/// ```
pub fn render_with_config(spec: &EncoderSpec, config: &RenderConfig) -> String {
    pattern::render(spec, config)
}

/// Render and lint an encoder spec; the SVG is produced whatever the lints say
pub fn render_with_lint(spec: &EncoderSpec, config: &RenderConfig) -> (String, Vec<LintWarning>) {
    (pattern::render(spec, config), lint::check(spec))
}

/// Write one `<name>.svg` per spec into `out_dir`, in order
///
/// Stops at the first write failure.
pub fn generate(
    specs: &[EncoderSpec],
    config: &RenderConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    specs
        .iter()
        .map(|spec| pattern::write(spec, config, out_dir))
        .collect()
}
