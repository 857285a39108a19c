//! Stylesheet for print colours and stroke widths
//!
//! The dial template is normally printed black on white, but the ink and
//! outline colours can be overridden with a small TOML file, e.g. to print
//! the alignment circles in a light colour that does not confuse the sensors.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub const DEFAULT_INK: &str = "black";
pub const DEFAULT_OUTLINE: &str = "black";
pub const DEFAULT_OUTLINE_WIDTH: f64 = 0.1;

/// Colours and stroke widths applied when serializing shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Fill colour of sector rings and the indicator
    pub ink: String,
    /// Stroke colour of the reference circles
    pub outline: String,
    /// Stroke width in millimeters
    pub outline_width: f64,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: TomlColors,
    #[serde(default)]
    strokes: TomlStrokes,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlColors {
    ink: Option<String>,
    outline: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct TomlStrokes {
    #[serde(alias = "outline_width")]
    outline_width: Option<f64>,
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    ///
    /// Keys missing from the file keep their default values.
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            ink: parsed.colors.ink.unwrap_or(defaults.ink),
            outline: parsed.colors.outline.unwrap_or(defaults.outline),
            outline_width: parsed.strokes.outline_width.unwrap_or(defaults.outline_width),
        })
    }

    pub fn with_ink(mut self, ink: impl Into<String>) -> Self {
        self.ink = ink.into();
        self
    }

    pub fn with_outline(mut self, outline: impl Into<String>) -> Self {
        self.outline = outline.into();
        self
    }

    pub fn with_outline_width(mut self, width: f64) -> Self {
        self.outline_width = width;
        self
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            ink: DEFAULT_INK.to_string(),
            outline: DEFAULT_OUTLINE.to_string(),
            outline_width: DEFAULT_OUTLINE_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.ink, "black");
        assert_eq!(stylesheet.outline, "black");
        assert_eq!(stylesheet.outline_width, 0.1);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Proof"
description = "Grey outlines for proofing"

[colors]
ink = "#000000"
outline = "#999999"

[strokes]
outline-width = 0.2
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Proof".to_string()));
        assert_eq!(
            stylesheet.description,
            Some("Grey outlines for proofing".to_string())
        );
        assert_eq!(stylesheet.ink, "#000000");
        assert_eq!(stylesheet.outline, "#999999");
        assert_eq!(stylesheet.outline_width, 0.2);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let stylesheet = Stylesheet::from_str("[colors]\nink = \"navy\"\n").expect("Should parse");
        assert_eq!(stylesheet.name, None);
        assert_eq!(stylesheet.ink, "navy");
        assert_eq!(stylesheet.outline, DEFAULT_OUTLINE);
        assert_eq!(stylesheet.outline_width, DEFAULT_OUTLINE_WIDTH);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let stylesheet = Stylesheet::from_str("").expect("Should parse");
        assert_eq!(stylesheet, Stylesheet::default());
    }

    #[test]
    fn test_snake_case_stroke_key() {
        let stylesheet =
            Stylesheet::from_str("[strokes]\noutline_width = 0.05\n").expect("Should parse");
        assert_eq!(stylesheet.outline_width, 0.05);
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_error() {
        let result = Stylesheet::from_file(Path::new("/nonexistent/dial-style.toml"));
        assert!(matches!(result, Err(StylesheetError::IoError(_))));
    }
}
