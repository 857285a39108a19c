//! Configuration for the canvas

/// Page size and document options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Page width in millimeters
    pub width_mm: f64,

    /// Page height in millimeters
    pub height_mm: f64,

    /// Whether to prefix the document with an XML declaration
    pub standalone: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width_mm: 100.0,
            height_mm: 100.0,
            standalone: false,
        }
    }
}

impl CanvasConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size in millimeters
    pub fn with_size(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}
