//! Encoder patterns and the generation driver
//!
//! Each encoder spec becomes one SVG template: a hub circle, an outer
//! circle enclosing all bit rings, an indicator triangle, and one filled
//! sector ring for every set bit of every sector's Gray code.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::canvas::Canvas;
use crate::error::GenerateError;
use crate::gray;
use crate::RenderConfig;

/// Radial layout of the bit rings
#[derive(Debug, Clone, PartialEq)]
pub struct DialLayout {
    /// Radius of the innermost (hub) circle in millimeters
    pub hub_radius: f64,

    /// Radial width of each bit ring in millimeters
    pub ring_width: f64,

    /// Height of the indicator triangle in millimeters
    pub indicator_size: f64,
}

impl Default for DialLayout {
    fn default() -> Self {
        Self {
            hub_radius: 8.0,
            ring_width: 5.0,
            indicator_size: 2.0,
        }
    }
}

impl DialLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hub_radius(mut self, radius: f64) -> Self {
        self.hub_radius = radius;
        self
    }

    pub fn with_ring_width(mut self, width: f64) -> Self {
        self.ring_width = width;
        self
    }

    pub fn with_indicator_size(mut self, size: f64) -> Self {
        self.indicator_size = size;
        self
    }

    /// Inner and outer radius of bit ring `index` (0 = least significant, innermost)
    pub fn ring_bounds(&self, index: usize) -> (f64, f64) {
        let inner = self.hub_radius + self.ring_width * index as f64;
        (inner, inner + self.ring_width)
    }

    /// Radius of the circle enclosing `bits` rings
    pub fn outer_radius(&self, bits: usize) -> f64 {
        self.hub_radius + self.ring_width * bits as f64
    }
}

/// One rotary encoder pattern
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderSpec {
    /// Output file stem
    pub name: String,
    /// Number of concentric rings, one per Gray-code bit
    pub bits: usize,
    /// Sector boundaries in dial degrees; sector `i` spans `[degrees[i], degrees[i + 1])`
    pub degrees: Vec<f64>,
    /// Dial angle of the indicator triangle
    pub indicator: f64,
}

impl EncoderSpec {
    pub fn new(name: impl Into<String>, bits: usize, degrees: Vec<f64>, indicator: f64) -> Self {
        Self {
            name: name.into(),
            bits,
            degrees,
            indicator,
        }
    }

    /// Number of sectors (one less than the number of boundaries)
    pub fn sector_count(&self) -> usize {
        self.degrees.len().saturating_sub(1)
    }

    /// Angular range of sector `index`
    pub fn sector_span(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.degrees.get(index)?, *self.degrees.get(index + 1)?))
    }

    /// Gray code printed in each sector; sector `i` carries the code of `i + 1`
    pub fn sector_codes(&self) -> Vec<u32> {
        (1..=self.sector_count() as u32).map(gray::encode).collect()
    }

    /// Number of sector rings the pattern draws
    pub fn set_bit_count(&self) -> usize {
        self.sector_codes()
            .iter()
            .map(|&code| (0..self.bits).filter(|&j| gray::bit(code, j)).count())
            .sum()
    }

    /// Sector under dial angle `degree`, if any
    pub fn sector_at(&self, degree: f64) -> Option<usize> {
        self.degrees
            .windows(2)
            .position(|w| w[0] <= degree && degree < w[1])
    }

    /// Code a sensor reads at dial angle `degree`; 0 outside every sector
    pub fn code_at(&self, degree: f64) -> u32 {
        let mask = if self.bits >= u32::BITS as usize {
            u32::MAX
        } else {
            (1u32 << self.bits) - 1
        };
        self.sector_at(degree)
            .map(|i| gray::encode(i as u32 + 1) & mask)
            .unwrap_or(0)
    }

    /// File name of the rendered template
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }
}

/// The single-dial pattern: a free-play sector, 35 evenly spaced
/// boundaries starting at 20 degrees, and a final stop at 320 degrees.
pub fn one_dial() -> EncoderSpec {
    let step = 23.0 / 3.0;
    let mut degrees = vec![0.0];
    degrees.extend((0..35).map(|i| i as f64 * step + 20.0));
    degrees.push(320.0);

    EncoderSpec::new("one_dial", 6, degrees, step * 0.5 + 20.0 + step + 5.0)
}

/// Every pattern this tool knows how to draw
pub fn builtin_encoders() -> Vec<EncoderSpec> {
    vec![one_dial()]
}

/// Pick built-in patterns by name, keeping the requested order
pub fn select_encoders(names: &[String]) -> Result<Vec<EncoderSpec>, GenerateError> {
    let all = builtin_encoders();
    if names.is_empty() {
        return Ok(all);
    }

    names
        .iter()
        .map(|name| {
            all.iter()
                .find(|spec| &spec.name == name)
                .cloned()
                .ok_or_else(|| GenerateError::UnknownPattern {
                    name: name.clone(),
                    available: all.iter().map(|spec| spec.name.clone()).collect(),
                })
        })
        .collect()
}

/// Draw `spec` onto `canvas`
pub fn draw(spec: &EncoderSpec, layout: &DialLayout, canvas: &mut Canvas) {
    let outer = layout.outer_radius(spec.bits);
    canvas.circle(layout.hub_radius);
    canvas.circle(outer);
    canvas.indicator_sized(outer, spec.indicator, layout.indicator_size);

    for (i, code) in spec.sector_codes().into_iter().enumerate() {
        let Some((start, end)) = spec.sector_span(i) else {
            break;
        };
        debug!(
            "{} sector {}: {}",
            spec.name,
            i,
            gray::to_bit_string(code, spec.bits)
        );
        for j in (0..spec.bits).filter(|&j| gray::bit(code, j)) {
            let (inner_radius, outer_radius) = layout.ring_bounds(j);
            canvas.sector_ring(outer_radius, inner_radius, start, end);
        }
    }
}

/// Render `spec` to an SVG document
pub fn render(spec: &EncoderSpec, config: &RenderConfig) -> String {
    let mut canvas = Canvas::with_stylesheet(config.canvas.clone(), config.stylesheet.clone());
    draw(spec, &config.layout, &mut canvas);
    debug!("{}: {} shapes", spec.name, canvas.len());
    canvas.export_to_svg()
}

/// Render `spec` and write it to `<out_dir>/<name>.svg`
pub fn write(
    spec: &EncoderSpec,
    config: &RenderConfig,
    out_dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let path = out_dir.join(spec.file_name());
    let svg = render(spec, config);
    fs::write(&path, svg).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(path)
}
