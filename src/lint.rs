//! Lint checks for encoder specs.
//!
//! Generation never rejects a spec; these checks only point out specs that
//! will print a template a sensor cannot read reliably: missing or
//! unordered boundaries, patterns wrapping past a full turn, and sector
//! numbers that need more bits than the dial has rings.

use std::fmt;

use crate::gray;
use crate::pattern::EncoderSpec;

/// A lint warning about an encoder spec
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Category of spec defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Boundaries,
    Span,
    Capacity,
    Indicator,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Boundaries => write!(f, "boundaries"),
            LintCategory::Span => write!(f, "span"),
            LintCategory::Capacity => write!(f, "capacity"),
            LintCategory::Indicator => write!(f, "indicator"),
        }
    }
}

/// Run all lint checks on an encoder spec.
pub fn check(spec: &EncoderSpec) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_boundaries(spec, &mut warnings);
    check_span(spec, &mut warnings);
    check_capacity(spec, &mut warnings);
    check_indicator(spec, &mut warnings);
    warnings
}

fn warn(warnings: &mut Vec<LintWarning>, category: LintCategory, message: String) {
    warnings.push(LintWarning { category, message });
}

fn check_boundaries(spec: &EncoderSpec, warnings: &mut Vec<LintWarning>) {
    if spec.degrees.len() < 2 {
        warn(
            warnings,
            LintCategory::Boundaries,
            format!(
                "\"{}\" has {} boundary angle(s); at least 2 are needed to draw a sector",
                spec.name,
                spec.degrees.len()
            ),
        );
        return;
    }

    for (i, pair) in spec.degrees.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            warn(
                warnings,
                LintCategory::Boundaries,
                format!(
                    "\"{}\" sector {} is empty or reversed ({} to {} degrees)",
                    spec.name, i, pair[0], pair[1]
                ),
            );
        }
    }
}

fn check_span(spec: &EncoderSpec, warnings: &mut Vec<LintWarning>) {
    let (Some(first), Some(last)) = (spec.degrees.first(), spec.degrees.last()) else {
        return;
    };
    if last - first > 360.0 {
        warn(
            warnings,
            LintCategory::Span,
            format!(
                "\"{}\" spans {} degrees, more than a full turn",
                spec.name,
                last - first
            ),
        );
    }
}

fn check_capacity(spec: &EncoderSpec, warnings: &mut Vec<LintWarning>) {
    if spec.bits == 0 {
        warn(
            warnings,
            LintCategory::Capacity,
            format!("\"{}\" has no bit rings", spec.name),
        );
        return;
    }

    let widest = spec
        .sector_codes()
        .into_iter()
        .enumerate()
        .map(|(i, code)| (i, gray::width(code)))
        .find(|&(_, width)| width > spec.bits);
    if let Some((sector, width)) = widest {
        warn(
            warnings,
            LintCategory::Capacity,
            format!(
                "\"{}\" sector {} needs {} bits but the dial has {} rings; {} sectors fit",
                spec.name,
                sector,
                width,
                spec.bits,
                (1u64 << spec.bits.min(63)) - 1
            ),
        );
    }
}

fn check_indicator(spec: &EncoderSpec, warnings: &mut Vec<LintWarning>) {
    if !(0.0..360.0).contains(&spec.indicator) {
        warn(
            warnings,
            LintCategory::Indicator,
            format!(
                "\"{}\" indicator at {} degrees is outside [0, 360)",
                spec.name, spec.indicator
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::one_dial;

    fn categories(spec: &EncoderSpec) -> Vec<LintCategory> {
        check(spec).iter().map(|w| w.category).collect()
    }

    #[test]
    fn test_builtin_is_clean() {
        let warnings = check(&one_dial());
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    }

    #[test]
    fn test_too_few_boundaries() {
        let spec = EncoderSpec::new("bare", 3, vec![0.0], 0.0);
        assert_eq!(categories(&spec), vec![LintCategory::Boundaries]);
    }

    #[test]
    fn test_unordered_boundaries() {
        let spec = EncoderSpec::new("loop", 3, vec![0.0, 30.0, 20.0, 40.0], 0.0);
        let warnings = check(&spec);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::Boundaries);
        assert!(warnings[0].message.contains("sector 1"));
    }

    #[test]
    fn test_span_over_full_turn() {
        let spec = EncoderSpec::new("wide", 3, vec![0.0, 200.0, 370.0], 0.0);
        assert_eq!(categories(&spec), vec![LintCategory::Span]);
    }

    #[test]
    fn test_capacity() {
        let degrees: Vec<f64> = (0..6).map(|i| i as f64 * 10.0).collect();
        let spec = EncoderSpec::new("narrow", 2, degrees, 0.0);
        let warnings = check(&spec);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::Capacity);
        assert!(warnings[0].message.contains("sector 3 needs 3 bits"));

        let none = EncoderSpec::new("none", 0, vec![0.0, 10.0], 0.0);
        assert_eq!(categories(&none), vec![LintCategory::Capacity]);
    }

    #[test]
    fn test_indicator_range() {
        let spec = EncoderSpec::new("late", 2, vec![0.0, 10.0], 360.0);
        assert_eq!(categories(&spec), vec![LintCategory::Indicator]);
    }

    #[test]
    fn test_display() {
        let spec = EncoderSpec::new("bare", 3, vec![], 0.0);
        let warnings = check(&spec);
        assert!(warnings[0].to_string().starts_with("[boundaries] \"bare\""));
    }
}
