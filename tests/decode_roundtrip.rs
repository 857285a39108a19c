//! Reading the printed pattern back through the dial tracker

use dial_pattern::decoder::BASE_POSITION;
use dial_pattern::{gray, one_dial, DialTracker};

/// Sensor readings while sweeping the indicator across `angles`
fn readings(angles: impl Iterator<Item = f64>) -> Vec<u8> {
    let spec = one_dial();
    angles.map(|a| spec.code_at(a) as u8).collect()
}

#[test]
fn test_every_sector_decodes_to_its_number() {
    let spec = one_dial();
    for i in 0..spec.sector_count() {
        let (start, end) = spec.sector_span(i).unwrap();
        let code = spec.code_at((start + end) / 2.0);
        assert_eq!(gray::decode(code), i as u32 + 1);
    }
}

#[test]
fn test_outside_pattern_reads_base() {
    let spec = one_dial();
    assert_eq!(spec.code_at(330.0), u32::from(BASE_POSITION));
    assert_eq!(spec.code_at(-5.0), u32::from(BASE_POSITION));
}

#[test]
fn test_swing_and_return_selects_deepest_sector() {
    let spec = one_dial();
    // Turn to the middle of sector 9 (position 10), back again, then onto the stop
    let (start, end) = spec.sector_span(9).unwrap();
    let target = (start + end) / 2.0;

    let out = (0..=100).map(|k| target * k as f64 / 100.0);
    let back = (0..=100).map(|k| target * (100 - k) as f64 / 100.0);
    let mut sweep = readings(out.chain(back));
    sweep.push(BASE_POSITION);

    let mut tracker = DialTracker::new();
    let mut decided = Vec::new();
    for code in sweep {
        tracker.update(code);
        if let Some(p) = tracker.pop_decided_position() {
            decided.push(p);
        }
    }

    assert_eq!(decided, vec![10]);
    assert!(tracker.is_base_position());
}

#[test]
fn test_boundary_readings_are_off_by_at_most_one() {
    let spec = one_dial();
    let interior = &spec.degrees[1..spec.degrees.len() - 1];
    for &boundary in interior {
        let before = gray::decode(spec.code_at(boundary - 1e-6));
        let after = gray::decode(spec.code_at(boundary + 1e-6));
        assert_eq!(after, before + 1);
    }
}
