//! Reading a printed dial back from its sensors
//!
//! Photo sensors under each ring report one bit each; together they give
//! the Gray code of the sector facing the indicator. A dial is "dialed" by
//! turning it away from the base position and letting it spring back, so
//! the deepest position reached before returning to base is the selection.

use crate::gray;

/// Position reported while the dial rests at its stop
pub const BASE_POSITION: u8 = 0;

/// Tracks sensor readings and decides which position was dialed
#[derive(Debug, Clone, Default)]
pub struct DialTracker {
    position: u8,
    max_position: u8,
    decided_position: Option<u8>,
}

impl DialTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw sensor reading
    pub fn update(&mut self, sensor_gray_code: u8) {
        self.position = gray::decode(u32::from(sensor_gray_code)) as u8;
        self.max_position = self.max_position.max(self.position);
        if self.position == BASE_POSITION && self.max_position != BASE_POSITION {
            self.decided_position = Some(self.max_position);
            self.max_position = BASE_POSITION;
        }
    }

    /// Position decoded from the latest reading
    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn is_base_position(&self) -> bool {
        self.position == BASE_POSITION
    }

    /// Take the most recently decided position, if one is pending
    pub fn pop_decided_position(&mut self) -> Option<u8> {
        self.decided_position.take()
    }
}
