//! Wrapping rotation counter for the gain knob's quadrature encoder.

use crate::constants::{DB_CONSOLE_CEILING, DB_CONSOLE_FLOOR, DB_INCREMENTS, DB_TOTAL_GAIN, Decibel};

/// Total encoder steps across the full console gain range.
const STEPS: f32 = DB_TOTAL_GAIN * DB_INCREMENTS;

/// Mirrors the 16-bit rotation counter reported by the gain knob.
///
/// A physical encoder only reports relative rotation, never absolute
/// position: the counter accumulates signed step deltas and wraps modulo
/// 2^16 in both directions, exactly like the hardware register it shadows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotaryEncoder {
    rotation_count: u16,
}

impl RotaryEncoder {
    /// Creates an encoder with the counter at zero.
    pub fn new() -> Self {
        Self { rotation_count: 0 }
    }

    /// Cumulative net rotation since creation, modulo 2^16.
    pub fn rotation_count(&self) -> u16 {
        self.rotation_count
    }

    /// Applies a relative rotation of `steps` detents.
    ///
    /// Positive steps add, negative steps subtract; both wrap silently
    /// rather than faulting on overflow.
    pub fn rotate(&mut self, steps: i32) {
        let magnitude = steps.unsigned_abs() as u16;

        self.rotation_count = if steps > 0 {
            self.rotation_count.wrapping_add(magnitude)
        } else {
            self.rotation_count.wrapping_sub(magnitude)
        };

        log::trace!("rotate {} -> count {}", steps, self.rotation_count);
    }

    fn rotate_between(&mut self, new_value: i32, old_value: i32) {
        self.rotate(new_value - old_value);
    }

    /// Rotates by the step delta between two console fader values in 0..1.
    ///
    /// Panics if either value is out of range.
    pub fn rotate_scaled(&mut self, new_value: f32, old_value: f32) {
        let old_unscaled = Self::unscale(old_value);
        let new_unscaled = Self::unscale(new_value);

        self.rotate_between(new_unscaled, old_unscaled);
    }

    /// Rotates by the step delta between two console gains in dB.
    ///
    /// Panics if either gain is out of range.
    pub fn rotate_scaled_db(&mut self, new_value: Decibel, old_value: Decibel) {
        let old_unscaled = Self::unscale_db(old_value);
        let new_unscaled = Self::unscale_db(new_value);

        self.rotate_between(new_unscaled, old_unscaled);
    }

    fn unscale(value: f32) -> i32 {
        assert!(
            (0.0..=1.0).contains(&value),
            "scaled value {value} out of range"
        );

        (value.sqrt() * STEPS).round() as i32
    }

    fn unscale_db(db: Decibel) -> i32 {
        assert!(
            (DB_CONSOLE_FLOOR..=DB_CONSOLE_CEILING).contains(&db),
            "gain {db} dB out of range"
        );

        // Truncating, unlike the scaled path; matches the hardware's coarse
        // dB table.
        ((db - DB_CONSOLE_FLOOR) * DB_INCREMENTS) as i32
    }
}
