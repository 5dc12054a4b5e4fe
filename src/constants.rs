//! Gain-range constants shared by the ring LED display and the rotary encoder.

/// Gain expressed in decibels.
pub type Decibel = f32;

/// Full gain range controllable from the mixing console (112 dB).
pub const DB_TOTAL_GAIN: Decibel = 112.0;

/// Gain increments per dB supported by the ring LED display and rotary encoder.
pub const DB_INCREMENTS: f32 = 2.0;

/// Number of LEDs in the ring display.
pub const LED_COUNT: usize = 27;

/// Number of sub-steps a single LED position can express (the size of the
/// adjacent-pair lookup table).
pub const LED_STEPS_PER_SEGMENT: usize = 4;

/// Total number of gain steps representable on the ring display.
pub const LED_STEPS: usize = (LED_COUNT - 1) * LED_STEPS_PER_SEGMENT;

/// Gain representable on the ring display (52 dB).
pub const DB_REPRESENTABLE_GAIN: Decibel = LED_STEPS as f32 / DB_INCREMENTS;

/// Gain below the ring display floor, not representable on it (60 dB).
pub const DB_UNREPRESENTABLE_GAIN: Decibel = DB_TOTAL_GAIN - DB_REPRESENTABLE_GAIN;

/// Minimum gain in the console's display convention (-100 dB).
pub const DB_CONSOLE_FLOOR: Decibel = -100.0;

/// Maximum gain in the console's display convention (+12 dB).
pub const DB_CONSOLE_CEILING: Decibel = DB_CONSOLE_FLOOR + DB_TOTAL_GAIN;

/// Minimum gain representable on the device (-40 dB).
pub const DB_DEVICE_FLOOR: Decibel = DB_CONSOLE_FLOOR + DB_UNREPRESENTABLE_GAIN;

/// Maximum gain representable on the device (+12 dB).
pub const DB_DEVICE_CEILING: Decibel = DB_DEVICE_FLOOR + DB_REPRESENTABLE_GAIN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representable_steps() {
        assert_eq!(LED_STEPS, 104);
    }

    #[test]
    fn test_representable_gain_split() {
        assert!((DB_REPRESENTABLE_GAIN - 52.0).abs() < f32::EPSILON);
        assert!((DB_UNREPRESENTABLE_GAIN - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_display_conventions() {
        assert!((DB_DEVICE_FLOOR + 40.0).abs() < f32::EPSILON);
        assert!((DB_CONSOLE_CEILING - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_conventions_agree_at_ceiling() {
        // Both the console and device conventions end at +12 dB.
        assert!((DB_DEVICE_CEILING - DB_CONSOLE_CEILING).abs() < f32::EPSILON);
    }
}
