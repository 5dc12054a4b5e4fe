//! Ring LED display decoding and encoding.
//!
//! The 27 bi-color LEDs around the gain knob approximate a continuous meter:
//! a pair of adjacent LEDs blends two colors to express four sub-positions per
//! LED, so the ring resolves `(LED_COUNT - 1) * 4` discrete gain steps. This
//! module mirrors the physical LED state, decodes it back into a step value,
//! and computes the color each LED must show for a given gain.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DB_CONSOLE_CEILING, DB_CONSOLE_FLOOR, DB_DEVICE_FLOOR, DB_INCREMENTS, DB_TOTAL_GAIN,
    DB_UNREPRESENTABLE_GAIN, Decibel, LED_COUNT, LED_STEPS_PER_SEGMENT,
};
use crate::errors::CodeError;

/// Color shown by a single ring LED.
///
/// The discriminants are the wire codes used by the device and must be
/// preserved by any serialized representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum LedColor {
    Off = 0,
    Green = 1,
    Red = 2,
    Orange = 3,
}

impl From<LedColor> for u8 {
    fn from(color: LedColor) -> Self {
        color as u8
    }
}

impl TryFrom<u8> for LedColor {
    type Error = CodeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(LedColor::Off),
            1 => Ok(LedColor::Green),
            2 => Ok(LedColor::Red),
            3 => Ok(LedColor::Orange),
            _ => Err(CodeError::InvalidLedColor(raw)),
        }
    }
}

/// Lookup table enumerating the states an adjacent LED pair can be in, in
/// increasing sub-step order.
const LED_LUT: [(LedColor, LedColor); LED_STEPS_PER_SEGMENT] = [
    (LedColor::Red, LedColor::Off),
    (LedColor::Orange, LedColor::Green),
    (LedColor::Orange, LedColor::Orange),
    (LedColor::Green, LedColor::Orange),
];

/// Scales a dB gain onto the console's square-law fader curve.
pub fn scale_value(db: Decibel, relative_to: Decibel) -> f32 {
    ((db - relative_to) / DB_TOTAL_GAIN).powi(2)
}

/// Virtual ring LED display mirroring the LEDs around the gain knob.
///
/// The caller feeds LED update messages in via [`update`](Self::update) and
/// reads the decoded gain back out; the static `color_for_*` functions run the
/// opposite direction and compute the color each LED must show for a gain
/// supplied by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingLedDisplay {
    led_state: [LedColor; LED_COUNT],
}

impl Default for RingLedDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl RingLedDisplay {
    /// Creates a display with every LED off.
    pub fn new() -> Self {
        Self {
            led_state: [LedColor::Off; LED_COUNT],
        }
    }

    /// Sets the color of a single LED.
    ///
    /// LED numbers are 1-based. Panics if `led_number` is outside
    /// `1..=LED_COUNT`; an out-of-range LED number is a bug in the calling
    /// layer, not a recoverable condition.
    pub fn update(&mut self, led_number: usize, color: LedColor) {
        assert!(
            (1..=LED_COUNT).contains(&led_number),
            "LED number {led_number} out of range"
        );

        log::trace!("led {} -> {:?}", led_number, color);
        self.led_state[led_number - 1] = color;
    }

    /// Decodes the LED state into a step value.
    ///
    /// Scans the ring from the bottom and matches each adjacent LED pair
    /// against [`LED_LUT`]; the first matching position wins. Returns `None`
    /// when no pair matches, which happens transiently while the ring is
    /// being rewritten one LED at a time and must be treated as "no stable
    /// reading yet" rather than an error.
    pub fn value(&self) -> Option<usize> {
        for i in 0..LED_COUNT {
            let mut pair = (
                self.led_state[i],
                if i == LED_COUNT - 1 {
                    LedColor::Off
                } else {
                    self.led_state[i + 1]
                },
            );

            // Orange is the new red: the lowest-intensity step is shown with
            // an orange LED rather than a red one.
            if i == 0 && pair == (LedColor::Orange, LedColor::Off) {
                pair.0 = LedColor::Red;
            }

            if let Some(lut_index) = LED_LUT.iter().position(|&entry| entry == pair) {
                return Some(i * LED_STEPS_PER_SEGMENT + lut_index);
            }
        }

        None
    }

    /// Gain shown on the display, scaled to the console's 0..1 fader range.
    ///
    /// The console allows gain control over -100..+12 dB although only
    /// -40..+12 dB is represented on the ring: a range of 112 dB of which
    /// 52 dB is representable here, each of the 104 LED steps covering half a
    /// dB. `None` while the display holds no stable reading.
    pub fn scaled_value(&self) -> Option<f32> {
        let value = self.value()?;
        let db = DB_UNREPRESENTABLE_GAIN + value as f32 / DB_INCREMENTS;

        Some(scale_value(db, 0.0))
    }

    /// Gain shown on the display in dB, device convention.
    ///
    /// `None` while the display holds no stable reading.
    pub fn db_value(&self) -> Option<Decibel> {
        let value = self.value()?;

        Some(DB_DEVICE_FLOOR + value as f32 / DB_INCREMENTS)
    }

    /// Color currently held by a LED, or `None` if `led_index` is out of
    /// range. Note this accessor is zero-based, unlike `update`.
    pub fn color_for_led(&self, led_index: usize) -> Option<LedColor> {
        self.led_state.get(led_index).copied()
    }

    /// Converse of `scaled_value`: the number of LED steps for a console
    /// fader value, clamping unrepresentable gain to zero.
    fn unscale(value: f32) -> usize {
        assert!(
            (0.0..=1.0).contains(&value),
            "scaled value {value} out of range"
        );

        let unscaled = DB_INCREMENTS * (DB_TOTAL_GAIN * value.sqrt() - DB_UNREPRESENTABLE_GAIN);
        if unscaled < 0.0 {
            0
        } else {
            unscaled.round() as usize
        }
    }

    /// Converse of `db_value`: the number of LED steps for a console gain,
    /// clamping gain below the device floor to zero.
    fn unscale_db(db: Decibel) -> usize {
        assert!(
            (DB_CONSOLE_FLOOR..=DB_CONSOLE_CEILING).contains(&db),
            "gain {db} dB out of range"
        );

        let offset = (db - DB_DEVICE_FLOOR).max(0.0);
        (offset * DB_INCREMENTS).round() as usize
    }

    /// Color a LED must show for the display to read `step`.
    ///
    /// Step zero leaves the whole ring dark. Otherwise the pair at the
    /// boundary position carries the sub-step colors from [`LED_LUT`] and
    /// the LEDs below it are filled red, so writing every LED 1..=LED_COUNT
    /// reconstructs exactly the pattern [`value`](Self::value) decodes.
    fn color_for_step(led_number: usize, step: usize) -> LedColor {
        assert!(
            (1..=LED_COUNT).contains(&led_number),
            "LED number {led_number} out of range"
        );

        if step == 0 {
            return LedColor::Off;
        }

        let position = step / LED_STEPS_PER_SEGMENT + 1;
        let (first, second) = LED_LUT[step % LED_STEPS_PER_SEGMENT];

        if led_number < position {
            // Fill below the active pair; red marks attenuated range.
            LED_LUT[0].0
        } else if led_number == position {
            first
        } else if led_number == position + 1 {
            second
        } else {
            LedColor::Off
        }
    }

    /// Color LED `led_number` must show for a console fader value in 0..1.
    ///
    /// Panics if `led_number` or `value` is out of range.
    pub fn color_for_scaled_value(led_number: usize, value: f32) -> LedColor {
        Self::color_for_step(led_number, Self::unscale(value))
    }

    /// Color LED `led_number` must show for a console gain in dB.
    ///
    /// Panics if `led_number` or `db` is out of range.
    pub fn color_for_db_value(led_number: usize, db: Decibel) -> LedColor {
        Self::color_for_step(led_number, Self::unscale_db(db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LED_STEPS;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn display_showing(step: usize) -> RingLedDisplay {
        let mut display = RingLedDisplay::new();
        for led in 1..=LED_COUNT {
            display.update(led, RingLedDisplay::color_for_step(led, step));
        }
        display
    }

    #[test]
    fn test_all_off_has_no_value() {
        let display = RingLedDisplay::new();
        assert_eq!(display.value(), None);
        assert_eq!(display.scaled_value(), None);
        assert_eq!(display.db_value(), None);
    }

    #[test]
    fn test_single_orange_led_decodes_to_zero() {
        // Orange is the new red: the device shows the lowest step as a lone
        // orange LED at position 1.
        let mut display = RingLedDisplay::new();
        display.update(1, LedColor::Orange);

        assert_eq!(display.value(), Some(0));
    }

    #[test]
    fn test_single_red_led_decodes_to_zero() {
        let mut display = RingLedDisplay::new();
        display.update(1, LedColor::Red);

        assert_eq!(display.value(), Some(0));
    }

    #[test]
    fn test_round_trip_every_step() {
        init_logging();

        for step in 1..=LED_STEPS {
            let display = display_showing(step);
            assert_eq!(display.value(), Some(step), "step {step} did not survive");
        }
    }

    #[test]
    fn test_step_zero_leaves_ring_dark() {
        let display = display_showing(0);
        for led in 0..LED_COUNT {
            assert_eq!(display.color_for_led(led), Some(LedColor::Off));
        }
        assert_eq!(display.value(), None);
    }

    #[test]
    fn test_round_trip_through_db_encode() {
        let mut display = RingLedDisplay::new();
        for led in 1..=LED_COUNT {
            display.update(led, RingLedDisplay::color_for_db_value(led, -20.0));
        }

        // -20 dB is 40 steps above the -40 dB device floor.
        assert_eq!(display.value(), Some(40));
        let db = display.db_value().unwrap();
        assert!((db + 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_boundary_advances_one_led_per_segment() {
        for step in 1..LED_STEPS - LED_STEPS_PER_SEGMENT {
            let position = step / LED_STEPS_PER_SEGMENT + 1;
            let next_position = (step + LED_STEPS_PER_SEGMENT) / LED_STEPS_PER_SEGMENT + 1;
            assert_eq!(next_position, position + 1);

            assert_ne!(
                RingLedDisplay::color_for_step(next_position, step + LED_STEPS_PER_SEGMENT),
                LedColor::Off
            );
        }
    }

    #[test]
    fn test_db_value_reading() {
        let display = display_showing(24);
        let db = display.db_value().unwrap();

        // 24 half-dB steps above the -40 dB device floor.
        assert!((db + 28.0).abs() < 1e-4);
    }

    #[test]
    fn test_scaled_value_follows_square_law() {
        let display = display_showing(104);
        let scaled = display.scaled_value().unwrap();

        // Top of range: (60 + 104/2) / 112 == 1.0, squared.
        assert!((scaled - 1.0).abs() < 1e-4);

        let display = display_showing(40);
        let scaled = display.scaled_value().unwrap();
        let expected = ((60.0 + 20.0) / 112.0f32).powi(2);
        assert!((scaled - expected).abs() < 1e-4);
    }

    #[test]
    fn test_full_scale_lights_top_led() {
        assert_ne!(
            RingLedDisplay::color_for_scaled_value(LED_COUNT, 1.0),
            LedColor::Off
        );
    }

    #[test]
    fn test_zero_scale_is_dark_everywhere() {
        for led in 1..=LED_COUNT {
            assert_eq!(
                RingLedDisplay::color_for_scaled_value(led, 0.0),
                LedColor::Off
            );
        }
    }

    #[test]
    fn test_console_floor_is_dark() {
        for led in 1..=LED_COUNT {
            assert_eq!(
                RingLedDisplay::color_for_db_value(led, DB_CONSOLE_FLOOR),
                LedColor::Off
            );
        }
    }

    #[test]
    fn test_gain_below_device_floor_clamps_to_dark() {
        // -60 dB is within the console's range but below the device floor.
        for led in 1..=LED_COUNT {
            assert_eq!(
                RingLedDisplay::color_for_db_value(led, -60.0),
                LedColor::Off
            );
        }
    }

    #[test]
    fn test_color_for_led_is_zero_based() {
        let mut display = RingLedDisplay::new();
        display.update(1, LedColor::Red);

        assert_eq!(display.color_for_led(0), Some(LedColor::Red));
        assert_eq!(display.color_for_led(LED_COUNT), None);
    }

    #[test]
    fn test_partial_update_yields_no_value() {
        // Mid-update state with no recognizable pair anywhere.
        let mut display = RingLedDisplay::new();
        display.update(1, LedColor::Green);

        assert_eq!(display.value(), None);
    }

    #[test]
    #[should_panic(expected = "LED number 0 out of range")]
    fn test_update_led_zero_panics() {
        let mut display = RingLedDisplay::new();
        display.update(0, LedColor::Red);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_update_led_past_end_panics() {
        let mut display = RingLedDisplay::new();
        display.update(LED_COUNT + 1, LedColor::Red);
    }

    #[test]
    #[should_panic(expected = "scaled value")]
    fn test_scaled_value_above_one_panics() {
        RingLedDisplay::color_for_scaled_value(1, 1.5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_db_below_console_floor_panics() {
        RingLedDisplay::color_for_db_value(1, -101.0);
    }

    #[test]
    fn test_led_color_wire_codes() {
        assert_eq!(serde_json::to_string(&LedColor::Off).unwrap(), "0");
        assert_eq!(serde_json::to_string(&LedColor::Green).unwrap(), "1");
        assert_eq!(serde_json::to_string(&LedColor::Red).unwrap(), "2");
        assert_eq!(serde_json::to_string(&LedColor::Orange).unwrap(), "3");

        let color: LedColor = serde_json::from_str("2").unwrap();
        assert_eq!(color, LedColor::Red);
    }

    #[test]
    fn test_led_color_rejects_unknown_code() {
        assert_eq!(LedColor::try_from(7), Err(CodeError::InvalidLedColor(7)));
        assert!(serde_json::from_str::<LedColor>("7").is_err());
    }
}
