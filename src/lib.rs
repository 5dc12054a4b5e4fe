//! Gain-control surface logic for a monitor controller.
//!
//! This crate implements the display and input-encoding core for a physical
//! gain-control surface: a 27-segment bi-color ring LED meter and a rotary
//! encoder, both representing a continuous gain value (decibels) on a
//! quantized medium. It is organized into modules, each with a specific
//! responsibility:
//!
//! - [`constants`]: gain-range constants shared by both components
//! - [`errors`]: error types for raw wire codes
//! - [`ids`]: key and LED identifier tables
//! - [`ring_led`]: ring LED display decoding and encoding
//! - [`rotary`]: wrapping rotation counter for the gain knob
//!
//! Everything here is pure, synchronous value transformation; the caller owns
//! the hardware I/O and the console-communication protocol that produce and
//! consume these values.

pub mod constants;
pub mod errors;
pub mod ids;
pub mod ring_led;
pub mod rotary;

pub use constants::Decibel;
pub use errors::CodeError;
pub use ids::{KeyId, LedId};
pub use ring_led::{LedColor, RingLedDisplay};
pub use rotary::RotaryEncoder;
