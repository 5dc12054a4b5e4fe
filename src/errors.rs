//! Error types for raw codes received from the device.

use thiserror::Error;

/// Errors that can occur while decoding raw wire codes.
///
/// These cover malformed input from the device side of the link. Out-of-range
/// arguments from the calling layer are programmer errors and panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Raw value does not name a LED color.
    #[error("invalid LED color code: {0}")]
    InvalidLedColor(u8),

    /// Raw value does not name a key on the surface.
    #[error("invalid key identifier: {0}")]
    InvalidKeyId(u8),

    /// Raw value does not name a LED on the surface.
    #[error("invalid LED identifier: {0}")]
    InvalidLedId(u8),
}
