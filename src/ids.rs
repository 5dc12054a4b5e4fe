//! Key and LED identifiers on the control surface.
//!
//! Simple data tables: each key and each key-backlight LED has a fixed wire
//! code starting at 1, in the order the device scans them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CodeError;

/// Keys on the control surface, in wire order.
///
/// `External` is a routing pseudo-key understood by the console; it has no
/// physical cap and no backlight LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum KeyId {
    Output1 = 1,
    Output2,
    Output3,
    SourceA,
    SourceB,
    SourceC,
    Ref,
    Dim,
    Talk,
    Cut,
    Layer,
    External,
}

impl KeyId {
    /// Every key the console can address, in wire order.
    pub const ALL: [KeyId; 12] = [
        KeyId::Output1,
        KeyId::Output2,
        KeyId::Output3,
        KeyId::SourceA,
        KeyId::SourceB,
        KeyId::SourceC,
        KeyId::Ref,
        KeyId::Dim,
        KeyId::Talk,
        KeyId::Cut,
        KeyId::Layer,
        KeyId::External,
    ];

    /// Keys present on the physical surface (everything but `External`).
    pub fn physical() -> impl Iterator<Item = KeyId> {
        Self::ALL
            .into_iter()
            .filter(|&key| key != KeyId::External)
    }

    /// Keys whose caps carry a user-assignable label.
    pub fn labelable() -> impl Iterator<Item = KeyId> {
        Self::ALL
            .into_iter()
            .take_while(|&key| key <= KeyId::SourceC)
    }

    /// Suffix used to build label resource names for this key.
    pub fn label_suffix(self) -> &'static str {
        match self {
            KeyId::Output1 => "Output1",
            KeyId::Output2 => "Output2",
            KeyId::Output3 => "Output3",
            KeyId::SourceA => "SourceA",
            KeyId::SourceB => "SourceB",
            KeyId::SourceC => "SourceC",
            KeyId::Ref => "Ref",
            KeyId::Dim => "Dim",
            KeyId::Talk => "Talkback",
            KeyId::Cut => "Cut",
            KeyId::Layer => "Layer",
            KeyId::External => "External",
        }
    }

    /// The backlight LED behind this key, if it has one.
    pub fn led_id(self) -> Option<LedId> {
        LedId::try_from(self as u8).ok()
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_suffix())
    }
}

impl From<KeyId> for u8 {
    fn from(key: KeyId) -> Self {
        key as u8
    }
}

impl TryFrom<u8> for KeyId {
    type Error = CodeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(KeyId::Output1),
            2 => Ok(KeyId::Output2),
            3 => Ok(KeyId::Output3),
            4 => Ok(KeyId::SourceA),
            5 => Ok(KeyId::SourceB),
            6 => Ok(KeyId::SourceC),
            7 => Ok(KeyId::Ref),
            8 => Ok(KeyId::Dim),
            9 => Ok(KeyId::Talk),
            10 => Ok(KeyId::Cut),
            11 => Ok(KeyId::Layer),
            12 => Ok(KeyId::External),
            _ => Err(CodeError::InvalidKeyId(raw)),
        }
    }
}

impl From<LedId> for KeyId {
    // Every LED sits behind the key with the same wire code.
    fn from(led: LedId) -> Self {
        match led {
            LedId::Output1 => KeyId::Output1,
            LedId::Output2 => KeyId::Output2,
            LedId::Output3 => KeyId::Output3,
            LedId::SourceA => KeyId::SourceA,
            LedId::SourceB => KeyId::SourceB,
            LedId::SourceC => KeyId::SourceC,
            LedId::Ref => KeyId::Ref,
            LedId::Dim => KeyId::Dim,
            LedId::Talk => KeyId::Talk,
            LedId::Cut => KeyId::Cut,
            LedId::Layer => KeyId::Layer,
        }
    }
}

/// Key-backlight LEDs on the control surface, in wire order.
///
/// Wire codes match the corresponding [`KeyId`]; there is no LED for
/// [`KeyId::External`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum LedId {
    Output1 = 1,
    Output2,
    Output3,
    SourceA,
    SourceB,
    SourceC,
    Ref,
    Dim,
    Talk,
    Cut,
    Layer,
}

impl LedId {
    /// Every key-backlight LED, in wire order.
    pub const ALL: [LedId; 11] = [
        LedId::Output1,
        LedId::Output2,
        LedId::Output3,
        LedId::SourceA,
        LedId::SourceB,
        LedId::SourceC,
        LedId::Ref,
        LedId::Dim,
        LedId::Talk,
        LedId::Cut,
        LedId::Layer,
    ];

    /// The key this LED sits behind.
    pub fn key_id(self) -> KeyId {
        KeyId::from(self)
    }
}

impl fmt::Display for LedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key_id().fmt(f)
    }
}

impl From<LedId> for u8 {
    fn from(led: LedId) -> Self {
        led as u8
    }
}

impl TryFrom<u8> for LedId {
    type Error = CodeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(LedId::Output1),
            2 => Ok(LedId::Output2),
            3 => Ok(LedId::Output3),
            4 => Ok(LedId::SourceA),
            5 => Ok(LedId::SourceB),
            6 => Ok(LedId::SourceC),
            7 => Ok(LedId::Ref),
            8 => Ok(LedId::Dim),
            9 => Ok(LedId::Talk),
            10 => Ok(LedId::Cut),
            11 => Ok(LedId::Layer),
            _ => Err(CodeError::InvalidLedId(raw)),
        }
    }
}
