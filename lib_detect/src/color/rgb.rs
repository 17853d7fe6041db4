use std::fmt;

use thiserror::Error;

use crate::constants::LIGHT_TEXT_THRESHOLD;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HexError {
    #[error("hex color must be 6 digits with an optional '#', got {0:?}")]
    InvalidLength(String),
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Which text color stays readable on top of a given fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Light,
    Dark,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb` or `rrggbb`, in either case.
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(HexError::InvalidLength(hex.to_string()));
        }
        // from_str_radix alone would let a leading '+' through.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexError::InvalidDigit(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| HexError::InvalidDigit(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn sum(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// Light text below the threshold, dark text at or above it.
    pub fn text_tone(self) -> TextTone {
        if self.sum() < LIGHT_TEXT_THRESHOLD {
            TextTone::Light
        } else {
            TextTone::Dark
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
