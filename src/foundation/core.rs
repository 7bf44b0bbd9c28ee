use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{AvatarError, AvatarResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Side length of the square design space every recipe is authored in.
pub const DESIGN_SIZE: f64 = 200.0;

/// Opaque 8-bit sRGB color.
///
/// The canonical text form is `#RRGGBB` with uppercase digits; that is also how it serializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, surrounding whitespace is ignored).
    ///
    /// Shorthand (`#RGB`), alpha (`#RRGGBBAA`) and non-hex characters are rejected.
    pub fn parse_hex(s: &str) -> AvatarResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AvatarError::validation(format!(
                "color must be a 6-digit hex string like \"#A1B2C3\", got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> AvatarResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| AvatarError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    /// Parse `s`, substituting `fallback` when it is not a valid 6-digit hex color.
    pub fn parse_or(s: &str, fallback: Self) -> Self {
        Self::parse_hex(s).unwrap_or(fallback)
    }

    /// Encode as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
