//! Color values carried by a parameter set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParamsError;

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a fraction in [0, 1].
    pub fn alpha_f64(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Format the RGB part as `#rrggbb`, ignoring alpha.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or `rgb(r, g, b)`.
    pub fn parse(raw: &str) -> Result<Self, ParamsError> {
        let s = raw.trim();
        let invalid = || ParamsError::InvalidColor(raw.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return match hex.len() {
                3 => {
                    let nibble = |i: usize| {
                        u8::from_str_radix(&hex[i..i + 1], 16)
                            .map(|v| v * 17)
                            .map_err(|_| invalid())
                    };
                    Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
                }
                6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
                8 => Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
                _ => Err(invalid()),
            };
        }

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(invalid());
            }
            let mut channels = [0u8; 3];
            for (slot, part) in channels.iter_mut().zip(&parts) {
                *slot = part.parse::<u8>().map_err(|_| invalid())?;
            }
            return Ok(Self::rgb(channels[0], channels[1], channels[2]));
        }

        Err(invalid())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Color::parse("#0b0d12").unwrap(), Color::rgb(11, 13, 18));
        assert_eq!(Color::parse("#FFFFFF").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Color::parse("#f80").unwrap(), Color::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let c = Color::parse("#10203080").unwrap();
        assert_eq!(c, Color::rgba(16, 32, 48, 128));
        assert_eq!(c.to_hex(), "#10203080");
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            Color::parse("rgb(12, 34, 56)").unwrap(),
            Color::rgb(12, 34, 56)
        );
        assert_eq!(Color::parse("RGB(1,2,3)").unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::parse("teal").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("rgb(300, 0, 0)").is_err());
        assert!(Color::parse("#é1").is_err());
    }

    #[test]
    fn test_hex_formatting_is_lowercase() {
        assert_eq!(Color::rgb(171, 205, 239).to_hex(), "#abcdef");
        assert_eq!(Color::rgba(171, 205, 239, 10).to_hex_rgb(), "#abcdef");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(1, 2, 3));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
