//! Two-color palette for the monochrome display.

use bevy_ecs::prelude::Resource;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn parse_hex(text: &str) -> Result<Self, String> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("Expected a #RRGGBB color, got '{}'", text));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| format!("Invalid color '{}': {}", text, e))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Foreground (lit pixel) and background colors.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        assert_eq!(Rgb::parse_hex("#FF8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse_hex("00ff7f"), Ok(Rgb::new(0, 255, 127)));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(Rgb::parse_hex("#FFF").is_err());
        assert!(Rgb::parse_hex("#GG0000").is_err());
        assert!(Rgb::parse_hex("#ÄÄÄ").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(1, 171, 255).to_hex(), "#01ABFF");
    }

    #[test]
    fn test_default_is_white_on_black() {
        let p = Palette::default();
        assert_eq!(p.foreground, Rgb::WHITE);
        assert_eq!(p.background, Rgb::BLACK);
    }
}
