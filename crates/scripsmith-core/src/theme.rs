//! Neon-on-dark palette and color handling

use thiserror::Error;

/// Errors from parsing accent color strings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("color must be #RRGGBB or #RRGGBBAA, got {0:?}")]
    BadFormat(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// RGBA color, independent of any rendering framework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse "#RRGGBB" or "#RRGGBBAA"
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ThemeError::BadFormat(hex.to_string()))?;
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(ThemeError::BadFormat(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ThemeError::BadDigit(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 255 },
        })
    }

    /// Blend toward `other`, t clamped to 0..=1
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// The fixed page palette
pub mod palette {
    use super::Rgba;

    pub const BLUE: Rgba = Rgba::rgb(0x00, 0xD4, 0xFF);
    pub const PURPLE: Rgba = Rgba::rgb(0xB0, 0x26, 0xFF);
    pub const GREEN: Rgba = Rgba::rgb(0x00, 0xFF, 0x88);
    pub const PINK: Rgba = Rgba::rgb(0xFF, 0x00, 0x80);
    pub const DARK: Rgba = Rgba::rgb(0x0A, 0x0A, 0x0A);
    pub const DARKER: Rgba = Rgba::rgb(0x05, 0x05, 0x05);

    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
    pub const TEXT: Rgba = Rgba::rgb(0xD1, 0xD5, 0xDB);
    pub const TEXT_DIM: Rgba = Rgba::rgb(0x9C, 0xA3, 0xAF);
    pub const TEXT_FAINT: Rgba = Rgba::rgb(0x6B, 0x72, 0x80);
    pub const BORDER: Rgba = Rgba::rgb(0x4B, 0x55, 0x63);
    pub const BORDER_DIM: Rgba = Rgba::rgb(0x37, 0x41, 0x51);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette_colors() {
        assert_eq!(Rgba::from_hex("#00D4FF").unwrap(), palette::BLUE);
        assert_eq!(Rgba::from_hex("#B026FF").unwrap(), palette::PURPLE);
        assert_eq!(Rgba::from_hex("#ffffff").unwrap(), palette::WHITE);
    }

    #[test]
    fn test_parse_with_alpha() {
        let c = Rgba::from_hex("#FF008040").unwrap();
        assert_eq!(c, palette::PINK.with_alpha(0x40));
    }

    #[test]
    fn test_reject_malformed() {
        assert!(matches!(Rgba::from_hex("00D4FF"), Err(ThemeError::BadFormat(_))));
        assert!(matches!(Rgba::from_hex("#00D4F"), Err(ThemeError::BadFormat(_))));
        assert!(matches!(Rgba::from_hex("#00D4FG"), Err(ThemeError::BadDigit(_))));
        assert!(matches!(Rgba::from_hex("#00D4ƒƒ"), Err(ThemeError::BadFormat(_))));
    }

    #[test]
    fn test_lerp_endpoints_and_clamp() {
        let a = palette::DARKER;
        let b = palette::BLUE;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.0), b);
    }
}
