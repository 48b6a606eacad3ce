//! 8-bit RGB color type
//!
//! Colors travel through the whole pipeline as plain 8-bit channel triples:
//! palette entries, cell averages and rendered fills all share [`Rgb`].

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as three 8-bit unsigned channels.
///
/// # Example
///
/// ```
/// use dot_grid::Rgb;
///
/// let red: Rgb = "#FF0000".parse().unwrap();
/// assert_eq!(red, Rgb::new(255, 0, 0));
/// assert_eq!(red.to_hex(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure white, the matcher's fallback for an empty palette.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Orders colors identically to [`distance()`](Self::distance) without
    /// the square root, so the matcher compares on this value.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a 6-digit hex string.
    ///
    /// Accepts `#RRGGBB` and `RRGGBB`, case-insensitive. Shorthand `#RGB`,
    /// named colors and surrounding whitespace are rejected.
    ///
    /// ```
    /// use dot_grid::Rgb;
    ///
    /// assert_eq!("00ff7f".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 127));
    /// assert!("#F00".parse::<Rgb>().is_err());
    /// assert!("red".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if let Some((position, found)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ParseColorError::InvalidDigit { position, found });
        }
        // All ASCII from here on, so byte length is the digit count.
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength { len: digits.len() });
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        let color: Rgb = "#1A2B3C".parse().unwrap();
        assert_eq!(color.to_bytes(), [0x1A, 0x2B, 0x3C]);
    }

    #[test]
    fn test_hex_parsing_without_hash() {
        let color: Rgb = "ff8000".parse().unwrap();
        assert_eq!(color, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_hex_parsing_case_insensitive() {
        let lower: Rgb = "#abcdef".parse().unwrap();
        let upper: Rgb = "#ABCDEF".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_hex_parsing_rejects_shorthand() {
        let err = "#F00".parse::<Rgb>().unwrap_err();
        assert_eq!(err, ParseColorError::InvalidLength { len: 3 });
    }

    #[test]
    fn test_hex_parsing_rejects_named_color() {
        let err = "red".parse::<Rgb>().unwrap_err();
        assert!(matches!(err, ParseColorError::InvalidDigit { found: 'r', .. }));
    }

    #[test]
    fn test_hex_parsing_rejects_eight_digits() {
        let err = "#FF0000FF".parse::<Rgb>().unwrap_err();
        assert_eq!(err, ParseColorError::InvalidLength { len: 8 });
    }

    #[test]
    fn test_hex_parsing_rejects_whitespace() {
        assert!(" #FF0000".parse::<Rgb>().is_err());
        assert!("#FF0000 ".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_parsing_rejects_sign_prefix() {
        // u8::from_str_radix would accept "+F"; the digit check must not.
        assert!("#+F0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_parsing_rejects_empty() {
        assert!("".parse::<Rgb>().is_err());
        assert!("#".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_to_hex_uppercase_padded() {
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000AFF");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000AFF");
    }

    #[test]
    fn test_distance() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(3, 4, 0);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(b), 0.0);
    }

    #[test]
    fn test_distance_extremes_do_not_overflow() {
        assert_eq!(Rgb::BLACK.distance_squared(Rgb::WHITE), 3 * 255 * 255);
    }
}
