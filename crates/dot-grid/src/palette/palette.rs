//! Ordered, user-editable palette with nearest-color matching.
//!
//! Entry order is display order and doubles as the tie-break order for
//! matching. Duplicate entries are allowed.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// An ordered sequence of palette colors.
///
/// Unlike a device palette, a user palette may be empty and may contain the
/// same color more than once; matching always resolves to the first entry
/// at the minimum distance.
///
/// # Example
///
/// ```
/// use dot_grid::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#FF0000", "#0000FF"]).unwrap();
/// assert_eq!(palette.nearest(Rgb::new(200, 30, 40)), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a palette from colors, keeping their order.
    pub fn from_colors(colors: impl IntoIterator<Item = Rgb>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Create a palette from 6-digit hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for the first invalid entry.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .map(|s| Rgb::from_str(s.as_ref()).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// Colors in display order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Colors as `#RRGGBB` strings, in display order.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    /// Append a color at the end.
    pub fn push(&mut self, color: Rgb) {
        self.colors.push(color);
    }

    /// Remove and return the color at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Result<Rgb, PaletteError> {
        self.check_index(index)?;
        Ok(self.colors.remove(index))
    }

    /// Replace the color at `index` in place, returning the previous color.
    pub fn replace(&mut self, index: usize, color: Rgb) -> Result<Rgb, PaletteError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.colors[index], color))
    }

    fn check_index(&self, index: usize) -> Result<(), PaletteError> {
        if index < self.colors.len() {
            Ok(())
        } else {
            Err(PaletteError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
        }
    }

    /// Find the palette entry nearest to `color`.
    ///
    /// Returns `(index, distance)` with the Euclidean RGB distance, or
    /// `None` for an empty palette. The scan keeps the first entry that
    /// achieves the minimum (strictly-less-than comparison).
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> Option<(usize, f64)> {
        let mut best: Option<(usize, u32)> = None;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }

        best.map(|(i, d)| (i, (d as f64).sqrt()))
    }

    /// Nearest palette color, or white when the palette is empty.
    #[inline]
    pub fn nearest(&self, color: Rgb) -> Rgb {
        self.find_nearest(color)
            .map(|(idx, _)| self.colors[idx])
            .unwrap_or(Rgb::WHITE)
    }
}

impl FromIterator<Rgb> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Self::from_colors(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_palette() -> Palette {
        Palette::from_colors([
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
        ])
    }

    #[test]
    fn test_palette_basic_construction() {
        let palette = rgb_palette();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(1), Some(Rgb::new(0, 255, 0)));
        assert_eq!(palette.get(3), None);
    }

    #[test]
    fn test_empty_palette_allowed() {
        let palette = Palette::new();
        assert!(palette.is_empty());
        assert_eq!(palette.find_nearest(Rgb::new(1, 2, 3)), None);
    }

    #[test]
    fn test_duplicates_allowed() {
        let palette = Palette::from_hex(&["#FFFFFF", "#FFFFFF"]).unwrap();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = rgb_palette();
        let (idx, dist) = palette.find_nearest(Rgb::new(0, 0, 255)).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_find_nearest_closest() {
        let palette = rgb_palette();
        let (idx, dist) = palette.find_nearest(Rgb::new(10, 200, 20)).unwrap();
        assert_eq!(idx, 1);
        let expected = ((10.0f64 * 10.0) + (55.0 * 55.0) + (20.0 * 20.0)).sqrt();
        assert!((dist - expected).abs() < 1e-9);
    }

    #[test]
    fn test_find_nearest_tie_prefers_first() {
        let palette_tie = Palette::from_colors([Rgb::new(10, 0, 0), Rgb::new(0, 10, 0)]);
        let (idx, _) = palette_tie.find_nearest(Rgb::new(0, 0, 0)).unwrap();
        assert_eq!(idx, 0, "first entry wins on equal distance");

        let palette_tie_rev = Palette::from_colors([Rgb::new(0, 10, 0), Rgb::new(10, 0, 0)]);
        let (idx, _) = palette_tie_rev.find_nearest(Rgb::new(0, 0, 0)).unwrap();
        assert_eq!(idx, 0, "order decides, not the color value");
    }

    #[test]
    fn test_nearest_empty_is_white() {
        assert_eq!(Palette::new().nearest(Rgb::new(12, 34, 56)), Rgb::WHITE);
    }

    #[test]
    fn test_push_remove_replace() {
        let mut palette = Palette::new();
        palette.push(Rgb::new(1, 1, 1));
        palette.push(Rgb::new(2, 2, 2));
        palette.push(Rgb::new(3, 3, 3));

        let old = palette.replace(1, Rgb::new(9, 9, 9)).unwrap();
        assert_eq!(old, Rgb::new(2, 2, 2));
        assert_eq!(palette.get(1), Some(Rgb::new(9, 9, 9)));

        let removed = palette.remove(0).unwrap();
        assert_eq!(removed, Rgb::new(1, 1, 1));
        assert_eq!(
            palette.colors(),
            &[Rgb::new(9, 9, 9), Rgb::new(3, 3, 3)]
        );
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut palette = rgb_palette();
        let err = palette.remove(3).unwrap_err();
        assert_eq!(err, PaletteError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_replace_out_of_range_leaves_palette() {
        let mut palette = Palette::new();
        assert!(palette.replace(0, Rgb::BLACK).is_err());
        assert!(palette.is_empty());
    }

    #[test]
    fn test_from_hex_invalid() {
        let result = Palette::from_hex(&["#000000", "#FFF"]);
        assert!(matches!(result, Err(PaletteError::ParseColor(_))));
    }

    #[test]
    fn test_to_hex_keeps_order() {
        let palette = Palette::from_hex(&["#0000ff", "#ff0000"]).unwrap();
        assert_eq!(palette.to_hex(), vec!["#0000FF", "#FF0000"]);
    }
}
