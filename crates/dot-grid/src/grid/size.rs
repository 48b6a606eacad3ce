//! Size setting and the grid size derived from it.

use std::fmt;

/// Smallest grid the pipeline ever uses, per axis.
pub const MIN_GRID_SIZE: u32 = 2;

/// Derive cells-per-axis from a size setting: `max(2, floor(size / 2))`.
///
/// Monotonically non-decreasing; yields 2..=50 for sizes 1..=100.
///
/// ```
/// use dot_grid::grid_size;
///
/// assert_eq!(grid_size(1), 2);
/// assert_eq!(grid_size(10), 5);
/// assert_eq!(grid_size(100), 50);
/// ```
#[inline]
pub fn grid_size(size: u32) -> u32 {
    (size / 2).max(MIN_GRID_SIZE)
}

/// Error for a size value outside 1..=100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeError {
    pub value: i64,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size {} out of range (expected {}..={})",
            self.value,
            SizeSetting::MIN,
            SizeSetting::MAX
        )
    }
}

impl std::error::Error for SizeError {}

/// The user-controlled size slider value, always within 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SizeSetting(u8);

impl SizeSetting {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Value used when nothing (or garbage) is persisted.
    pub const DEFAULT: SizeSetting = SizeSetting(50);

    /// Validate a raw slider value.
    pub fn new(value: i64) -> Result<Self, SizeError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SizeError { value })
        }
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.0 as u32
    }

    /// Cells per axis for this setting.
    #[inline]
    pub fn grid_size(self) -> u32 {
        grid_size(self.value())
    }
}

impl Default for SizeSetting {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SizeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
