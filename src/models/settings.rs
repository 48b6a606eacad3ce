//! Persisted representation of the palette and the size setting.
//!
//! Both live in the key-value store as strings: the palette as a JSON array
//! of `#RRGGBB` strings, the size as a decimal integer. Decoding never fails;
//! anything unusable yields the default.

use dot_grid::{Palette, SizeSetting};

/// Store key for the palette.
pub const PALETTE_KEY: &str = "palette";

/// Store key for the size setting.
pub const SIZE_KEY: &str = "size";

pub fn encode_palette(palette: &Palette) -> String {
    serde_json::to_string(&palette.to_hex()).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a persisted palette.
///
/// Invalid JSON, a non-array value, or any entry that is not a 6-digit hex
/// color makes the whole value corrupt and yields an empty palette.
pub fn decode_palette(raw: Option<&str>) -> Palette {
    let Some(raw) = raw else {
        return Palette::new();
    };

    let entries: Vec<String> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(%e, "Persisted palette is not a JSON string array, starting empty");
            return Palette::new();
        }
    };

    match Palette::from_hex(entries.as_slice()) {
        Ok(palette) => palette,
        Err(e) => {
            tracing::warn!(%e, "Persisted palette has an invalid color, starting empty");
            Palette::new()
        }
    }
}

pub fn encode_size(size: SizeSetting) -> String {
    size.value().to_string()
}

/// Decode a persisted size setting; absent, unparsable or out-of-range
/// values yield the default (50).
pub fn decode_size(raw: Option<&str>) -> SizeSetting {
    let Some(raw) = raw else {
        return SizeSetting::DEFAULT;
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => SizeSetting::new(value).unwrap_or_else(|e| {
            tracing::warn!(%e, "Persisted size out of range, using default");
            SizeSetting::DEFAULT
        }),
        Err(e) => {
            tracing::warn!(%e, raw, "Persisted size is not an integer, using default");
            SizeSetting::DEFAULT
        }
    }
}
