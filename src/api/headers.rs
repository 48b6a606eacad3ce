//! Header parsing utilities for upload requests.

use axum::http::{header::CONTENT_TYPE, HeaderMap};

/// Extension trait for convenient header parsing.
pub trait HeaderMapExt {
    /// Get a header value as a string, returning None if missing.
    fn get_str(&self, name: &str) -> Option<&str>;

    /// Declared media type without parameters, lowercased.
    ///
    /// `image/PNG; charset=binary` yields `image/png`.
    fn media_type(&self) -> Option<String>;
}

impl HeaderMapExt for HeaderMap {
    fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }

    fn media_type(&self) -> Option<String> {
        let value = self.get_str(CONTENT_TYPE.as_str())?;
        let essence = value.split(';').next().unwrap_or_default().trim();
        (!essence.is_empty()).then(|| essence.to_ascii_lowercase())
    }
}
