//! Color type and hex conversion
//!
//! All matching happens on 8-bit RGB triples; hex strings are the
//! persisted and user-facing form.
//!
//! # Example
//!
//! ```
//! use dot_grid::Rgb;
//!
//! let teal: Rgb = "#008080".parse().unwrap();
//! assert_eq!(teal.to_bytes(), [0, 128, 128]);
//! ```

mod rgb;

pub use rgb::Rgb;
