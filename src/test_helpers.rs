//! Shared test utilities for the visual-factory test suite.
//!
//! Provides config fixture writers, format lookups, and synthetic images.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let path = write_config(&tmp, "[formats.thumb]\nwidth = 150\nheight = 100");
//! let set = load_formats(&path).unwrap();
//!
//! let thumb = find_format(&set, "thumb");
//! assert_eq!(thumb.dimension_directory(), "150x100");
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::FormatSet;
use crate::format::Format;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `content` to `formats.toml` inside the temp dir and return its path.
pub fn write_config(tmp: &TempDir, content: &str) -> PathBuf {
    let path = tmp.path().join("formats.toml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Write a small gradient PNG with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

// =========================================================================
// Format set lookups, panicking with the available names on miss
// =========================================================================

/// Find a named format. Panics if not found.
pub fn find_format<'a>(set: &'a FormatSet, name: &str) -> &'a Format {
    set.get(name).unwrap_or_else(|| {
        let names = entry_names(set);
        panic!("format '{name}' not found. Available: {names:?}")
    })
}

/// All entry names, original first.
pub fn entry_names(set: &FormatSet) -> Vec<&str> {
    set.entries().into_iter().map(|(name, _)| name).collect()
}
