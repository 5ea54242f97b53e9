//! # Visual Factory
//!
//! Image format descriptors: how each variant of an uploaded image is sized
//! and which directory it is stored in.
//!
//! ```text
//! formats.toml  →  FormatSet  →  Format  →  uploads/800x600/
//!                                       →  uploads/orig/
//! ```
//!
//! A [`format::Format`] is an immutable value built through one of three
//! named constructors. It never touches the filesystem: resizing, flipping
//! pixels and writing files belong to whoever consumes the descriptor.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`format`] | `Format` descriptor, flip resolution, mapping parameters |
//! | [`config`] | `formats.toml` loading, defaults cascade, validation |
//! | [`imaging`] | Source dimensions and the target box a format resolves to |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Flip Is Normalized at the Boundary
//!
//! Flip arrives as a boolean from code and as text from config files or
//! request parameters. [`format::FlipValue`] carries both shapes only as far
//! as the constructor; the stored flag is always a plain `bool`.
//!
//! ## Directory Is Optional
//!
//! Formats built from raw dimensions have no upload directory.
//! [`format::Format::upload_directory`] returns an error for them instead of
//! producing a path with an empty prefix.

pub mod config;
pub mod format;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
