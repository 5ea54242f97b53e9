//! Format descriptors: how one image variant is sized and where it is stored.
//!
//! A [`Format`] is built once through one of three named constructors and is
//! never mutated afterwards:
//!
//! | Constructor | `is_original` | `directory` |
//! |---|---|---|
//! | [`Format::from_original_params`] | `true` | from params |
//! | [`Format::from_format_params`] | `false` | from params |
//! | [`Format::from_dimensions`] | `false` | unset |
//!
//! ## Flip
//!
//! The flip flag arrives either as a native boolean or as text from a config
//! file or request parameter. [`FlipValue`] models both at the boundary and
//! [`FlipValue::resolve`] normalizes it to a plain `bool`:
//!
//! - `true` / `false` → unchanged
//! - `"true"` / `"TRUE"` / `"True"` → `true` (any casing)
//! - `"false"` / `"FALSE"` / `"False"` → `false`
//! - anything else → [`FormatError::InvalidFlipValue`]
//!
//! ## Directories
//!
//! ```text
//! uploads/orig/        # original format
//! uploads/800x600/     # resized format
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Dimension directory used by the original format.
pub const ORIGINAL_DIRECTORY: &str = "orig";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown flip parameter {0:?}. Should be either \"true\" or \"false\"")]
    InvalidFlipValue(String),
    #[error("Missing format parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Format has no upload directory")]
    MissingDirectory,
}

/// Flip flag as supplied by a caller: native boolean or serialized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlipValue {
    Bool(bool),
    Text(String),
}

impl FlipValue {
    pub fn resolve(&self) -> Result<bool, FormatError> {
        match self {
            FlipValue::Bool(b) => Ok(*b),
            FlipValue::Text(text) => match text.to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(FormatError::InvalidFlipValue(text.clone())),
            },
        }
    }
}

impl Default for FlipValue {
    fn default() -> Self {
        FlipValue::Bool(true)
    }
}

impl From<bool> for FlipValue {
    fn from(value: bool) -> Self {
        FlipValue::Bool(value)
    }
}

impl From<&str> for FlipValue {
    fn from(value: &str) -> Self {
        FlipValue::Text(value.to_string())
    }
}

impl From<String> for FlipValue {
    fn from(value: String) -> Self {
        FlipValue::Text(value)
    }
}

/// Named parameters for the mapping-based constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatParams {
    pub directory: String,
    pub width: u32,
    pub height: u32,
    pub flip: FlipValue,
}

/// Format parameters as they appear in a config table or request mapping.
///
/// Every key is optional at this layer so entries can inherit from a
/// defaults table; [`FormatParams::try_from`] enforces the required ones.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawFormatParams {
    pub directory: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub flip: Option<FlipValue>,
}

impl RawFormatParams {
    /// Fill every key missing here from `defaults`.
    pub fn with_defaults(self, defaults: &RawFormatParams) -> Self {
        Self {
            directory: self.directory.or_else(|| defaults.directory.clone()),
            width: self.width.or(defaults.width),
            height: self.height.or(defaults.height),
            flip: self.flip.or_else(|| defaults.flip.clone()),
        }
    }
}

impl TryFrom<RawFormatParams> for FormatParams {
    type Error = FormatError;

    /// `directory`, `width` and `height` are required. A missing `flip`
    /// falls back to `true`.
    fn try_from(raw: RawFormatParams) -> Result<Self, Self::Error> {
        Ok(Self {
            directory: raw
                .directory
                .ok_or(FormatError::MissingParameter("directory"))?,
            width: raw.width.ok_or(FormatError::MissingParameter("width"))?,
            height: raw.height.ok_or(FormatError::MissingParameter("height"))?,
            flip: raw.flip.unwrap_or_default(),
        })
    }
}

/// Descriptor for one image variant.
///
/// Immutable once built; see the [module docs](self) for the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format {
    original: bool,
    width: u32,
    height: u32,
    flip: bool,
    directory: Option<String>,
}

impl Format {
    /// Build the original (untransformed upload) format.
    pub fn from_original_params(params: FormatParams) -> Result<Self, FormatError> {
        Self::build(
            true,
            Some(params.directory),
            params.width,
            params.height,
            &params.flip,
        )
    }

    /// Build a resized format.
    pub fn from_format_params(params: FormatParams) -> Result<Self, FormatError> {
        Self::build(
            false,
            Some(params.directory),
            params.width,
            params.height,
            &params.flip,
        )
    }

    /// Build a resized format from raw values. The directory is left unset.
    pub fn from_dimensions(
        width: u32,
        height: u32,
        flip: impl Into<FlipValue>,
    ) -> Result<Self, FormatError> {
        Self::build(false, None, width, height, &flip.into())
    }

    fn build(
        original: bool,
        directory: Option<String>,
        width: u32,
        height: u32,
        flip: &FlipValue,
    ) -> Result<Self, FormatError> {
        let flip = flip.resolve()?;
        tracing::debug!(original, width, height, flip, ?directory, "built format");
        Ok(Self {
            original,
            width,
            height,
            flip,
            directory,
        })
    }

    pub fn is_original(&self) -> bool {
        self.original
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    /// `orig` for the original format, otherwise `<width>x<height>`.
    pub fn dimension_directory(&self) -> String {
        if self.original {
            ORIGINAL_DIRECTORY.to_string()
        } else {
            format!("{}x{}", self.width, self.height)
        }
    }

    /// `<directory>/<dimension directory>/`.
    ///
    /// Pure string composition: nothing is created or checked on disk.
    pub fn upload_directory(&self) -> Result<String, FormatError> {
        let directory = self
            .directory
            .as_deref()
            .ok_or(FormatError::MissingDirectory)?;
        Ok(format!("{}/{}/", directory, self.dimension_directory()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dimension_directory())
    }
}
