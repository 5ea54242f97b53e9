//! Format configuration module.
//!
//! Handles loading, merging, and validating a `formats.toml` file that
//! declares every image variant an upload is turned into.
//!
//! ## Config File Layout
//!
//! ```toml
//! [defaults]              # merged under every entry below
//! directory = "uploads"
//! flip = true
//!
//! [original]              # optional, the untransformed upload
//! width = 0
//! height = 0
//!
//! [formats.thumbnail]     # any number of named resized formats
//! width = 150
//! height = 100
//! flip = "false"
//! ```
//!
//! ## Cascading
//!
//! Stock defaults are overridden by the user's `[defaults]` table, which in
//! turn is overridden key-by-key by each entry. An entry only needs the keys
//! that differ:
//!
//! ```text
//! stock [defaults] → file [defaults] → [formats.<name>]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::format::{Format, FormatError, FormatParams, RawFormatParams};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Entry name used for the original format in listings and errors.
pub const ORIGINAL_ENTRY: &str = "original";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid {section}: {source}")]
    Entry {
        section: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("{section}: {source}")]
    Format {
        section: String,
        #[source]
        source: FormatError,
    },
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Raw layout of a formats file.
///
/// Entry tables are kept as TOML values so each one is deserialized on its
/// own and errors name the section they came from.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FormatsFile {
    defaults: Option<toml::Value>,
    original: Option<toml::Value>,
    formats: BTreeMap<String, toml::Value>,
}

/// Config section a named format is declared in.
pub fn format_section(name: &str) -> String {
    format!("formats.{name}")
}

/// Every format declared in one config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatSet {
    original: Option<Format>,
    formats: BTreeMap<String, Format>,
}

impl FormatSet {
    pub fn original(&self) -> Option<&Format> {
        self.original.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&Format> {
        self.formats.get(name)
    }

    /// Named resized formats, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Format)> {
        self.formats.iter().map(|(name, f)| (name.as_str(), f))
    }

    /// The original format (if any) followed by the named formats.
    pub fn entries(&self) -> Vec<(&str, &Format)> {
        self.original
            .iter()
            .map(|f| (ORIGINAL_ENTRY, f))
            .chain(self.iter())
            .collect()
    }

    /// Number of entries, counting the original.
    pub fn len(&self) -> usize {
        self.formats.len() + usize::from(self.original.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that resized formats have a usable box and that no two entries
    /// would write into the same upload directory.
    ///
    /// Directories are compared with trailing slashes stripped, so
    /// `uploads` and `uploads/` collide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, format) in self.iter() {
            if format.width() == 0 || format.height() == 0 {
                return Err(ConfigError::Validation(format!(
                    "{}: width and height must be non-zero",
                    format_section(name)
                )));
            }
        }
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (name, format) in self.entries() {
            let Some(base) = format.directory() else {
                continue;
            };
            let dir = format!(
                "{}/{}/",
                base.trim_end_matches('/'),
                format.dimension_directory()
            );
            if let Some(other) = seen.insert(dir.clone(), name) {
                return Err(ConfigError::Validation(format!(
                    "'{other}' and '{name}' both upload to {dir}"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock defaults as a `toml::Value::Table`.
///
/// Used as the base layer for merging the user's config on top.
pub fn stock_defaults_value() -> toml::Value {
    let mut defaults = toml::Table::new();
    defaults.insert("directory".into(), toml::Value::String("uploads".into()));
    defaults.insert("flip".into(), toml::Value::Boolean(true));
    let mut root = toml::Table::new();
    root.insert("defaults".into(), toml::Value::Table(defaults));
    toml::Value::Table(root)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using stock defaults");
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then build and validate the
/// format set.
pub fn resolve_formats(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<FormatSet, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let file: FormatsFile = merged.try_into()?;

    let defaults = match file.defaults {
        Some(value) => parse_entry("defaults", value)?,
        None => RawFormatParams::default(),
    };

    let original = match file.original {
        Some(value) => Some(build_entry(
            ORIGINAL_ENTRY,
            value,
            &defaults,
            Format::from_original_params,
        )?),
        None => None,
    };

    let mut formats = BTreeMap::new();
    for (name, value) in file.formats {
        let format = build_entry(
            &format_section(&name),
            value,
            &defaults,
            Format::from_format_params,
        )?;
        formats.insert(name, format);
    }

    let set = FormatSet { original, formats };
    set.validate()?;
    tracing::debug!(entries = set.len(), "resolved format set");
    Ok(set)
}

/// Load formats from the given config file.
///
/// Merges the file on top of stock defaults, rejects unknown keys, and
/// validates the result. A missing file yields an empty set.
pub fn load_formats(path: &Path) -> Result<FormatSet, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_formats(base, overlay)
}

fn parse_entry(section: &str, value: toml::Value) -> Result<RawFormatParams, ConfigError> {
    value.try_into().map_err(|source| ConfigError::Entry {
        section: section.to_string(),
        source,
    })
}

fn build_entry(
    section: &str,
    value: toml::Value,
    defaults: &RawFormatParams,
    construct: fn(FormatParams) -> Result<Format, FormatError>,
) -> Result<Format, ConfigError> {
    let raw = parse_entry(section, value)?.with_defaults(defaults);
    FormatParams::try_from(raw)
        .and_then(construct)
        .map_err(|source| ConfigError::Format {
            section: section.to_string(),
            source,
        })
}

/// Returns a fully-commented stock `formats.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Visual Factory Formats
# ======================
# Declares every variant an uploaded image is stored as.
#
# Each entry is merged on top of [defaults], so it only needs the keys
# that differ. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Defaults
# ---------------------------------------------------------------------------
[defaults]
# Base upload directory. Variants land in <directory>/<WxH>/ and the
# original in <directory>/orig/.
directory = "uploads"

# Swap width and height when the source orientation (portrait/landscape)
# is the opposite of the declared box. Accepts true/false or "true"/"false".
flip = true

# ---------------------------------------------------------------------------
# Original upload, stored untransformed. Remove to skip keeping originals.
# ---------------------------------------------------------------------------
[original]
width = 0
height = 0

# ---------------------------------------------------------------------------
# Resized formats
# ---------------------------------------------------------------------------
[formats.thumbnail]
width = 150
height = 100

[formats.large]
width = 1024
height = 768
"##
}
