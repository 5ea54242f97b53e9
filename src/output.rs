//! CLI output formatting for every command.
//!
//! # Entity Display Contract
//!
//! Every format follows the same two-level pattern:
//!
//! 1. **Header line**: positional index + entry name + dimension directory
//! 2. **Context lines**: indented `Upload:`, `Flip:`, target box, etc.
//!
//! ## List
//!
//! ```text
//! Formats
//! 001 original → orig
//!     Upload: uploads/orig/
//!     Flip: yes
//! 002 thumbnail → 150x100
//!     Upload: uploads/150x100/
//!     Flip: no
//! ```
//!
//! ## Plan
//!
//! ```text
//! portrait.jpg (2000x3000)
//! 001 original → orig
//!     Target: 2000x3000
//!     Upload: uploads/orig/
//! 002 thumbnail → 150x100
//!     Target: 100x150 (flipped)
//!     Upload: uploads/150x100/
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions do no I/O.

use crate::config::FormatSet;
use crate::format::Format;
use crate::imaging::{Dimensions, target_dimensions};
use serde::Serialize;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn entry_header(index: usize, name: &str, format: &Format) -> String {
    format!("{} {} → {}", format_index(index), name, format)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn upload_line(format: &Format) -> String {
    match format.upload_directory() {
        Ok(dir) => format!("    Upload: {}", dir),
        Err(_) => "    Upload: (no directory)".to_string(),
    }
}

fn dims(d: Dimensions) -> String {
    format!("{}x{}", d.width, d.height)
}

// ============================================================================
// list
// ============================================================================

/// Format every configured entry, original first.
pub fn format_list_output(set: &FormatSet) -> Vec<String> {
    if set.is_empty() {
        return vec!["No formats configured".to_string()];
    }
    let mut lines = vec!["Formats".to_string()];
    for (i, (name, format)) in set.entries().into_iter().enumerate() {
        lines.push(entry_header(i + 1, name, format));
        lines.push(upload_line(format));
        lines.push(format!("    Flip: {}", yes_no(format.flip())));
    }
    lines
}

pub fn print_list_output(set: &FormatSet) {
    for line in format_list_output(set) {
        println!("{}", line);
    }
}

/// One entry of the `list --json` output.
#[derive(Debug, Serialize)]
pub struct FormatListing<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub format: &'a Format,
    pub dimension_directory: String,
    pub upload_directory: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub formats: Vec<FormatListing<'a>>,
}

/// Machine-readable listing for `list --json`.
pub fn list_json(set: &FormatSet) -> Listing<'_> {
    let formats = set
        .entries()
        .into_iter()
        .map(|(name, format)| FormatListing {
            name,
            format,
            dimension_directory: format.dimension_directory(),
            upload_directory: format.upload_directory().ok(),
        })
        .collect();
    Listing { formats }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(set: &FormatSet) -> Vec<String> {
    match set.len() {
        0 => vec!["No formats configured".to_string()],
        1 => vec!["1 format is valid".to_string()],
        n => vec![format!("{} formats are valid", n)],
    }
}

pub fn print_check_output(set: &FormatSet) {
    for line in format_check_output(set) {
        println!("{}", line);
    }
}

// ============================================================================
// resolve
// ============================================================================

/// Format a single descriptor built from raw dimensions.
pub fn format_resolve_output(format: &Format) -> Vec<String> {
    vec![
        format.dimension_directory(),
        format!("    Width: {}", format.width()),
        format!("    Height: {}", format.height()),
        format!("    Flip: {}", yes_no(format.flip())),
        upload_line(format),
    ]
}

pub fn print_resolve_output(format: &Format) {
    for line in format_resolve_output(format) {
        println!("{}", line);
    }
}

// ============================================================================
// plan
// ============================================================================

/// Format the target box and upload directory of every entry for one source.
pub fn format_plan_output(image_name: &str, source: Dimensions, set: &FormatSet) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", image_name, dims(source))];
    if set.is_empty() {
        lines.push("No formats configured".to_string());
        return lines;
    }
    for (i, (name, format)) in set.entries().into_iter().enumerate() {
        lines.push(entry_header(i + 1, name, format));
        let target = target_dimensions(format, source);
        let declared = Dimensions::new(format.width(), format.height());
        if !format.is_original() && target != declared {
            lines.push(format!("    Target: {} (flipped)", dims(target)));
        } else {
            lines.push(format!("    Target: {}", dims(target)));
        }
        lines.push(upload_line(format));
    }
    lines
}

pub fn print_plan_output(image_name: &str, source: Dimensions, set: &FormatSet) {
    for line in format_plan_output(image_name, source, set) {
        println!("{}", line);
    }
}
