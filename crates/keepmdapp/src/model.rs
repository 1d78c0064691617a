//! # Note Model
//!
//! Types mirroring one Google Keep Takeout note (`<note>.json`). Only the fields the
//! converter reads are modelled; everything else in the export (title, timestamps,
//! annotations, sharees, ...) is ignored by serde.
//!
//! Every field is optional. A note missing any of them still deserializes, and the
//! converter treats the absent field as "no content" rather than failing.

use crate::error::{KeepmdError, Result};
use serde::Deserialize;

/// Color value Keep uses for notes without a background color.
pub const DEFAULT_COLOR: &str = "DEFAULT";

/// One exported note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteRecord {
    pub text_content: Option<String>,
    pub list_content: Option<Vec<TaskItem>>,
    pub color: Option<String>,
    pub attachments: Option<Vec<AttachmentRef>>,
    pub labels: Option<Vec<LabelRef>>,
    pub is_trashed: bool,
    pub is_archived: bool,
}

/// A single checklist entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskItem {
    pub is_checked: bool,
    pub text: String,
}

/// A binary file shipped next to the note in the export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentRef {
    /// Path relative to the export folder, e.g. `1a2b3c.png`.
    pub file_path: String,
    pub mimetype: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelRef {
    pub name: String,
}

impl NoteRecord {
    /// Text body, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.text_content.as_deref().filter(|t| !t.is_empty())
    }

    /// Color name to turn into a tag, or `None` for absent/`DEFAULT` colors.
    pub fn color_tag_name(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| *c != DEFAULT_COLOR)
    }

    pub fn labels(&self) -> &[LabelRef] {
        self.labels.as_deref().unwrap_or_default()
    }
}

impl TaskItem {
    pub fn new(text: impl Into<String>, is_checked: bool) -> Self {
        Self {
            is_checked,
            text: text.into(),
        }
    }
}

impl AttachmentRef {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            mimetype: None,
        }
    }
}

impl LabelRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Parses the raw contents of a note file.
pub fn parse_note(raw: &str) -> Result<NoteRecord> {
    serde_json::from_str(raw).map_err(KeepmdError::Serialization)
}
