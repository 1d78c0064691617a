//! # Configuration
//!
//! Two layers of configuration feed a conversion run:
//!
//! - [`KeepmdConfig`]: persisted defaults, loaded by [`confique`] from environment
//!   variables and an optional `keepmd.toml`.
//! - [`ConvertOptions`]: the per-run value handed to the note converter. It is
//!   built once by the caller and passed explicitly; nothing in the converter reads
//!   process-wide state.
//!
//! ## Storage Hierarchy
//!
//! Resolved in priority order:
//! 1. **Command-line flags** (applied by the caller on top of the loaded config).
//! 2. **Environment variables**: `KEEPMD_TAG_PREFIX`, `KEEPMD_COLOR_TAGS`, etc.
//! 3. **Config file**: `keepmd.toml` in the working directory, if present.
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `tag_prefix` | `""` | Parent tag for nested tags (`#keep/errands`) |
//! | `color_tags` | `true` | Turn non-default note colors into tags |
//! | `convert_trashed` | `false` | Convert notes in the trash |
//! | `convert_archived` | `false` | Convert archived notes |
//! | `overwrite` | `false` | Replace notes converted by a previous run |

use crate::error::{KeepmdError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "keepmd.toml";

/// Persisted defaults for a conversion run.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeepmdConfig {
    /// Parent tag for nested tags, e.g. "keep" produces "#keep/errands".
    #[config(default = "", env = "KEEPMD_TAG_PREFIX")]
    pub tag_prefix: String,

    /// Convert note colors into tags.
    #[config(default = true, env = "KEEPMD_COLOR_TAGS")]
    pub color_tags: bool,

    /// Convert notes that are in the trash.
    #[config(default = false, env = "KEEPMD_CONVERT_TRASHED")]
    pub convert_trashed: bool,

    /// Convert archived notes.
    #[config(default = false, env = "KEEPMD_CONVERT_ARCHIVED")]
    pub convert_archived: bool,

    /// Overwrite notes that already have a converted file.
    #[config(default = false, env = "KEEPMD_OVERWRITE")]
    pub overwrite: bool,
}

impl Default for KeepmdConfig {
    fn default() -> Self {
        Self {
            tag_prefix: String::new(),
            color_tags: true,
            convert_trashed: false,
            convert_archived: false,
            overwrite: false,
        }
    }
}

impl KeepmdConfig {
    /// Loads env vars, then `keepmd.toml` inside `dir` (skipped when missing).
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(dir.join(CONFIG_FILE_NAME))
            .load()
            .map_err(|e| KeepmdError::Config(e.to_string()))
    }
}

/// Everything the note converter needs to render one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Folder the attachments' `filePath`s are relative to.
    pub source_root: PathBuf,
    /// Folder attachments are copied into.
    pub image_root: PathBuf,
    pub convert_color_as_tag: bool,
    /// Normalized prefix without surrounding `#` or `/`; empty for none.
    pub tag_prefix: String,
}

impl ConvertOptions {
    pub fn new(source_root: impl Into<PathBuf>, image_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            image_root: image_root.into(),
            convert_color_as_tag: true,
            tag_prefix: String::new(),
        }
    }

    pub fn with_color_tags(mut self, enabled: bool) -> Self {
        self.convert_color_as_tag = enabled;
        self
    }

    pub fn with_tag_prefix(mut self, prefix: &str) -> Self {
        self.tag_prefix = normalize_tag_prefix(prefix);
        self
    }
}

/// Strips the `#` and `/` users tend to type around a prefix ("#keep/" -> "keep").
pub fn normalize_tag_prefix(prefix: &str) -> String {
    prefix
        .trim()
        .trim_start_matches('#')
        .trim_matches('/')
        .to_string()
}
