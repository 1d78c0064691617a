//! Copies note attachments into the output image folder.
//!
//! A missing or unreadable attachment never fails the note: the image embed is
//! dropped and the problem is reported back as an [`AttachmentOutcome`].

use crate::model::AttachmentRef;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Folder name (relative to the converted notes) that embeds point into.
pub const IMAGE_LINK_DIR: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentOutcome {
    /// File copied to the contained destination.
    Copied(PathBuf),
    /// Source file does not exist.
    Missing(PathBuf),
    /// Source exists but the copy failed, or `filePath` points outside the export.
    Failed { source: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentCopy {
    /// `![[images/<filePath>]]\n`, only present when the copy succeeded.
    pub fragment: Option<String>,
    pub outcome: AttachmentOutcome,
}

impl AttachmentCopy {
    pub fn copied(&self) -> bool {
        matches!(self.outcome, AttachmentOutcome::Copied(_))
    }
}

/// Wiki-style embed for an attachment copied under [`IMAGE_LINK_DIR`].
pub fn embed_link(file_path: &str) -> String {
    format!("![[{}/{}]]\n", IMAGE_LINK_DIR, file_path)
}

/// True for plain relative paths like `a.png` or `sub/a.png`. Absolute paths, roots,
/// prefixes, `.` and `..` are rejected so a copy can never leave the image folder.
fn is_contained(file_path: &str) -> bool {
    Path::new(file_path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// Copies `source_root/<filePath>` to `image_root/<filePath>`, overwriting any
/// previous copy.
pub fn copy_attachment(
    attachment: &AttachmentRef,
    source_root: &Path,
    image_root: &Path,
) -> AttachmentCopy {
    let source = source_root.join(&attachment.file_path);

    if !attachment.file_path.is_empty() && !is_contained(&attachment.file_path) {
        tracing::warn!(
            "Attachment path {} is not relative to the export folder. Skipping...",
            attachment.file_path
        );
        return AttachmentCopy {
            fragment: None,
            outcome: AttachmentOutcome::Failed {
                source,
                reason: "path is not relative to the export folder".to_string(),
            },
        };
    }

    if attachment.file_path.is_empty() || !source.is_file() {
        tracing::warn!(
            "Could not find referenced attachment: {}. Skipping...",
            source.display()
        );
        return AttachmentCopy {
            fragment: None,
            outcome: AttachmentOutcome::Missing(source),
        };
    }

    let target = image_root.join(&attachment.file_path);
    match fs::copy(&source, &target) {
        Ok(_) => {
            tracing::debug!("Copied {} -> {}", source.display(), target.display());
            AttachmentCopy {
                fragment: Some(embed_link(&attachment.file_path)),
                outcome: AttachmentOutcome::Copied(target),
            }
        }
        Err(e) => {
            tracing::warn!("Failed to copy attachment {}: {}", source.display(), e);
            AttachmentCopy {
                fragment: None,
                outcome: AttachmentOutcome::Failed {
                    source,
                    reason: e.to_string(),
                },
            }
        }
    }
}
