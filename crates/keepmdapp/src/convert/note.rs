use super::attachments::{copy_attachment, AttachmentOutcome};
use super::checklist::render_checklist;
use super::tags::{render_tag_line, tags_for};
use crate::config::ConvertOptions;
use crate::model::NoteRecord;
use std::path::PathBuf;

/// An attachment that was referenced but could not be embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertWarning {
    MissingAttachment(PathBuf),
    AttachmentCopyFailed { source: PathBuf, reason: String },
}

impl std::fmt::Display for ConvertWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertWarning::MissingAttachment(path) => write!(
                f,
                "Could not find referenced attachment: {}. Skipping...",
                path.display()
            ),
            ConvertWarning::AttachmentCopyFailed { source, reason } => write!(
                f,
                "Could not copy attachment {}: {}. Skipping...",
                source.display(),
                reason
            ),
        }
    }
}

/// Markdown for one note plus what happened to its attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedNote {
    pub markdown: String,
    /// Destination paths of attachments copied into the image folder.
    pub copied: Vec<PathBuf>,
    pub warnings: Vec<ConvertWarning>,
}

/// Converts a single note.
///
/// Sections are emitted in a fixed order, each only when the note has data for it:
///
/// 1. text body, followed by a blank line
/// 2. checklist
/// 3. image embeds, one per copied attachment
/// 4. tag line (color tag, then labels), with no trailing newline
///
/// The only side effects are the attachment copies.
pub fn convert_note(note: &NoteRecord, opts: &ConvertOptions) -> ConvertedNote {
    let mut converted = ConvertedNote::default();

    if let Some(text) = note.text() {
        converted.markdown.push_str(text);
        converted.markdown.push_str("\n\n");
    }

    if let Some(items) = &note.list_content {
        converted.markdown.push_str(&render_checklist(items));
    }

    let tags = tags_for(note.labels(), note.color_tag_name(), opts);

    for attachment in note.attachments.iter().flatten() {
        let copy = copy_attachment(attachment, &opts.source_root, &opts.image_root);
        if let Some(fragment) = &copy.fragment {
            converted.markdown.push_str(fragment);
        }
        match copy.outcome {
            AttachmentOutcome::Copied(target) => converted.copied.push(target),
            AttachmentOutcome::Missing(source) => converted
                .warnings
                .push(ConvertWarning::MissingAttachment(source)),
            AttachmentOutcome::Failed { source, reason } => converted
                .warnings
                .push(ConvertWarning::AttachmentCopyFailed { source, reason }),
        }
    }

    converted.markdown.push_str(&render_tag_line(&tags));
    converted
}
