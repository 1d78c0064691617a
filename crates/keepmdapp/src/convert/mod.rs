//! # Note Conversion
//!
//! Turns one [`NoteRecord`](crate::model::NoteRecord) into Markdown. This is the heart
//! of keepmd; everything else walks directories and reports.
//!
//! Each piece of a note is rendered by its own pure function and the results are
//! concatenated by [`convert_note`]:
//!
//! - [`checklist`]: `listContent` as a Markdown task list
//! - [`tags`]: labels and color as `#tags`
//! - [`attachments`]: copies images and emits `![[images/...]]` embeds
//! - [`note`]: fixes the section order and gathers attachment outcomes
//!
//! Conversion never fails. Absent fields are skipped, and attachments that cannot be
//! copied come back as [`ConvertWarning`]s.

pub mod attachments;
pub mod checklist;
pub mod note;
pub mod tags;

pub use note::{convert_note, ConvertWarning, ConvertedNote};
