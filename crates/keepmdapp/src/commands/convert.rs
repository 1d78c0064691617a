//! Batch conversion of a Takeout export folder.
//!
//! Every `*.json` file directly inside the source folder is treated as one note.
//! Problems with a single note (unreadable file, bad JSON, missing attachments) are
//! reported and skipped; only a missing source folder or an unusable output folder
//! stops the run.

use crate::commands::CmdMessage;
use crate::config::{normalize_tag_prefix, ConvertOptions, KeepmdConfig};
use crate::convert::convert_note;
use crate::error::{KeepmdError, Result};
use crate::model::{parse_note, NoteRecord};
use crate::output::OutputFolder;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const NOTE_FILE_EXT: &str = "json";

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub source: PathBuf,
    pub output: OutputFolder,
    pub convert_trashed: bool,
    pub convert_archived: bool,
    pub overwrite: bool,
    pub convert_color_as_tag: bool,
    pub tag_prefix: String,
}

impl BatchOptions {
    pub fn new(source: impl Into<PathBuf>, output: OutputFolder) -> Self {
        Self::from_config(source, output, &KeepmdConfig::default())
    }

    /// Seeds the toggles from loaded configuration; callers override from flags.
    pub fn from_config(
        source: impl Into<PathBuf>,
        output: OutputFolder,
        config: &KeepmdConfig,
    ) -> Self {
        Self {
            source: source.into(),
            output,
            convert_trashed: config.convert_trashed,
            convert_archived: config.convert_archived,
            overwrite: config.overwrite,
            convert_color_as_tag: config.color_tags,
            tag_prefix: normalize_tag_prefix(&config.tag_prefix),
        }
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new(&self.source, self.output.images_dir())
            .with_color_tags(self.convert_color_as_tag)
            .with_tag_prefix(&self.tag_prefix)
    }

    fn skip_reason(&self, note: &NoteRecord) -> Option<Skip> {
        if note.is_trashed && !self.convert_trashed {
            Some(Skip::Trashed)
        } else if note.is_archived && !self.convert_archived {
            Some(Skip::Archived)
        } else {
            None
        }
    }
}

enum Skip {
    Trashed,
    Archived,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub found: usize,
    pub converted: usize,
    pub skipped_existing: usize,
    pub skipped_trashed: usize,
    pub skipped_archived: usize,
    pub failed: usize,
    /// Attachment files written into the image folder.
    pub copied: Vec<PathBuf>,
    /// Converted note files, in processing order.
    pub written: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl BatchReport {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

pub fn run(opts: &BatchOptions) -> Result<BatchReport> {
    if !opts.source.exists() {
        return Err(KeepmdError::SourceNotFound(opts.source.clone()));
    }
    opts.output.ensure()?;

    let note_files = find_note_files(&opts.source)?;
    let convert_opts = opts.convert_options();

    let mut report = BatchReport {
        found: note_files.len(),
        ..Default::default()
    };
    report.add_message(CmdMessage::info(format!(
        "Found {} .json files in source directory {}",
        note_files.len(),
        opts.source.display()
    )));

    for path in note_files {
        let name = file_name(&path);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        let target = opts.output.note_path(&stem);

        if !opts.overwrite && target.exists() {
            tracing::debug!("{} already converted, skipping", name);
            report.skipped_existing += 1;
            continue;
        }

        let note = match load_note(&path) {
            Ok(note) => note,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                report.failed += 1;
                report.add_message(CmdMessage::error(format!(
                    "Could not deserialise file {} as json. Skipping...",
                    name
                )));
                continue;
            }
        };

        match opts.skip_reason(&note) {
            Some(Skip::Trashed) => {
                report.skipped_trashed += 1;
                continue;
            }
            Some(Skip::Archived) => {
                report.skipped_archived += 1;
                continue;
            }
            None => {}
        }

        tracing::debug!("Converting {}", name);
        let converted = convert_note(&note, &convert_opts);
        for warning in &converted.warnings {
            report.add_message(CmdMessage::warning(warning.to_string()));
        }

        if let Err(e) = opts.output.write_note(&target, &converted.markdown) {
            tracing::warn!("Could not write {}: {}", target.display(), e);
            report.failed += 1;
            report.add_message(CmdMessage::error(format!(
                "Could not write {}: {}. Skipping...",
                target.display(),
                e
            )));
            continue;
        }

        report.converted += 1;
        report.copied.extend(converted.copied);
        report.written.push(target);
    }

    tracing::info!(
        converted = report.converted,
        found = report.found,
        "Batch finished"
    );
    report.add_message(CmdMessage::success(format!(
        "Converted {} notes!",
        report.converted
    )));
    Ok(report)
}

fn load_note(path: &Path) -> Result<NoteRecord> {
    let raw = fs::read_to_string(path).map_err(KeepmdError::Io)?;
    parse_note(&raw)
}

/// Regular `.json` files directly inside `dir`, sorted by name.
fn find_note_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(KeepmdError::Io)? {
        let entry = entry.map_err(KeepmdError::Io)?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == NOTE_FILE_EXT) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
