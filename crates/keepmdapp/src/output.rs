//! The folder converted notes land in.
//!
//! ```text
//! <target>/<folder>/
//!     <note>.md
//!     images/
//!         <attachment>
//! ```

use crate::convert::attachments::IMAGE_LINK_DIR;
use crate::error::{KeepmdError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const NOTE_EXT: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFolder {
    root: PathBuf,
}

impl OutputFolder {
    pub fn new(target_path: impl AsRef<Path>, folder_name: &str) -> Self {
        Self {
            root: target_path.as_ref().join(folder_name),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGE_LINK_DIR)
    }

    /// `<root>/<stem>.md`
    pub fn note_path(&self, stem: &str) -> PathBuf {
        self.root.join(format!("{}.{}", stem, NOTE_EXT))
    }

    /// Creates the folder and its `images/` subfolder if needed.
    pub fn ensure(&self) -> Result<()> {
        let images = self.images_dir();
        if !images.exists() {
            fs::create_dir_all(&images).map_err(KeepmdError::Io)?;
        }
        Ok(())
    }

    /// Writes a note through a temp file + rename so a crash never leaves half a note.
    pub fn write_note(&self, path: &Path, markdown: &str) -> Result<()> {
        let tmp_file = self.root.join(format!(".note-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, markdown).map_err(KeepmdError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(KeepmdError::Io(e));
        }
        Ok(())
    }
}
