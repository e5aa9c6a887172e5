//! Reading the starting document and writing the final one

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Contents of `path`, or an empty string if there is no such file
pub fn read_seed(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            tracing::info!("Loaded {} chars from {}", text.chars().count(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist yet, starting empty", path.display());
            Ok(String::new())
        }
        Err(e) => Err(e),
    }
}

/// Output file, opened (and truncated) up front and written exactly once
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: Option<File>,
}

impl OutputFile {
    /// Open `path` for writing, truncating whatever is there
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the single write has already happened (or been attempted)
    pub fn is_committed(&self) -> bool {
        self.file.is_none()
    }

    /// Write `text` and close the file. Later calls do nothing.
    pub fn commit(&mut self, text: &str) -> io::Result<()> {
        let Some(mut file) = self.file.take() else {
            return Ok(());
        };
        file.write_all(text.as_bytes())?;
        file.flush()?;
        tracing::info!("Saved {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }
}
