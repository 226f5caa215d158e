use super::interface::{parse_sequence, SequenceSource};
use crate::types::{Error, Result};
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads the whole sequence from a UTF-8 text file in one pass.
pub struct FileSource {
  path: PathBuf,
}

impl FileSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn read_text(&self) -> Result<String> {
    let read_error = |source| Error::Read {
      path: self.path.clone(),
      source,
    };
    let mut file = File::open(&self.path).map_err(read_error)?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(read_error)?;
    Ok(text)
  }
}

impl SequenceSource for FileSource {
  fn read_sequence(&self) -> Result<Vec<i64>> {
    info!("Reading {}", self.path().display());
    let text = self.read_text()?;
    let sequence = parse_sequence(&text)?;
    info!("Parsed {} values", sequence.len());
    Ok(sequence)
  }
}
