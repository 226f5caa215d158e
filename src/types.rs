use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("couldn't read {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    source: std::io::Error,
  },
  /// `line` is 1-based.
  #[error("line {line}: {text:?} is not an integer: {source}")]
  Parse {
    line: usize,
    text: String,
    source: std::num::ParseIntError,
  },
}
