use crate::types::{Error, Result};

pub trait SequenceSource {
  fn read_sequence(&self) -> Result<Vec<i64>>;
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses one integer per line. A leading byte-order mark is skipped and each
/// line is trimmed before parsing; blank lines are rejected. `\n`, `\r\n` and
/// a lone `\r` all end a line.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
  let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
  let text = text.replace("\r\n", "\n").replace('\r', "\n");
  text
    .lines()
    .enumerate()
    .map(|(index, line)| {
      let trimmed = line.trim();
      trimmed.parse::<i64>().map_err(|source| Error::Parse {
        line: index + 1,
        text: trimmed.to_owned(),
        source,
      })
    })
    .collect()
}
