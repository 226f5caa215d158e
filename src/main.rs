use clap::Parser;
use counter::increases::{find_increases, IncreaseReport};
use input::file::FileSource;
use input::interface::SequenceSource;
use log::{debug, error, info, log_enabled, Level, LevelFilter};
use std::io::Write;
use types::Result;

mod counter;
mod input;
mod logging;
mod types;

const INPUT_PATH: &str = "day_01_1.txt";
const LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Counts how many values in day_01_1.txt are strictly greater than the one before.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {}

fn run(source: &impl SequenceSource) -> Result<IncreaseReport> {
  let sequence = source.read_sequence()?;
  let report = IncreaseReport::from_sequence(&sequence);
  if log_enabled!(Level::Debug) {
    for increase in find_increases(&sequence) {
      debug!("{} -> {}", increase.previous, increase.current);
    }
  }
  info!("{} increases across {} values", report.increases, report.total);
  Ok(report)
}

fn write_report(out: &mut impl Write, report: &IncreaseReport) -> std::io::Result<()> {
  writeln!(out, "{}", report.increases)?;
  writeln!(out, "{}", report.total)?;
  out.flush()
}

/// Returns the process exit status. Nothing reaches `out` unless the whole input parsed.
fn execute(source: &impl SequenceSource, out: &mut impl Write) -> i32 {
  let report = match run(source) {
    Ok(report) => report,
    Err(err) => {
      error!("{}", err);
      return 1;
    }
  };
  if let Err(err) = write_report(out, &report) {
    error!("Couldn't write the report: {}", err);
    return 1;
  }
  0
}

fn main() {
  Args::parse();
  if let Err(err) = logging::init(LOG_LEVEL) {
    eprintln!("Couldn't set up logging: {}", err);
  }

  let status = execute(&FileSource::new(INPUT_PATH), &mut std::io::stdout().lock());
  std::process::exit(status);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Error;

  struct StaticSource(&'static str);

  impl SequenceSource for StaticSource {
    fn read_sequence(&self) -> Result<Vec<i64>> {
      input::interface::parse_sequence(self.0)
    }
  }

  fn report(increases: usize, total: usize) -> IncreaseReport {
    IncreaseReport { increases, total }
  }

  #[test]
  fn test_run() {
    let sonar = StaticSource("199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n");
    assert_eq!(run(&sonar).unwrap(), report(7, 10));
    assert_eq!(run(&sonar).unwrap(), report(7, 10));
    assert_eq!(run(&StaticSource("")).unwrap(), report(0, 0));
    assert_eq!(run(&StaticSource("5\n5\n5\n")).unwrap(), report(0, 3));
  }

  #[test]
  fn test_run_fails_on_bad_input() {
    assert!(matches!(
      run(&StaticSource("1\n2\nnot a number\n")),
      Err(Error::Parse { line: 3, .. })
    ));
    let missing = FileSource::new("no_such_dir/day_01_1.txt");
    assert!(matches!(run(&missing), Err(Error::Read { .. })));
  }

  #[test]
  fn test_execute_prints_two_lines() {
    let mut out = Vec::new();
    let sonar = StaticSource("199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n");
    assert_eq!(execute(&sonar, &mut out), 0);
    assert_eq!(String::from_utf8(out).unwrap(), "7\n10\n");

    let mut out = Vec::new();
    assert_eq!(execute(&StaticSource(""), &mut out), 0);
    assert_eq!(String::from_utf8(out).unwrap(), "0\n0\n");
  }

  #[test]
  fn test_execute_fails_without_output() {
    let mut out = Vec::new();
    assert_eq!(execute(&StaticSource("1\n2\nnot a number\n"), &mut out), 1);
    assert!(out.is_empty());

    let mut out = Vec::new();
    assert_eq!(execute(&FileSource::new("no_such_dir/day_01_1.txt"), &mut out), 1);
    assert!(out.is_empty());
  }
}
