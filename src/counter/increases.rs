/// Two consecutive values where `current` is strictly greater than `previous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Increase {
  pub previous: i64,
  pub current: i64,
}

/// Scans the sequence once, comparing each value with its predecessor, and
/// collects every increasing pair.
pub fn find_increases(sequence: &[i64]) -> Vec<Increase> {
  let mut increases = Vec::new();
  let mut previous: Option<i64> = None;
  for &current in sequence {
    if let Some(previous) = previous {
      if current > previous {
        increases.push(Increase { previous, current });
      }
    }
    previous = Some(current);
  }
  increases
}

/// Same scan as `find_increases`, keeping only a counter.
pub fn count_increases(sequence: &[i64]) -> usize {
  let mut count = 0;
  let mut previous: Option<i64> = None;
  for &current in sequence {
    if matches!(previous, Some(previous) if current > previous) {
      count += 1;
    }
    previous = Some(current);
  }
  count
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IncreaseReport {
  pub increases: usize,
  pub total: usize,
}

impl IncreaseReport {
  pub fn from_sequence(sequence: &[i64]) -> Self {
    Self {
      increases: count_increases(sequence),
      total: sequence.len(),
    }
  }
}
