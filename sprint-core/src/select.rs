//! # Numbered Selection
//!
//! Presents a name-sorted, 1-based numbered list of boards or sprints and
//! reads the user's choice. There is no retry loop: a bad entry ends the
//! operation with a message naming the valid range.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors raised while choosing an item
#[derive(Debug, Error)]
pub enum SelectionError {
  #[error("There is no {0} to choose from")]
  Empty(String),
  #[error("Please enter an integer between 1-{max}")]
  NotAnInteger { max: usize },
  #[error("Please enter an integer between 1-{max}")]
  OutOfRange { max: usize },
  #[error("Failed to read selection")]
  Io(#[from] io::Error),
}

/// Collapse `(name, id)` pairs into a name-sorted list.
///
/// Names are assumed unique; if one repeats, the later id wins. Sorting is
/// by plain string order, so it is case-sensitive.
pub fn sorted_choices<I>(items: I) -> Vec<(String, u64)>
where
  I: IntoIterator<Item = (String, u64)>,
{
  items.into_iter().collect::<BTreeMap<_, _>>().into_iter().collect()
}

/// Print the numbered choices to `output`, read one line from `input`, and
/// return the chosen id.
pub fn choose<I, R, W>(items: I, label: &str, input: &mut R, output: &mut W) -> Result<u64, SelectionError>
where
  I: IntoIterator<Item = (String, u64)>,
  R: BufRead,
  W: Write,
{
  let choices = sorted_choices(items);
  if choices.is_empty() {
    return Err(SelectionError::Empty(label.to_string()));
  }

  writeln!(output, "Please choose a {label}:")?;
  for (index, (name, _)) in choices.iter().enumerate() {
    writeln!(output, "{}\t{name}", index + 1)?;
  }
  write!(output, "Enter {label} number: ")?;
  output.flush()?;

  let mut line = String::new();
  input.read_line(&mut line)?;

  let max = choices.len();
  let number: i64 = line
    .trim()
    .parse()
    .map_err(|_not_a_number| SelectionError::NotAnInteger { max })?;

  usize::try_from(number)
    .ok()
    .filter(|n| (1..=max).contains(n))
    .map(|n| choices[n - 1].1)
    .ok_or(SelectionError::OutOfRange { max })
}

/// [`choose`] wired to the process's stdin and stdout.
pub fn choose_from_terminal<I>(items: I, label: &str) -> Result<u64, SelectionError>
where
  I: IntoIterator<Item = (String, u64)>,
{
  let stdin = io::stdin();
  let stdout = io::stdout();
  choose(items, label, &mut stdin.lock(), &mut stdout.lock())
}
