use super::*;

/// A zero-based line and column, columns counted in bytes.
#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize,
)]
pub struct Position {
  pub line: usize,
  pub column: usize,
}

impl Display for Position {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}:{}", self.line + 1, self.column + 1)
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
  pub start_byte: usize,
  pub end_byte: usize,
  pub start: Position,
  pub end: Position,
}

impl Span {
  pub fn byte_range(&self) -> Range<usize> {
    self.start_byte..self.end_byte
  }

  /// The span running from the start of `self` to the end of `end`.
  pub fn to(self, end: Span) -> Span {
    Span {
      start_byte: self.start_byte,
      end_byte: end.end_byte,
      start: self.start,
      end: end.end,
    }
  }
}
