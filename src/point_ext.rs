use super::*;

pub(crate) trait PointExt {
  fn position(&self) -> Position;
}

impl PointExt for tree_sitter::Point {
  fn position(&self) -> Position {
    Position {
      line: self.row,
      column: self.column,
    }
  }
}
