use super::*;

pub(crate) trait NodeExt<'tree> {
  fn find_child_by_kind(&self, kind: &str) -> Option<tree_sitter::Node<'tree>>;
  fn get_span(&self) -> Span;
  /// Named children, without comments and other extras.
  fn syntax_children(&self) -> Vec<tree_sitter::Node<'tree>>;
}

impl<'tree> NodeExt<'tree> for tree_sitter::Node<'tree> {
  fn find_child_by_kind(&self, kind: &str) -> Option<tree_sitter::Node<'tree>> {
    self
      .syntax_children()
      .into_iter()
      .find(|child| child.kind() == kind)
  }

  fn get_span(&self) -> Span {
    Span {
      start_byte: self.start_byte(),
      end_byte: self.end_byte(),
      start: self.start_position().position(),
      end: self.end_position().position(),
    }
  }

  fn syntax_children(&self) -> Vec<tree_sitter::Node<'tree>> {
    let mut cursor = self.walk();

    self
      .named_children(&mut cursor)
      .filter(|child| !child.is_extra() && child.kind() != "comment")
      .collect()
  }
}
