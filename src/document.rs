use super::*;

/// A C# source file and the syntax tree lowered from it.
#[derive(Debug)]
pub struct Document {
  pub content: Rope,
  pub tree: Tree,
}

impl Document {
  /// Substitutes every edit's rendered replacement into the text.
  ///
  /// When edits overlap, the one that starts first (the outermost, for
  /// nested calls) wins and the others are dropped.
  pub fn apply_edits(&self, edits: &[RewriteEdit]) -> String {
    let printer = Printer::new(self);

    let mut replacements = edits
      .iter()
      .map(|edit| {
        (
          self.tree.span(edit.original),
          printer.print(&edit.replacement),
        )
      })
      .collect::<Vec<_>>();

    replacements
      .sort_by_key(|(span, _)| (span.start_byte, Reverse(span.end_byte)));

    let mut content = self.content.clone();

    let mut applied = Vec::with_capacity(replacements.len());

    for (span, text) in replacements {
      if applied
        .last()
        .is_some_and(|last: &(Span, String)| span.start_byte < last.0.end_byte)
      {
        log::warn!("skipping edit at {} nested in another edit", span.start);
        continue;
      }

      applied.push((span, text));
    }

    for (span, text) in applied.into_iter().rev() {
      let start = content.byte_to_char(span.start_byte);
      let end = content.byte_to_char(span.end_byte);

      content.remove(start..end);
      content.insert(start, &text);
    }

    content.to_string()
  }

  pub fn parse(text: &str) -> Result<Self, Error> {
    let mut parser = tree_sitter::Parser::new();

    parser.set_language(&tree_sitter_c_sharp::LANGUAGE.into())?;

    let syntax = parser.parse(text, None).ok_or(Error::Parse)?;

    let mut lowering = Lowering {
      builder: TreeBuilder::new(),
      source: text,
    };

    let root = lowering.lower(syntax.root_node());

    Ok(Self {
      content: Rope::from_str(text),
      tree: lowering.builder.finish(root),
    })
  }

  pub fn render(&self, expression: &Expression) -> String {
    Printer::new(self).print(expression)
  }

  /// The source text of `node`, exactly as written.
  pub fn text(&self, node: NodeId) -> String {
    let range = self.tree.span(node).byte_range();

    self
      .content
      .slice(
        self.content.byte_to_char(range.start)
          ..self.content.byte_to_char(range.end),
      )
      .to_string()
  }
}

/// Converts a tree-sitter concrete syntax tree into a [`Tree`].
///
/// Only named nodes are kept, comments are dropped and argument wrappers
/// are replaced by the expression they hold.
struct Lowering<'a> {
  builder: TreeBuilder,
  source: &'a str,
}

/// A node whose children are still being lowered.
struct Frame<'tree> {
  children: Vec<NodeId>,
  kind: NodeKind,
  pending: std::vec::IntoIter<tree_sitter::Node<'tree>>,
  span: Span,
}

impl Lowering<'_> {
  /// `target?.name`, lowered like a member access.
  fn conditional_access<'tree>(
    node: tree_sitter::Node<'tree>,
  ) -> (NodeKind, Vec<tree_sitter::Node<'tree>>) {
    let children = node.syntax_children();

    let [target, binding] = children.as_slice() else {
      return Self::other(node);
    };

    match binding.syntax_children().as_slice() {
      [name]
        if binding.kind() == "member_binding_expression"
          && name.kind() == "identifier" =>
      {
        (NodeKind::ConditionalAccess, vec![*target, *name])
      }
      _ => Self::other(node),
    }
  }

  fn frame<'tree>(&self, node: tree_sitter::Node<'tree>) -> Frame<'tree> {
    let (kind, pending) = self.plan(node);

    Frame {
      children: Vec::new(),
      kind,
      pending: pending.into_iter(),
      span: node.get_span(),
    }
  }

  fn invocation<'tree>(
    node: tree_sitter::Node<'tree>,
  ) -> (NodeKind, Vec<tree_sitter::Node<'tree>>) {
    let children = node.syntax_children();

    let (Some(function), Some(arguments), 2) = (
      children.first(),
      node.find_child_by_kind("argument_list"),
      children.len(),
    ) else {
      return Self::other(node);
    };

    let pending = std::iter::once(*function)
      .chain(
        arguments
          .syntax_children()
          .into_iter()
          .map(|argument| match argument.syntax_children().last() {
            Some(expression) if argument.kind() == "argument" => *expression,
            _ => argument,
          }),
      )
      .collect();

    (NodeKind::Call, pending)
  }

  /// Lowers `root` and everything beneath it, children before parents.
  ///
  /// Walks with an explicit stack, so nesting depth is bounded only by
  /// memory.
  fn lower(&mut self, root: tree_sitter::Node<'_>) -> NodeId {
    let mut current = self.frame(root);
    let mut parents = Vec::new();

    loop {
      if let Some(child) = current.pending.next() {
        let child = self.frame(child);
        parents.push(std::mem::replace(&mut current, child));
        continue;
      }

      let Frame {
        children,
        kind,
        span,
        ..
      } = current;

      let id = self.builder.push(kind, span, children);

      match parents.pop() {
        Some(mut parent) => {
          parent.children.push(id);
          current = parent;
        }
        None => return id,
      }
    }
  }

  fn other<'tree>(
    node: tree_sitter::Node<'tree>,
  ) -> (NodeKind, Vec<tree_sitter::Node<'tree>>) {
    (
      NodeKind::Other(node.kind().to_owned()),
      node.syntax_children(),
    )
  }

  /// The kind `node` lowers to and the children to lower beneath it.
  fn plan<'tree>(
    &self,
    node: tree_sitter::Node<'tree>,
  ) -> (NodeKind, Vec<tree_sitter::Node<'tree>>) {
    match node.kind() {
      "conditional_access_expression" => Self::conditional_access(node),
      "identifier" => (NodeKind::Identifier(self.text(node)), Vec::new()),
      "invocation_expression" => Self::invocation(node),
      "lambda_expression" => (NodeKind::Lambda, node.syntax_children()),
      "member_access_expression" | "qualified_name" => {
        match node.syntax_children().as_slice() {
          [target, name] if name.kind() == "identifier" => {
            (NodeKind::MemberAccess, vec![*target, *name])
          }
          _ => Self::other(node),
        }
      }
      "parenthesized_expression" => match node.syntax_children().as_slice() {
        [inner] => (NodeKind::Parenthesized, vec![*inner]),
        _ => Self::other(node),
      },
      kind if kind.ends_with("_literal") => {
        (NodeKind::Literal(self.text(node)), Vec::new())
      }
      _ => Self::other(node),
    }
  }

  fn text(&self, node: tree_sitter::Node<'_>) -> String {
    self
      .source
      .get(node.byte_range())
      .unwrap_or_default()
      .to_owned()
  }
}
