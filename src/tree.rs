use super::*;

/// Stable index of a node inside the [`Tree`] that allocated it.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
  /// `[callee, argument...]`
  Call,
  /// `[target, name]` for `target?.name`.
  ConditionalAccess,
  Identifier(String),
  /// `[parameter..., body]`
  Lambda,
  Literal(String),
  /// `[target, name]`, the name always being an identifier.
  MemberAccess,
  Other(String),
  /// `[inner]`
  Parenthesized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
  pub kind: NodeKind,
  pub span: Span,
  children: Vec<NodeId>,
}

impl Node {
  pub fn children(&self) -> &[NodeId] {
    &self.children
  }

  pub fn identifier(&self) -> Option<&str> {
    match &self.kind {
      NodeKind::Identifier(name) => Some(name),
      _ => None,
    }
  }
}

/// An immutable arena of syntax nodes.
///
/// Children are always allocated before their parents, so a node's id is
/// greater than the ids of everything beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
  nodes: Vec<Node>,
  root: Option<NodeId>,
}

impl Tree {
  pub fn calls(&self) -> Vec<NodeId> {
    self
      .root
      .map(|root| {
        self
          .descendants(root)
          .filter(|&id| self.node(id).kind == NodeKind::Call)
          .collect()
      })
      .unwrap_or_default()
  }

  pub fn children(&self, id: NodeId) -> &[NodeId] {
    self.node(id).children()
  }

  /// Pre-order walk of `id` and everything beneath it.
  pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    let mut stack = vec![id];

    std::iter::from_fn(move || {
      let id = stack.pop()?;
      stack.extend(self.children(id).iter().rev());
      Some(id)
    })
  }

  pub fn identifier(&self, id: NodeId) -> Option<&str> {
    self.node(id).identifier()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Splits a member access into its target and the accessed name.
  pub fn member_access(&self, id: NodeId) -> Option<(NodeId, &str)> {
    let node = self.node(id);

    match (&node.kind, node.children()) {
      (NodeKind::MemberAccess, [target, name]) => {
        Some((*target, self.identifier(*name)?))
      }
      _ => None,
    }
  }

  /// Panics if `id` was allocated by a different tree.
  pub fn node(&self, id: NodeId) -> &Node {
    &self.nodes[id.0]
  }

  pub fn root(&self) -> Option<NodeId> {
    self.root
  }

  /// Whether `id` in this tree and `other_id` in `other` have the same
  /// kinds and children all the way down, ignoring spans.
  pub fn same_shape(&self, id: NodeId, other: &Tree, other_id: NodeId) -> bool {
    let mut stack = vec![(id, other_id)];

    while let Some((left, right)) = stack.pop() {
      let (left, right) = (self.node(left), other.node(right));

      if left.kind != right.kind || left.children.len() != right.children.len()
      {
        return false;
      }

      stack.extend(
        left.children.iter().copied().zip(right.children.iter().copied()),
      );
    }

    true
  }

  pub fn span(&self, id: NodeId) -> Span {
    self.node(id).span
  }

  pub fn strip_parentheses(&self, mut id: NodeId) -> NodeId {
    while let (NodeKind::Parenthesized, [inner]) =
      (&self.node(id).kind, self.children(id))
    {
      id = *inner;
    }

    id
  }
}

/// Allocates nodes bottom-up and seals them into a [`Tree`].
///
/// The shorthand constructors give every node an empty span, which is all
/// a tree built by hand needs.
#[derive(Debug, Default)]
pub struct TreeBuilder {
  nodes: Vec<Node>,
}

impl TreeBuilder {
  pub fn call(
    &mut self,
    callee: NodeId,
    arguments: impl IntoIterator<Item = NodeId>,
  ) -> NodeId {
    let children = std::iter::once(callee).chain(arguments).collect();
    self.push(NodeKind::Call, Span::default(), children)
  }

  pub fn finish(self, root: NodeId) -> Tree {
    Tree {
      nodes: self.nodes,
      root: Some(root),
    }
  }

  pub fn identifier(&mut self, name: &str) -> NodeId {
    self.push(
      NodeKind::Identifier(name.to_owned()),
      Span::default(),
      Vec::new(),
    )
  }

  pub fn lambda(
    &mut self,
    parameters: impl IntoIterator<Item = NodeId>,
    body: NodeId,
  ) -> NodeId {
    let children = parameters.into_iter().chain([body]).collect();
    self.push(NodeKind::Lambda, Span::default(), children)
  }

  pub fn literal(&mut self, text: &str) -> NodeId {
    self.push(NodeKind::Literal(text.to_owned()), Span::default(), Vec::new())
  }

  pub fn member(&mut self, target: NodeId, name: &str) -> NodeId {
    let name = self.identifier(name);
    self.push(NodeKind::MemberAccess, Span::default(), vec![target, name])
  }

  pub fn new() -> Self {
    Self::default()
  }

  pub fn other(
    &mut self,
    kind: &str,
    children: impl IntoIterator<Item = NodeId>,
  ) -> NodeId {
    self.push(
      NodeKind::Other(kind.to_owned()),
      Span::default(),
      children.into_iter().collect(),
    )
  }

  pub fn parenthesized(&mut self, inner: NodeId) -> NodeId {
    self.push(NodeKind::Parenthesized, Span::default(), vec![inner])
  }

  /// Callers must only pass ids this builder returned.
  pub fn push(
    &mut self,
    kind: NodeKind,
    span: Span,
    children: Vec<NodeId>,
  ) -> NodeId {
    let id = NodeId(self.nodes.len());

    self.nodes.push(Node {
      kind,
      span,
      children,
    });

    id
  }
}
