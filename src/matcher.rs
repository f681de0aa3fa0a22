use super::*;

pub const ASSERTION_METHOD: &str = "MustHaveHappened";

/// Root identifier of the retired call-count vocabulary.
pub const REPEATED: &str = "Repeated";

const NAMESPACE: &str = "FakeItEasy";

/// A call site using `MustHaveHappened(Repeated...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDescriptor {
  /// The whole `receiver.MustHaveHappened(...)` call.
  pub call: NodeId,
  /// The `MustHaveHappened` identifier.
  pub method: NodeId,
  pub multiplicity: Multiplicity,
}

#[derive(Debug, Clone, Copy)]
enum Bound {
  AtLeast,
  Exactly,
  NoMoreThan,
}

impl Bound {
  fn once(self) -> Multiplicity {
    match self {
      Self::AtLeast => Multiplicity::AtLeastOnce,
      Self::Exactly => Multiplicity::ExactlyOnce,
      Self::NoMoreThan => Multiplicity::AtMostOnce,
    }
  }

  fn times(self, count: NodeId) -> Multiplicity {
    match self {
      Self::AtLeast => Multiplicity::AtLeast(count),
      Self::Exactly => Multiplicity::Exactly(count),
      Self::NoMoreThan => Multiplicity::AtMost(count),
    }
  }

  fn twice(self) -> Multiplicity {
    match self {
      Self::AtLeast => Multiplicity::AtLeastTwice,
      Self::Exactly => Multiplicity::ExactlyTwice,
      Self::NoMoreThan => Multiplicity::AtMostTwice,
    }
  }
}

/// Recognizes `MustHaveHappened` called with exactly one argument built
/// from the `Repeated` vocabulary. Anything else, including every
/// non-deprecated assertion form, yields `None`.
pub fn match_call(tree: &Tree, node: NodeId) -> Option<MatchDescriptor> {
  if tree.node(node).kind != NodeKind::Call {
    return None;
  }

  let (callee, arguments) = tree.children(node).split_first()?;

  let method = method_name(tree, *callee)?;

  if tree.identifier(method)? != ASSERTION_METHOD {
    return None;
  }

  let [argument] = arguments else {
    return None;
  };

  Some(MatchDescriptor {
    call: node,
    method,
    multiplicity: classify(tree, *argument)?,
  })
}

fn bound(tree: &Tree, node: NodeId) -> Option<Bound> {
  let (target, name) = tree.member_access(tree.strip_parentheses(node))?;

  if !is_root(tree, target) {
    return None;
  }

  match name {
    "AtLeast" => Some(Bound::AtLeast),
    "Exactly" => Some(Bound::Exactly),
    "NoMoreThan" => Some(Bound::NoMoreThan),
    _ => None,
  }
}

fn classify(tree: &Tree, node: NodeId) -> Option<Multiplicity> {
  let node = tree.strip_parentheses(node);

  match tree.node(node).kind {
    NodeKind::MemberAccess => {
      let (target, name) = tree.member_access(node)?;

      match name {
        "Never" if is_root(tree, target) => Some(Multiplicity::Never),
        "Once" => Some(bound(tree, target)?.once()),
        "Twice" => Some(bound(tree, target)?.twice()),
        _ => None,
      }
    }
    NodeKind::Call => {
      let (callee, arguments) = tree.children(node).split_first()?;

      let [argument] = arguments else {
        return None;
      };

      let (target, name) = tree.member_access(tree.strip_parentheses(*callee))?;

      match name {
        "Like" if is_root(tree, target) => {
          Some(Multiplicity::Predicate(*argument))
        }
        "Times" => Some(bound(tree, target)?.times(*argument)),
        _ => None,
      }
    }
    _ => None,
  }
}

/// `Repeated`, `FakeItEasy.Repeated` or `global::FakeItEasy.Repeated`.
fn is_root(tree: &Tree, node: NodeId) -> bool {
  let node = tree.strip_parentheses(node);

  match tree.member_access(node) {
    Some((qualifier, REPEATED)) => is_namespace(tree, qualifier),
    Some(_) => false,
    None => tree.identifier(node) == Some(REPEATED),
  }
}

fn is_namespace(tree: &Tree, node: NodeId) -> bool {
  match (&tree.node(node).kind, tree.children(node)) {
    (NodeKind::Identifier(name), []) => name == NAMESPACE,
    (NodeKind::Other(kind), [alias, name])
      if kind == "alias_qualified_name" =>
    {
      tree.identifier(*alias) == Some("global")
        && tree.identifier(*name) == Some(NAMESPACE)
    }
    _ => false,
  }
}

fn method_name(tree: &Tree, callee: NodeId) -> Option<NodeId> {
  match tree.node(callee).kind {
    NodeKind::Identifier(_) => Some(callee),
    NodeKind::ConditionalAccess | NodeKind::MemberAccess => {
      tree.children(callee).last().copied()
    }
    _ => None,
  }
}
