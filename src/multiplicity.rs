use super::*;

/// The expected call count a `Repeated` argument encodes.
///
/// Counts and predicates are the untouched argument nodes of the
/// `Times(...)` and `Like(...)` calls they were written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
  AtLeast(NodeId),
  AtLeastOnce,
  AtLeastTwice,
  AtMost(NodeId),
  AtMostOnce,
  AtMostTwice,
  Exactly(NodeId),
  ExactlyOnce,
  ExactlyTwice,
  Never,
  Predicate(NodeId),
}

impl Multiplicity {
  pub fn argument(self) -> Option<NodeId> {
    match self {
      Self::AtLeast(node)
      | Self::AtMost(node)
      | Self::Exactly(node)
      | Self::Predicate(node) => Some(node),
      _ => None,
    }
  }

  pub fn shape(self) -> Shape {
    match self {
      Self::AtLeast(_) => Shape::AtLeast,
      Self::AtLeastOnce => Shape::AtLeastOnce,
      Self::AtLeastTwice => Shape::AtLeastTwice,
      Self::AtMost(_) => Shape::AtMost,
      Self::AtMostOnce => Shape::AtMostOnce,
      Self::AtMostTwice => Shape::AtMostTwice,
      Self::Exactly(_) => Shape::Exactly,
      Self::ExactlyOnce => Shape::ExactlyOnce,
      Self::ExactlyTwice => Shape::ExactlyTwice,
      Self::Never => Shape::Never,
      Self::Predicate(_) => Shape::Predicate,
    }
  }
}

/// A [`Multiplicity`] with its payload erased, used to look up rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
  AtLeast,
  AtLeastOnce,
  AtLeastTwice,
  AtMost,
  AtMostOnce,
  AtMostTwice,
  Exactly,
  ExactlyOnce,
  ExactlyTwice,
  Never,
  Predicate,
}

impl Shape {
  pub const ALL: [Shape; 11] = [
    Self::AtLeast,
    Self::AtLeastOnce,
    Self::AtLeastTwice,
    Self::AtMost,
    Self::AtMostOnce,
    Self::AtMostTwice,
    Self::Exactly,
    Self::ExactlyOnce,
    Self::ExactlyTwice,
    Self::Never,
    Self::Predicate,
  ];
}

impl Display for Shape {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::AtLeast => "Repeated.AtLeast.Times(n)",
        Self::AtLeastOnce => "Repeated.AtLeast.Once",
        Self::AtLeastTwice => "Repeated.AtLeast.Twice",
        Self::AtMost => "Repeated.NoMoreThan.Times(n)",
        Self::AtMostOnce => "Repeated.NoMoreThan.Once",
        Self::AtMostTwice => "Repeated.NoMoreThan.Twice",
        Self::Exactly => "Repeated.Exactly.Times(n)",
        Self::ExactlyOnce => "Repeated.Exactly.Once",
        Self::ExactlyTwice => "Repeated.Exactly.Twice",
        Self::Never => "Repeated.Never",
        Self::Predicate => "Repeated.Like(predicate)",
      }
    )
  }
}
