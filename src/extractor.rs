use super::*;

/// A sub-expression of the matched call that the replacement reuses as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractedArgument {
  Count(NodeId),
  Predicate(NodeId),
}

impl ExtractedArgument {
  pub fn node(self) -> NodeId {
    match self {
      Self::Count(node) | Self::Predicate(node) => node,
    }
  }
}

pub fn extract(descriptor: &MatchDescriptor) -> Option<ExtractedArgument> {
  match descriptor.multiplicity {
    Multiplicity::AtLeast(count)
    | Multiplicity::AtMost(count)
    | Multiplicity::Exactly(count) => Some(ExtractedArgument::Count(count)),
    Multiplicity::Predicate(predicate) => {
      Some(ExtractedArgument::Predicate(predicate))
    }
    Multiplicity::AtLeastOnce
    | Multiplicity::AtLeastTwice
    | Multiplicity::AtMostOnce
    | Multiplicity::AtMostTwice
    | Multiplicity::ExactlyOnce
    | Multiplicity::ExactlyTwice
    | Multiplicity::Never => None,
  }
}
