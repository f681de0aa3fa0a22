use super::*;

/// One argument of a replacement call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
  /// The count or predicate taken from the matched call.
  Extracted,
  /// A fixed `target.name` token pair such as `Times.Exactly`.
  Member {
    target: &'static str,
    name: &'static str,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementRule {
  pub shape: Shape,
  pub method: &'static str,
  pub arguments: &'static [Slot],
}

const fn times(name: &'static str) -> Slot {
  Slot::Member {
    target: "Times",
    name,
  }
}

pub const REPLACEMENT_RULES: &[ReplacementRule] = &[
  ReplacementRule {
    shape: Shape::Never,
    method: "MustNotHaveHappened",
    arguments: &[],
  },
  ReplacementRule {
    shape: Shape::ExactlyOnce,
    method: "MustHaveHappenedOnceExactly",
    arguments: &[],
  },
  ReplacementRule {
    shape: Shape::AtLeastOnce,
    method: "MustHaveHappenedOnceOrMore",
    arguments: &[],
  },
  ReplacementRule {
    shape: Shape::AtMostOnce,
    method: "MustHaveHappenedOnceOrLess",
    arguments: &[],
  },
  ReplacementRule {
    shape: Shape::ExactlyTwice,
    method: "MustHaveHappenedTwiceExactly",
    arguments: &[],
  },
  ReplacementRule {
    shape: Shape::AtLeastTwice,
    method: "MustHaveHappenedTwiceOrMore",
    arguments: &[],
  },
  ReplacementRule {
    shape: Shape::AtMostTwice,
    method: "MustHaveHappenedTwiceOrLess",
    arguments: &[],
  },
  ReplacementRule {
    shape: Shape::Exactly,
    method: "MustHaveHappened",
    arguments: &[Slot::Extracted, times("Exactly")],
  },
  ReplacementRule {
    shape: Shape::AtLeast,
    method: "MustHaveHappened",
    arguments: &[Slot::Extracted, times("OrMore")],
  },
  ReplacementRule {
    shape: Shape::AtMost,
    method: "MustHaveHappened",
    arguments: &[Slot::Extracted, times("OrLess")],
  },
  ReplacementRule {
    shape: Shape::Predicate,
    method: "MustHaveHappenedANumberOfTimesMatching",
    arguments: &[Slot::Extracted],
  },
];

pub fn rule_for(
  rules: &[ReplacementRule],
  shape: Shape,
) -> Option<&ReplacementRule> {
  rules.iter().find(|rule| rule.shape == shape)
}
