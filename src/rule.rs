use super::*;

pub(crate) use repeated_assertion::RepeatedAssertionRule;

mod repeated_assertion;

pub(crate) const RULES: &[&dyn Rule] = &[&RepeatedAssertionRule];

pub(crate) trait Rule: Sync {
  /// Report the call site, if the rule applies to it.
  fn diagnose(
    &self,
    context: &RuleContext<'_>,
    call: NodeId,
  ) -> Option<Diagnostic>;

  /// Human-readable name for the rule.
  fn display_name(&self) -> &'static str;

  /// Build the replacement for the call site, if the rule applies to it.
  fn fix(
    &self,
    context: &RuleContext<'_>,
    call: NodeId,
  ) -> Option<Result<RewriteEdit, Error>>;

  /// Unique identifier for the rule.
  fn id(&self) -> &'static str;
}
