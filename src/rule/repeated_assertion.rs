use super::*;

/// Flags `MustHaveHappened(Repeated...)` and rewrites it to the dedicated
/// call-count assertion.
pub(crate) struct RepeatedAssertionRule;

impl Rule for RepeatedAssertionRule {
  fn diagnose(
    &self,
    context: &RuleContext<'_>,
    call: NodeId,
  ) -> Option<Diagnostic> {
    let descriptor = match_call(context.tree(), call)?;

    Some(Diagnostic::emit(context.tree(), &descriptor, context.config()))
  }

  fn display_name(&self) -> &'static str {
    "Repeated Assertion"
  }

  fn fix(
    &self,
    context: &RuleContext<'_>,
    call: NodeId,
  ) -> Option<Result<RewriteEdit, Error>> {
    let descriptor = match_call(context.tree(), call)?;

    Some(rewrite(
      context.tree(),
      &descriptor,
      context.replacement_rules(),
    ))
  }

  fn id(&self) -> &'static str {
    DiagnosticKind::RepeatedAssertionDeprecated.id()
  }
}
