use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
  RepeatedAssertionDeprecated,
}

impl DiagnosticKind {
  pub fn id(self) -> &'static str {
    match self {
      Self::RepeatedAssertionDeprecated => "FakeItEasy0006",
    }
  }
}

impl Display for DiagnosticKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::RepeatedAssertionDeprecated => {
        write!(f, "RepeatedAssertionDeprecated")
      }
    }
  }
}

/// Diagnostics are advisory and never stop analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  /// A unique identifier for the rule that produced the diagnostic.
  pub id: &'static str,
  pub kind: DiagnosticKind,
  /// A detailed message describing the diagnostic.
  pub message: String,
  pub severity: Severity,
  /// From the assertion name to the end of the call's argument list.
  pub span: Span,
}

impl Diagnostic {
  /// The deprecation warning for one matched call site.
  pub fn emit(
    tree: &Tree,
    descriptor: &MatchDescriptor,
    config: &Config,
  ) -> Self {
    let kind = DiagnosticKind::RepeatedAssertionDeprecated;

    Self {
      id: kind.id(),
      kind,
      message: config.message(),
      severity: Severity::Warning,
      span: tree.span(descriptor.method).to(tree.span(descriptor.call)),
    }
  }
}
