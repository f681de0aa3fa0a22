use super::*;

/// Everything found in one pass over a tree.
///
/// A call site whose rewrite fails still contributes its diagnostic; the
/// failure lands in `errors` and the remaining call sites are unaffected.
#[derive(Debug, Default)]
pub struct Analysis {
  pub diagnostics: Vec<Diagnostic>,
  pub edits: Vec<RewriteEdit>,
  pub errors: Vec<Error>,
}

impl Analysis {
  pub fn is_empty(&self) -> bool {
    self.diagnostics.is_empty()
      && self.edits.is_empty()
      && self.errors.is_empty()
  }
}

#[derive(Debug)]
pub struct Analyzer<'a> {
  context: RuleContext<'a>,
}

impl<'a> Analyzer<'a> {
  pub fn analyze(&self) -> Analysis {
    let mut analysis = Analysis::default();

    for &call in self.context.calls() {
      for rule in RULES {
        if let Some(diagnostic) = rule.diagnose(&self.context, call) {
          log::debug!("{} at {}", rule.id(), diagnostic.span.start);
          analysis.diagnostics.push(diagnostic);
        }

        match rule.fix(&self.context, call) {
          Some(Ok(edit)) => analysis.edits.push(edit),
          Some(Err(error)) => {
            log::error!("{}: {error}", rule.display_name());
            analysis.errors.push(error);
          }
          None => {}
        }
      }
    }

    analysis
  }

  /// Diagnostics alone, without building any replacement.
  pub fn diagnostics(&self) -> Vec<Diagnostic> {
    self
      .context
      .calls()
      .iter()
      .flat_map(|&call| {
        RULES
          .iter()
          .filter_map(move |rule| rule.diagnose(&self.context, call))
      })
      .collect()
  }

  pub fn new(tree: &'a Tree, config: &'a Config) -> Self {
    Self::with_replacement_rules(tree, config, REPLACEMENT_RULES)
  }

  pub fn with_replacement_rules(
    tree: &'a Tree,
    config: &'a Config,
    replacement_rules: &'a [ReplacementRule],
  ) -> Self {
    Self {
      context: RuleContext::new(tree, config, replacement_rules),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, indoc::indoc, pretty_assertions::assert_eq};

  const TEMPLATE: &str = indoc! {"
    using FakeItEasy;
    namespace TheNamespace
    {
        class TheClass
        {
            void TheTest()
            {
                var fake = A.Fake<IFoo>();
                A.CallTo(() => fake.Method()).ASSERTION;
            }
        }

        interface IFoo
        {
            void Method();
        }
    }
  "};

  const MESSAGE: &str = "The MustHaveHappened(Repeated) assertion is being retired, and will be deprecated in version 5.0.0 and removed in version 6.0.0.";

  const NON_DEPRECATED: &[&str] = &[
    "MustHaveHappened()",
    "MustNotHaveHappened()",
    "MustHaveHappenedOnceExactly()",
    "MustHaveHappenedOnceOrMore()",
    "MustHaveHappenedOnceOrLess()",
    "MustHaveHappenedTwiceExactly()",
    "MustHaveHappenedTwiceOrMore()",
    "MustHaveHappenedTwiceOrLess()",
    "MustHaveHappened(3, Times.Exactly)",
    "MustHaveHappened(3, Times.OrMore)",
    "MustHaveHappened(3, Times.OrLess)",
    "MustHaveHappenedANumberOfTimesMatching(n => n % 2 == 0)",
  ];

  const REPLACEMENTS: &[(&str, &str)] = &[
    ("MustHaveHappened(Repeated.Never)", "MustNotHaveHappened()"),
    (
      "MustHaveHappened(Repeated.Exactly.Once)",
      "MustHaveHappenedOnceExactly()",
    ),
    (
      "MustHaveHappened(Repeated.AtLeast.Once)",
      "MustHaveHappenedOnceOrMore()",
    ),
    (
      "MustHaveHappened(Repeated.NoMoreThan.Once)",
      "MustHaveHappenedOnceOrLess()",
    ),
    (
      "MustHaveHappened(Repeated.Exactly.Twice)",
      "MustHaveHappenedTwiceExactly()",
    ),
    (
      "MustHaveHappened(Repeated.AtLeast.Twice)",
      "MustHaveHappenedTwiceOrMore()",
    ),
    (
      "MustHaveHappened(Repeated.NoMoreThan.Twice)",
      "MustHaveHappenedTwiceOrLess()",
    ),
    (
      "MustHaveHappened(Repeated.Exactly.Times(4))",
      "MustHaveHappened(4, Times.Exactly)",
    ),
    (
      "MustHaveHappened(Repeated.AtLeast.Times(5))",
      "MustHaveHappened(5, Times.OrMore)",
    ),
    (
      "MustHaveHappened(Repeated.NoMoreThan.Times(6))",
      "MustHaveHappened(6, Times.OrLess)",
    ),
    (
      "MustHaveHappened(Repeated.Like(n => n % 2 == 0))",
      "MustHaveHappenedANumberOfTimesMatching(n => n % 2 == 0)",
    ),
  ];

  fn analyze(content: &str) -> (Document, Analysis) {
    let document = Document::parse(content).unwrap();
    let analysis = Analyzer::new(&document.tree, &Config::default()).analyze();
    (document, analysis)
  }

  fn source(assertion: &str) -> String {
    TEMPLATE.replace("ASSERTION", assertion)
  }

  #[test]
  fn deprecated_forms_are_reported() {
    for (assertion, _) in REPLACEMENTS {
      let (_, analysis) = analyze(&source(assertion));

      assert_eq!(analysis.diagnostics.len(), 1, "{assertion}");

      let diagnostic = &analysis.diagnostics[0];

      assert_eq!(diagnostic.id, "FakeItEasy0006");
      assert_eq!(diagnostic.kind, DiagnosticKind::RepeatedAssertionDeprecated);
      assert_eq!(diagnostic.message, MESSAGE);
      assert_eq!(diagnostic.severity, Severity::Warning);
      assert_eq!(
        diagnostic.span.start,
        Position {
          line: 8,
          column: 42
        }
      );
      assert_eq!(
        diagnostic.span.end,
        Position {
          line: 8,
          column: 42 + assertion.len()
        }
      );
    }
  }

  #[test]
  fn deprecated_forms_are_rewritten() {
    for (assertion, replacement) in REPLACEMENTS {
      let (document, analysis) = analyze(&source(assertion));

      assert!(analysis.errors.is_empty());
      assert_eq!(analysis.edits.len(), 1, "{assertion}");

      assert_eq!(
        document.apply_edits(&analysis.edits),
        source(replacement),
        "{assertion}"
      );
    }
  }

  #[test]
  fn conditional_assertions() {
    let (document, analysis) = analyze(indoc! {"
      class C
      {
          void M()
          {
              fake?.MustHaveHappened(Repeated.AtLeast.Times(3));
          }
      }
    "});

    assert_eq!(analysis.diagnostics.len(), 1);

    let span = analysis.diagnostics[0].span;

    assert_eq!(span.start, Position { line: 4, column: 14 });
    assert_eq!(
      &document.content.to_string()[span.byte_range()],
      "MustHaveHappened(Repeated.AtLeast.Times(3))"
    );

    assert_eq!(
      document.apply_edits(&analysis.edits),
      indoc! {"
        class C
        {
            void M()
            {
                fake?.MustHaveHappened(3, Times.OrMore);
            }
        }
      "}
    );
  }

  #[test]
  fn deeply_nested_expressions() {
    let (document, analysis) = analyze(&format!(
      "class C {{ string s = {}; void M() {{ {} }} }}",
      vec!["\"a\""; 10_000].join(" + "),
      "fake.MustHaveHappened(Repeated.Never);",
    ));

    assert_eq!(analysis.diagnostics.len(), 1);

    assert_eq!(
      analysis
        .edits
        .iter()
        .map(|edit| document.render(&edit.replacement))
        .collect::<Vec<_>>(),
      vec!["fake.MustNotHaveHappened()"]
    );
  }

  #[test]
  fn diagnostics_without_rewrites() {
    let document = Document::parse(&source(REPLACEMENTS[0].0)).unwrap();

    let diagnostics =
      Analyzer::with_replacement_rules(&document.tree, &Config::default(), &[])
        .diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, MESSAGE);
  }

  #[test]
  fn differently_formatted_arguments() {
    for (assertion, replacement) in [
      (
        "MustHaveHappened((Repeated.Never))",
        "MustNotHaveHappened()",
      ),
      (
        "MustHaveHappened( Repeated . Exactly . Once )",
        "MustHaveHappenedOnceExactly()",
      ),
      (
        "MustHaveHappened(FakeItEasy.Repeated.AtLeast.Times((7)))",
        "MustHaveHappened((7), Times.OrMore)",
      ),
      (
        "MustHaveHappened(Repeated /* bound */ .NoMoreThan.Times(count))",
        "MustHaveHappened(count, Times.OrLess)",
      ),
      (
        "MustHaveHappened(Repeated.Like(IsEven))",
        "MustHaveHappenedANumberOfTimesMatching(IsEven)",
      ),
      (
        "MustHaveHappened(global::FakeItEasy.Repeated.Exactly.Twice)",
        "MustHaveHappenedTwiceExactly()",
      ),
    ] {
      let (document, analysis) = analyze(&source(assertion));

      assert_eq!(analysis.diagnostics.len(), 1, "{assertion}");

      assert_eq!(
        document.apply_edits(&analysis.edits),
        source(replacement),
        "{assertion}"
      );
    }
  }

  #[test]
  fn extracted_predicate_is_the_input_node() {
    let (document, analysis) =
      analyze(&source("MustHaveHappened(Repeated.Like(n => n < 3 || n > 19))"));

    let Expression::Call { arguments, .. } = &analysis.edits[0].replacement
    else {
      panic!("expected a call");
    };

    let [Expression::Original(predicate)] = arguments.as_slice() else {
      panic!("expected a spliced predicate");
    };

    assert_eq!(document.tree.node(*predicate).kind, NodeKind::Lambda);
    assert_eq!(document.text(*predicate), "n => n < 3 || n > 19");
  }

  #[test]
  fn failures_stay_local() {
    let document = Document::parse(indoc! {"
      class C
      {
          void M()
          {
              fake.MustHaveHappened(Repeated.Like(n => n > 1));
              fake.MustHaveHappened(Repeated.Never);
          }
      }
    "})
    .unwrap();

    let rules = REPLACEMENT_RULES
      .iter()
      .copied()
      .filter(|rule| rule.shape != Shape::Predicate)
      .collect::<Vec<_>>();

    let analysis = Analyzer::with_replacement_rules(
      &document.tree,
      &Config::default(),
      &rules,
    )
    .analyze();

    assert_eq!(analysis.diagnostics.len(), 2);
    assert_eq!(analysis.edits.len(), 1);
    assert_eq!(analysis.errors.len(), 1);

    assert!(matches!(
      analysis.errors[0],
      Error::RuleNotFound {
        shape: Shape::Predicate
      }
    ));

    assert_eq!(
      document.render(&analysis.edits[0].replacement),
      "fake.MustNotHaveHappened()"
    );
  }

  #[test]
  fn multiple_call_sites() {
    let (document, analysis) = analyze(indoc! {"
      class C
      {
          void M()
          {
              fake.MustHaveHappened(Repeated.Never);
              fake.MustHaveHappened();
              other.MustHaveHappened(Repeated.AtLeast.Twice);
          }
      }
    "});

    assert_eq!(
      analysis
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.span.start.line)
        .collect::<Vec<_>>(),
      vec![4, 6]
    );

    assert_eq!(
      analysis
        .edits
        .iter()
        .map(|edit| document.render(&edit.replacement))
        .collect::<Vec<_>>(),
      vec![
        "fake.MustNotHaveHappened()",
        "other.MustHaveHappenedTwiceOrMore()"
      ]
    );
  }

  #[test]
  fn foreign_repeated_is_ignored() {
    for assertion in [
      "MustHaveHappened(foo.Repeated.Never)",
      "MustHaveHappened(Other.FakeItEasy.Repeated.Exactly.Once)",
      "MustHaveHappened(alias::FakeItEasy.Repeated.Never)",
    ] {
      let (_, analysis) = analyze(&source(assertion));
      assert!(analysis.is_empty(), "{assertion}");
    }
  }

  #[test]
  fn non_deprecated_forms_are_ignored() {
    for assertion in NON_DEPRECATED {
      let (_, analysis) = analyze(&source(assertion));
      assert!(analysis.is_empty(), "{assertion}");
    }
  }

  #[test]
  fn rewrites_are_idempotent() {
    for (assertion, _) in REPLACEMENTS {
      let (document, analysis) = analyze(&source(assertion));

      let (_, reanalysis) = analyze(&document.apply_edits(&analysis.edits));

      assert!(reanalysis.is_empty(), "{assertion}");
    }
  }

  #[test]
  fn spliced_arguments_survive_reparsing() {
    for (assertion, _) in &REPLACEMENTS[7..] {
      let (document, analysis) = analyze(&source(assertion));

      let descriptor =
        match_call(&document.tree, analysis.edits[0].original).unwrap();

      let extracted = extract(&descriptor).unwrap().node();

      let fixed = Document::parse(&document.apply_edits(&analysis.edits))
        .unwrap();

      let call = fixed
        .tree
        .calls()
        .into_iter()
        .find(|&call| {
          fixed.tree.span(call).start_byte
            == document.tree.span(descriptor.call).start_byte
        })
        .unwrap();

      let spliced = fixed.tree.children(call)[1];

      assert!(
        document.tree.same_shape(extracted, &fixed.tree, spliced),
        "{assertion}"
      );
      assert_eq!(document.text(extracted), fixed.text(spliced), "{assertion}");
    }
  }

  #[test]
  fn types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Analyzer<'static>>();
    assert_send_sync::<Diagnostic>();
    assert_send_sync::<MatchDescriptor>();
    assert_send_sync::<RewriteEdit>();
    assert_send_sync::<Tree>();
  }
}
