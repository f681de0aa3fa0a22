use super::*;

/// A freshly built expression that has not been attached to any tree.
///
/// `Original` splices a node of the analyzed tree in unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
  Call {
    callee: Box<Expression>,
    arguments: Vec<Expression>,
  },
  /// `target?.name`
  ConditionalAccess {
    target: Box<Expression>,
    name: String,
  },
  Identifier(String),
  MemberAccess {
    target: Box<Expression>,
    name: String,
  },
  Original(NodeId),
}

impl Expression {
  fn member(target: Expression, name: &str) -> Self {
    Self::MemberAccess {
      target: Box::new(target),
      name: name.to_owned(),
    }
  }
}

/// Replace `original` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteEdit {
  pub original: NodeId,
  pub replacement: Expression,
}

/// Builds the non-deprecated call equivalent to a matched assertion.
///
/// The receiver, count and predicate are spliced in by reference, and only
/// the method name of the callee changes. Fails if `rules` has no entry for
/// the match, rather than guessing one.
pub fn rewrite(
  tree: &Tree,
  descriptor: &MatchDescriptor,
  rules: &[ReplacementRule],
) -> Result<RewriteEdit, Error> {
  let shape = descriptor.multiplicity.shape();

  let rule = rule_for(rules, shape).ok_or(Error::RuleNotFound { shape })?;

  let callee = match tree
    .children(descriptor.call)
    .first()
    .map(|&callee| (&tree.node(callee).kind, tree.children(callee)))
  {
    Some((NodeKind::MemberAccess, [receiver, _])) => {
      Expression::member(Expression::Original(*receiver), rule.method)
    }
    Some((NodeKind::ConditionalAccess, [receiver, _])) => {
      Expression::ConditionalAccess {
        target: Box::new(Expression::Original(*receiver)),
        name: rule.method.to_owned(),
      }
    }
    _ => Expression::Identifier(rule.method.to_owned()),
  };

  let arguments = rule
    .arguments
    .iter()
    .map(|slot| match slot {
      Slot::Extracted => extract(descriptor)
        .map(|argument| Expression::Original(argument.node()))
        .ok_or(Error::MissingArgument {
          method: rule.method,
        }),
      Slot::Member { target, name } => Ok(Expression::member(
        Expression::Identifier((*target).to_owned()),
        name,
      )),
    })
    .collect::<Result<Vec<_>, _>>()?;

  log::debug!(
    "rewriting `{shape}` at {} to `{}`",
    tree.span(descriptor.call).start,
    rule.method
  );

  Ok(RewriteEdit {
    original: descriptor.call,
    replacement: Expression::Call {
      callee: Box::new(callee),
      arguments,
    },
  })
}
