use super::*;

#[derive(Debug)]
pub(crate) struct RuleContext<'a> {
  calls: OnceLock<Vec<NodeId>>,
  config: &'a Config,
  replacement_rules: &'a [ReplacementRule],
  tree: &'a Tree,
}

impl<'a> RuleContext<'a> {
  pub(crate) fn calls(&self) -> &[NodeId] {
    self
      .calls
      .get_or_init(|| self.tree.calls())
      .as_slice()
  }

  pub(crate) fn config(&self) -> &Config {
    self.config
  }

  pub(crate) fn new(
    tree: &'a Tree,
    config: &'a Config,
    replacement_rules: &'a [ReplacementRule],
  ) -> Self {
    Self {
      calls: OnceLock::new(),
      config,
      replacement_rules,
      tree,
    }
  }

  pub(crate) fn replacement_rules(&self) -> &[ReplacementRule] {
    self.replacement_rules
  }

  pub(crate) fn tree(&self) -> &Tree {
    self.tree
  }
}
