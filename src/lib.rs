//! Detects the retired `MustHaveHappened(Repeated…)` assertion in C#
//! syntax trees and synthesizes the equivalent non-deprecated call.

use {
  node_ext::NodeExt,
  point_ext::PointExt,
  ropey::Rope,
  rule::{RULES, Rule},
  rule_context::RuleContext,
  serde::{Deserialize, Serialize},
  std::{
    cmp::Reverse,
    fmt::{self, Display, Formatter},
    ops::Range,
    sync::OnceLock,
  },
};

pub use {
  analyzer::{Analysis, Analyzer},
  config::Config,
  diagnostic::{Diagnostic, DiagnosticKind, Severity},
  document::Document,
  error::Error,
  extractor::{ExtractedArgument, extract},
  matcher::{ASSERTION_METHOD, MatchDescriptor, REPEATED, match_call},
  multiplicity::{Multiplicity, Shape},
  printer::Printer,
  rewriter::{Expression, RewriteEdit, rewrite},
  rule_table::{REPLACEMENT_RULES, ReplacementRule, Slot, rule_for},
  span::{Position, Span},
  tree::{Node, NodeId, NodeKind, Tree, TreeBuilder},
};

mod analyzer;
mod config;
mod diagnostic;
mod document;
mod error;
mod extractor;
mod matcher;
mod multiplicity;
mod node_ext;
mod point_ext;
mod printer;
mod rewriter;
mod rule;
mod rule_context;
mod rule_table;
mod span;
mod tree;
