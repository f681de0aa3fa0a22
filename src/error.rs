use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  Language(#[from] tree_sitter::LanguageError),
  #[error("`{method}` replacement needs an argument the match lacks")]
  MissingArgument { method: &'static str },
  #[error("failed to parse source")]
  Parse,
  #[error("no replacement rule for `{shape}`")]
  RuleNotFound { shape: Shape },
}
