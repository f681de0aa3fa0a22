use super::*;

/// Versions quoted in the deprecation warning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
  pub deprecated_in: String,
  pub removed_in: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      deprecated_in: "5.0.0".into(),
      removed_in: "6.0.0".into(),
    }
  }
}

impl Config {
  pub fn message(&self) -> String {
    format!(
      "The MustHaveHappened(Repeated) assertion is being retired, and will be deprecated in version {} and removed in version {}.",
      self.deprecated_in, self.removed_in
    )
  }
}
