use {super::*, analyze::Analyze};

mod analyze;

#[derive(clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Report, and optionally fix, `MustHaveHappened(Repeated...)` assertions
  Analyze(Analyze),
}

impl Subcommand {
  pub(crate) fn run(self) -> Result {
    match self {
      Self::Analyze(analyze) => analyze.run(),
    }
  }
}
