use {
  anyhow::{anyhow, bail},
  ariadne::{sources, Color, Label, Report, ReportKind},
  arguments::Arguments,
  clap::Parser as Clap,
  repeated_assertion_lint::{
    Analyzer, Config, Diagnostic, Document, Severity, Span,
  },
  serde::Serialize,
  std::{fs, path::PathBuf, process},
  subcommand::Subcommand,
};

mod arguments;
mod subcommand;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
