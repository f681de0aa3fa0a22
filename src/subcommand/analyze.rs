use super::*;

#[derive(Debug, Clap)]
pub(crate) struct Analyze {
  #[arg(
    long,
    value_name = "PATH",
    help = "Read deprecation versions from a JSON file"
  )]
  config: Option<PathBuf>,
  #[arg(
    long,
    value_name = "VERSION",
    help = "Version in which the assertion is deprecated"
  )]
  deprecated_in: Option<String>,
  #[arg(long, help = "Rewrite deprecated assertions in place")]
  fix: bool,
  #[arg(long, help = "Print diagnostics and replacements as JSON")]
  json: bool,
  #[arg(
    value_name = "PATH",
    help = "Path to the C# file to analyze",
    value_hint = clap::ValueHint::FilePath
  )]
  path: PathBuf,
  #[arg(
    long,
    value_name = "VERSION",
    help = "Version in which the assertion is removed"
  )]
  removed_in: Option<String>,
}

#[derive(Debug, Serialize)]
struct Fix {
  replacement: String,
  span: Span,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
  diagnostics: &'a [Diagnostic],
  fixes: Vec<Fix>,
  path: String,
}

impl Analyze {
  fn config(&self) -> Result<Config> {
    let mut config = match &self.config {
      Some(path) => serde_json::from_str(&fs::read_to_string(path)?)
        .map_err(|error| {
          anyhow!("failed to parse config `{}`: {error}", path.display())
        })?,
      None => Config::default(),
    };

    if let Some(version) = &self.deprecated_in {
      config.deprecated_in.clone_from(version);
    }

    if let Some(version) = &self.removed_in {
      config.removed_in.clone_from(version);
    }

    Ok(config)
  }

  fn print_json(&self, diagnostics: &[Diagnostic], fixes: Vec<Fix>) -> Result {
    let output = Output {
      diagnostics,
      fixes,
      path: self.path.to_string_lossy().to_string(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
  }

  fn print_reports(
    &self,
    document: &Document,
    diagnostics: &[Diagnostic],
  ) -> Result {
    let source_id = self.path.to_string_lossy().to_string();

    let mut cache =
      sources(vec![(source_id.clone(), document.content.to_string())]);

    let source_len = document.content.len_chars();

    for diagnostic in diagnostics {
      let (severity_label, color) =
        Self::severity_to_style(diagnostic.severity);

      let kind_label = format!("{severity_label}[{}]", diagnostic.id);

      let start = document
        .content
        .byte_to_char(diagnostic.span.start_byte)
        .min(source_len);

      let end = document
        .content
        .byte_to_char(diagnostic.span.end_byte)
        .min(source_len);

      let span = (source_id.clone(), start.min(end)..start.max(end));

      let report = Report::build(
        ReportKind::Custom(kind_label.as_str(), color),
        span.clone(),
      )
      .with_message(diagnostic.kind.to_string())
      .with_label(
        Label::new(span)
          .with_message(diagnostic.message.clone())
          .with_color(color),
      )
      .finish();

      report
        .print(&mut cache)
        .map_err(|error| anyhow!("failed to render diagnostic: {error}"))?;
    }

    Ok(())
  }

  pub(crate) fn run(self) -> Result {
    let config = self.config()?;

    let content = fs::read_to_string(&self.path).map_err(|error| {
      anyhow!("failed to read `{}`: {error}", self.path.display())
    })?;

    let document = Document::parse(&content)?;

    let analysis = Analyzer::new(&document.tree, &config).analyze();

    if self.json {
      let fixes = analysis
        .edits
        .iter()
        .map(|edit| Fix {
          replacement: document.render(&edit.replacement),
          span: document.tree.span(edit.original),
        })
        .collect();

      self.print_json(&analysis.diagnostics, fixes)?;
    } else {
      self.print_reports(&document, &analysis.diagnostics)?;
    }

    if self.fix && !analysis.edits.is_empty() {
      fs::write(&self.path, document.apply_edits(&analysis.edits))?;

      log::info!(
        "rewrote {} assertion(s) in {}",
        analysis.edits.len(),
        self.path.display()
      );
    }

    if let Some(error) = analysis.errors.first() {
      bail!(
        "{} call site(s) could not be rewritten, first failure: {error}",
        analysis.errors.len()
      );
    }

    Ok(())
  }

  fn severity_to_style(severity: Severity) -> (&'static str, Color) {
    match severity {
      Severity::Warning => ("warning", Color::Yellow),
    }
  }
}
