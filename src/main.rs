//! tabrepr - Display representations of tabular data

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tabrepr::config::{ColSpec, ReprConfig};
use tabrepr::output::{render_to_stdout, RenderTarget};
use tabrepr::parser::{LoadOptions, ParserFactory};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Html,
    Latex,
    Markdown,
}

impl From<CliOutputFormat> for RenderTarget {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => RenderTarget::Text,
            CliOutputFormat::Html => RenderTarget::Html,
            CliOutputFormat::Latex => RenderTarget::Latex(None),
            CliOutputFormat::Markdown => RenderTarget::Markdown,
        }
    }
}

/// Print a tabular file (CSV, TSV, JSON, Excel) as HTML, LaTeX, Markdown or text
#[derive(Parser, Debug)]
#[command(name = "tabrepr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to render
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: CliOutputFormat,

    /// JSON configuration file (max_rows, max_cols, latex_colspec)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rows shown before truncating
    #[arg(long)]
    max_rows: Option<usize>,

    /// Columns shown before truncating
    #[arg(long)]
    max_cols: Option<usize>,

    /// Use the first column as row names
    #[arg(long)]
    row_names: bool,

    /// Column(s) to treat as factors (comma-separated)
    #[arg(long, value_delimiter = ',')]
    factor: Vec<String>,

    /// For Excel files: which sheet to render
    #[arg(long)]
    sheet: Option<String>,

    /// LaTeX alignment token repeated per column
    #[arg(long)]
    latex_col: Option<String>,

    /// LaTeX alignment token for the row-name column
    #[arg(long)]
    latex_row_head: Option<String>,

    /// LaTeX token appended after the column tokens
    #[arg(long)]
    latex_end: Option<String>,
}

impl Cli {
    /// Configuration file values overridden by command-line flags
    fn repr_config(&self) -> Result<ReprConfig> {
        let mut config = match &self.config {
            Some(path) => ReprConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ReprConfig::default(),
        };

        if let Some(max_rows) = self.max_rows {
            config = config.with_max_rows(max_rows);
        }
        if let Some(max_cols) = self.max_cols {
            config = config.with_max_cols(max_cols);
        }

        let defaults = config.latex_colspec.clone();
        config = config.with_latex_colspec(ColSpec::new(
            self.latex_col.clone().unwrap_or(defaults.col),
            self.latex_row_head.clone().unwrap_or(defaults.row_head),
            self.latex_end.clone().unwrap_or(defaults.end),
        ));

        config.validate()?;
        Ok(config)
    }

    fn load_options(&self) -> LoadOptions {
        let options = LoadOptions::default()
            .with_row_names(self.row_names)
            .with_factor_columns(self.factor.clone());
        match &self.sheet {
            Some(sheet) => options.with_sheet_name(sheet),
            None => options,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.repr_config()?;

    let table = ParserFactory::new()
        .parse(&cli.file, &cli.load_options())
        .with_context(|| format!("Failed to parse file: {}", cli.file.display()))?;

    render_to_stdout(&table, &cli.format.into(), &config)
}
