//! Convert command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{BrfFormatter, Document, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tactile_api::{Config, ConversionRequest, Transcriber};
use tactile_core::Grade;

/// Source name used for `--text`
const INLINE_SOURCE: &str = "inline";

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Text to convert instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Braille grade (default: from config, else grade1)
    #[arg(short, long, value_enum)]
    pub grade: Option<GradeArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip display formatting
    #[arg(long)]
    pub no_visual: bool,

    /// Separate cells with a space in display output
    #[arg(long)]
    pub spaced: bool,

    /// Custom Braille table file
    #[arg(long, value_name = "FILE", env = "TACTILE_TABLE_CONFIG")]
    pub table_config: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Grade selector on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GradeArg {
    /// Uncontracted
    Grade1,
    /// Contracted
    Grade2,
}

impl From<GradeArg> for Grade {
    fn from(arg: GradeArg) -> Self {
        match arg {
            GradeArg::Grade1 => Grade::Grade1,
            GradeArg::Grade2 => Grade::Grade2,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Display Braille, one block per input
    Text,
    /// JSON array of conversion responses
    Json,
    /// Braille file with dated metadata header
    Brf,
}

/// Settings after merging the config file with flags
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    grade: Grade,
    include_visual: bool,
    cell_separator: String,
    pretty_json: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting Braille conversion");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.settings(&config);
        let transcriber = self.transcriber(&settings)?;

        let documents = match &self.text {
            Some(text) => vec![convert_one(&transcriber, &settings, INLINE_SOURCE, text)?],
            None => self.convert_files(&transcriber, &settings)?,
        };

        self.write_output(&documents, &settings)?;
        log::info!("Converted {} document(s)", documents.len());

        Ok(())
    }

    /// Merge config-file defaults with command-line flags
    fn settings(&self, config: &CliConfig) -> Settings {
        let cell_separator = if self.spaced {
            " ".to_string()
        } else {
            config.conversion.cell_separator.clone()
        };

        Settings {
            grade: self.grade.map(Grade::from).unwrap_or(config.conversion.grade),
            include_visual: config.conversion.include_visual && !self.no_visual,
            cell_separator,
            pretty_json: config.output.pretty_json,
        }
    }

    fn transcriber(&self, settings: &Settings) -> Result<Transcriber> {
        let mut builder = Config::builder().cell_separator(settings.cell_separator.as_str());
        if let Some(path) = &self.table_config {
            builder = builder.table_file(path);
        }

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let transcriber = Transcriber::with_config(config).context("Failed to load Braille tables")?;
        Ok(transcriber)
    }

    /// Read and convert every matched file in parallel, keeping input order
    fn convert_files(&self, transcriber: &Transcriber, settings: &Settings) -> Result<Vec<Document>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to convert", files.len());

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_documents(files.len() as u64);

        let documents = files
            .par_iter()
            .map(|path| -> Result<Document> {
                let source = path.display().to_string();
                let text = FileReader::read_text(path)?;
                let document = convert_one(transcriber, settings, &source, &text)?;
                progress.document_converted(&source, document.response.stats.original_length);
                Ok(document)
            })
            .collect::<Result<Vec<_>>>();

        progress.finish();
        log::debug!("Transcribed {} source characters", progress.characters());
        documents
    }

    fn write_output(&self, documents: &[Document], settings: &Settings) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
            OutputFormat::Brf => Box::new(BrfFormatter::new(writer)),
        };

        for document in documents {
            formatter.write_document(document)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn convert_one(
    transcriber: &Transcriber,
    settings: &Settings,
    source: &str,
    text: &str,
) -> Result<Document> {
    let request = ConversionRequest::new(text)
        .with_grade(settings.grade)
        .with_visual(settings.include_visual);

    let response = transcriber
        .convert(&request)
        .map_err(|e| CliError::ConversionError(format!("{source}: {e}")))?;

    Ok(Document {
        source: source.to_string(),
        response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ConvertArgs,
    }

    fn parse(args: &[&str]) -> ConvertArgs {
        let mut argv = vec!["convert"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_defaults_from_empty_config() {
        let args = parse(&["-t", "cat"]);
        let settings = args.settings(&CliConfig::default());
        assert_eq!(settings.grade, Grade::Grade1);
        assert!(settings.include_visual);
        assert_eq!(settings.cell_separator, "");
        assert!(settings.pretty_json);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.conversion.grade = Grade::Grade2;
        config.conversion.cell_separator = "-".to_string();

        let args = parse(&["-t", "cat"]);
        assert_eq!(args.settings(&config).grade, Grade::Grade2);
        assert_eq!(args.settings(&config).cell_separator, "-");

        let args = parse(&["-t", "cat", "-g", "grade1", "--spaced", "--no-visual"]);
        let settings = args.settings(&config);
        assert_eq!(settings.grade, Grade::Grade1);
        assert_eq!(settings.cell_separator, " ");
        assert!(!settings.include_visual);
    }

    #[test]
    fn test_convert_one() {
        let transcriber = Transcriber::new().unwrap();
        let settings = parse(&["-t", "x", "-g", "grade2"]).settings(&CliConfig::default());

        let document = convert_one(&transcriber, &settings, "inline", "The cat").unwrap();
        assert_eq!(document.source, "inline");
        assert_eq!(document.response.braille, "⠮ ⠉⠁⠞");
    }

    #[test]
    fn test_convert_one_names_failing_source() {
        let transcriber = Transcriber::new().unwrap();
        let settings = parse(&["-t", "x"]).settings(&CliConfig::default());

        let err = convert_one(&transcriber, &settings, "empty.txt", "").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conversion error: empty.txt: Text is required and must be a string"
        );
    }
}
