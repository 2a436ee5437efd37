//! CLI application logic.
//!
//! Parses arguments and dispatches to the command implementations. The three
//! analysis outcomes stay distinct all the way to the exit code: success
//! prints a report, a parse failure and an unsupported format each print
//! their own message and exit nonzero.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use docprobe::plugins::{DocumentAnalyzer as _, Plugin as _};
use docprobe::update::{self, ComponentVersions};
use docprobe::{AnalysisReport, AnalysisResult, AnalyzerConfig, Dispatch, Settings};

#[derive(Parser)]
#[command(name = "docprobe")]
#[command(author, version, about = "Inspect DOCX and PDF document metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a document and print its metadata and a text sample
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Analyzer configuration file (defaults to discovering docprobe.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List registered analyzers and their extensions
    Formats,

    /// Text file encoding utilities
    Encoding {
        #[command(subcommand)]
        command: EncodingCommands,
    },

    /// Check a local manifest for component updates
    Update {
        /// Manifest file to check
        #[arg(short, long, default_value = "update_server/all_updates.json")]
        manifest: PathBuf,
    },
}

#[derive(Subcommand)]
enum EncodingCommands {
    /// Report a file's encoding and content shape
    Check {
        file: PathBuf,
    },

    /// Rewrite a file in place as UTF-8
    Fix {
        file: PathBuf,
    },

    /// Create a UTF-8 file from the given text
    Create {
        file: PathBuf,

        /// Text to write; multiple arguments are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Scan a directory tree for NUL-corrupted text files
    Scan {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

/// Parse arguments and run the selected command.
pub fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, json, config } => analyze_command(&file, json, config.as_deref()),
        Commands::Formats => formats_command(),
        Commands::Encoding { command } => encoding_command(command),
        Commands::Update { manifest } => update_command(&manifest),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<AnalyzerConfig> {
    match explicit {
        Some(path) => {
            AnalyzerConfig::from_toml_file(path).with_context(|| format!("loading config from {}", path.display()))
        }
        None => Ok(AnalyzerConfig::discover()
            .context("discovering docprobe.toml")?
            .unwrap_or_default()),
    }
}

fn analyze_command(file: &Path, json: bool, config_path: Option<&Path>) -> Result<ExitCode> {
    let config = load_config(config_path)?;

    let dispatch = docprobe::dispatch_file(file, &config).map_err(|err| match err {
        docprobe::DocprobeError::Validation { .. } => {
            anyhow::anyhow!("No file to analyze: {}", file.display())
        }
        other => anyhow::Error::new(other),
    })?;

    match dispatch {
        Dispatch::Analyzed(AnalysisResult::Success(report)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&AnalysisResult::Success(report))?);
            } else {
                print_report(&report);
            }
            remember_file_folder(file);
            Ok(ExitCode::SUCCESS)
        }
        Dispatch::Analyzed(AnalysisResult::Failure { message }) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&AnalysisResult::Failure { message })?
                );
            } else {
                eprintln!("The file could not be analyzed: {}", message);
            }
            Ok(ExitCode::FAILURE)
        }
        Dispatch::Unsupported { extension } => {
            let supported = docprobe::supported_extensions()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "status": "unsupported",
                        "extension": extension,
                        "supported": supported,
                    }))?
                );
            } else {
                match extension {
                    Some(ext) => eprintln!("File format {} is not supported.", ext),
                    None => eprintln!("File has no extension; format cannot be determined."),
                }
                eprintln!("Supported formats: {}", supported.join(", "));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_report(report: &AnalysisReport) {
    if let Some(name) = report.stats.get("file_name").and_then(|v| v.as_str()) {
        println!("File: {}", name);
    }

    println!();
    println!("Statistics:");
    for (key, value) in &report.stats {
        if key == "file_name" {
            continue;
        }
        println!("  {}: {}", key, render_value(value));
    }

    if !report.text_sample.is_empty() {
        println!();
        println!("Text sample:");
        println!("{}", report.text_sample);
    }
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Best-effort settings update; a read-only config dir must not fail the run.
fn remember_file_folder(file: &Path) {
    let Some(path) = Settings::default_path() else {
        return;
    };

    let mut settings = Settings::load(&path).unwrap_or_default();
    settings.last_file_folder = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().into_owned());

    if let Err(err) = settings.save(&path) {
        tracing::warn!("could not save settings to {}: {}", path.display(), err);
    }
}

fn formats_command() -> Result<ExitCode> {
    docprobe::ensure_initialized()?;

    let registry = docprobe::plugins::registry::analyzer_registry()
        .read()
        .map_err(|e| anyhow::anyhow!("analyzer registry lock poisoned: {}", e))?;

    for analyzer in registry.analyzers() {
        println!(
            "{} {} ({})",
            analyzer.name(),
            analyzer.version(),
            analyzer.supported_extensions().join(", ")
        );
        if !analyzer.description().is_empty() {
            println!("  {}", analyzer.description());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn encoding_command(command: EncodingCommands) -> Result<ExitCode> {
    match command {
        EncodingCommands::Check { file } => {
            let report =
                docprobe::encoding::inspect_file(&file).with_context(|| format!("checking {}", file.display()))?;
            println!("{}: {}", file.display(), report.encoding);
            println!("  characters: {}", report.chars);
            println!("  cyrillic text: {}", if report.cyrillic { "yes" } else { "no" });
            Ok(ExitCode::SUCCESS)
        }
        EncodingCommands::Fix { file } => {
            let source =
                docprobe::encoding::convert_to_utf8(&file).with_context(|| format!("fixing {}", file.display()))?;
            println!("{}: {} -> UTF-8", file.display(), source);
            Ok(ExitCode::SUCCESS)
        }
        EncodingCommands::Create { file, text } => {
            let content = text.join(" ");
            docprobe::encoding::create_utf8_file(&file, &content)
                .with_context(|| format!("creating {}", file.display()))?;
            println!("Created: {}", file.display());
            Ok(ExitCode::SUCCESS)
        }
        EncodingCommands::Scan { dir } => {
            let findings =
                docprobe::encoding::scan_tree(&dir).with_context(|| format!("scanning {}", dir.display()))?;
            if findings.is_empty() {
                println!("No NUL-corrupted text files found.");
                return Ok(ExitCode::SUCCESS);
            }
            for finding in &findings {
                println!("{}: {} NUL bytes", finding.path.display(), finding.nul_bytes);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn update_command(manifest_path: &Path) -> Result<ExitCode> {
    let manifest = update::load_manifest(manifest_path)
        .with_context(|| format!("reading update manifest {}", manifest_path.display()))?;

    let available = update::check_updates(&manifest, &ComponentVersions::default());

    if available.is_empty() {
        println!("Everything is up to date.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} update(s) available:", available.len());
    for item in &available {
        println!(
            "  [{}] {} {} ({} KB)",
            match item.kind {
                update::UpdateKind::Core => "core",
                update::UpdateKind::Plugin => "plugin",
            },
            item.name,
            item.version,
            item.size_kb
        );
        if !item.description.is_empty() {
            println!("      {}", item.description);
        }
    }

    Ok(ExitCode::SUCCESS)
}
