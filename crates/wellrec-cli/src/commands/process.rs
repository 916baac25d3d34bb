//! Process command - extract records from a single well document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use wellrec_core::acquire::{TextAcquirer, TextSource};
use wellrec_core::extract::extract_document;
use wellrec_core::models::well::DocumentRecords;
use wellrec_core::orchestrator::{PersistOutcome, RecordOrchestrator};

use super::config::load_config;
use super::{format_records_text, open_store, save_extracted_text};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Never fall back to OCR
    #[arg(long)]
    no_ocr: bool,

    /// Save the acquired text into this directory
    #[arg(long)]
    save_text: Option<PathBuf>,

    /// Also store the records in the database
    #[arg(long)]
    persist: bool,

    /// Database file (overrides config)
    #[arg(short, long)]
    database: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

#[derive(Serialize)]
struct ProcessOutput<'a> {
    source: TextSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ocr_time_ms: Option<u64>,
    #[serde(flatten)]
    records: &'a DocumentRecords,
    #[serde(skip_serializing_if = "Option::is_none")]
    persisted: Option<PersistOutcome>,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );

    pb.set_message("Reading text...");
    let acquired = TextAcquirer::new(&config)
        .with_ocr(config.ocr.enabled && !args.no_ocr)
        .acquire(&args.input)?;
    debug!("Acquired {} characters ({})", acquired.text.len(), acquired.source);

    if let Some(dir) = &args.save_text {
        save_extracted_text(dir, &args.input, &acquired.text)?;
    }

    pb.set_message("Extracting records...");
    let records = extract_document(&acquired.text);

    let persisted = if args.persist {
        pb.set_message("Storing records...");
        let store = open_store(&config, args.database.as_ref(), false)?;
        Some(RecordOrchestrator::new(store).persist(&records)?)
    } else {
        None
    };

    pb.finish_and_clear();

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&ProcessOutput {
            source: acquired.source,
            page_count: acquired.page_count,
            ocr_time_ms: acquired.ocr_time_ms,
            records: &records,
            persisted,
        })?,
        OutputFormat::Text => {
            let mut text = format_records_text(&records);
            if let Some(outcome) = persisted {
                text.push_str(&format!("\nStored as well #{}", outcome.well_id));
                if let Some(id) = outcome.stimulation_id {
                    text.push_str(&format!(", stimulation #{}", id));
                }
                text.push('\n');
            }
            text
        }
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
