//! Batch processing command for a folder of well documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use wellrec_core::acquire::{AcquiredText, TextAcquirer, TextSource};
use wellrec_core::extract::DocumentExtractor;
use wellrec_core::models::well::DocumentRecords;
use wellrec_core::orchestrator::{PersistOutcome, RecordOrchestrator};
use wellrec_core::store::WellStore;
use wellrec_core::RecordExtractor;

use super::config::load_config;
use super::{open_store, save_extracted_text};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input folder or glob pattern
    #[arg(required = true)]
    input: String,

    /// Database file (overrides config)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Extract only, do not write to the database
    #[arg(long)]
    dry_run: bool,

    /// Write a per-file summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Save the acquired text of every file into this directory
    #[arg(long)]
    save_text: Option<PathBuf>,

    /// Never fall back to OCR
    #[arg(long)]
    no_ocr: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    source: Option<TextSource>,
    page_count: Option<u32>,
    ocr_time_ms: Option<u64>,
    records: Option<DocumentRecords>,
    outcome: Option<PersistOutcome>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files = collect_inputs(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("No PDF or text files found for: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let acquirer = TextAcquirer::new(&config).with_ocr(config.ocr.enabled && !args.no_ocr);
    let extractor = DocumentExtractor::new();
    let orchestrator = RecordOrchestrator::new(open_store(
        &config,
        args.database.as_ref(),
        args.dry_run,
    )?);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        pb.set_message(
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
        );
        info!("Processing document: {}", path.display());

        let mut result = ProcessResult {
            path: path.clone(),
            source: None,
            page_count: None,
            ocr_time_ms: None,
            records: None,
            outcome: None,
            error: None,
            processing_time_ms: 0,
        };

        match process_single_file(&path, &acquirer, &extractor, &orchestrator, &args) {
            Ok((acquired, records, outcome)) => {
                result.source = Some(acquired.source);
                result.page_count = acquired.page_count;
                result.ocr_time_ms = acquired.ocr_time_ms;
                result.records = Some(records);
                result.outcome = Some(outcome);
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    result.error = Some(error_msg);
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        result.processing_time_ms = file_start.elapsed().as_millis() as u64;
        results.push(result);
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful = results.iter().filter(|r| r.error.is_none()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let stimulations = results
        .iter()
        .filter(|r| r.outcome.is_some_and(|o| o.stimulation_id.is_some()))
        .count();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed, {} with stimulation data",
        style(successful).green(),
        style(failed.len()).red(),
        style(stimulations).cyan()
    );

    if args.dry_run {
        println!("   {}", style("dry run: nothing was written").yellow());
    } else {
        let counts = orchestrator.store().counts()?;
        println!(
            "   database now holds {} wells, {} stimulation records",
            counts.wells, counts.stimulations
        );
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Files to process: the `.pdf`/`.txt` files of a folder, or a glob's matches.
fn collect_inputs(input: &str) -> anyhow::Result<Vec<PathBuf>> {
    let input_path = Path::new(input);

    let mut files: Vec<PathBuf> = if input_path.is_dir() {
        fs::read_dir(input_path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect()
    } else {
        glob(input)?.filter_map(|r| r.ok()).collect()
    };

    files.retain(|p| is_supported(p));
    files.sort();
    Ok(files)
}

fn is_supported(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
}

fn process_single_file<S: WellStore>(
    path: &Path,
    acquirer: &TextAcquirer,
    extractor: &DocumentExtractor,
    orchestrator: &RecordOrchestrator<S>,
    args: &BatchArgs,
) -> anyhow::Result<(AcquiredText, DocumentRecords, PersistOutcome)> {
    let acquired = acquirer.acquire(path)?;

    if let Some(dir) = &args.save_text {
        save_extracted_text(dir, path, &acquired.text)?;
    }

    let records = extractor.extract(&acquired.text);
    let outcome = orchestrator.persist(&records)?;

    Ok((acquired, records, outcome))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "source",
        "api_number",
        "well_name",
        "date_stimulated",
        "stimulated_formation",
        "well_id",
        "stimulation_id",
        "pages",
        "ocr_time_ms",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let source = result.source.map(|s| s.to_string()).unwrap_or_default();
        let time_ms = result.processing_time_ms.to_string();
        let pages = result.page_count.map(|p| p.to_string()).unwrap_or_default();
        let ocr_ms = result.ocr_time_ms.map(|t| t.to_string()).unwrap_or_default();

        match (&result.records, result.outcome) {
            (Some(records), Some(outcome)) => {
                wtr.write_record([
                    filename,
                    "success",
                    &source,
                    records.well.api_number.as_deref().unwrap_or(""),
                    records.well.well_name.as_deref().unwrap_or(""),
                    &records
                        .stimulation
                        .date_stimulated
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                    records
                        .stimulation
                        .stimulated_formation
                        .as_deref()
                        .unwrap_or(""),
                    &outcome.well_id.to_string(),
                    &outcome
                        .stimulation_id
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                    &pages,
                    &ocr_ms,
                    &time_ms,
                    "",
                ])?;
            }
            _ => {
                wtr.write_record([
                    filename,
                    "error",
                    &source,
                    "",
                    "",
                    "",
                    "",
                    "",
                    "",
                    &pages,
                    &ocr_ms,
                    &time_ms,
                    result.error.as_deref().unwrap_or(""),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
