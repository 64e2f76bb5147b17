use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::types::NamingConvention;
use crate::parsing::fastq::open_fastq;
use crate::utils::limits::{
    DEFAULT_BUCKET_COUNT, MAX_LINE_LENGTH, MIN_READ_LENGTH, PROGRESS_INTERVAL,
};
use crate::validation::engine::{ValidationReport, Validator, ValidatorConfig};

#[derive(Args)]
pub struct ValidateArgs {
    /// FASTQ file to validate (plain or gzip); file 1 of a pair
    #[arg(required = true)]
    pub file1: PathBuf,

    /// Mate file; every read must pair 1:1 with a read in FILE1
    pub file2: Option<PathBuf>,

    /// Read-naming convention (sniffed from the first header of FILE1 by default)
    #[arg(long, value_enum)]
    pub naming: Option<NamingConvention>,

    /// Minimum sequence length
    #[arg(long, default_value_t = MIN_READ_LENGTH)]
    pub min_read_length: usize,

    /// Maximum line length in bytes
    #[arg(long, default_value_t = MAX_LINE_LENGTH, value_parser = parse_positive)]
    pub max_line_length: usize,

    /// Number of buckets in the read-name index
    #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT, value_parser = parse_positive)]
    pub bucket_count: usize,

    /// Reads between progress messages (shown with --verbose; 0 disables)
    #[arg(long, default_value_t = PROGRESS_INTERVAL)]
    pub progress_interval: u64,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl ValidateArgs {
    fn config(&self) -> ValidatorConfig {
        ValidatorConfig {
            min_read_length: self.min_read_length,
            max_line_length: self.max_line_length,
            bucket_count: self.bucket_count,
            progress_interval: self.progress_interval,
            naming: self.naming,
        }
    }

    fn inputs(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.file1.as_path()).chain(self.file2.as_deref())
    }
}

/// Execute a validation run
///
/// # Errors
///
/// Returns an error describing the first defect found, or the file that
/// could not be opened.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Fail before indexing if either file is unreadable
    for path in args.inputs() {
        open_fastq(path).with_context(|| format!("Cannot read {}", path.display()))?;
    }

    let config = args.config();
    let mut validator = Validator::for_file(config, &args.file1)
        .with_context(|| format!("Cannot sniff read naming in {}", args.file1.display()))?;

    info!("Read naming: {}", validator.naming());
    info!("Index buckets: {}", validator.index().bucket_count());

    let indexed = validator
        .index_file(&args.file1)
        .with_context(|| format!("Validation of {} failed", args.file1.display()))?;
    let index_memory_bytes = validator.index().memory_usage();

    if let OutputFormat::Text = format {
        println!("Reads processed: {}", indexed.records);
        println!(
            "Memory used in indexing: ~{} MB",
            index_memory_bytes / 1024 / 1024
        );
    }

    let mut report = ValidationReport {
        file1: args.file1.display().to_string(),
        file2: None,
        naming_convention: validator.naming(),
        file1_records: indexed.records,
        file2_records: None,
        bucket_count: validator.index().bucket_count(),
        index_memory_bytes,
    };

    if let Some(file2) = &args.file2 {
        if let OutputFormat::Text = format {
            println!("File {} processed", args.file1.display());
            println!("Next file {}", file2.display());
        }

        let paired = validator
            .pair_file(file2)
            .with_context(|| format!("Validation of {} failed", file2.display()))?;

        if let OutputFormat::Text = format {
            println!("Reads paired: {}", paired.records);
        }
        report.file2 = Some(file2.display().to_string());
        report.file2_records = Some(paired.records);
    }

    if verbose {
        eprintln!(
            "Validated {} read(s) using {} naming",
            report.file1_records, report.naming_convention
        );
    }

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    println!("OK");

    Ok(())
}
