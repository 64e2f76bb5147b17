//! Command-line interface for fastq-validator.
//!
//! ## Usage
//!
//! ```text
//! # Check one file for structure and duplicate read names
//! fastq-validator reads.fq
//!
//! # Check a pair of files, including 1:1 mate pairing
//! fastq-validator sample_R1.fq.gz sample_R2.fq.gz
//!
//! # Force the naming convention instead of sniffing it
//! fastq-validator --naming legacy reads_1.fq reads_2.fq
//!
//! # JSON summary for scripting
//! fastq-validator --format json reads_1.fq reads_2.fq
//! ```
//!
//! The last line on stdout is `OK` on success. Any defect is reported on
//! stderr and the process exits with status 1.

use clap::Parser;

pub mod validate;

#[derive(Parser)]
#[command(name = "fastq-validator")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Validate single or paired-end FASTQ files")]
#[command(
    long_about = "fastq-validator checks FASTQ files before they enter a pipeline.\n\nEvery record must have an @ identifier, a sequence of ACGTacgt0123nN, a lone + separator and a quality line of the same length. Read names must be unique. When two files are given, every read must have exactly one mate in the other file."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: validate::ValidateArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
