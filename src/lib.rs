//! # fastq-validator
//!
//! A preflight checker for single and paired-end FASTQ files.
//!
//! Sequencing pipelines are expensive to run and slow to fail. This crate
//! streams FASTQ input once per file and stops at the first defect:
//!
//! - **Structure**: every record has four lines, an `@` identifier, a lone `+`
//!   separator, and equal-length sequence and quality
//! - **Content**: sequences use `ACGTacgt0123nN` and meet a minimum length
//! - **Uniqueness**: no read name appears twice in file 1
//! - **Pairing**: with two files, every read has exactly one mate
//!
//! Read names are kept in a purpose-built hash index so duplicate and mate
//! checks stay constant time over tens of millions of reads.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastq_validator::{Validator, ValidatorConfig};
//! use std::path::Path;
//!
//! let (r1, r2) = (Path::new("sample_R1.fq.gz"), Path::new("sample_R2.fq.gz"));
//! let mut validator = Validator::for_file(ValidatorConfig::default(), r1).unwrap();
//! let indexed = validator.index_file(r1).unwrap();
//! let paired = validator.pair_file(r2).unwrap();
//! assert_eq!(indexed.records, paired.records);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record type, structural checks and read-name extraction
//! - [`index`]: Read-name hash index
//! - [`parsing`]: FASTQ line reader and naming-convention detection
//! - [`validation`]: Indexing and pairing passes, errors
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod parsing;
pub mod utils;
pub mod validation;

// Re-export commonly used types for convenience
pub use core::types::NamingConvention;
pub use index::hash_index::HashIndex;
pub use validation::engine::{PassStats, ValidationReport, Validator, ValidatorConfig};
pub use validation::error::ValidationError;
