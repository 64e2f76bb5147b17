//! Readers for FASTQ input.
//!
//! - [`fastq`]: bounded four-line record reader over plain or gzip input
//! - [`naming`]: one-shot detection of the read-naming convention
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastq_validator::parsing::fastq::{open_fastq, FastqReader};
//! use std::path::Path;
//!
//! let mut reader = FastqReader::new(open_fastq(Path::new("reads_1.fq.gz")).unwrap(), 1_024_000);
//! while let Some(record) = reader.next_record().unwrap() {
//!     println!("{} at byte {}", String::from_utf8_lossy(record.header), record.offset);
//! }
//! ```

pub mod fastq;
pub mod naming;
