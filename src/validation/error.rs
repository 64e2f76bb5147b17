use std::path::PathBuf;

use thiserror::Error;

use crate::index::hash_index::IndexError;

/// A file-1 read that never met its mate, quoted in [`ValidationError::OrphanedReads`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orphan {
    pub name: String,
    pub file_offset: u64,
}

impl std::fmt::Display for Orphan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (byte {})", self.name, self.file_offset)
    }
}

fn format_orphans(orphans: &[Orphan]) -> String {
    orphans
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fatal conditions found while validating FASTQ input.
///
/// Line numbers are 1-based and point at the offending line.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Unable to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error line {line}: malformed sequence identifier '{header}'")]
    MalformedHeader { line: u64, header: String },

    #[error("Error line {line}: invalid character '{character}', expected ACGTacgt0123nN")]
    InvalidSequenceChar { line: u64, character: char },

    #[error("Error line {line}: read length too small - {length} < {min}")]
    ReadTooShort { line: u64, length: usize, min: usize },

    #[error("Error line {line}: separator line must be a lone '+', found '{separator}'")]
    MalformedSeparator { line: u64, separator: String },

    #[error(
        "Error line {line}: sequence and quality don't have the same length {sequence_len}!={quality_len}"
    )]
    QualityLengthMismatch {
        line: u64,
        sequence_len: usize,
        quality_len: usize,
    },

    #[error("Error line {line}: duplicated sequence {name}")]
    DuplicateRead { line: u64, name: String },

    #[error("Error line {line}: file truncated?")]
    TruncatedFile { line: u64 },

    #[error("Error line {line}: unpaired read - {name}")]
    UnpairedRead { line: u64, name: String },

    #[error("found {count} unpaired reads from file1, e.g. {}", format_orphans(.examples))]
    OrphanedReads { count: usize, examples: Vec<Orphan> },

    #[error("Error line {line}: line longer than {limit} bytes")]
    LineTooLong { line: u64, limit: usize },

    #[error("Read index is full: cannot hold more than {capacity} reads")]
    IndexFull { capacity: usize },
}

impl ValidationError {
    /// Map an index insertion failure for the record starting at `line`
    pub(crate) fn from_insert(err: IndexError, line: u64) -> Self {
        match err {
            IndexError::DuplicateKey { name } => Self::DuplicateRead { line, name },
            IndexError::CapacityExceeded { capacity } => Self::IndexFull { capacity },
        }
    }
}
