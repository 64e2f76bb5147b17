//! Validation passes over one or two FASTQ files.
//!
//! A run is two strictly ordered passes sharing one
//! [`HashIndex`](crate::index::hash_index::HashIndex):
//!
//! 1. **Indexing** ([`engine::index_reads`]): every record of file 1 is
//!    validated and its read name inserted. A name seen twice is fatal.
//! 2. **Pairing** ([`engine::pair_reads`]): every record of file 2 is
//!    validated and its name looked up and removed. A miss is fatal, and so
//!    is any name left in the index once file 2 ends.
//!
//! The first error ends the run; nothing is repaired or skipped.
//!
//! ## Errors
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | `MalformedHeader` | header lacks `@`, is empty, or yields no read name |
//! | `InvalidSequenceChar` | sequence byte outside `ACGTacgt0123nN` |
//! | `ReadTooShort` | sequence shorter than the minimum read length |
//! | `MalformedSeparator` | separator line is not a lone `+` |
//! | `QualityLengthMismatch` | quality and sequence lengths differ |
//! | `DuplicateRead` | read name repeated in file 1 |
//! | `TruncatedFile` | input ends inside a record |
//! | `UnpairedRead` | file-2 read without a remaining mate |
//! | `OrphanedReads` | file-1 reads left over after file 2 |
//! | `LineTooLong` | line longer than the configured bound |

pub mod engine;
pub mod error;
