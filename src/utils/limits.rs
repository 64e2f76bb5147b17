//! Centralized limits and defaults.

/// Shortest sequence accepted in a record
pub const MIN_READ_LENGTH: usize = 15;

/// Longest line accepted, terminator excluded
pub const MAX_LINE_LENGTH: usize = 1_024_000;

/// Default number of buckets in the read-name index, sized for runs of tens of
/// millions of reads. Odd but not prime (23 * 826087).
pub const DEFAULT_BUCKET_COUNT: usize = 19_000_001;

/// Number of records between progress log lines
pub const PROGRESS_INTERVAL: u64 = 500_000;

/// Number of orphaned reads quoted in an `OrphanedReads` error
pub const MAX_REPORTED_ORPHANS: usize = 5;
