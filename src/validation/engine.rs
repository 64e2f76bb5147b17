use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::read_name::extract_read_name;
use crate::core::record::{lossy, Record};
use crate::core::types::{Mate, NamingConvention};
use crate::index::hash_index::HashIndex;
use crate::parsing::fastq::{open_fastq, FastqReader};
use crate::parsing::naming::sniff_naming_convention;
use crate::utils::limits::{
    DEFAULT_BUCKET_COUNT, MAX_LINE_LENGTH, MAX_REPORTED_ORPHANS, MIN_READ_LENGTH,
    PROGRESS_INTERVAL,
};
use crate::validation::error::{Orphan, ValidationError};

/// Configuration for a validation run
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Shortest sequence accepted
    pub min_read_length: usize,
    /// Longest line accepted, terminator excluded
    pub max_line_length: usize,
    /// Number of buckets in the read-name index
    pub bucket_count: usize,
    /// Records between progress log lines (0 disables progress)
    pub progress_interval: u64,
    /// Naming convention to use; sniffed from file 1 when `None`
    pub naming: Option<NamingConvention>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_read_length: MIN_READ_LENGTH,
            max_line_length: MAX_LINE_LENGTH,
            bucket_count: DEFAULT_BUCKET_COUNT,
            progress_interval: PROGRESS_INTERVAL,
            naming: None,
        }
    }
}

/// Counters for one pass over a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub records: u64,
    pub bytes: u64,
}

/// Summary of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub file1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file2: Option<String>,
    pub naming_convention: NamingConvention,
    pub file1_records: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file2_records: Option<u64>,
    pub bucket_count: usize,
    /// Approximate bytes held by the index once file 1 was loaded
    pub index_memory_bytes: usize,
}

/// Validate each record, extract its name and hand both to `on_read`
fn scan<R, F>(
    reader: &mut FastqReader<R>,
    mate: Mate,
    naming: NamingConvention,
    config: &ValidatorConfig,
    mut on_read: F,
) -> Result<PassStats, ValidationError>
where
    R: BufRead,
    F: FnMut(&[u8], &Record<'_>) -> Result<(), ValidationError>,
{
    while let Some(record) = reader.next_record()? {
        record.validate(config.min_read_length)?;
        let name = extract_read_name(record.header, naming, record.line)?;
        on_read(name, &record)?;

        let records = reader.records_read();
        if config.progress_interval > 0 && records % config.progress_interval == 0 {
            info!("{mate}: {records} reads processed");
        }
    }

    Ok(PassStats {
        records: reader.records_read(),
        bytes: reader.bytes_read(),
    })
}

/// Index every read of file 1.
///
/// # Errors
///
/// Returns the first record-level failure, `ValidationError::DuplicateRead`
/// for a name already indexed, or `ValidationError::IndexFull`.
pub fn index_reads<R: BufRead>(
    reader: &mut FastqReader<R>,
    index: &mut HashIndex,
    naming: NamingConvention,
    config: &ValidatorConfig,
) -> Result<PassStats, ValidationError> {
    scan(reader, Mate::First, naming, config, |name, record| {
        index
            .insert(name, record.offset)
            .map_err(|e| ValidationError::from_insert(e, record.line))
    })
}

/// Match every read of file 2 against the index, draining it.
///
/// The index must hold all of file 1 before this runs. On success the index
/// is empty.
///
/// # Errors
///
/// Returns the first record-level failure, `ValidationError::UnpairedRead`
/// for a read with no remaining mate, or `ValidationError::OrphanedReads`
/// if file-1 reads remain once file 2 is exhausted.
pub fn pair_reads<R: BufRead>(
    reader: &mut FastqReader<R>,
    index: &mut HashIndex,
    naming: NamingConvention,
    config: &ValidatorConfig,
) -> Result<PassStats, ValidationError> {
    let stats = scan(reader, Mate::Second, naming, config, |name, record| {
        match index.lookup(name) {
            Some(handle) => {
                index.remove(handle);
                Ok(())
            }
            None => Err(ValidationError::UnpairedRead {
                line: record.line,
                name: lossy(name),
            }),
        }
    })?;

    if !index.is_empty() {
        return Err(ValidationError::OrphanedReads {
            count: index.len(),
            examples: index
                .entries()
                .take(MAX_REPORTED_ORPHANS)
                .map(|e| Orphan {
                    name: e.name_lossy(),
                    file_offset: e.file_offset,
                })
                .collect(),
        });
    }

    Ok(stats)
}

/// Runs the indexing pass over file 1 and the pairing pass over file 2.
///
/// ```rust,no_run
/// use fastq_validator::validation::engine::{Validator, ValidatorConfig};
/// use std::path::Path;
///
/// let file1 = Path::new("reads_1.fq");
/// let mut validator = Validator::for_file(ValidatorConfig::default(), file1).unwrap();
/// validator.index_file(file1).unwrap();
/// validator.pair_file(Path::new("reads_2.fq")).unwrap();
/// ```
#[derive(Debug)]
pub struct Validator {
    config: ValidatorConfig,
    naming: NamingConvention,
    index: HashIndex,
}

impl Validator {
    #[must_use]
    pub fn new(config: ValidatorConfig, naming: NamingConvention) -> Self {
        let index = HashIndex::new(config.bucket_count);
        Self {
            config,
            naming,
            index,
        }
    }

    /// Build a validator, sniffing the naming convention from `file1` unless
    /// the config fixes one.
    ///
    /// # Errors
    ///
    /// Returns an error if `file1` cannot be opened or its first line read.
    pub fn for_file(config: ValidatorConfig, file1: &Path) -> Result<Self, ValidationError> {
        let naming = match config.naming {
            Some(naming) => naming,
            None => sniff_naming_convention(file1, config.max_line_length)?,
        };
        Ok(Self::new(config, naming))
    }

    #[must_use]
    pub fn naming(&self) -> NamingConvention {
        self.naming
    }

    #[must_use]
    pub fn index(&self) -> &HashIndex {
        &self.index
    }

    /// Validate file 1 and load its read names into the index.
    ///
    /// # Errors
    ///
    /// See [`index_reads`].
    pub fn index_file(&mut self, path: &Path) -> Result<PassStats, ValidationError> {
        let start = Instant::now();
        let mut reader = FastqReader::new(open_fastq(path)?, self.config.max_line_length);
        let stats = index_reads(&mut reader, &mut self.index, self.naming, &self.config)?;

        if stats.records == 0 {
            warn!("{} contains no reads", path.display());
        }
        debug!(
            "Indexed {} reads ({} bytes) from {} in {:.1?}",
            stats.records,
            stats.bytes,
            path.display(),
            start.elapsed()
        );
        Ok(stats)
    }

    /// Validate file 2 and require it to pair 1:1 with the indexed reads.
    ///
    /// # Errors
    ///
    /// See [`pair_reads`].
    pub fn pair_file(&mut self, path: &Path) -> Result<PassStats, ValidationError> {
        let start = Instant::now();
        let mut reader = FastqReader::new(open_fastq(path)?, self.config.max_line_length);
        let stats = pair_reads(&mut reader, &mut self.index, self.naming, &self.config)?;

        debug!(
            "Paired {} reads ({} bytes) from {} in {:.1?}",
            stats.records,
            stats.bytes,
            path.display(),
            start.elapsed()
        );
        Ok(stats)
    }
}
