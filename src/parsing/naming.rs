//! Sniffing of the read-naming convention from the first header of a file.
//!
//! CASAVA 1.8 and later write headers such as
//! `@EAS139:136:FC706VJ:2:2104:15343:197393 1:Y:18:ATCACG`: the read name, a
//! space, then `<mate>:<filtered>:<control>:<index>`. Anything else is treated
//! as the legacy `@NAME/1` layout.

use std::path::Path;
use std::sync::OnceLock;

use regex::bytes::Regex;
use tracing::debug;

use crate::core::types::NamingConvention;
use crate::parsing::fastq::first_line;
use crate::validation::error::ValidationError;

const CASAVA_18_PATTERN: &str = r"[A-Z0-9:]* [12]:[YN]:[0-9]*:";

fn casava_18() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CASAVA_18_PATTERN).expect("CASAVA 1.8 pattern is valid"))
}

/// Classify a header line as legacy or modern naming
#[must_use]
pub fn detect_naming_convention(header: &[u8]) -> NamingConvention {
    if casava_18().is_match(header) {
        NamingConvention::Modern
    } else {
        NamingConvention::Legacy
    }
}

/// Classify the naming convention of a file from its first line.
///
/// An empty file is reported as legacy.
///
/// # Errors
///
/// Returns `ValidationError::Open` if the file cannot be opened, or an I/O
/// or line-length error while reading the first line.
pub fn sniff_naming_convention(
    path: &Path,
    max_line_length: usize,
) -> Result<NamingConvention, ValidationError> {
    let naming = first_line(path, max_line_length)?
        .map_or(NamingConvention::Legacy, |line| detect_naming_convention(&line));
    debug!("Detected {} read naming in {}", naming, path.display());
    Ok(naming)
}
