use crate::core::record::lossy;
use crate::core::types::NamingConvention;
use crate::validation::error::ValidationError;

/// Derive the pairing key from a header line (terminator excluded).
///
/// - [`NamingConvention::Modern`]: the text between `@` and the first space.
/// - [`NamingConvention::Legacy`]: the text after `@` minus its last two
///   characters (the `/1` or `/2` mate suffix).
///
/// The returned slice borrows from `header`; callers copy it before the line
/// buffer is reused.
///
/// # Errors
///
/// Returns `ValidationError::MalformedHeader` if the header does not start
/// with `@`, has no space under the modern convention, or leaves an empty
/// name under the legacy convention.
///
/// # Examples
///
/// ```
/// use fastq_validator::core::read_name::extract_read_name;
/// use fastq_validator::core::types::NamingConvention;
///
/// let name = extract_read_name(b"@r1/1", NamingConvention::Legacy, 1).unwrap();
/// assert_eq!(name, b"r1");
///
/// let name = extract_read_name(b"@M1:7:FC:1:1:9:3 1:N:0:ACGT", NamingConvention::Modern, 1).unwrap();
/// assert_eq!(name, b"M1:7:FC:1:1:9:3");
/// ```
pub fn extract_read_name(
    header: &[u8],
    naming: NamingConvention,
    line: u64,
) -> Result<&[u8], ValidationError> {
    let malformed = || ValidationError::MalformedHeader {
        line,
        header: lossy(header),
    };

    let rest = header.strip_prefix(b"@").ok_or_else(malformed)?;

    match naming {
        NamingConvention::Modern => {
            let end = rest.iter().position(|&b| b == b' ').ok_or_else(malformed)?;
            Ok(&rest[..end])
        }
        NamingConvention::Legacy => match rest.len().checked_sub(2) {
            Some(len) if len > 0 => Ok(&rest[..len]),
            _ => Err(malformed()),
        },
    }
}
