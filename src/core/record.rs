use crate::validation::error::ValidationError;

/// One four-line FASTQ record, borrowed from the reader's line buffers.
///
/// Lines exclude their terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub header: &'a [u8],
    pub sequence: &'a [u8],
    pub separator: &'a [u8],
    pub quality: &'a [u8],

    /// 1-based line number of the header
    pub line: u64,

    /// Byte offset of the header in the (decompressed) input
    pub offset: u64,
}

/// Bytes allowed in a sequence line: bases, colour-space digits and N
#[must_use]
#[inline]
pub fn is_sequence_byte(b: u8) -> bool {
    matches!(
        b,
        b'A' | b'C'
            | b'G'
            | b'T'
            | b'a'
            | b'c'
            | b'g'
            | b't'
            | b'0'
            | b'1'
            | b'2'
            | b'3'
            | b'n'
            | b'N'
    )
}

pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl Record<'_> {
    /// Check the record's structure and content.
    ///
    /// Checks run in order: identifier, sequence alphabet, sequence length,
    /// separator, quality length. The first failure is returned.
    ///
    /// The separator must be a lone `+`. Repeating the identifier after the
    /// `+`, which FASTQ otherwise allows, is rejected.
    ///
    /// # Errors
    ///
    /// Returns `MalformedHeader`, `InvalidSequenceChar`, `ReadTooShort`,
    /// `MalformedSeparator` or `QualityLengthMismatch`.
    pub fn validate(&self, min_read_length: usize) -> Result<(), ValidationError> {
        if self.header.first() != Some(&b'@') || self.header.len() < 2 {
            return Err(ValidationError::MalformedHeader {
                line: self.line,
                header: lossy(self.header),
            });
        }

        if let Some(&bad) = self.sequence.iter().find(|&&b| !is_sequence_byte(b)) {
            return Err(ValidationError::InvalidSequenceChar {
                line: self.line + 1,
                character: char::from(bad),
            });
        }

        let sequence_len = self.sequence.len();
        if sequence_len < min_read_length {
            return Err(ValidationError::ReadTooShort {
                line: self.line + 1,
                length: sequence_len,
                min: min_read_length,
            });
        }

        if self.separator != b"+" {
            return Err(ValidationError::MalformedSeparator {
                line: self.line + 2,
                separator: lossy(self.separator),
            });
        }

        let quality_len = self.quality.len();
        if quality_len != sequence_len {
            return Err(ValidationError::QualityLengthMismatch {
                line: self.line + 3,
                sequence_len,
                quality_len,
            });
        }

        Ok(())
    }
}
