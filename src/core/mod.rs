//! Core record types.
//!
//! - [`Record`](record::Record): one four-line FASTQ record and its structural checks
//! - [`extract_read_name`](read_name::extract_read_name): pairing key from a header line
//! - [`NamingConvention`](types::NamingConvention), [`Mate`](types::Mate): run metadata
//!
//! ## Read Naming
//!
//! | Convention | File 1 header | File 2 header | Key |
//! |------------|---------------|---------------|-----|
//! | Legacy     | `@r1/1`       | `@r1/2`       | `r1` |
//! | Modern (CASAVA 1.8) | `@r1 1:N:0:ACGT` | `@r1 2:N:0:ACGT` | `r1` |

pub mod read_name;
pub mod record;
pub mod types;
