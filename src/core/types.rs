use serde::{Deserialize, Serialize};

/// Read-identifier naming convention, decided once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// Pre-CASAVA 1.8 style: `@NAME/1`, mate suffix in the last two characters
    Legacy,
    /// CASAVA 1.8+ style: `@NAME 1:N:0:INDEX`, name ends at the first space
    Modern,
}

impl std::fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Modern => write!(f, "CASAVA 1.8"),
        }
    }
}

/// Which file of a run a pass reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mate {
    /// First file; populates the index
    First,
    /// Second file; drains the index
    Second,
}

impl std::fmt::Display for Mate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "file1"),
            Self::Second => write!(f, "file2"),
        }
    }
}
