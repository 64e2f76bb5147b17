//! Shared constants and small helpers.

pub mod limits;
