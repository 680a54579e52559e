//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// `MalformedRow` is the only failure the loader itself produces. Rows that are
/// merely unusable (too short, unknown kind) are skipped and never surface here.
/// `Csv` and `Io` belong to the reader adapter sitting in front of the loader.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A numeric field of a source row could not be parsed. Aborts the load.
    #[error("malformed row {row}: field `{field}` has invalid value {value:?} ({reason})")]
    MalformedRow {
        /// 1-based position of the row in the source.
        row: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The delimited-text reader rejected the input.
    #[error("csv error: {0}")]
    Csv(String),

    /// The underlying source could not be opened or read.
    #[error("io error: {0}")]
    Io(String),
}

impl CatalogError {
    pub fn malformed_row(
        row: usize,
        field: &'static str,
        value: impl Into<String>,
        reason: impl core::fmt::Display,
    ) -> Self {
        Self::MalformedRow {
            row,
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub fn csv(msg: impl Into<String>) -> Self {
        Self::Csv(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Whether this error came from row content rather than from reading the source.
    pub fn is_malformed_row(&self) -> bool {
        matches!(self, Self::MalformedRow { .. })
    }
}
