//! Error taxonomy for the analysis pipeline.
//!
//! Parse and missing-column failures are fatal to the running analysis and
//! surface to the caller. Cell-level numeric coercion failures are absorbed
//! as missing cells and never reach this type; an empty filter or join
//! result is not an error either.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The byte stream for a table was not well-formed CSV.
    #[error("malformed CSV in '{table}' table: {source}")]
    Parse {
        table: String,
        #[source]
        source: csv::Error,
    },

    /// A table file could not be opened or read.
    #[error("failed to read '{table}' table: {source}")]
    Io {
        table: String,
        #[source]
        source: std::io::Error,
    },

    /// A column required by a pipeline stage is absent from its table.
    #[error("column '{column}' missing from '{table}' table")]
    MissingColumn { table: String, column: String },

    /// Joining two tables would produce duplicate non-key columns.
    #[error("duplicate non-key column '{column}' joining '{left}' and '{right}'")]
    DuplicateColumn {
        left: String,
        right: String,
        column: String,
    },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
