use models::semester::SemesterError;
use sea_orm::DbErr;
use thiserror::Error;

/// Error taxonomy of the importer
///
/// `Config` and `Validation` are fatal for the run or the file; `Db`
/// aborts the enclosing transaction. Per-record recoverable issues are
/// logged and counted instead of surfacing here.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error(transparent)]
    Semester(#[from] SemesterError),

    #[error("schema validation failed for {path}:\n{}", violations.join("\n"))]
    Validation {
        path: String,
        violations: Vec<String>,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
