use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] equisift_core::ValidationError),

    #[error("{0}")]
    Usage(String),

    #[error("ticker file '{path}': {source}")]
    TickerFile {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Report(#[from] equisift_report::ReportError),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Usage(_) => 2,
            Self::TickerFile { .. } | Self::Report(_) => 10,
        }
    }
}
