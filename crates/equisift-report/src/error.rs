use thiserror::Error;

/// Errors raised while building or delivering a screening report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("use_tls and use_ssl cannot both be enabled")]
    TlsConflict,

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
