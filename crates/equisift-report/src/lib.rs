//! Screening report rendering and email delivery.
//!
//! Builds plain-text summaries of a
//! [`ScreeningOutcome`](equisift_core::ScreeningOutcome) (criteria, counts,
//! an aligned metrics table, per-ticker rejection reasons) and delivers
//! them over SMTP.

pub mod body;
pub mod email;
pub mod error;

pub use body::{build_body, build_subject};
pub use email::{build_message, send_report, EmailSettings};
pub use error::ReportError;
