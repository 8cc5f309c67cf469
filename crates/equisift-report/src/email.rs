//! SMTP delivery of screening reports.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::error::ReportError;

/// Configuration used to connect to an SMTP server.
#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Upgrade the connection with STARTTLS.
    pub use_tls: bool,
    /// Connect over implicit TLS.
    pub use_ssl: bool,
}

impl EmailSettings {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            username: None,
            password: None,
            use_tls: true,
            use_ssl: false,
        }
    }

    /// STARTTLS and implicit TLS are mutually exclusive.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.use_tls && self.use_ssl {
            return Err(ReportError::TlsConflict);
        }
        Ok(())
    }
}

/// Construct an email message ready for sending.
pub fn build_message(
    sender: &str,
    recipient: &str,
    subject: &str,
    body: &str,
) -> Result<Message, ReportError> {
    let from: Mailbox = sender.parse()?;
    let to: Mailbox = recipient.parse()?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .body(body.to_owned())
        .map_err(ReportError::from)
}

/// Send `message` using the provided SMTP `settings`.
pub fn send_report(message: &Message, settings: &EmailSettings) -> Result<(), ReportError> {
    settings.validate()?;

    let mut builder = if settings.use_ssl {
        SmtpTransport::relay(&settings.host)?
    } else if settings.use_tls {
        SmtpTransport::starttls_relay(&settings.host)?
    } else {
        SmtpTransport::builder_dangerous(&settings.host)
    };

    builder = builder.port(settings.port);

    if let Some(username) = &settings.username {
        builder = builder.credentials(Credentials::new(
            username.clone(),
            settings.password.clone().unwrap_or_default(),
        ));
    }

    builder.build().send(message)?;
    Ok(())
}
