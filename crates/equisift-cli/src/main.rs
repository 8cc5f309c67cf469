mod cli;
mod error;
mod output;
mod tickers;

use std::sync::Arc;

use clap::Parser;
use time::OffsetDateTime;

use equisift_core::{
    DataRepository, FilterCriteria, InMemoryCache, ReqwestHttpClient, ScreeningEngine,
    ScreeningOutcome, SnapshotCache, YahooFinanceSource,
};
use equisift_report::{build_body, build_message, build_subject, send_report, EmailSettings};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let tickers = tickers::resolve(cli.tickers.as_deref(), cli.ticker_file.as_deref())?;
    let criteria = FilterCriteria::from_thresholds(&cli.thresholds());

    let http_client = Arc::new(ReqwestHttpClient::new());
    let source = Arc::new(YahooFinanceSource::with_http_client(http_client));
    let cache = if cli.no_cache {
        None
    } else {
        Some(Arc::new(InMemoryCache::new()) as Arc<dyn SnapshotCache>)
    };
    let engine = ScreeningEngine::new(DataRepository::new(source, cache));

    let outcome = engine.screen(&tickers, &criteria).await;

    output::render(&outcome);

    if let Some(recipient) = &cli.email_to {
        send_email_report(&cli, recipient, &criteria, &outcome)?;
        println!("\nEmail report sent to {recipient}.");
    }

    Ok(())
}

fn send_email_report(
    cli: &Cli,
    recipient: &str,
    criteria: &FilterCriteria,
    outcome: &ScreeningOutcome,
) -> Result<(), CliError> {
    let sender = cli.email_from.as_deref().ok_or_else(|| {
        CliError::Usage(String::from(
            "--email-from is required when --email-to is specified",
        ))
    })?;
    let host = cli.smtp_host.as_deref().ok_or_else(|| {
        CliError::Usage(String::from(
            "--smtp-host is required when --email-to is specified",
        ))
    })?;
    if cli.smtp_use_ssl && cli.smtp_use_tls {
        return Err(CliError::Usage(String::from(
            "Use either --smtp-use-ssl or --smtp-use-tls, not both",
        )));
    }

    let subject = cli
        .email_subject
        .clone()
        .unwrap_or_else(|| build_subject(OffsetDateTime::now_utc()));
    let body = build_body(criteria, outcome);
    let message = build_message(sender, recipient, &subject, &body)?;

    let settings = EmailSettings {
        host: host.to_owned(),
        port: cli.smtp_port,
        username: cli.smtp_username.clone(),
        password: cli.smtp_password.clone(),
        use_tls: cli.smtp_use_tls,
        use_ssl: cli.smtp_use_ssl,
    };

    send_report(&message, &settings)?;
    Ok(())
}
