//! Handing the finished report to its recipients.
//!
//! [`Notifier`] is the async trait for delivering a written artifact.
//! [`LogNotifier`] only records the handoff in the log.
//! [`HttpNotifier`] posts the artifact to a webhook endpoint.

use anyhow::{Result, ensure};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use std::path::Path;
use tracing::info;

use crate::fetch::HttpClient;

pub const SENDER_HEADER: HeaderName = HeaderName::from_static("x-report-sender");
pub const RECIPIENTS_HEADER: HeaderName = HeaderName::from_static("x-report-recipients");

/// Delivers a report file that has already been fully written.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, artifact: &Path, sender: &str, recipients: &[String]) -> Result<()>;
}

fn check_handoff(artifact: &Path, recipients: &[String]) -> Result<()> {
    ensure!(!recipients.is_empty(), "no recipients given for report delivery");
    ensure!(
        artifact.is_file(),
        "report artifact {} does not exist",
        artifact.display()
    );
    Ok(())
}

pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, artifact: &Path, sender: &str, recipients: &[String]) -> Result<()> {
        check_handoff(artifact, recipients)?;
        info!(
            artifact = %artifact.display(),
            sender,
            recipients = %recipients.join(","),
            "Report handed off for delivery"
        );
        Ok(())
    }
}

/// Posts the artifact as `text/csv` to `endpoint`, with sender and
/// recipients carried in request headers.
pub struct HttpNotifier<C: HttpClient> {
    client: C,
    endpoint: String,
}

impl<C: HttpClient> HttpNotifier<C> {
    pub fn new(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl<C: HttpClient> Notifier for HttpNotifier<C> {
    async fn deliver(&self, artifact: &Path, sender: &str, recipients: &[String]) -> Result<()> {
        check_handoff(artifact, recipients)?;
        let body = std::fs::read(artifact)?;
        let size = body.len();

        let mut req = reqwest::Request::new(reqwest::Method::POST, self.endpoint.parse()?);
        let headers = req.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/csv"));
        headers.insert(SENDER_HEADER, HeaderValue::from_str(sender)?);
        headers.insert(RECIPIENTS_HEADER, HeaderValue::from_str(&recipients.join(","))?);
        *req.body_mut() = Some(body.into());

        self.client.execute(req).await?.error_for_status()?;

        info!(endpoint = %self.endpoint, bytes = size, "Report delivered");
        Ok(())
    }
}
