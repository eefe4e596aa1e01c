use bsl_core::models::appointment::Appointment;
use bsl_storage::store::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::SweepError;

/// Issues and delivers the medical certificate for a finished visit.
///
/// Implementations update the clinical history, render the PDF and send
/// it to `to`. The returned string is the PDF URL.
pub trait CertificateIssuer: Send + Sync {
    fn issue<'a>(
        &'a self,
        appointment: &'a Appointment,
        to: &'a str,
    ) -> BoxFuture<'a, Result<String, SweepError>>;
}

/// Calls the certificate service over HTTP.
pub struct HttpCertificateIssuer {
    client: reqwest::Client,
    url: String,
}

impl HttpCertificateIssuer {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssueRequest<'a> {
    id_general: &'a str,
    to: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueResponse {
    pdf_url: String,
}

impl CertificateIssuer for HttpCertificateIssuer {
    fn issue<'a>(
        &'a self,
        appointment: &'a Appointment,
        to: &'a str,
    ) -> BoxFuture<'a, Result<String, SweepError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.url)
                .json(&IssueRequest {
                    id_general: &appointment.id,
                    to,
                })
                .send()
                .await
                .map_err(|e| SweepError::Certificate(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SweepError::Certificate(format!("{status}: {body}")));
            }

            let issued: IssueResponse = response
                .json()
                .await
                .map_err(|e| SweepError::Certificate(e.to_string()))?;
            Ok(issued.pdf_url)
        })
    }
}
