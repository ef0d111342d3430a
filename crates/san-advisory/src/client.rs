//! Blocking LLM advisory client.
//!
//! Speaks the Gemini `generateContent` REST protocol: one POST carrying a
//! prompt that embeds a bounded CSV snippet of the processed records, one
//! text candidate back.  Blocking on purpose — the pipeline is synchronous
//! batch work and the advisory call is its only network round-trip.

use std::time::Duration;

use serde::Deserialize;

use san_process::ProcessedRecord;

use crate::error::{AdvisoryError, AdvisoryResult};

/// Model queried when none is specified.
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Rows of context embedded in the prompt.  More adds token cost, not signal.
const SNIPPET_ROWS: usize = 20;

// ── Response body (the subset we read) ────────────────────────────────────────

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

// ── AdvisoryClient ────────────────────────────────────────────────────────────

/// Client for the external narrative-insight service.
pub struct AdvisoryClient {
    http:    reqwest::blocking::Client,
    model:   String,
    api_key: Option<String>,
}

impl AdvisoryClient {
    /// Create a client with the default model.
    ///
    /// `api_key = None` builds a client whose calls all fail with
    /// [`AdvisoryError::MissingKey`] — useful for running the pipeline
    /// without network access while keeping one code path.
    pub fn new(api_key: Option<String>, timeout: Duration) -> AdvisoryResult<Self> {
        Self::with_model(api_key, timeout, DEFAULT_MODEL)
    }

    /// Create a client for a specific model name.
    pub fn with_model(
        api_key: Option<String>,
        timeout: Duration,
        model:   impl Into<String>,
    ) -> AdvisoryResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { http, model: model.into(), api_key })
    }

    /// Ask the service for narrative insight on a processed record set.
    ///
    /// Returns the insight text, or an [`AdvisoryError`] the caller should
    /// treat as "no insight available".
    pub fn insights(
        &self,
        records:    &[ProcessedRecord],
        scenario:   &str,
        encryption: &str,
    ) -> AdvisoryResult<String> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(AdvisoryError::MissingKey);
        };

        let prompt = build_prompt(records, scenario, encryption)?;
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response: GenerateResponse = self
            .http
            .post(url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        extract_text(response)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Assemble the prompt: role framing, the CSV snippet, and the questions the
/// dashboard renders answers to.
pub(crate) fn build_prompt(
    records:    &[ProcessedRecord],
    scenario:   &str,
    encryption: &str,
) -> AdvisoryResult<String> {
    let snippet = csv_snippet(records)?;
    Ok(format!(
        "You are an expert storage engineer.\n\
         \n\
         Here are SAN performance metrics:\n\
         {snippet}\n\
         Scenario: {scenario}\n\
         Encryption enabled: {encryption}\n\
         \n\
         Analyze and return:\n\
         1. Throughput stability summary\n\
         2. Latency behavior\n\
         3. Impact of encryption\n\
         4. Backup window recommendations\n\
         5. Whether improved SAN (FC) is better here\n"
    ))
}

/// Serialize the first [`SNIPPET_ROWS`] records as CSV text.
pub(crate) fn csv_snippet(records: &[ProcessedRecord]) -> AdvisoryResult<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for record in records.iter().take(SNIPPET_ROWS) {
            writer.serialize(record)?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn extract_text(response: GenerateResponse) -> AdvisoryResult<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| AdvisoryError::Malformed("no text candidate".to_owned()))?;
    Ok(text)
}
