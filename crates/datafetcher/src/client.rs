use log::{info, warn};
use models::catalog::{RawClass, RawSubject};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://classes.cornell.edu/api/2.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Success/error envelope every catalog endpoint wraps its payload in
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct SubjectsPayload {
    #[serde(default)]
    subjects: Vec<RawSubject>,
}

#[derive(Debug, Deserialize)]
struct ClassesPayload {
    #[serde(default)]
    classes: Vec<RawClass>,
}

/// Read-only client for the university course catalog API.
///
/// Fetch failures are logged and reported as empty result sets; one
/// unreachable subject should not abort a whole import run.
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// All subjects offered in the given semester.
    pub async fn fetch_subjects(&self, semester: &str) -> Vec<RawSubject> {
        let url = format!("{}/config/subjects.json", self.base_url);
        let payload: Option<SubjectsPayload> =
            self.get(&url, &[("roster", semester)]).await;
        match payload {
            Some(payload) => {
                info!("fetched {} subjects for {semester}", payload.subjects.len());
                payload.subjects
            }
            None => Vec::new(),
        }
    }

    /// All course records for one subject in the given semester.
    pub async fn fetch_courses(&self, semester: &str, subject: &str) -> Vec<RawClass> {
        let url = format!("{}/search/classes.json", self.base_url);
        let payload: Option<ClassesPayload> = self
            .get(&url, &[("roster", semester), ("subject", subject)])
            .await;
        match payload {
            Some(payload) => {
                info!(
                    "fetched {} courses for {semester} {subject}",
                    payload.classes.len()
                );
                payload.classes
            }
            None => Vec::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Option<T> {
        let response = match self.http.get(url).query(query).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("request to {url} failed: {e}");
                return None;
            }
        };

        if let Err(e) = response.error_for_status_ref() {
            warn!("request to {url} failed: {e}");
            return None;
        }

        let envelope: Envelope<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("response from {url} is not valid JSON: {e}");
                return None;
            }
        };

        if envelope.status != "success" {
            warn!(
                "catalog API error from {url}: {}",
                envelope.message.as_deref().unwrap_or("unknown error")
            );
            return None;
        }
        envelope.data
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
