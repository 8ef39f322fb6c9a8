use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use shared::{error::ServiceErrorBody, SearchName, Student};
use tracing::{debug, info, warn};
use url::Url;

pub mod error;

pub use error::LookupError;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("gradebook/", env!("CARGO_PKG_VERSION"));

/// Normalized result of one name search against the data service.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The name was empty after trimming; no request was sent.
    ValidationError,
    NotFound,
    Found(Student),
    /// More than one record matched. Carries the match count.
    Ambiguous(usize),
    /// Network failure, non-2xx status, timeout or undecodable body.
    TransportError(String),
}

impl LookupOutcome {
    pub fn from_records(mut students: Vec<Student>) -> Self {
        match students.len() {
            0 => Self::NotFound,
            1 => Self::Found(students.remove(0)),
            count => Self::Ambiguous(count),
        }
    }

    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::NotFound => "not_found",
            Self::Found(_) => "found",
            Self::Ambiguous(_) => "ambiguous",
            Self::TransportError(_) => "transport_error",
        }
    }
}

impl From<Result<Vec<Student>, LookupError>> for LookupOutcome {
    fn from(result: Result<Vec<Student>, LookupError>) -> Self {
        match result {
            Ok(students) => Self::from_records(students),
            Err(err) => Self::TransportError(err.to_string()),
        }
    }
}

/// Seam between the navigation controller and the data service.
///
/// Implementations issue at most one request per call and never retry.
#[async_trait]
pub trait StudentLookup: Send + Sync {
    async fn search(&self, name: &str) -> LookupOutcome;
}

pub struct HttpStudentLookup {
    http: Client,
    students_url: Url,
    timeout: Duration,
}

impl HttpStudentLookup {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let students_url = students_endpoint(base_url)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(LookupError::ClientBuild)?;
        Ok(Self {
            http,
            students_url,
            timeout,
        })
    }

    pub fn students_url(&self) -> &Url {
        &self.students_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn fetch(&self, name: &SearchName) -> Result<Vec<Student>, LookupError> {
        match tokio::time::timeout(self.timeout, self.fetch_unbounded(name)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout(self.timeout)),
        }
    }

    async fn fetch_unbounded(&self, name: &SearchName) -> Result<Vec<Student>, LookupError> {
        let response = self
            .http
            .get(self.students_url.clone())
            .query(&[("name", name.as_str())])
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                message: ServiceErrorBody::message_from_bytes(&body),
            });
        }

        Ok(serde_json::from_slice::<Vec<Student>>(&body)?)
    }
}

#[async_trait]
impl StudentLookup for HttpStudentLookup {
    async fn search(&self, name: &str) -> LookupOutcome {
        let Ok(name) = SearchName::parse(name) else {
            debug!("lookup: empty name, request skipped");
            return LookupOutcome::ValidationError;
        };

        let outcome = LookupOutcome::from(self.fetch(&name).await);
        match &outcome {
            LookupOutcome::TransportError(detail) => {
                warn!(name = %name, detail = %detail, "lookup: request failed");
            }
            other => info!(name = %name, outcome = other.kind(), "lookup: resolved"),
        }
        outcome
    }
}

/// `{base_url}/students/`, tolerating a trailing slash on the base.
fn students_endpoint(base_url: &str) -> Result<Url, LookupError> {
    let invalid = |reason: String| LookupError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }
    if base.cannot_be_a_base() || base.host_str().is_none() {
        return Err(invalid("url has no host".to_string()));
    }

    let mut endpoint = base;
    let path = format!("{}/students/", endpoint.path().trim_end_matches('/'));
    endpoint.set_path(&path);
    endpoint.set_query(None);
    Ok(endpoint)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
