use anyhow::Result;
use log::{debug, info, warn};
use reqwest::{header::CONTENT_LENGTH, Client, Response, Url};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::{
    config::CheckerConfig,
    error::{CheckError, ErrorKind},
};

/// The outcome of checking one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub url: String,
    pub status_code: Option<u16>,
    pub redirected: bool,
    pub redirect_target: Option<String>,
    pub load_time_seconds: Option<f64>,
    pub error: Option<String>,
    #[serde(skip)]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip)]
    pub details: Option<ResponseDetails>,
}

/// Only shown in verbose console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDetails {
    pub final_url: String,
    pub http_version: String,
    pub headers_count: usize,
    pub content_length: Option<u64>,
}

impl CheckResult {
    fn success(url: &str, requested: &Url, response: &Response, load_time: f64) -> Self {
        let final_url = response.url();
        let redirected = final_url != requested;
        let headers = response.headers();
        let content_length = headers
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());
        Self {
            url: url.to_owned(),
            status_code: Some(response.status().as_u16()),
            redirected,
            redirect_target: redirected.then(|| final_url.to_string()),
            load_time_seconds: Some(load_time),
            error: None,
            error_kind: None,
            details: Some(ResponseDetails {
                final_url: final_url.to_string(),
                http_version: format!("{:?}", response.version()),
                headers_count: headers.len(),
                content_length,
            }),
        }
    }

    fn failure(url: &str, err: CheckError, load_time: Option<f64>) -> Self {
        Self {
            url: url.to_owned(),
            status_code: None,
            redirected: false,
            redirect_target: None,
            load_time_seconds: load_time,
            error: Some(err.message),
            error_kind: Some(err.kind),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Holds the one HTTP client used for every check of a run.
#[derive(Debug)]
pub struct Checker {
    client: Client,
    config: CheckerConfig,
}

impl Checker {
    pub fn new(config: CheckerConfig) -> Result<Self> {
        let client = config.client()?;
        Ok(Self::from_client(client, config))
    }

    pub fn from_client(client: Client, config: CheckerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub async fn check(&self, url: &str) -> CheckResult {
        let requested = match parse_url(url) {
            Ok(requested) => requested,
            Err(err) => {
                warn!("{url}: {err}.");
                return CheckResult::failure(url, err, None);
            }
        };
        let start = Instant::now();
        let sent = self.client.get(requested.clone()).send().await;
        let load_time = start.elapsed().as_secs_f64();
        match sent {
            Ok(response) => {
                let result = CheckResult::success(url, &requested, &response, load_time);
                info!(
                    "{url}: {} in {load_time:.3}s.",
                    response.status().as_u16()
                );
                if let Some(target) = &result.redirect_target {
                    debug!("{url} redirected to {target}.");
                }
                result
            }
            Err(err) => {
                let err = CheckError::from(err);
                warn!("{url}: {} after {load_time:.3}s: {err}.", err.kind);
                CheckResult::failure(url, err, Some(load_time))
            }
        }
    }
}

fn parse_url(url: &str) -> Result<Url, CheckError> {
    let parsed =
        Url::parse(url).map_err(|err| CheckError::invalid_url(format!("invalid URL: {err}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(CheckError::invalid_url(format!(
            "unsupported URL scheme `{scheme}`"
        ))),
    }
}
