use std::{error::Error as StdError, fmt};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkUnreachable,
    Timeout,
    DnsResolution,
    InvalidUrl,
    HttpProtocol,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NetworkUnreachable => "network unreachable",
            Self::Timeout => "timeout",
            Self::DnsResolution => "DNS resolution failure",
            Self::InvalidUrl => "invalid URL",
            Self::HttpProtocol => "HTTP protocol error",
        })
    }
}

/// Why a single URL check failed. Never aborts a run.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CheckError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CheckError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUrl, message)
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        let message = chain_message(&err);
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_builder() {
            ErrorKind::InvalidUrl
        } else if err.is_connect() {
            if mentions_dns(&err) {
                ErrorKind::DnsResolution
            } else {
                ErrorKind::NetworkUnreachable
            }
        } else {
            ErrorKind::HttpProtocol
        };
        Self { kind, message }
    }
}

/// Join the error and its sources, skipping sources already spelled out by
/// their parent's `Display`.
fn chain_message(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_str = cause.to_string();
        if !cause_str.is_empty() && !message.contains(&cause_str) {
            message.push_str(": ");
            message.push_str(&cause_str);
        }
        source = cause.source();
    }
    message
}

fn mentions_dns(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(cause) = current {
        let text = cause.to_string();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return true;
        }
        current = cause.source();
    }
    false
}
