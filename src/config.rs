use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use log::debug;
use reqwest::{redirect::Policy, Client, ClientBuilder};
use serde::Deserialize;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
    pub verbose: bool,
    pub json_output: bool,
    pub output: Option<PathBuf>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            verbose: false,
            json_output: false,
            output: None,
        }
    }
}

impl CheckerConfig {
    pub fn timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn max_redirects(self, max_redirects: usize) -> Self {
        Self {
            max_redirects,
            ..self
        }
    }

    pub fn user_agent(self, user_agent: String) -> Self {
        Self { user_agent, ..self }
    }

    pub fn verbose(self) -> Self {
        Self {
            verbose: true,
            ..self
        }
    }

    pub fn json_output(self) -> Self {
        Self {
            json_output: true,
            ..self
        }
    }

    pub fn output(self, output: PathBuf) -> Self {
        Self {
            output: Some(output),
            ..self
        }
    }

    /// `max_redirects == 0` turns redirect following off entirely.
    pub fn redirect_policy(&self) -> Policy {
        match self.max_redirects {
            0 => Policy::none(),
            n => Policy::limited(n),
        }
    }

    pub fn client_builder(&self) -> ClientBuilder {
        Client::builder()
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
            .redirect(self.redirect_policy())
            .user_agent(self.user_agent.as_str())
    }

    pub fn client(&self) -> reqwest::Result<Client> {
        self.client_builder().build()
    }
}

/// Settings read from a TOML file. Every key is optional; whatever is present
/// overrides the defaults, and the command line overrides the file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub timeout_ms: Option<u64>,
    pub max_redirects: Option<usize>,
    pub user_agent: Option<String>,
    pub verbose: Option<bool>,
    pub json_output: Option<bool>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    pub async fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading config file `{}`", path.display()))?;
        let file_config = Self::parse(&text)
            .with_context(|| format!("parsing config file `{}`", path.display()))?;
        debug!("Loaded {file_config:?} from `{}`.", path.display());
        Ok(file_config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply(self, config: CheckerConfig) -> CheckerConfig {
        CheckerConfig {
            timeout: self
                .timeout_ms
                .map_or(config.timeout, Duration::from_millis),
            max_redirects: self.max_redirects.unwrap_or(config.max_redirects),
            user_agent: self.user_agent.unwrap_or(config.user_agent),
            verbose: self.verbose.unwrap_or(config.verbose),
            json_output: self.json_output.unwrap_or(config.json_output),
            output: self.output.or(config.output),
        }
    }
}
