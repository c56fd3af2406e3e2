use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;

use crate::config::{CheckerConfig, FileConfig};

#[derive(Debug, Parser)]
#[clap(
    author,
    version,
    about = "CLI tool to check status codes, redirections, and load times for a list of URLs.

Checks each URL in turn and prints its status code, redirection target\n\
and load time, optionally as JSON and optionally into a file."
)]
pub struct Args {
    #[clap(required = true, help = "List of URLs to check.")]
    pub urls: Vec<String>,
    #[clap(short, long, action, help = "Print extended details for each URL.")]
    pub verbose: bool,
    #[clap(short, long, action, help = "Output the results as a JSON array.")]
    pub json_output: bool,
    #[clap(short, long, help = "File to write the results to, overwriting it.")]
    pub output: Option<PathBuf>,
    #[clap(
        short,
        long,
        help = "Timeout for each request in integer milliseconds."
    )]
    pub timeout: Option<u64>,
    #[clap(
        short = 'r',
        long,
        help = "Maximum number of redirects to follow, 0 to not follow any."
    )]
    pub max_redirects: Option<usize>,
    #[clap(short, long, help = "User-Agent header to send.")]
    pub user_agent: Option<String>,
    #[clap(short, long, help = "TOML file with default settings.")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the `--config` file, then the command line.
    pub async fn checker_config(&self) -> Result<CheckerConfig> {
        let mut config = CheckerConfig::default();
        if let Some(path) = &self.config {
            config = FileConfig::load(path).await?.apply(config);
        }
        Ok(self.apply(config))
    }

    pub fn apply(&self, mut config: CheckerConfig) -> CheckerConfig {
        if let Some(timeout) = self.timeout {
            config = config.timeout(Duration::from_millis(timeout));
        }
        if let Some(max_redirects) = self.max_redirects {
            config = config.max_redirects(max_redirects);
        }
        if let Some(user_agent) = &self.user_agent {
            config = config.user_agent(user_agent.clone());
        }
        if let Some(output) = &self.output {
            config = config.output(output.clone());
        }
        if self.verbose {
            config = config.verbose();
        }
        if self.json_output {
            config = config.json_output();
        }
        config
    }
}
