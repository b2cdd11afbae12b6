use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::error::ScrapeError;

/// Desktop user agents rotated per request so the request profile is
/// not constant across scheduled runs.
const USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

/// Page retrieval capability. The run holds exactly one fetcher and
/// calls it once.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieves the page body. Implementations must bound the wait so
    /// a stalled source cannot hang the run.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Plain HTTP fetcher with a bounded per-request timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let user_agent = USER_AGENTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(USER_AGENTS[0]);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::FetchStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
