// file: src/github/collector.rs
// description: walks the paginated repository listing of a user or organization
// reference: https://docs.github.com/en/rest/repos/repos#list-repositories-for-a-user

use crate::config::ApiConfig;
use crate::error::{Result, ScraperError};
use crate::github::fetcher::{ClientSettings, PageFetcher};
use crate::github::http::{HttpTransport, ReqwestTransport};
use crate::models::{Repository, Target};
use crate::pipeline::{FetchStats, ProgressTracker};
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info};

pub struct PaginatingCollector {
    fetcher: PageFetcher,
    base_url: Url,
    per_page: u32,
    progress: ProgressTracker,
}

impl PaginatingCollector {
    pub fn new(fetcher: PageFetcher, base_url: &str, per_page: u32) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ScraperError::Config(format!("Invalid base URL {}: {}", base_url, e)))?;

        Ok(Self {
            fetcher,
            base_url,
            per_page,
            progress: ProgressTracker::hidden(),
        })
    }

    /// Collector over the real network using the configured timeout and headers.
    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        let settings = ClientSettings::from_config(api);
        let transport: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::with_timeout(settings.timeout)?);
        Self::new(
            PageFetcher::new(transport, settings),
            &api.base_url,
            api.per_page,
        )
    }

    pub fn with_progress(mut self, progress: ProgressTracker) -> Self {
        self.progress = progress;
        self
    }

    pub fn stats(&self) -> FetchStats {
        self.progress.get_stats()
    }

    pub async fn collect_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        self.collect(&Target::user(username)).await
    }

    pub async fn collect_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        self.collect(&Target::org(org)).await
    }

    /// Fetch every page for `target`, in API order.
    ///
    /// Stops after a page without a `next` link or after an empty page. Any
    /// failure discards the pages already collected.
    pub async fn collect(&self, target: &Target) -> Result<Vec<Repository>> {
        let mut repositories = Vec::new();
        let mut page = 1;

        loop {
            let url = self.page_url(target, page)?;

            info!("Fetching page {}...", page);
            self.progress.start_page(page);

            let result = self
                .fetcher
                .fetch_page(&url)
                .await
                .inspect_err(|_| self.progress.abandon())?;

            let count = result.repositories.len();
            info!("Found {} repositories on page {}", count, page);
            self.progress.page_done(count);

            repositories.extend(result.repositories);

            if !result.has_more || count == 0 {
                break;
            }
            page += 1;
        }

        self.progress.finish();
        debug!(
            "Collected {} repositories for {} in {} pages",
            repositories.len(),
            target,
            page
        );

        Ok(repositories)
    }

    pub fn page_url(&self, target: &Target, page: u32) -> Result<String> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                ScraperError::Config(format!("Base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend([target.kind.api_segment(), target.name.as_str(), "repos"]);

        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("sort", "updated")
            .append_pair("direction", "desc");

        Ok(url.into())
    }
}
