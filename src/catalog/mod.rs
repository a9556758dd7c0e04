//! The catalogue client: a retrying reqwest transport plus the pure query
//! builders and parsers underneath it.

pub mod config;
pub mod parse_detail;
pub mod parse_search;
pub mod query;
pub mod ratelimit;

use std::time::Duration;

use log::debug;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

use crate::course::{CommonCode, CourseDetail, CourseSummary, SearchPage};
use crate::error::{CatalogError, Result};
use config::CatalogConfig;
use query::{RequestSpec, SearchFilter};
use ratelimit::RateLimiter;

fn build_client(config: &CatalogConfig) -> Result<ClientWithMiddleware> {
    let reqwest_client = reqwest::ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let retry = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);

    Ok(reqwest_middleware::ClientBuilder::new(reqwest_client)
        .with(RetryTransientMiddleware::new_with_policy(retry))
        .build())
}

/// A client for the catalogue. Cheap to keep around; every fetch is an
/// independent request with no state shared between calls beyond the
/// request spacing.
pub struct CourseCatalog {
    client: ClientWithMiddleware,
    config: CatalogConfig,
    limiter: RateLimiter,
}

impl CourseCatalog {
    /// Client against the real catalogue with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        let client = build_client(&config)?;
        let limiter = RateLimiter::new(Duration::from_millis(config.min_interval_ms));
        Ok(Self {
            client,
            config,
            limiter,
        })
    }

    async fn get(&self, spec: &RequestSpec) -> Result<String> {
        self.limiter.wait().await;
        debug!("GET {}", spec.full_url());

        let response = self
            .client
            .get(spec.url.clone())
            .query(&spec.params)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Transport {
                status: Some(status.as_u16()),
                source: None,
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch one page (1-based) of search results.
    pub async fn fetch_search(&self, filter: &SearchFilter, page: usize) -> Result<SearchPage> {
        let spec = query::build_search_request(&self.config, filter, page)?;
        let body = self.get(&spec).await?;
        parse_search::parse_search_page(&body)
    }

    /// Fetch the full record of one course by its timetable code.
    pub async fn fetch_details(&self, timetable_code: &str, year: u16) -> Result<CourseDetail> {
        let spec = query::build_detail_request(&self.config, timetable_code, year)?;
        let body = self.get(&spec).await?;
        parse_detail::parse_detail_page(&body)
    }

    /// Walk every result page for a filter and collect the items in site
    /// order.
    pub async fn fetch_search_all(&self, filter: &SearchFilter) -> Result<Vec<CourseSummary>> {
        let first = self.fetch_search(filter, 1).await?;
        let total_pages = first.total_pages;
        let mut items = first.items;
        for page in 2..=total_pages {
            let mut next = self.fetch_search(filter, page).await?;
            debug!("fetched search page {page}/{total_pages}");
            items.append(&mut next.items);
        }
        Ok(items)
    }

    /// Look a course's common code up from its timetable code.
    pub async fn fetch_common_code(&self, timetable_code: &str) -> Result<CommonCode> {
        let page = self
            .fetch_search(&SearchFilter::keyword(timetable_code), 1)
            .await?;
        page.items
            .into_iter()
            .next()
            .map(|item| item.common_code)
            .ok_or(CatalogError::NotFound)
    }

    /// Look a course's timetable code up from its common code.
    pub async fn fetch_timetable_code(&self, common_code: &str) -> Result<String> {
        let page = self
            .fetch_search(&SearchFilter::keyword(common_code), 1)
            .await?;
        page.items
            .into_iter()
            .next()
            .map(|item| item.timetable_code)
            .ok_or(CatalogError::NotFound)
    }
}
