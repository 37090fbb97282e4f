//! HTTP content fetcher backed by the browser's `fetch`.

use gloo::net::http::Request;
use portfolio_core::{ContentFetcher, PortfolioError, PortfolioResult};

/// Fetches locators relative to the page URL
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl ContentFetcher for HttpFetcher {
    async fn fetch_text(&self, locator: &str) -> PortfolioResult<String> {
        let fetch_error = |reason: String| PortfolioError::Fetch {
            locator: locator.to_string(),
            reason,
        };

        let response = Request::get(locator)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.ok() {
            return Err(fetch_error(format!(
                "{} {}",
                response.status(),
                response.status_text()
            )));
        }

        response.text().await.map_err(|e| fetch_error(e.to_string()))
    }
}
