use crate::config::SnaggerConfig;
use crate::error::SnagError;
use crate::parsers::StorePageParser;
use crate::results::GameInfo;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches store pages and extracts their game information.
///
/// One `Extractor` can serve any number of requests; nothing from one
/// request is visible to the next.
#[derive(Debug, Clone)]
pub struct Extractor {
    client: Client,
    parser: StorePageParser,
    timeout: Duration,
}

impl Extractor {
    /// Build an extractor from configuration
    pub fn new(config: &SnaggerConfig) -> Result<Self, SnagError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SnagError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            parser: StorePageParser::new(&config.selectors)?,
            timeout: config.timeout(),
        })
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The request timeout in effect
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a store page and extract its information.
    ///
    /// Timeouts are returned without logging; every other failure is logged
    /// here before being returned.
    pub async fn fetch_info(&self, url: &str) -> Result<GameInfo, SnagError> {
        let result = self.try_fetch_info(url).await;
        if let Err(e) = &result {
            if !matches!(e, SnagError::Timeout(_)) {
                ::log::error!("An error occurred for {}: {}", url, e);
            }
        }
        result
    }

    async fn try_fetch_info(&self, url: &str) -> Result<GameInfo, SnagError> {
        let url = parse_url(url)?;
        let body = self.fetch(url).await?;
        Ok(self.parser.parse(&body)?)
    }

    async fn fetch(&self, url: Url) -> Result<String, SnagError> {
        ::log::debug!("GET {} (timeout {:?})", url, self.timeout);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| SnagError::from_request(e, self.timeout))?;

        let status = response.status();
        ::log::debug!("Received HTTP {} from {}", status, response.url());

        let response = response
            .error_for_status()
            .map_err(|e| SnagError::from_request(e, self.timeout))?;

        response
            .text()
            .await
            .map_err(|e| SnagError::from_request(e, self.timeout))
    }
}

/// Accepts only absolute http(s) URLs
fn parse_url(input: &str) -> Result<Url, SnagError> {
    let url = Url::parse(input)
        .map_err(|e| SnagError::Unexpected(format!("invalid URL '{}': {}", input, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(SnagError::Unexpected(format!(
            "unsupported URL scheme '{}' in '{}'",
            scheme, input
        ))),
    }
}

/// Fetch a store page with default configuration and the given timeout
pub async fn fetch_info(url: &str, timeout: Duration) -> Result<GameInfo, SnagError> {
    Extractor::new(&SnaggerConfig::default())?
        .with_timeout(timeout)
        .fetch_info(url)
        .await
}
