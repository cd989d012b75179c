use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde_json::Value;
use url::Url;

const LOG_TARGET: &str = "   fetcher";

/// Retrieves the expvar document from a single endpoint.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    url: Url,
}

impl Fetcher {
    /// Create a fetcher for `url`.
    ///
    /// When `skip_verify` is set, TLS certificates presented by the endpoint are
    /// not checked.
    pub fn new(url: Url, timeout: Duration, skip_verify: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("expvar-monitor")
            .timeout(timeout)
            .danger_accept_invalid_certs(skip_verify)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self { client, url })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and parse the document.
    ///
    /// Anything other than a successful status carrying a JSON body is an error.
    pub async fn fetch(&self) -> Result<Value> {
        log::info!(target: LOG_TARGET, "Fetching '{}'", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .into_app_err_with(|| format!("fetching '{}'", self.url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(app_err!("endpoint '{}' returned HTTP status {status}", self.url));
        }

        let document: Value = response
            .json()
            .await
            .into_app_err_with(|| format!("parsing the document returned by '{}'", self.url))?;

        log::debug!(target: LOG_TARGET, "Fetched document from '{}'", self.url);
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> Fetcher {
        let url = Url::parse(&server.uri()).unwrap().join("/debug/vars").unwrap();
        Fetcher::new(url, Duration::from_secs(5), false).unwrap()
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
    async fn test_fetch_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/debug/vars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"memstats": {"NumGC": 3}})))
            .mount(&server)
            .await;

        let document = fetcher_for(&server).fetch().await.unwrap();
        assert_eq!(document["memstats"]["NumGC"], 3);
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
    async fn test_error_status_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/debug/vars"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).fetch().await.unwrap_err();
        assert!(err.to_string().contains("503"), "{err}");
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
    async fn test_invalid_json_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/debug/vars"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let _ = fetcher_for(&server).fetch().await.unwrap_err();
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let fetcher = Fetcher::new(url, Duration::from_millis(100), false).unwrap();
        let _ = fetcher.fetch().await.unwrap_err();
    }
}
