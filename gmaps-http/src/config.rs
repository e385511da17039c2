//! Connection settings for [`MapsClient`](crate::MapsClient).

use std::time::Duration;

use gmaps_core::Endpoint;

/// Default API root; endpoint paths are appended to it.
pub const DEFAULT_BASE_URL: &str = "http://maps.googleapis.com/maps/api";

/// Default user agent for API requests.
pub const DEFAULT_USER_AGENT: &str = "gmaps-client/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`MapsClient`](crate::MapsClient) and
/// [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root (e.g., `"http://maps.googleapis.com/maps/api"`).
    pub base_url: String,
    /// Timeout covering connect and the whole request.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Log each resolved request URL at `info` instead of `debug`.
    pub verbose: bool,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` style environment settings.
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            verbose: false,
            system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with the given API root.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Log resolved URLs at `info`.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable or disable proxies taken from the environment.
    #[must_use]
    pub const fn with_system_proxy(mut self, system_proxy: bool) -> Self {
        self.system_proxy = system_proxy;
        self
    }

    /// Full URL of `endpoint`, without a query.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn config_builder_pattern() {
        let config = ClientConfig::new("http://example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0")
            .with_verbose(true)
            .with_system_proxy(false);

        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert!(config.verbose);
        assert!(!config.system_proxy);
    }

    #[rstest]
    fn defaults_point_at_the_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!config.verbose);
    }

    #[rstest]
    #[case("http://maps.example.com/maps/api")]
    #[case("http://maps.example.com/maps/api/")]
    fn endpoint_url_joins_paths(#[case] base_url: &str) {
        let config = ClientConfig::new(base_url);
        assert_eq!(
            config.endpoint_url(Endpoint::DistanceMatrix),
            "http://maps.example.com/maps/api/distancematrix/json"
        );
    }
}
