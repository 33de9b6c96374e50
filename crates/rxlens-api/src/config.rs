//! Configuration for the analysis service client.

/// Default base URL of the analysis service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration for [`DefaultAnalysisClient`](crate::DefaultAnalysisClient).
///
/// No request timeout is configured anywhere in this client; a submission is
/// awaited until the transport itself settles.
///
/// # Examples
///
/// ```
/// use rxlens_api::AnalysisServiceConfig;
///
/// let config = AnalysisServiceConfig::new()
///     .with_base_url("http://192.168.1.20:8000");
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisServiceConfig {
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
}

impl Default for AnalysisServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: concat!("rxlens/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl AnalysisServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the service base URL (scheme + host + port).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the User-Agent header sent with requests.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
