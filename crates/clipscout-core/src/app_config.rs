#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Exa search API key. Only the `search` command needs it.
    pub exa_api_key: Option<String>,
    pub exa_base_url: String,
    /// Upper bound on records produced by one extraction run.
    pub max_results: usize,
    pub search_results_per_query: u32,
    /// Extra attempts for a search query after a transient failure.
    pub search_max_retries: u32,
    pub search_backoff_base_secs: u64,
    pub request_timeout_secs: u64,
    pub verify_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "exa_api_key",
                &self.exa_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("exa_base_url", &self.exa_base_url)
            .field("max_results", &self.max_results)
            .field("search_results_per_query", &self.search_results_per_query)
            .field("search_max_retries", &self.search_max_retries)
            .field("search_backoff_base_secs", &self.search_backoff_base_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("verify_timeout_secs", &self.verify_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
