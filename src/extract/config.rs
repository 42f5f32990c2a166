use std::time::Duration;

/// Default Gemini REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for extraction
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Options for the extraction client
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// API key; a missing key only fails at request time
    pub api_key: Option<String>,

    /// Model name, e.g. `gemini-3-flash-preview`
    pub model: String,

    /// Base URL of the generation API (overridable for testing)
    pub base_url: String,

    /// Whole-request timeout; `None` leaves the transport default
    pub timeout: Option<Duration>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ExtractorConfig {
    /// Create config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config with the API key taken from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// First non-blank key among [`API_KEY_ENV_VARS`], resolved through `lookup`
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty());

        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Builder method: set API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder method: set model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder method: set base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method: set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// URL of the `generateContent` method for the configured model
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}
