use crate::shared::api_utils::{api_url, page_query};
use serde::Deserialize;

const DEFAULT_API_PREFIX: &str = "/v1";

/// Where the dashboard sends detection requests.
///
/// Provided to the component tree as context by `App`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Scheme and host of the NER service, empty for same origin
    pub api_base: String,
    /// Versioned path prefix, e.g. `/v1`
    pub api_prefix: String,
}

/// Overrides read from the page URL (`?api_base=...&api_prefix=...`)
#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    api_base: Option<String>,
    api_prefix: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Build the config from the current page URL.
    pub fn from_window() -> Self {
        Self::from_query(&page_query())
    }

    /// Parse overrides from a query string. Unknown keys are ignored, empty
    /// or missing values keep their defaults.
    pub fn from_query(query: &str) -> Self {
        let overrides: ConfigOverrides = match serde_qs::from_str(query.trim_start_matches('?')) {
            Ok(overrides) => overrides,
            Err(err) => {
                log::warn!("Ignoring malformed dashboard config in query string: {}", err);
                ConfigOverrides::default()
            }
        };

        let mut config = Self::default();
        if let Some(base) = non_empty(overrides.api_base) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(prefix) = non_empty(overrides.api_prefix) {
            let prefix = prefix.trim_end_matches('/');
            config.api_prefix = if prefix.starts_with('/') {
                prefix.to_string()
            } else {
                format!("/{}", prefix)
            };
        }
        config
    }

    /// Detector endpoint for a path segment: `{base}{prefix}/{segment}/`
    pub fn endpoint_url(&self, segment: &str) -> String {
        api_url(&self.api_base, &format!("{}/{}/", self.api_prefix, segment))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
