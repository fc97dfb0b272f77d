//! Helpers for talking to the NER service from the browser

/// Query string of the current page, without the leading `?`.
///
/// Empty when no window is available (tests, workers).
pub fn page_query() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window
        .location()
        .search()
        .map(|s| s.trim_start_matches('?').to_string())
        .unwrap_or_default()
}

/// Join a base URL and an absolute path.
///
/// An empty base yields a same-origin relative URL.
///
/// # Example
/// ```rust
/// use ner_dashboard::shared::api_utils::api_url;
/// assert_eq!(api_url("http://localhost:8081", "/v1/text/"), "http://localhost:8081/v1/text/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("", "/v1/date/"), "/v1/date/");
        assert_eq!(api_url("https://ner.example/", "/v1/date/"), "https://ner.example/v1/date/");
    }
}
