//! App Configuration
//!
//! Resolves the data endpoint once at startup.

use framework_catalog::DEFAULT_ENDPOINT;

/// `<meta name="frameworks-endpoint" content="...">` in the host page
const ENDPOINT_META: &str = r#"meta[name="frameworks-endpoint"]"#;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: String,
}

impl AppConfig {
    /// Page meta tag first, then the `FRAMEWORKS_ENDPOINT` build variable,
    /// then the default.
    pub fn resolve() -> Self {
        Self {
            endpoint: choose_endpoint(page_endpoint(), option_env!("FRAMEWORKS_ENDPOINT")),
        }
    }
}

fn page_endpoint() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(ENDPOINT_META).ok()??;
    meta.get_attribute("content")
}

fn choose_endpoint(page: Option<String>, build: Option<&str>) -> String {
    page.as_deref()
        .into_iter()
        .chain(build)
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}
