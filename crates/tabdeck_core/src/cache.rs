//! Cache-strategy mapping shared by the API handler and the cache panel.

use crate::token::request_token;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The three cache strategies the demo distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStrategy {
    Default,
    NoCache,
    ForceCache,
}

impl CacheStrategy {
    /// All strategies, in the order the cache panel offers them.
    pub const ALL: [CacheStrategy; 3] = [
        CacheStrategy::Default,
        CacheStrategy::NoCache,
        CacheStrategy::ForceCache,
    ];

    /// Resolve a `type` query parameter.
    ///
    /// Absent or unrecognized values fall back to [`CacheStrategy::Default`],
    /// matching the endpoint's `anything else` branch.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("no-cache") => CacheStrategy::NoCache,
            Some("force-cache") => CacheStrategy::ForceCache,
            _ => CacheStrategy::Default,
        }
    }

    /// Canonical strategy name.
    pub fn as_str(self) -> &'static str {
        match self {
            CacheStrategy::Default => "default",
            CacheStrategy::NoCache => "no-cache",
            CacheStrategy::ForceCache => "force-cache",
        }
    }

    /// The `Cache-Control` header value served for this strategy.
    pub fn cache_control(self) -> &'static str {
        match self {
            CacheStrategy::NoCache => "no-cache, no-store, must-revalidate",
            CacheStrategy::ForceCache => "public, max-age=3600",
            CacheStrategy::Default => "public, max-age=60",
        }
    }

    /// Whether the demo reports the response as served from cache.
    pub fn is_cached(self) -> bool {
        self == CacheStrategy::ForceCache
    }
}

/// JSON body returned by `GET /api/cache-demo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheDemoResponse {
    pub timestamp: String,
    pub request_id: String,
    pub cached: bool,
    pub cache_type: String,
}

impl CacheDemoResponse {
    /// Build a response body for the raw `type` parameter value.
    ///
    /// `cache_type` echoes the raw value (or `"default"` when absent) even
    /// when it is unrecognized; only the header mapping and `cached` flag use
    /// the resolved strategy.
    ///
    /// # Returns
    /// A body with a fresh timestamp and request token.
    pub fn generate(raw_type: Option<&str>) -> Self {
        let strategy = CacheStrategy::from_param(raw_type);
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            request_id: request_token(),
            cached: strategy.is_cached(),
            cache_type: raw_type.unwrap_or("default").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_resolution_covers_all_branches() {
        assert_eq!(CacheStrategy::from_param(None), CacheStrategy::Default);
        assert_eq!(
            CacheStrategy::from_param(Some("default")),
            CacheStrategy::Default
        );
        assert_eq!(
            CacheStrategy::from_param(Some("no-cache")),
            CacheStrategy::NoCache
        );
        assert_eq!(
            CacheStrategy::from_param(Some("force-cache")),
            CacheStrategy::ForceCache
        );
        assert_eq!(
            CacheStrategy::from_param(Some("bogus")),
            CacheStrategy::Default
        );
    }

    #[test]
    fn header_values_match_strategy() {
        assert_eq!(
            CacheStrategy::NoCache.cache_control(),
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(
            CacheStrategy::ForceCache.cache_control(),
            "public, max-age=3600"
        );
        assert_eq!(CacheStrategy::Default.cache_control(), "public, max-age=60");
    }

    #[test]
    fn only_force_cache_reports_cached() {
        assert!(CacheStrategy::ForceCache.is_cached());
        assert!(!CacheStrategy::NoCache.is_cached());
        assert!(!CacheStrategy::Default.is_cached());
    }

    #[test]
    fn generated_body_echoes_raw_type() {
        let body = CacheDemoResponse::generate(Some("bogus"));
        assert_eq!(body.cache_type, "bogus");
        assert!(!body.cached);

        let body = CacheDemoResponse::generate(None);
        assert_eq!(body.cache_type, "default");

        let body = CacheDemoResponse::generate(Some("force-cache"));
        assert!(body.cached);
        assert!(!body.request_id.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let body = CacheDemoResponse::generate(Some("force-cache"));
        let value = serde_json::to_value(&body).expect("serialize");
        assert!(value.get("requestId").is_some());
        assert!(value.get("cacheType").is_some());
    }
}
