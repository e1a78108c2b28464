use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Cross-origin policy for every route.
///
/// An empty origin list means "any origin". Browsers refuse `*` together with
/// credentials, so "any" is served by echoing the request's origin, method and headers.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: Vec::new(),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Build from raw origin entries, e.g. a comma separated flag. Entries are trimmed and
    /// blank ones dropped.
    pub fn from_origins<I, S>(origins: I, allow_credentials: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            origins: origins
                .into_iter()
                .map(|o| o.as_ref().trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            allow_credentials,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.origins.is_empty() || self.origins.iter().any(|o| o == "*")
    }

    pub fn layer(&self) -> CorsLayer {
        let origin = if self.allows_any_origin() {
            AllowOrigin::mirror_request()
        } else {
            let origins: Vec<HeaderValue> = self
                .origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!("ignoring invalid CORS origin `{o}`");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(self.allow_credentials)
    }
}
