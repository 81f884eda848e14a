//! Backend route table
//!
//! One fully-qualified backend URL and one opaque access token per gateway route.

use reqwest::Url;
use std::fmt;

/// Query parameter carrying the backend access token
pub const ACCESS_CODE_PARAM: &str = "code";

/// Outbound target for one gateway route
#[derive(Clone, PartialEq, Eq)]
pub struct BackendRoute {
    /// Collection endpoint, e.g. `https://host/api/products`
    url: Url,
    /// Access token appended as `?code=`
    code: Option<String>,
}

impl BackendRoute {
    /// Parse a backend route
    ///
    /// # Errors
    /// Returns an error if `url` is not an absolute http(s) URL.
    pub fn new(url: &str, code: Option<String>) -> anyhow::Result<Self> {
        let url = Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid backend URL {}: {}", url, e))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Backend URL must be http(s): {}", url);
        }
        Ok(Self {
            url,
            code: code.filter(|c| !c.is_empty()),
        })
    }

    /// URL of the collection endpoint (list, create)
    pub fn collection_url(&self) -> Url {
        self.with_code(self.url.clone())
    }

    /// URL of a single item under the collection endpoint (get, update, delete)
    ///
    /// The id is percent-encoded as one path segment.
    pub fn item_url(&self, id: &str) -> Url {
        let mut url = self.url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        self.with_code(url)
    }

    fn with_code(&self, mut url: Url) -> Url {
        if let Some(code) = &self.code {
            url.query_pairs_mut().append_pair(ACCESS_CODE_PARAM, code);
        }
        url
    }
}

// Tokens stay out of logs.
impl fmt::Debug for BackendRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRoute")
            .field("url", &self.url.as_str())
            .field("code", &self.code.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Backend routes for the five operations of one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoutes {
    /// GET /api/{resource}
    pub list: BackendRoute,
    /// GET /api/{resource}/{id}
    pub get: BackendRoute,
    /// POST /api/{resource}
    pub create: BackendRoute,
    /// PUT /api/{resource}/{id}
    pub update: BackendRoute,
    /// DELETE /api/{resource}/{id}
    pub delete: BackendRoute,
}

impl ResourceRoutes {
    /// Same URL and no token for every operation
    pub fn uniform(url: &str) -> anyhow::Result<Self> {
        let route = BackendRoute::new(url, None)?;
        Ok(Self {
            list: route.clone(),
            get: route.clone(),
            create: route.clone(),
            update: route.clone(),
            delete: route,
        })
    }
}
