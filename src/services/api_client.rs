// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, decode the body.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::models::{AuthCheckResponse, BookmarksResponse, LocationsResponse, SearchResponse, User};
use super::ApiError;

/// One page request against `GET /search`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub limit: u32,
    pub cursor: Option<String>,
    pub search: String,
    pub location: String,
}

impl SearchQuery {
    /// Query string pairs in the order the server documents them.
    /// `cursor` is left out on the first page.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string())];
        if let Some(cursor) = &self.cursor {
            params.push(("cursor", cursor.clone()));
        }
        params.push(("search", self.search.clone()));
        params.push(("location", self.location.clone()));
        params
    }
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Search companies, one page at a time
    pub async fn search_companies(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        log::debug!(
            "🔍 GET /search search={:?} location={:?} cursor={:?}",
            query.search,
            query.location,
            query.cursor
        );

        let request = Request::get(&self.url("/search")).query(query.params());
        let response: SearchResponse = send_json(request).await?;

        log::info!(
            "✅ {} companies received (has_more: {})",
            response.companies_data.len(),
            response.has_more
        );
        Ok(response)
    }

    /// Location options for the filter dropdown
    pub async fn get_locations(&self) -> Result<Vec<String>, ApiError> {
        let response: LocationsResponse = send_json(Request::get(&self.url("/locations"))).await?;
        Ok(response.locations)
    }

    /// Bookmarked company ids of the current session user
    pub async fn get_bookmarks(&self) -> Result<Vec<String>, ApiError> {
        let request = Request::get(&self.url("/bookmarks")).credentials(RequestCredentials::Include);
        let response: BookmarksResponse = send_json(request).await?;
        Ok(response.bookmarked_company_ids)
    }

    /// Current session user, `None` when logged out.
    /// An unauthorized status is a normal "logged out" answer, not an error.
    pub async fn check_auth(&self) -> Result<Option<User>, ApiError> {
        let request = Request::get(&self.url("/auth/check")).credentials(RequestCredentials::Include);
        match send_json::<AuthCheckResponse>(request).await {
            Ok(response) => Ok(response.user),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    ensure_ok(&response)?;
    Ok(response.json::<T>().await?)
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Http {
            status: response.status(),
            message: response.status_text(),
        })
    }
}
