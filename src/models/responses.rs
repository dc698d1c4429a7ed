// ============================================================================
// RESPONSE BODIES - shapes returned by the company API
// ============================================================================

use serde::{Deserialize, Serialize};
use super::{Company, User};

/// `GET /search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub companies_data: Vec<Company>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// `GET /locations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// `GET /bookmarks`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarksResponse {
    pub bookmarked_company_ids: Vec<String>,
}

/// `GET /auth/check`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthCheckResponse {
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_with_null_cursor() {
        let body = r#"{
            "companiesData": [{"id":"1","name":"Acme","location":"Paris"}],
            "nextCursor": null,
            "hasMore": false
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.companies_data.len(), 1);
        assert_eq!(response.next_cursor, None);
        assert!(!response.has_more);
    }

    #[test]
    fn bookmarks_response_uses_camel_case() {
        let body = r#"{"bookmarkedCompanyIds":["a","b"]}"#;
        let response: BookmarksResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.bookmarked_company_ids, vec!["a", "b"]);
    }

    #[test]
    fn auth_check_without_user() {
        let response: AuthCheckResponse = serde_json::from_str(r#"{"user":null}"#).unwrap();
        assert!(response.user.is_none());

        let response: AuthCheckResponse = serde_json::from_str("{}").unwrap();
        assert!(response.user.is_none());
    }

    #[test]
    fn auth_check_with_user() {
        let body = r#"{"user":{"id":"u1","email":"jo@example.com"}}"#;
        let response: AuthCheckResponse = serde_json::from_str(body).unwrap();
        let user = response.user.unwrap();
        assert_eq!(user.display_name(), "jo@example.com");
    }

    #[test]
    fn auth_check_user_without_id_is_still_logged_in() {
        let body = r#"{"user":{"name":"Jo","email":"jo@example.com"}}"#;
        let response: AuthCheckResponse = serde_json::from_str(body).unwrap();
        let user = response.user.expect("user present");
        assert_eq!(user.id, "");
        assert_eq!(user.display_name(), "Jo");
    }
}
