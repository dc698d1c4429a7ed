use crate::services::SearchQuery;

/// Free-text search plus location filter. Empty strings mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchFilters {
    pub search: String,
    pub location: String,
}

impl SearchFilters {
    pub fn new(search: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            location: location.into(),
        }
    }

    pub fn to_query(&self, limit: u32, cursor: Option<String>) -> SearchQuery {
        SearchQuery {
            limit,
            cursor,
            search: self.search.trim().to_string(),
            location: self.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_search_text() {
        let query = SearchFilters::new("  acme ", "Paris").to_query(20, Some("c1".into()));
        assert_eq!(query.search, "acme");
        assert_eq!(query.location, "Paris");
        assert_eq!(query.cursor.as_deref(), Some("c1"));
        assert_eq!(query.limit, 20);
    }
}
