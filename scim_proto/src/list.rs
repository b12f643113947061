use crate::constants::{DEFAULT_COUNT, DEFAULT_START_INDEX};
use crate::filter::Filter;
use crate::ScimAttrs;

use serde::{Deserialize, Serialize};

/// A single page of a query result (RFC 7644 section 3.4.2). Only
/// `Resources` and `totalResults` are interpreted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u64>,
    #[serde(rename = "Resources", default = "Vec::new")]
    pub resources: Vec<T>,
    #[serde(flatten)]
    pub attrs: ScimAttrs,
}

impl<T> ListResponse<T> {
    pub fn into_first(self) -> Option<T> {
        self.resources.into_iter().next()
    }
}

/// Query parameters for a list request. This only ever describes one page,
/// callers advance `start_index` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub start_index: u64,
    pub count: u64,
    pub filter: Option<Filter>,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            start_index: DEFAULT_START_INDEX,
            count: DEFAULT_COUNT,
            filter: None,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_index(self, start_index: u64) -> Self {
        ListQuery {
            start_index,
            ..self
        }
    }

    pub fn count(self, count: u64) -> Self {
        ListQuery { count, ..self }
    }

    pub fn filter(self, filter: Filter) -> Self {
        ListQuery {
            filter: Some(filter),
            ..self
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("startIndex", self.start_index.to_string()),
            ("count", self.count.to_string()),
        ];
        if let Some(f) = &self.filter {
            pairs.push(("filter", f.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;
    use serde_json::json;

    #[test]
    fn parse_list_response() {
        let l: ListResponse<User> = serde_json::from_value(json!({
            "schemas": ["urn:ietf:params:scim:api:messages:2.0:ListResponse"],
            "totalResults": 2,
            "startIndex": 1,
            "itemsPerPage": 1,
            "Resources": [
                {"id": "u1", "userName": "alice@example.com", "active": true}
            ],
            "nextCursor": "abc"
        }))
        .expect("Failed to decode list");

        assert_eq!(l.total_results, 2);
        assert_eq!(l.items_per_page, Some(1));
        assert_eq!(l.attrs.get("nextCursor"), Some(&json!("abc")));
        let first = l.into_first().expect("no first resource");
        assert_eq!(first.user_name, "alice@example.com");
    }

    #[test]
    fn parse_empty_list_response() {
        let l: ListResponse<User> =
            serde_json::from_value(json!({"totalResults": 0})).expect("Failed to decode list");
        assert!(l.resources.is_empty());
        assert!(l.into_first().is_none());
    }

    #[test]
    fn query_pairs() {
        assert_eq!(
            ListQuery::new().to_query_pairs(),
            vec![("startIndex", "1".to_string()), ("count", "100".to_string())]
        );

        let q = ListQuery::new()
            .start_index(101)
            .count(50)
            .filter(Filter::eq("displayName", "Ops"));
        assert_eq!(
            q.to_query_pairs(),
            vec![
                ("startIndex", "101".to_string()),
                ("count", "50".to_string()),
                ("filter", r#"displayName eq "Ops""#.to_string()),
            ]
        );
    }
}
