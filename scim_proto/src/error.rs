use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Error body returned by a service provider (RFC 7644 section 3.12).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScimErrorResponse {
    #[serde(default)]
    pub schemas: Vec<String>,
    // The RFC says string, plenty of servers send a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: Option<String>,
    pub scim_type: Option<String>,
    pub detail: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_error_status_forms() {
        let e: ScimErrorResponse = serde_json::from_value(json!({
            "schemas": ["urn:ietf:params:scim:api:messages:2.0:Error"],
            "scimType": "uniqueness",
            "detail": "User already exists",
            "status": "409"
        }))
        .expect("Failed to decode error");
        assert_eq!(e.status.as_deref(), Some("409"));
        assert_eq!(e.scim_type.as_deref(), Some("uniqueness"));

        let e: ScimErrorResponse =
            serde_json::from_value(json!({"status": 404, "detail": "not here"}))
                .expect("Failed to decode error");
        assert_eq!(e.status.as_deref(), Some("404"));
        assert!(e.scim_type.is_none());
    }
}
