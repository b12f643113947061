//! PATCH request documents (RFC 7644 section 3.5.2).
//!
//! The constructors on [`PatchOperation`] are the supported way to build an
//! operation, each one produces a value of the shape the operation implies:
//!
//! * `replace` without a path carries an object of attributes.
//! * `replace` with a path carries a scalar addressed at that path.
//! * `add` / `remove` on `members` carry a list of `{"value": id}` references.

use crate::constants::SCIM_SCHEMA_PATCH_OP;
use crate::group::MemberRef;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const MEMBERS_PATH: &str = "members";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatchOperation {
    pub op: PatchOp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchOperation {
    /// `replace` with no path, the value being a sub-object of attributes.
    pub fn replace_attrs(attrs: Map<String, Value>) -> Self {
        PatchOperation {
            op: PatchOp::Replace,
            path: None,
            value: Some(Value::Object(attrs)),
        }
    }

    /// `replace` of a single attribute, addressed by a bare or dotted path.
    pub fn replace<V: Into<Value>>(path: &str, value: V) -> Self {
        PatchOperation {
            op: PatchOp::Replace,
            path: Some(path.to_string()),
            value: Some(value.into()),
        }
    }

    pub fn set_active(active: bool) -> Self {
        let mut attrs = Map::new();
        attrs.insert("active".to_string(), Value::Bool(active));
        Self::replace_attrs(attrs)
    }

    pub fn add_members(ids: &[&str]) -> Self {
        Self::members(PatchOp::Add, ids)
    }

    pub fn remove_members(ids: &[&str]) -> Self {
        Self::members(PatchOp::Remove, ids)
    }

    fn members(op: PatchOp, ids: &[&str]) -> Self {
        let refs: Vec<Value> = ids
            .iter()
            .map(|id| {
                let mut m = Map::new();
                m.insert("value".to_string(), Value::String((*id).to_string()));
                Value::Object(m)
            })
            .collect();
        PatchOperation {
            op,
            path: Some(MEMBERS_PATH.to_string()),
            value: Some(Value::Array(refs)),
        }
    }

    /// The member references carried by an `add`/`remove` on `members`.
    pub fn member_refs(&self) -> Option<Vec<MemberRef>> {
        if self.path.as_deref() != Some(MEMBERS_PATH) {
            return None;
        }
        self.value
            .as_ref()
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatchRequest {
    pub schemas: Vec<String>,
    #[serde(rename = "Operations")]
    pub operations: Vec<PatchOperation>,
}

impl PatchRequest {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        PatchRequest {
            schemas: vec![SCIM_SCHEMA_PATCH_OP.to_string()],
            operations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_active_has_no_path() {
        let req = PatchRequest::new(vec![PatchOperation::set_active(false)]);
        assert_eq!(
            serde_json::to_value(&req).expect("Failed to encode patch"),
            json!({
                "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
                "Operations": [
                    {"op": "replace", "value": {"active": false}}
                ]
            })
        );
    }

    #[test]
    fn replace_with_path_is_scalar() {
        let op = PatchOperation::replace("name.givenName", "Demo");
        assert_eq!(
            serde_json::to_value(&op).expect("Failed to encode op"),
            json!({"op": "replace", "path": "name.givenName", "value": "Demo"})
        );
    }

    #[test]
    fn member_operations() {
        let op = PatchOperation::add_members(&["u1"]);
        assert_eq!(
            serde_json::to_value(&op).expect("Failed to encode op"),
            json!({"op": "add", "path": "members", "value": [{"value": "u1"}]})
        );
        let refs = op.member_refs().expect("no member refs");
        assert_eq!(refs, vec![MemberRef::new("u1")]);

        let op = PatchOperation::remove_members(&["u1", "u2"]);
        assert_eq!(op.op, PatchOp::Remove);
        assert_eq!(
            op.value,
            Some(json!([{"value": "u1"}, {"value": "u2"}]))
        );

        assert!(PatchOperation::replace("displayName", "x")
            .member_refs()
            .is_none());
    }

    #[test]
    fn parse_patch_request() {
        let req: PatchRequest = serde_json::from_value(json!({
            "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
            "Operations": [
                {"op": "replace", "path": "displayName", "value": "New"},
                {"op": "remove", "path": "members", "value": [{"value": "u9"}]}
            ]
        }))
        .expect("Failed to decode patch");
        assert_eq!(req.operations.len(), 2);
        assert_eq!(req.operations[0], PatchOperation::replace("displayName", "New"));
        assert_eq!(req.operations[1], PatchOperation::remove_members(&["u9"]));
    }
}
