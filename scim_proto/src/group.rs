use crate::constants::SCIM_SCHEMA_GROUP;
use crate::ScimAttrs;

use serde::{Deserialize, Serialize};

/// A reference to a group member. On the way out only `value` is sent.
///
/// Some servers emit a bare `{}` for a member whose user is gone, which
/// decodes with an empty `value` and is skipped by the id helpers on `Group`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemberRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    // $ref, type, ...
    #[serde(flatten)]
    pub attrs: ScimAttrs,
}

impl MemberRef {
    pub fn new(id: &str) -> Self {
        MemberRef {
            value: id.to_string(),
            display: None,
            attrs: ScimAttrs::new(),
        }
    }
}

/// A group as represented by the service provider. Member order is whatever
/// the server returned and is not guaranteed to be stable between reads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
    pub id: String,
    pub display_name: String,
    // None and Some(vec![]) are both kept so that re-encoding matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<MemberRef>>,
    #[serde(flatten)]
    pub attrs: ScimAttrs,
}

impl Group {
    /// Members with a usable id, dangling references aren't counted.
    pub fn member_count(&self) -> usize {
        self.member_ids().len()
    }

    pub fn member_ids(&self) -> Vec<&str> {
        self.members
            .iter()
            .flatten()
            .map(|m| m.value.as_str())
            .filter(|v| !v.is_empty())
            .collect()
    }

    pub fn has_member(&self, id: &str) -> bool {
        !id.is_empty() && self.members.iter().flatten().any(|m| m.value == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub display_name: String,
    pub members: Vec<String>,
}

impl NewGroup {
    pub fn new(display_name: &str) -> Self {
        NewGroup {
            display_name: display_name.to_string(),
            members: Vec::new(),
        }
    }

    pub fn members<I, S>(self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NewGroup {
            members: members.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn to_request(&self) -> GroupCreateRequest {
        let members = if self.members.is_empty() {
            None
        } else {
            Some(self.members.iter().map(|id| MemberRef::new(id)).collect())
        };

        GroupCreateRequest {
            schemas: vec![SCIM_SCHEMA_GROUP.to_string()],
            display_name: self.display_name.clone(),
            members,
        }
    }
}

/// Body of `POST /Groups`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupCreateRequest {
    pub schemas: Vec<String>,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<MemberRef>>,
}
