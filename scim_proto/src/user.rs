use crate::constants::SCIM_SCHEMA_USER;
use crate::ScimAttrs;

use serde::{Deserialize, Serialize};

/// Components of a user's name. Only the given and family names are
/// interpreted, everything else (formatted, middleName, ...) passes through.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(flatten)]
    pub attrs: ScimAttrs,
}

/// A user as represented by the service provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
    // Server assigned, opaque.
    pub id: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(flatten)]
    pub attrs: ScimAttrs,
}

impl User {
    /// A user with no `active` attribute is treated as active.
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }

    pub fn given_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.given_name.as_deref())
    }

    pub fn family_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.family_name.as_deref())
    }
}

/// The details a caller supplies to create a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub user_name: String,
    pub given_name: String,
    pub family_name: String,
    pub display_name: Option<String>,
    pub active: bool,
}

impl NewUser {
    pub fn new(user_name: &str, given_name: &str, family_name: &str) -> Self {
        NewUser {
            user_name: user_name.to_string(),
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            display_name: None,
            active: true,
        }
    }

    pub fn display_name(self, display_name: &str) -> Self {
        NewUser {
            display_name: Some(display_name.to_string()),
            ..self
        }
    }

    pub fn active(self, active: bool) -> Self {
        NewUser { active, ..self }
    }

    /// The supplied display name, or "given family" when none (or an empty
    /// one) was supplied.
    pub fn effective_display_name(&self) -> String {
        match self.display_name.as_deref() {
            Some(dn) if !dn.is_empty() => dn.to_string(),
            _ => format!("{} {}", self.given_name, self.family_name)
                .trim()
                .to_string(),
        }
    }

    pub fn to_request(&self) -> UserCreateRequest {
        UserCreateRequest {
            schemas: vec![SCIM_SCHEMA_USER.to_string()],
            user_name: self.user_name.clone(),
            name: UserCreateName {
                given_name: self.given_name.clone(),
                family_name: self.family_name.clone(),
            },
            display_name: self.effective_display_name(),
            active: self.active,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateName {
    pub given_name: String,
    pub family_name: String,
}

/// Body of `POST /Users`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub schemas: Vec<String>,
    pub user_name: String,
    pub name: UserCreateName,
    pub display_name: String,
    pub active: bool,
}
