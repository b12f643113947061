//! Idempotent provisioning on top of the plain operations.
//!
//! A create that fails with 409 is taken to mean the resource already exists,
//! and it is then looked up with a caller supplied uniqueness filter. Which
//! attribute a server treats as the conflict key is server specific, so the
//! filter is a parameter rather than being fixed here.

use serde::de::DeserializeOwned;
use serde_json::Value;

use scim_proto::constants::{SCIM_GROUPS_PATH, SCIM_USERS_PATH};
use scim_proto::filter::Filter;
use scim_proto::group::{Group, NewGroup};
use scim_proto::list::{ListQuery, ListResponse};
use scim_proto::user::{NewUser, User};

use crate::{ClientError, ScimClient};

#[derive(Debug, Clone, PartialEq)]
pub enum Provisioned<T> {
    Created(T),
    Existing(T),
}

impl<T> Provisioned<T> {
    pub fn was_created(&self) -> bool {
        matches!(self, Provisioned::Created(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Provisioned::Created(t) | Provisioned::Existing(t) => t,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Provisioned::Created(t) | Provisioned::Existing(t) => t,
        }
    }
}

impl ScimClient {
    /// Run `create`. If it reports a conflict, return the first resource in
    /// `collection` matching `lookup` instead. Any other error is returned as
    /// is, and a conflict with nothing to find is `NotFoundAfterConflict`.
    ///
    /// The listed resources are checked against `lookup` here as well, since
    /// a server that ignores `filter` returns the whole collection.
    pub fn create_or_fetch<T, F>(
        &self,
        collection: &'static str,
        lookup: &Filter,
        create: F,
    ) -> Result<Provisioned<T>, ClientError>
    where
        T: DeserializeOwned,
        F: FnOnce(&Self) -> Result<T, ClientError>,
    {
        match create(self) {
            Ok(created) => Ok(Provisioned::Created(created)),
            Err(e) if e.is_conflict() => {
                info!("{} already exists, looking up {}", collection, lookup);
                let dest = self.resource_url(collection, None)?;
                let query = ListQuery::new().filter(lookup.clone());
                let page: ListResponse<Value> = self.perform_list_request(&dest, &query)?;

                let found = page.resources.into_iter().find(|r| lookup.matches(r));
                match found {
                    Some(r) => serde_json::from_value(r.clone())
                        .map(Provisioned::Existing)
                        .map_err(|e| {
                            error!("Unable to decode {} matching {} - {:?}", collection, lookup, e);
                            ClientError::JsonDecode(e, r.to_string())
                        }),
                    None => {
                        error!(
                            "{} reported a conflict, but nothing matches {}",
                            collection, lookup
                        );
                        Err(ClientError::NotFoundAfterConflict {
                            resource: collection,
                            filter: lookup.to_string(),
                        })
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Create a user, or fetch the existing one with the same `userName`.
    pub fn provision_user(&self, new_user: &NewUser) -> Result<Provisioned<User>, ClientError> {
        let lookup = Filter::eq("userName", &new_user.user_name);
        self.create_or_fetch(SCIM_USERS_PATH, &lookup, |c| c.create_user(new_user))
    }

    /// Create a group, or fetch the existing one with the same `displayName`.
    /// An existing group's membership is returned untouched.
    pub fn provision_group(
        &self,
        new_group: &NewGroup,
    ) -> Result<Provisioned<Group>, ClientError> {
        let lookup = Filter::eq("displayName", &new_group.display_name);
        self.create_or_fetch(SCIM_GROUPS_PATH, &lookup, |c| c.create_group(new_group))
    }

    /// Delete a user, treating 404 as already deleted. Returns whether this
    /// call did the deleting.
    pub fn delete_user_if_exists(&self, id: &str) -> Result<bool, ClientError> {
        absent_is_ok(self.delete_user(id))
    }

    pub fn delete_group_if_exists(&self, id: &str) -> Result<bool, ClientError> {
        absent_is_ok(self.delete_group(id))
    }
}

fn absent_is_ok(r: Result<(), ClientError>) -> Result<bool, ClientError> {
    match r {
        Ok(()) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
