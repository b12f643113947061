use scim_proto::constants::SCIM_USERS_PATH;
use scim_proto::filter::Filter;
use scim_proto::list::{ListQuery, ListResponse};
use scim_proto::patch::{PatchOperation, PatchRequest};
use scim_proto::user::{NewUser, User};

use crate::{ClientError, ScimClient};

impl ScimClient {
    /// `POST /v2/Users`. The display name defaults to "given family".
    pub fn create_user(&self, new_user: &NewUser) -> Result<User, ClientError> {
        let dest = self.resource_url(SCIM_USERS_PATH, None)?;
        self.perform_post_request(&dest, &new_user.to_request())
    }

    pub fn get_user(&self, id: &str) -> Result<User, ClientError> {
        let dest = self.resource_url(SCIM_USERS_PATH, Some(id))?;
        self.perform_get_request(&dest)
    }

    /// One page of users.
    pub fn list_users(&self, query: &ListQuery) -> Result<ListResponse<User>, ClientError> {
        let dest = self.resource_url(SCIM_USERS_PATH, None)?;
        self.perform_list_request(&dest, query)
    }

    pub fn find_user_by_username(&self, user_name: &str) -> Result<Option<User>, ClientError> {
        let query = ListQuery::new()
            .count(1)
            .filter(Filter::eq("userName", user_name));
        self.list_users(&query).map(|l| l.into_first())
    }

    /// `PATCH /v2/Users/{id}` with the given operations in a single request.
    pub fn update_user(
        &self,
        id: &str,
        operations: Vec<PatchOperation>,
    ) -> Result<User, ClientError> {
        let dest = self.resource_url(SCIM_USERS_PATH, Some(id))?;
        self.perform_patch_request(&dest, &PatchRequest::new(operations))
    }

    pub fn deactivate_user(&self, id: &str) -> Result<User, ClientError> {
        self.update_user(id, vec![PatchOperation::set_active(false)])
    }

    pub fn activate_user(&self, id: &str) -> Result<User, ClientError> {
        self.update_user(id, vec![PatchOperation::set_active(true)])
    }

    /// Replace both name parts in one request.
    pub fn update_user_name(
        &self,
        id: &str,
        given_name: &str,
        family_name: &str,
    ) -> Result<User, ClientError> {
        self.update_user(
            id,
            vec![
                PatchOperation::replace("name.givenName", given_name),
                PatchOperation::replace("name.familyName", family_name),
            ],
        )
    }

    /// Deleting an id that's already gone is a 404 error, not a no-op.
    pub fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        let dest = self.resource_url(SCIM_USERS_PATH, Some(id))?;
        self.perform_delete_request(&dest)
    }
}
