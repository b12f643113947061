use scim_proto::constants::SCIM_GROUPS_PATH;
use scim_proto::filter::Filter;
use scim_proto::group::{Group, NewGroup};
use scim_proto::list::{ListQuery, ListResponse};
use scim_proto::patch::{PatchOperation, PatchRequest};

use crate::{ClientError, ScimClient};

impl ScimClient {
    pub fn create_group(&self, new_group: &NewGroup) -> Result<Group, ClientError> {
        let dest = self.resource_url(SCIM_GROUPS_PATH, None)?;
        self.perform_post_request(&dest, &new_group.to_request())
    }

    pub fn get_group(&self, id: &str) -> Result<Group, ClientError> {
        let dest = self.resource_url(SCIM_GROUPS_PATH, Some(id))?;
        self.perform_get_request(&dest)
    }

    pub fn list_groups(&self, query: &ListQuery) -> Result<ListResponse<Group>, ClientError> {
        let dest = self.resource_url(SCIM_GROUPS_PATH, None)?;
        self.perform_list_request(&dest, query)
    }

    pub fn find_group_by_name(&self, display_name: &str) -> Result<Option<Group>, ClientError> {
        let query = ListQuery::new()
            .count(1)
            .filter(Filter::eq("displayName", display_name));
        self.list_groups(&query).map(|l| l.into_first())
    }

    pub fn update_group(
        &self,
        id: &str,
        operations: Vec<PatchOperation>,
    ) -> Result<Group, ClientError> {
        let dest = self.resource_url(SCIM_GROUPS_PATH, Some(id))?;
        self.perform_patch_request(&dest, &PatchRequest::new(operations))
    }

    pub fn add_group_member(&self, group_id: &str, user_id: &str) -> Result<Group, ClientError> {
        self.update_group(group_id, vec![PatchOperation::add_members(&[user_id])])
    }

    pub fn remove_group_member(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<Group, ClientError> {
        self.update_group(group_id, vec![PatchOperation::remove_members(&[user_id])])
    }

    pub fn update_group_name(
        &self,
        group_id: &str,
        display_name: &str,
    ) -> Result<Group, ClientError> {
        self.update_group(
            group_id,
            vec![PatchOperation::replace("displayName", display_name)],
        )
    }

    pub fn delete_group(&self, id: &str) -> Result<(), ClientError> {
        let dest = self.resource_url(SCIM_GROUPS_PATH, Some(id))?;
        self.perform_delete_request(&dest)
    }
}
