use serde_json::json;
use wiremock::matchers::{body_json, query_param};
use wiremock::ResponseTemplate;

use scim_client::scim_proto::group::NewGroup;
use scim_client::scim_proto::list::ListQuery;
use scim_client::ScimClient;

mod common;
use crate::common::{group_json, list_json, run_test, scim, scim_error, MockScim};

#[test]
fn test_create_group_member_order() {
    run_test(|client: ScimClient, mock: &MockScim| {
        mock.mount(
            scim("POST", "/v2/Groups")
                .and(body_json(json!({
                    "schemas": ["urn:ietf:params:scim:schemas:core:2.0:Group"],
                    "displayName": "Engineering",
                    "members": [{"value": "id1"}, {"value": "id2"}, {"value": "id3"}]
                })))
                .respond_with(
                    ResponseTemplate::new(201)
                        .set_body_json(group_json("g-1", "Engineering", &["id1", "id2", "id3"])),
                )
                .expect(1),
        );

        let group = client
            .create_group(&NewGroup::new("Engineering").members(["id1", "id2", "id3"]))
            .expect("create failed");
        assert_eq!(group.id, "g-1");
        assert_eq!(group.member_ids(), vec!["id1", "id2", "id3"]);
    });
}

#[test]
fn test_create_group_without_members() {
    run_test(|client: ScimClient, mock: &MockScim| {
        mock.mount(
            scim("POST", "/v2/Groups")
                .and(body_json(json!({
                    "schemas": ["urn:ietf:params:scim:schemas:core:2.0:Group"],
                    "displayName": "Empty"
                })))
                .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                    "id": "g-2",
                    "displayName": "Empty"
                })))
                .expect(1),
        );

        let group = client
            .create_group(&NewGroup::new("Empty"))
            .expect("create failed");
        assert!(group.members.is_none());
        assert_eq!(group.member_count(), 0);
    });
}

#[test]
fn test_get_group_round_trip() {
    run_test(|client: ScimClient, mock: &MockScim| {
        let mut served = group_json("g-1", "Tour Guides", &["u-1", "u-2"]);
        served["members"][0]["display"] = json!("Babs Jensen");
        served["members"][0]["$ref"] = json!("https://scim.example.com/v2/Users/u-1");
        served["externalId"] = json!("tg");

        mock.mount(
            scim("GET", "/v2/Groups/g-1")
                .respond_with(ResponseTemplate::new(200).set_body_json(served.clone()))
                .expect(1),
        );

        let group = client.get_group("g-1").expect("get failed");
        let first = group
            .members
            .as_ref()
            .and_then(|m| m.first())
            .expect("no members");
        assert_eq!(first.display.as_deref(), Some("Babs Jensen"));
        assert_eq!(
            serde_json::to_value(&group).expect("failed to encode group"),
            served
        );
    });
}

#[test]
fn test_get_group_with_dangling_member() {
    run_test(|client: ScimClient, mock: &MockScim| {
        mock.mount(
            scim("GET", "/v2/Groups/g1")
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "schemas": ["urn:ietf:params:scim:schemas:core:2.0:Group"],
                    "id": "g1",
                    "displayName": "Engineering",
                    "members": [{"value": "u1"}, {}]
                })))
                .expect(1),
        );

        let group = client.get_group("g1").expect("get failed");
        assert_eq!(group.member_ids(), vec!["u1"]);
        assert_eq!(group.member_count(), 1);
    });
}

#[test]
fn test_list_and_find_groups() {
    run_test(|client: ScimClient, mock: &MockScim| {
        mock.mount(
            scim("GET", "/v2/Groups")
                .and(query_param("filter", r#"displayName eq "Ops""#))
                .and(query_param("count", "1"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(list_json(vec![group_json("g-9", "Ops", &[])])),
                )
                .expect(1),
        );
        mock.mount(
            scim("GET", "/v2/Groups")
                .and(query_param("filter", r#"displayName eq "Nope""#))
                .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![])))
                .expect(1),
        );
        mock.mount(
            scim("GET", "/v2/Groups")
                .and(query_param("count", "100"))
                .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
                    group_json("g-9", "Ops", &[]),
                    group_json("g-10", "Dev", &["u-1"]),
                ])))
                .expect(1),
        );

        let found = client
            .find_group_by_name("Ops")
            .expect("find failed")
            .expect("group should exist");
        assert_eq!(found.id, "g-9");

        assert!(client
            .find_group_by_name("Nope")
            .expect("find failed")
            .is_none());

        let page = client.list_groups(&ListQuery::new()).expect("list failed");
        assert_eq!(page.total_results, 2);
        assert_eq!(page.resources[1].member_count(), 1);
    });
}

#[test]
fn test_add_then_remove_member_is_net_noop() {
    run_test(|client: ScimClient, mock: &MockScim| {
        mock.mount(
            scim("GET", "/v2/Groups/g-1")
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(group_json("g-1", "Engineering", &["u-1"])),
                )
                .expect(1),
        );
        mock.mount(
            scim("PATCH", "/v2/Groups/g-1")
                .and(body_json(json!({
                    "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
                    "Operations": [
                        {"op": "add", "path": "members", "value": [{"value": "u-2"}]}
                    ]
                })))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(group_json("g-1", "Engineering", &["u-1", "u-2"])),
                )
                .expect(1),
        );
        mock.mount(
            scim("PATCH", "/v2/Groups/g-1")
                .and(body_json(json!({
                    "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
                    "Operations": [
                        {"op": "remove", "path": "members", "value": [{"value": "u-2"}]}
                    ]
                })))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(group_json("g-1", "Engineering", &["u-1"])),
                )
                .expect(1),
        );

        let before = client.get_group("g-1").expect("get failed").member_count();
        let added = client
            .add_group_member("g-1", "u-2")
            .expect("add failed");
        assert!(added.has_member("u-2"));
        let removed = client
            .remove_group_member("g-1", "u-2")
            .expect("remove failed");
        assert!(!removed.has_member("u-2"));
        assert_eq!(removed.member_count(), before);
    });
}

#[test]
fn test_update_group_name() {
    run_test(|client: ScimClient, mock: &MockScim| {
        mock.mount(
            scim("PATCH", "/v2/Groups/g-1")
                .and(body_json(json!({
                    "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
                    "Operations": [
                        {"op": "replace", "path": "displayName", "value": "Demo Engineering Team - Updated"}
                    ]
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(group_json(
                    "g-1",
                    "Demo Engineering Team - Updated",
                    &[],
                )))
                .expect(1),
        );

        let group = client
            .update_group_name("g-1", "Demo Engineering Team - Updated")
            .expect("rename failed");
        assert_eq!(group.display_name, "Demo Engineering Team - Updated");
    });
}

#[test]
fn test_delete_group() {
    run_test(|client: ScimClient, mock: &MockScim| {
        mock.mount(
            scim("DELETE", "/v2/Groups/g-1")
                .respond_with(ResponseTemplate::new(204))
                .expect(1),
        );
        mock.mount(
            scim("DELETE", "/v2/Groups/g-gone")
                .respond_with(
                    ResponseTemplate::new(404).set_body_json(scim_error(404, None, "gone")),
                )
                .expect(2),
        );

        client.delete_group("g-1").expect("delete failed");
        assert!(client
            .delete_group("g-gone")
            .expect_err("should be not found")
            .is_not_found());
        assert!(!client
            .delete_group_if_exists("g-gone")
            .expect("tolerant delete failed"));
    });
}
