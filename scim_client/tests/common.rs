#![allow(dead_code)]

use scim_client::{ScimClient, ScimClientBuilder};
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, Request};

pub const TEST_TOKEN: &str = "integration test bearer token";
pub const SCIM_JSON: &str = "application/scim+json";

// The mock server answers on its own thread, the runtime here only drives
// mounting and inspection. The client under test stays blocking.
pub struct MockScim {
    server: MockServer,
    rt: Runtime,
}

impl MockScim {
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn request_bodies(&self) -> Vec<Value> {
        self.requests()
            .iter()
            .map(|r| r.body_json::<Value>().unwrap_or(Value::Null))
            .collect()
    }
}

/// A mock for `verb path` that only matches requests carrying the fixed
/// SCIM headers.
pub fn scim(verb: &str, p: &str) -> MockBuilder {
    Mock::given(method(verb))
        .and(path(p))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .and(header("Accept", SCIM_JSON))
        .and(header("Content-Type", SCIM_JSON))
}

pub fn run_test(test_fn: fn(ScimClient, &MockScim)) {
    let _ = env_logger::builder().is_test(true).try_init();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to start tokio");
    let server = rt.block_on(MockServer::start());
    let mock = MockScim { server, rt };

    // Trailing slash on purpose, the builder must strip it.
    let client = ScimClientBuilder::new()
        .address(format!("{}/", mock.uri()))
        .bearer_token(TEST_TOKEN.to_string())
        .connect_timeout(10)
        .build()
        .expect("failed to build client");

    test_fn(client, &mock);

    mock.rt.block_on(mock.server.verify());
}

pub fn user_json(id: &str, user_name: &str, given: &str, family: &str, active: bool) -> Value {
    json!({
        "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
        "id": id,
        "userName": user_name,
        "name": {
            "givenName": given,
            "familyName": family
        },
        "displayName": format!("{} {}", given, family),
        "active": active,
        "meta": {
            "resourceType": "User",
            "location": format!("https://scim.example.com/v2/Users/{}", id)
        }
    })
}

pub fn group_json(id: &str, display_name: &str, members: &[&str]) -> Value {
    let members: Vec<Value> = members.iter().map(|m| json!({ "value": m })).collect();
    json!({
        "schemas": ["urn:ietf:params:scim:schemas:core:2.0:Group"],
        "id": id,
        "displayName": display_name,
        "members": members,
        "meta": {
            "resourceType": "Group"
        }
    })
}

pub fn list_json(resources: Vec<Value>) -> Value {
    json!({
        "schemas": ["urn:ietf:params:scim:api:messages:2.0:ListResponse"],
        "totalResults": resources.len(),
        "startIndex": 1,
        "itemsPerPage": resources.len(),
        "Resources": resources
    })
}

pub fn scim_error(status: u16, scim_type: Option<&str>, detail: &str) -> Value {
    let mut e = json!({
        "schemas": ["urn:ietf:params:scim:api:messages:2.0:Error"],
        "status": status.to_string(),
        "detail": detail
    });
    if let Some(t) = scim_type {
        e["scimType"] = json!(t);
    }
    e
}
