#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

//! A blocking client for SCIM 2.0 service providers.
//!
//! Every operation issues a single request (the `find_*` and provisioning
//! helpers compose a few), there is no retry and no caching. Failed requests
//! come back as [`ClientError::Http`] carrying the status and the body so
//! that callers can decide how to treat a 409 or a 404.

#[macro_use]
extern crate log;

use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
pub use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::error::Error as SerdeJsonError;
use serde_json::Value;
use url::Url;

use scim_proto::constants::SCIM_CONTENT_TYPE;
use scim_proto::error::ScimErrorResponse;
use scim_proto::list::{ListQuery, ListResponse};

pub use scim_proto;

mod group;
mod provision;
mod user;

pub use crate::provision::Provisioned;

#[derive(Debug)]
pub enum ClientError {
    /// A required connection parameter was not supplied.
    ConfigMissing(&'static str),
    ConfigParseIssue(String),
    /// Non 2xx response: status, the body decoded as json if possible, raw body.
    Http(StatusCode, Option<Value>, String),
    Transport(reqwest::Error),
    JsonEncode(SerdeJsonError),
    JsonDecode(SerdeJsonError, String),
    /// A create reported 409 but the conflicting resource could not be found
    /// with the lookup filter afterwards.
    NotFoundAfterConflict {
        resource: &'static str,
        filter: String,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(status, _, _) => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ClientError::Http(StatusCode::CONFLICT, _, _))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Http(StatusCode::NOT_FOUND, _, _))
    }

    /// The response body as a SCIM error message, if that's what it was.
    pub fn scim_detail(&self) -> Option<ScimErrorResponse> {
        match self {
            ClientError::Http(_, Some(body), _) => serde_json::from_value(body.clone()).ok(),
            _ => None,
        }
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ConfigMissing(opt) => {
                write!(f, "required configuration option '{}' is not set", opt)
            }
            ClientError::ConfigParseIssue(msg) => write!(f, "invalid configuration: {}", msg),
            ClientError::Http(status, _, body) => {
                if body.is_empty() {
                    write!(f, "{}", status)
                } else {
                    write!(f, "{}: {}", status, body)
                }
            }
            ClientError::Transport(e) => write!(f, "transport failure: {}", e),
            ClientError::JsonEncode(e) => write!(f, "unable to encode request: {}", e),
            ClientError::JsonDecode(e, _) => write!(f, "unable to decode response: {}", e),
            ClientError::NotFoundAfterConflict { resource, filter } => write!(
                f,
                "{} reported a conflict but no resource matches '{}'",
                resource, filter
            ),
        }
    }
}

impl std::error::Error for ClientError {}

/// Options read from a toml configuration file.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScimClientConfig {
    pub uri: Option<String>,
    pub token: Option<String>,
    pub verify_ca: Option<bool>,
    pub connect_timeout: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ScimClientBuilder {
    address: Option<String>,
    token: Option<String>,
    verify_ca: bool,
    connect_timeout: Option<u64>,
}

impl Default for ScimClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ScimClientBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.address {
            Some(value) => writeln!(f, "address: {}", value)?,
            None => writeln!(f, "address: unset")?,
        }
        // Never print the token itself.
        match &self.token {
            Some(_) => writeln!(f, "token: set")?,
            None => writeln!(f, "token: unset")?,
        }
        writeln!(f, "verify_ca: {}", self.verify_ca)?;
        match self.connect_timeout {
            Some(value) => writeln!(f, "connect_timeout: {}", value),
            None => writeln!(f, "connect_timeout: unset"),
        }
    }
}

impl ScimClientBuilder {
    pub fn new() -> Self {
        ScimClientBuilder {
            address: None,
            token: None,
            verify_ca: true,
            connect_timeout: None,
        }
    }

    fn apply_config_options(self, scc: ScimClientConfig) -> Self {
        let address = match scc.uri {
            Some(uri) => Some(uri),
            None => {
                debug!("No URI in config supplied to apply_config_options");
                self.address
            }
        };
        ScimClientBuilder {
            address,
            token: scc.token.or(self.token),
            verify_ca: scc.verify_ca.unwrap_or(self.verify_ca),
            connect_timeout: scc.connect_timeout.or(self.connect_timeout),
        }
    }

    /// Apply the options found in a toml file. A file that doesn't exist or
    /// can't be read is skipped, one that can't be parsed is an error.
    pub fn read_options_from_optional_config<P: AsRef<Path> + std::fmt::Debug>(
        self,
        config_path: P,
    ) -> Result<Self, ClientError> {
        let contents = match fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{:?} does not exist, skipping", config_path);
                return Ok(self);
            }
            Err(e) => {
                warn!("Unable to read {:?}, skipping - {:?}", config_path, e);
                return Ok(self);
            }
        };

        let config: ScimClientConfig = toml::from_str(contents.as_str()).map_err(|e| {
            error!("{:?}", e);
            ClientError::ConfigParseIssue(format!("{:?}", e))
        })?;

        Ok(self.apply_config_options(config))
    }

    pub fn address(self, address: String) -> Self {
        ScimClientBuilder {
            address: Some(address),
            ..self
        }
    }

    pub fn bearer_token(self, token: String) -> Self {
        ScimClientBuilder {
            token: Some(token),
            ..self
        }
    }

    pub fn danger_accept_invalid_certs(self, accept_invalid_certs: bool) -> Self {
        ScimClientBuilder {
            // We have to flip the bool state here due to english language.
            verify_ca: !accept_invalid_certs,
            ..self
        }
    }

    pub fn connect_timeout(self, secs: u64) -> Self {
        ScimClientBuilder {
            connect_timeout: Some(secs),
            ..self
        }
    }

    fn display_warnings(&self, address: &str) {
        if !self.verify_ca {
            warn!("verify_ca set to false in client configuration - this may allow network interception of bearer tokens!");
        }

        if !address.starts_with("https://") {
            warn!("Address does not start with 'https://' - this may allow network interception of bearer tokens!");
        }
    }

    /// Generates a useragent header based on the package name and version
    pub fn user_agent() -> &'static str {
        static APP_USER_AGENT: &str =
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
        APP_USER_AGENT
    }

    /// Build the client ready for usage. Missing connection parameters are
    /// reported here, before anything touches the network.
    pub fn build(self) -> Result<ScimClient, ClientError> {
        let address = match self.address.as_deref().map(str::trim) {
            Some(a) if !a.is_empty() => a.trim_end_matches('/').to_string(),
            _ => {
                error!("Configuration option 'uri' missing from client configuration, cannot continue without a SCIM server to connect to.");
                return Err(ClientError::ConfigMissing("uri"));
            }
        };

        let token = match self.token.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => {
                error!("Configuration option 'token' missing from client configuration, cannot authenticate to the SCIM server.");
                return Err(ClientError::ConfigMissing("token"));
            }
        };

        let origin = Url::parse(&address).map_err(|e| {
            error!("Unable to parse address {} - {:?}", address, e);
            ClientError::ConfigParseIssue(format!("{:?}", e))
        })?;

        if origin.cannot_be_a_base() {
            return Err(ClientError::ConfigParseIssue(format!(
                "{} cannot be used as a base url",
                address
            )));
        }

        self.display_warnings(address.as_str());

        let mut auth_value =
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ClientError::ConfigParseIssue(
                    "token contains characters not valid in a header".to_string(),
                )
            })?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(SCIM_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(SCIM_CONTENT_TYPE));

        let client_builder = Client::builder()
            .user_agent(ScimClientBuilder::user_agent())
            .default_headers(headers)
            .danger_accept_invalid_certs(!self.verify_ca);

        let client_builder = match &self.connect_timeout {
            Some(secs) => client_builder
                .connect_timeout(Duration::from_secs(*secs))
                .timeout(Duration::from_secs(*secs)),
            None => client_builder,
        };

        let client = client_builder.build().map_err(ClientError::Transport)?;

        Ok(ScimClient {
            client,
            addr: address,
            builder: self,
        })
    }
}

#[derive(Debug)]
pub struct ScimClient {
    pub(crate) client: Client,
    pub(crate) addr: String,
    pub(crate) builder: ScimClientBuilder,
}

impl ScimClient {
    /// The base url with any trailing '/' removed.
    pub fn base_url(&self) -> &str {
        self.addr.as_str()
    }

    pub fn new_session(&self) -> Result<Self, ClientError> {
        self.builder.clone().build()
    }

    /// `{base}{collection}` or `{base}{collection}/{id}`, the id being
    /// percent encoded as a single path segment.
    pub(crate) fn resource_url(
        &self,
        collection: &str,
        id: Option<&str>,
    ) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{}", self.addr, collection))
            .map_err(|e| ClientError::ConfigParseIssue(format!("{:?}", e)))?;
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|_| {
                    ClientError::ConfigParseIssue(format!(
                        "{} cannot be used as a base url",
                        self.addr
                    ))
                })?
                .push(id);
        }
        Ok(url)
    }

    fn send(
        &self,
        method: &str,
        dest: &Url,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        debug!("SCIM {} {}", method, dest);
        request.send().map_err(|e| {
            error!("SCIM {} {} failed - {:?}", method, dest, e);
            ClientError::Transport(e)
        })
    }

    fn http_error(method: &str, dest: &Url, response: Response) -> ClientError {
        let status = response.status();
        debug!("SCIM {} {} -> {}", method, dest, status);
        let body = response.text().unwrap_or_else(|e| {
            debug!("Unable to read error body of {} {} - {:?}", method, dest, e);
            String::new()
        });
        let decoded = serde_json::from_str(&body).ok();
        ClientError::Http(status, decoded, body)
    }

    fn handle_response<T: DeserializeOwned>(
        &self,
        method: &str,
        dest: &Url,
        response: Response,
    ) -> Result<T, ClientError> {
        if !response.status().is_success() {
            return Err(Self::http_error(method, dest, response));
        }

        let body = response.text().map_err(ClientError::Transport)?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Unable to decode response to {} {} - {:?}", method, dest, e);
            ClientError::JsonDecode(e, body)
        })
    }

    fn encode<R: Serialize>(request: &R) -> Result<String, ClientError> {
        serde_json::to_string(request).map_err(ClientError::JsonEncode)
    }

    pub(crate) fn perform_get_request<T: DeserializeOwned>(
        &self,
        dest: &Url,
    ) -> Result<T, ClientError> {
        let response = self.send("GET", dest, self.client.get(dest.clone()))?;
        self.handle_response("GET", dest, response)
    }

    pub(crate) fn perform_list_request<T: DeserializeOwned>(
        &self,
        dest: &Url,
        query: &ListQuery,
    ) -> Result<ListResponse<T>, ClientError> {
        let request = self
            .client
            .get(dest.clone())
            .query(&query.to_query_pairs());
        let response = self.send("GET", dest, request)?;
        self.handle_response("GET", dest, response)
    }

    pub(crate) fn perform_post_request<R: Serialize, T: DeserializeOwned>(
        &self,
        dest: &Url,
        request: &R,
    ) -> Result<T, ClientError> {
        let req_string = Self::encode(request)?;
        let request = self
            .client
            .post(dest.clone())
            .body(req_string)
            .header(CONTENT_TYPE, SCIM_CONTENT_TYPE);
        let response = self.send("POST", dest, request)?;
        self.handle_response("POST", dest, response)
    }

    pub(crate) fn perform_patch_request<R: Serialize, T: DeserializeOwned>(
        &self,
        dest: &Url,
        request: &R,
    ) -> Result<T, ClientError> {
        let req_string = Self::encode(request)?;
        let request = self
            .client
            .patch(dest.clone())
            .body(req_string)
            .header(CONTENT_TYPE, SCIM_CONTENT_TYPE);
        let response = self.send("PATCH", dest, request)?;
        self.handle_response("PATCH", dest, response)
    }

    pub(crate) fn perform_delete_request(&self, dest: &Url) -> Result<(), ClientError> {
        let response = self.send("DELETE", dest, self.client.delete(dest.clone()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::http_error("DELETE", dest, response))
        }
    }
}
