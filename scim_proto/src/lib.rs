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

//! Typed SCIM 2.0 (RFC 7643 / RFC 7644) records as they travel over the wire
//! between a provisioning client and a SCIM service provider.
//!
//! Attributes that these types do not model are kept in a flattened
//! pass-through map, so a resource decoded from a server response encodes
//! back to the same JSON.

use serde_json::Value;
use std::collections::BTreeMap;

pub mod constants;
pub mod error;
pub mod filter;
pub mod group;
pub mod list;
pub mod patch;
pub mod user;

/// Attributes carried through untouched.
pub type ScimAttrs = BTreeMap<String, Value>;

pub mod prelude {
    pub use crate::constants::*;
    pub use crate::error::ScimErrorResponse;
    pub use crate::filter::Filter;
    pub use crate::group::{Group, GroupCreateRequest, MemberRef, NewGroup};
    pub use crate::list::{ListQuery, ListResponse};
    pub use crate::patch::{PatchOp, PatchOperation, PatchRequest};
    pub use crate::user::{Name, NewUser, User, UserCreateRequest};
    pub use crate::ScimAttrs;
}
