#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]
// We allow expect since it forces good error messages at the least.
#![allow(clippy::expect_used)]

#[macro_use]
extern crate log;

use std::path::PathBuf;
use structopt::StructOpt;

use scim_client::ClientError;

include!("../opt/scim.rs");

pub mod common;
pub mod demo;
pub mod group;
pub mod team;
pub mod user;

pub use crate::common::report_error;

impl ScimClientOpt {
    pub fn debug(&self) -> bool {
        match self {
            ScimClientOpt::User { commands } => commands.debug(),
            ScimClientOpt::Group { commands } => commands.debug(),
            ScimClientOpt::Demo(copt) => copt.debug,
            ScimClientOpt::ProvisionTeam(topt) => topt.copt.debug,
            ScimClientOpt::Version => false,
        }
    }

    pub fn exec(&self) -> Result<(), ClientError> {
        match self {
            ScimClientOpt::User { commands } => commands.exec(),
            ScimClientOpt::Group { commands } => commands.exec(),
            ScimClientOpt::Demo(copt) => demo::run(&copt.to_client()),
            ScimClientOpt::ProvisionTeam(topt) => team::exec(topt),
            ScimClientOpt::Version => {
                println!("scim {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}
