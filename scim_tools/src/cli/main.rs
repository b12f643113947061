#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

use scim_cli::{report_error, ScimClientOpt};
use structopt::StructOpt;

fn main() {
    let opt = ScimClientOpt::from_args();

    if opt.debug() {
        ::std::env::set_var("RUST_LOG", "scim=debug,scim_client=debug,scim_cli=debug");
    } else {
        ::std::env::set_var("RUST_LOG", "scim=info,scim_client=info,scim_cli=info");
    }
    env_logger::init();

    if let Err(e) = opt.exec() {
        report_error(&e);
        std::process::exit(1);
    }
}
