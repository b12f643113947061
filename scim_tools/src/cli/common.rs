use scim_client::{ClientError, ScimClient, ScimClientBuilder};
use serde_json::Value;

use crate::CommonOpt;

impl CommonOpt {
    fn to_builder(&self) -> Result<ScimClientBuilder, ClientError> {
        let config_path: String = shellexpand::tilde("~/.config/scim").into_owned();

        debug!("Attempting to use config {}", "/etc/scim/config");
        let client_builder = ScimClientBuilder::new()
            .read_options_from_optional_config("/etc/scim/config")
            .and_then(|cb| {
                debug!("Attempting to use config {}", config_path);
                cb.read_options_from_optional_config(config_path)
            })?;

        let client_builder = match &self.config_path {
            Some(p) => {
                let p = shellexpand::tilde(&p.to_string_lossy()).into_owned();
                debug!("Attempting to use config {}", p);
                client_builder.read_options_from_optional_config(p)?
            }
            None => client_builder,
        };

        let client_builder = match &self.addr {
            Some(a) => client_builder.address(a.to_string()),
            None => client_builder,
        };

        let client_builder = match &self.token {
            Some(t) => client_builder.bearer_token(t.to_string()),
            None => client_builder,
        };

        if self.accept_invalid_certs {
            Ok(client_builder.danger_accept_invalid_certs(true))
        } else {
            Ok(client_builder)
        }
    }

    /// Build a client from the config files and the command line, exiting
    /// the process if the service can't be addressed.
    pub fn to_client(&self) -> ScimClient {
        let built = self.to_builder().and_then(|cb| {
            debug!("Using {}", cb);
            cb.build()
        });

        match built {
            Ok(c) => c,
            Err(ClientError::ConfigMissing(opt)) => {
                debug!("missing client option {}", opt);
                eprintln!("Error: SCIM_BASE_URL and SCIM_AUTH_TOKEN must be set");
                std::process::exit(1);
            }
            Err(e) => {
                error!("Failed to build client instance -- {:?}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Print a failed operation the way operators expect to read it.
pub fn report_error(e: &ClientError) {
    match e {
        ClientError::Http(status, Some(body), _) => {
            eprintln!("HTTP Error: {}", status);
            eprintln!("Error details: {}", pretty(body));
        }
        ClientError::Http(status, None, raw) => {
            eprintln!("HTTP Error: {}", status);
            eprintln!("Response: {}", raw);
        }
        e => eprintln!("Error: {}", e),
    }
}

pub(crate) fn pretty(v: &Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

pub(crate) fn print_json<T: serde::Serialize>(item: &T) -> Result<(), ClientError> {
    let s = serde_json::to_string_pretty(item).map_err(ClientError::JsonEncode)?;
    println!("{}", s);
    Ok(())
}
