use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use scim_client::scim_proto::prelude::*;
use scim_client::{ClientError, ScimClient};
use serde::Deserialize;

use crate::TeamOpt;

#[derive(Debug, Deserialize)]
pub struct TeamSpec {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamMember {
    pub user_name: String,
    pub given_name: String,
    pub family_name: String,
    pub display_name: Option<String>,
}

impl TeamMember {
    pub fn to_new_user(&self) -> NewUser {
        let nu = NewUser::new(&self.user_name, &self.given_name, &self.family_name);
        match &self.display_name {
            Some(dn) => nu.display_name(dn),
            None => nu,
        }
    }
}

/// A team as described on disk:
///
/// ```toml
/// [team]
/// name = "Platform"
///
/// [[members]]
/// user_name = "ada@example.com"
/// given_name = "Ada"
/// family_name = "Lovelace"
/// ```
#[derive(Debug, Deserialize)]
pub struct TeamFile {
    pub team: TeamSpec,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl TeamFile {
    pub fn parse(contents: &str) -> Result<Self, ClientError> {
        let tf: TeamFile = toml::from_str(contents).map_err(|e| {
            error!("{:?}", e);
            ClientError::ConfigParseIssue(format!("{:?}", e))
        })?;

        if tf.team.name.trim().is_empty() {
            return Err(ClientError::ConfigParseIssue(
                "team name must not be empty".to_string(),
            ));
        }

        let mut seen = BTreeSet::new();
        for m in tf.members.iter() {
            if !seen.insert(m.user_name.as_str()) {
                return Err(ClientError::ConfigParseIssue(format!(
                    "member {} is listed more than once",
                    m.user_name
                )));
            }
        }

        Ok(tf)
    }
}

pub fn read_team_file<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<TeamFile, ClientError> {
    debug!("Reading team description from {:?}", path);
    let contents = fs::read_to_string(&path).map_err(|e| {
        error!("Unable to read {:?} -- {:?}", path, e);
        ClientError::ConfigParseIssue(format!("{:?}: {}", path, e))
    })?;
    TeamFile::parse(&contents)
}

/// Ids in `wanted` that `group` doesn't already list, in `wanted` order.
pub fn missing_members<'a>(group: &Group, wanted: &'a [String]) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    wanted
        .iter()
        .map(|s| s.as_str())
        .filter(|id| !group.has_member(id) && seen.insert(*id))
        .collect()
}

#[derive(Debug, Default)]
pub struct TeamSummary {
    pub group_id: String,
    pub group_created: bool,
    pub users_created: Vec<String>,
    pub users_existing: Vec<String>,
    pub members_added: Vec<String>,
}

impl TeamSummary {
    fn print(&self, team: &str) {
        println!(
            "Team {} (ID: {}) {}",
            team,
            self.group_id,
            if self.group_created {
                "created"
            } else {
                "already existed"
            }
        );
        println!("  Users created: {}", self.users_created.len());
        for u in self.users_created.iter() {
            println!("    + {}", u);
        }
        println!("  Users existing: {}", self.users_existing.len());
        for u in self.users_existing.iter() {
            println!("    = {}", u);
        }
        if !self.members_added.is_empty() {
            println!("  Members added to existing group: {}", self.members_added.len());
        }
    }
}

/// Provision every member, then the team group with all of them in it.
/// Running this again against the same service provider changes nothing.
pub fn provision_team(client: &ScimClient, tf: &TeamFile) -> Result<TeamSummary, ClientError> {
    let mut summary = TeamSummary::default();
    let mut ids = Vec::with_capacity(tf.members.len());

    for m in tf.members.iter() {
        let p = client.provision_user(&m.to_new_user())?;
        if p.was_created() {
            summary.users_created.push(m.user_name.clone());
        } else {
            summary.users_existing.push(m.user_name.clone());
        }
        ids.push(p.into_inner().id);
    }

    let group = client.provision_group(&NewGroup::new(&tf.team.name).members(ids.iter()))?;
    summary.group_created = group.was_created();
    let group = group.into_inner();
    summary.group_id = group.id.clone();

    if !summary.group_created {
        for id in missing_members(&group, &ids) {
            info!("adding {} to existing group {}", id, group.id);
            client.add_group_member(&group.id, id)?;
            summary.members_added.push(id.to_string());
        }
    }

    Ok(summary)
}

pub fn exec(topt: &TeamOpt) -> Result<(), ClientError> {
    let tf = read_team_file(&topt.path)?;
    let client = topt.copt.to_client();
    let summary = provision_team(&client, &tf)?;
    summary.print(&tf.team.name);
    Ok(())
}
