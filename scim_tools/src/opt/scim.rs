#[derive(Debug, StructOpt)]
pub struct CommonOpt {
    #[structopt(short = "d", long = "debug", env = "SCIM_DEBUG")]
    pub debug: bool,
    /// Base url of the SCIM service provider
    #[structopt(short = "H", long = "url", env = "SCIM_BASE_URL")]
    pub addr: Option<String>,
    /// Bearer token used for every request
    #[structopt(short = "T", long = "token", env = "SCIM_AUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    #[structopt(parse(from_os_str), short = "C", long = "config", env = "SCIM_CONFIG")]
    pub config_path: Option<PathBuf>,
    #[structopt(long = "accept-invalid-certs")]
    pub accept_invalid_certs: bool,
}

#[derive(Debug, StructOpt)]
pub struct Named {
    #[structopt()]
    pub id: String,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
pub struct FindOpt {
    #[structopt()]
    pub name: String,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
pub struct ListOpt {
    #[structopt(long = "start-index", default_value = "1")]
    pub start_index: u64,
    #[structopt(long = "count", default_value = "100")]
    pub count: u64,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
pub struct UserCreateOpt {
    #[structopt()]
    pub user_name: String,
    #[structopt()]
    pub given_name: String,
    #[structopt()]
    pub family_name: String,
    /// Defaults to "<given_name> <family_name>"
    #[structopt(long = "display-name")]
    pub display_name: Option<String>,
    /// Create the user deactivated
    #[structopt(long = "inactive")]
    pub inactive: bool,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
pub struct UserRenameOpt {
    #[structopt()]
    pub id: String,
    #[structopt()]
    pub given_name: String,
    #[structopt()]
    pub family_name: String,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
pub enum UserOpt {
    #[structopt(name = "create")]
    /// Create a user
    Create(UserCreateOpt),
    #[structopt(name = "get")]
    /// Show a user by id
    Get(Named),
    #[structopt(name = "list")]
    /// List one page of users
    List(ListOpt),
    #[structopt(name = "find")]
    /// Find a user by userName
    Find(FindOpt),
    #[structopt(name = "delete")]
    /// Delete a user by id
    Delete(Named),
    #[structopt(name = "activate")]
    Activate(Named),
    #[structopt(name = "deactivate")]
    Deactivate(Named),
    #[structopt(name = "rename")]
    /// Replace a user's given and family names
    Rename(UserRenameOpt),
}

#[derive(Debug, StructOpt)]
pub struct GroupCreateOpt {
    #[structopt()]
    pub display_name: String,
    /// User ids to add as initial members
    #[structopt()]
    pub members: Vec<String>,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
pub struct GroupMemberOpt {
    #[structopt()]
    pub group_id: String,
    #[structopt()]
    pub user_id: String,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
pub struct GroupRenameOpt {
    #[structopt()]
    pub id: String,
    #[structopt()]
    pub display_name: String,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
pub enum GroupOpt {
    #[structopt(name = "create")]
    /// Create a group
    Create(GroupCreateOpt),
    #[structopt(name = "get")]
    Get(Named),
    #[structopt(name = "list")]
    List(ListOpt),
    #[structopt(name = "find")]
    /// Find a group by displayName
    Find(FindOpt),
    #[structopt(name = "delete")]
    Delete(Named),
    #[structopt(name = "add-member")]
    AddMember(GroupMemberOpt),
    #[structopt(name = "remove-member")]
    RemoveMember(GroupMemberOpt),
    #[structopt(name = "rename")]
    Rename(GroupRenameOpt),
}

#[derive(Debug, StructOpt)]
pub struct TeamOpt {
    /// Toml file describing the team and its members
    #[structopt(parse(from_os_str))]
    pub path: PathBuf,
    #[structopt(flatten)]
    pub copt: CommonOpt,
}

#[derive(Debug, StructOpt)]
#[structopt(about = "SCIM 2.0 provisioning client")]
pub enum ScimClientOpt {
    #[structopt(name = "user")]
    /// User operations
    User {
        #[structopt(subcommand)]
        commands: UserOpt,
    },
    #[structopt(name = "group")]
    /// Group operations
    Group {
        #[structopt(subcommand)]
        commands: GroupOpt,
    },
    #[structopt(name = "demo")]
    /// Walk through the whole user and group lifecycle. Safe to run repeatedly.
    Demo(CommonOpt),
    #[structopt(name = "provision-team")]
    /// Idempotently provision a team's users and group from a toml file
    ProvisionTeam(TeamOpt),
    #[structopt(name = "version")]
    Version,
}
