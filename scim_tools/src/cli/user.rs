use scim_client::scim_proto::list::ListQuery;
use scim_client::scim_proto::user::NewUser;
use scim_client::ClientError;

use crate::common::print_json;
use crate::UserOpt;

impl UserOpt {
    pub fn debug(&self) -> bool {
        match self {
            UserOpt::Create(o) => o.copt.debug,
            UserOpt::Get(o)
            | UserOpt::Delete(o)
            | UserOpt::Activate(o)
            | UserOpt::Deactivate(o) => o.copt.debug,
            UserOpt::List(o) => o.copt.debug,
            UserOpt::Find(o) => o.copt.debug,
            UserOpt::Rename(o) => o.copt.debug,
        }
    }

    pub fn exec(&self) -> Result<(), ClientError> {
        match self {
            UserOpt::Create(o) => {
                let client = o.copt.to_client();
                let mut nu = NewUser::new(&o.user_name, &o.given_name, &o.family_name)
                    .active(!o.inactive);
                if let Some(dn) = &o.display_name {
                    nu = nu.display_name(dn);
                }
                let user = client.create_user(&nu)?;
                println!("Created user: {} (ID: {})", user.user_name, user.id);
                print_json(&user)
            }
            UserOpt::Get(o) => {
                let client = o.copt.to_client();
                print_json(&client.get_user(&o.id)?)
            }
            UserOpt::List(o) => {
                let client = o.copt.to_client();
                let query = ListQuery::new().start_index(o.start_index).count(o.count);
                let page = client.list_users(&query)?;
                println!("Total users: {}", page.total_results);
                for u in page.resources.iter() {
                    println!(
                        "{}  {}  active={}",
                        u.id,
                        u.user_name,
                        u.is_active()
                    );
                }
                Ok(())
            }
            UserOpt::Find(o) => {
                let client = o.copt.to_client();
                match client.find_user_by_username(&o.name)? {
                    Some(u) => print_json(&u),
                    None => {
                        println!("No user with userName {}", o.name);
                        Ok(())
                    }
                }
            }
            UserOpt::Delete(o) => {
                let client = o.copt.to_client();
                client.delete_user(&o.id)?;
                println!("Deleted user: {}", o.id);
                Ok(())
            }
            UserOpt::Activate(o) => {
                let client = o.copt.to_client();
                let user = client.activate_user(&o.id)?;
                println!("User active status: {}", user.is_active());
                Ok(())
            }
            UserOpt::Deactivate(o) => {
                let client = o.copt.to_client();
                let user = client.deactivate_user(&o.id)?;
                println!("User active status: {}", user.is_active());
                Ok(())
            }
            UserOpt::Rename(o) => {
                let client = o.copt.to_client();
                let user = client.update_user_name(&o.id, &o.given_name, &o.family_name)?;
                println!(
                    "Updated user display name to: {}",
                    user.display_name.as_deref().unwrap_or("")
                );
                Ok(())
            }
        }
    }
}
