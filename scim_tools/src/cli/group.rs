use scim_client::scim_proto::group::NewGroup;
use scim_client::scim_proto::list::ListQuery;
use scim_client::ClientError;

use crate::common::print_json;
use crate::GroupOpt;

impl GroupOpt {
    pub fn debug(&self) -> bool {
        match self {
            GroupOpt::Create(o) => o.copt.debug,
            GroupOpt::Get(o) | GroupOpt::Delete(o) => o.copt.debug,
            GroupOpt::List(o) => o.copt.debug,
            GroupOpt::Find(o) => o.copt.debug,
            GroupOpt::AddMember(o) | GroupOpt::RemoveMember(o) => o.copt.debug,
            GroupOpt::Rename(o) => o.copt.debug,
        }
    }

    pub fn exec(&self) -> Result<(), ClientError> {
        match self {
            GroupOpt::Create(o) => {
                let client = o.copt.to_client();
                let ng = NewGroup::new(&o.display_name).members(o.members.iter());
                let group = client.create_group(&ng)?;
                println!("Created group: {} (ID: {})", group.display_name, group.id);
                println!("Members: {}", group.member_count());
                Ok(())
            }
            GroupOpt::Get(o) => {
                let client = o.copt.to_client();
                print_json(&client.get_group(&o.id)?)
            }
            GroupOpt::List(o) => {
                let client = o.copt.to_client();
                let query = ListQuery::new().start_index(o.start_index).count(o.count);
                let page = client.list_groups(&query)?;
                println!("Total groups: {}", page.total_results);
                for g in page.resources.iter() {
                    println!("{}  {}  members={}", g.id, g.display_name, g.member_count());
                }
                Ok(())
            }
            GroupOpt::Find(o) => {
                let client = o.copt.to_client();
                match client.find_group_by_name(&o.name)? {
                    Some(g) => print_json(&g),
                    None => {
                        println!("No group with displayName {}", o.name);
                        Ok(())
                    }
                }
            }
            GroupOpt::Delete(o) => {
                let client = o.copt.to_client();
                client.delete_group(&o.id)?;
                println!("Deleted group: {}", o.id);
                Ok(())
            }
            GroupOpt::AddMember(o) => {
                let client = o.copt.to_client();
                let group = client.add_group_member(&o.group_id, &o.user_id)?;
                println!("Group now has {} members", group.member_count());
                Ok(())
            }
            GroupOpt::RemoveMember(o) => {
                let client = o.copt.to_client();
                let group = client.remove_group_member(&o.group_id, &o.user_id)?;
                println!("Group now has {} members", group.member_count());
                Ok(())
            }
            GroupOpt::Rename(o) => {
                let client = o.copt.to_client();
                let group = client.update_group_name(&o.id, &o.display_name)?;
                println!("Updated group name to: {}", group.display_name);
                Ok(())
            }
        }
    }
}
