use scim_client::scim_proto::prelude::*;
use scim_client::{ClientError, Provisioned, ScimClient};

pub const DEMO_USER: &str = "demo.user@example.com";
pub const DEMO_USER_2: &str = "jane.doe@example.com";
pub const DEMO_GROUP: &str = "Demo Engineering Team";
pub const DEMO_GROUP_RENAMED: &str = "Demo Engineering Team - Updated";

fn show_user(p: &Provisioned<User>) {
    let u = p.get();
    if p.was_created() {
        println!("   Created user: {} (ID: {})", u.user_name, u.id);
    } else {
        println!("   User already exists, found existing user...");
        println!(
            "   [GET {}?filter=userName eq \"{}\"]",
            SCIM_USERS_PATH, u.user_name
        );
        println!("   Found user: {} (ID: {})", u.user_name, u.id);
    }
}

fn show_group(p: &Provisioned<Group>) {
    let g = p.get();
    if p.was_created() {
        println!("   Created group: {} (ID: {})", g.display_name, g.id);
    } else {
        println!("   Group already exists, found existing group...");
        println!(
            "   [GET {}?filter=displayName eq \"{}\"]",
            SCIM_GROUPS_PATH, g.display_name
        );
        println!("   Found group: {} (ID: {})", g.display_name, g.id);
    }
    println!("   Members: {}", g.member_count());
}

fn patch_banner(collection: &str, id: &str, operation: &str) {
    println!(
        "   [PATCH {}/{}] Schema: {}",
        collection, id, SCIM_SCHEMA_PATCH_OP
    );
    println!("   Operation: {}", operation);
}

fn cleanup(kind: &str, id: &str, deleted: bool) {
    if deleted {
        println!("   Deleted {}: {}", kind, id);
    } else {
        println!("   {} already deleted: {}", kind, id);
    }
}

/// Walk one user and group through their whole lifecycle against a live
/// service provider, reusing anything a previous run left behind.
pub fn run(client: &ScimClient) -> Result<(), ClientError> {
    println!("{}", "=".repeat(60));
    println!("SCIM Client Demo");
    println!("{}", "=".repeat(60));
    println!("\nNOTE: This demo uses @example.com email addresses.");
    println!("Ensure your organization's allowed_email_domains includes example.com");
    println!("\nThis demo handles conflicts gracefully and can be run multiple times.");
    println!("If resources already exist, they will be reused instead of failing.");

    println!("\n1. Creating a test user...");
    println!("   [POST {}] Schema: {}", SCIM_USERS_PATH, SCIM_SCHEMA_USER);
    let user = client.provision_user(&NewUser::new(DEMO_USER, "Demo", "User"))?;
    show_user(&user);
    let user = user.into_inner();
    println!(
        "   Display name: {}",
        user.display_name.as_deref().unwrap_or("")
    );
    println!("   Active: {}", user.is_active());
    let user_id = user.id;

    println!("\n2. Creating a test group...");
    println!("   [POST {}] Schema: {}", SCIM_GROUPS_PATH, SCIM_SCHEMA_GROUP);
    let group =
        client.provision_group(&NewGroup::new(DEMO_GROUP).members([user_id.as_str()]))?;
    show_group(&group);
    let group_id = group.into_inner().id;

    println!("\n3. Getting user by ID...");
    println!("   [GET {}/{}]", SCIM_USERS_PATH, user_id);
    let fetched = client.get_user(&user_id)?;
    println!("   Retrieved user: {}", fetched.user_name);
    println!(
        "   Display name: {}",
        fetched.display_name.as_deref().unwrap_or("")
    );

    println!("\n4. Getting group by ID...");
    println!("   [GET {}/{}]", SCIM_GROUPS_PATH, group_id);
    let fetched = client.get_group(&group_id)?;
    println!("   Retrieved group: {}", fetched.display_name);
    println!("   Members: {}", fetched.member_count());

    println!("\n5. Listing all users...");
    println!("   [GET {}] With pagination", SCIM_USERS_PATH);
    let users = client.list_users(&ListQuery::new())?;
    println!("   Total users: {}", users.total_results);

    println!("\n6. Listing all groups...");
    println!("   [GET {}] With pagination", SCIM_GROUPS_PATH);
    let groups = client.list_groups(&ListQuery::new())?;
    println!("   Total groups: {}", groups.total_results);

    println!("\n7. Creating a second user...");
    println!("   [POST {}] Schema: {}", SCIM_USERS_PATH, SCIM_SCHEMA_USER);
    let user2 = client.provision_user(&NewUser::new(DEMO_USER_2, "Jane", "Doe"))?;
    show_user(&user2);
    let user2_id = user2.into_inner().id;

    println!("\n8. Adding second user to group...");
    patch_banner(SCIM_GROUPS_PATH, &group_id, "add members");
    let updated = client.add_group_member(&group_id, &user2_id)?;
    println!("   Group now has {} members", updated.member_count());

    println!("\n9. Updating group name...");
    patch_banner(SCIM_GROUPS_PATH, &group_id, "replace displayName");
    let updated = client.update_group_name(&group_id, DEMO_GROUP_RENAMED)?;
    println!("   Updated group name to: {}", updated.display_name);

    println!("\n10. Updating user name...");
    patch_banner(
        SCIM_USERS_PATH,
        &user_id,
        "replace name.givenName, name.familyName",
    );
    let updated = client.update_user_name(&user_id, "Demo", "UserUpdated")?;
    println!(
        "   Updated user display name to: {}",
        updated.display_name.as_deref().unwrap_or("")
    );

    println!("\n11. Removing second user from group...");
    patch_banner(SCIM_GROUPS_PATH, &group_id, "remove members");
    let updated = client.remove_group_member(&group_id, &user2_id)?;
    println!("   Group now has {} members", updated.member_count());

    println!("\n12. Deactivating the first user...");
    patch_banner(SCIM_USERS_PATH, &user_id, "replace active=false");
    let updated = client.deactivate_user(&user_id)?;
    println!("   User active status: {}", updated.is_active());

    println!("\n13. Reactivating the first user...");
    patch_banner(SCIM_USERS_PATH, &user_id, "replace active=true");
    let updated = client.activate_user(&user_id)?;
    println!("   User active status: {}", updated.is_active());

    println!("\n14. Cleaning up...");
    println!("   [DELETE {}/{}]", SCIM_GROUPS_PATH, group_id);
    let deleted = client.delete_group_if_exists(&group_id)?;
    cleanup("group", &group_id, deleted);
    println!("   [DELETE {}/{}]", SCIM_USERS_PATH, user_id);
    let deleted = client.delete_user_if_exists(&user_id)?;
    cleanup("first user", &user_id, deleted);
    println!("   [DELETE {}/{}]", SCIM_USERS_PATH, user2_id);
    let deleted = client.delete_user_if_exists(&user2_id)?;
    cleanup("second user", &user2_id, deleted);

    println!("\n{}", "=".repeat(60));
    println!("Demo completed successfully!");
    println!("{}", "=".repeat(60));
    Ok(())
}
