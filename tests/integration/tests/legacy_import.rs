//! Legacy user import scenarios.

use std::collections::HashSet;

use kc_federation_legacy::{
    LegacyUser, GROUP_MAP_PROPERTY, MIGRATE_UNMAPPED_GROUPS_PROPERTY,
    MIGRATE_UNMAPPED_ROLES_PROPERTY, ROLE_MAP_PROPERTY,
};
use kc_model::User;
use kc_storage::{GroupProvider, UserProvider};

use crate::common::TestEnv;

fn legacy_user() -> LegacyUser {
    LegacyUser::new("user")
        .with_email("user@email.com", true)
        .with_names("John", "Smith")
}

/// Mapped roles are granted under their local name; unmapped ones are dropped.
#[test]
fn test_mapped_roles_without_unmapped_policy() -> anyhow::Result<()> {
    let env = TestEnv::new().with_roles(&["newRole", "anotherRole"])?;
    let config = env
        .config()
        .config(ROLE_MAP_PROPERTY, "oldRole:newRole")
        .build()?;

    let user = env.factory(&config)?.create(
        &legacy_user().with_roles(["oldRole", "anotherRole"]),
        &env.realm(),
    )?;

    assert_eq!(user.role_mappings, vec![env.role_id("newRole")?]);
    Ok(())
}

/// Unmapped roles pass through unchanged when the policy allows it.
#[test]
fn test_mapped_roles_with_unmapped_policy() -> anyhow::Result<()> {
    let env = TestEnv::new().with_roles(&["newRole", "anotherRole"])?;
    let config = env
        .config()
        .config(ROLE_MAP_PROPERTY, "oldRole:newRole")
        .config(MIGRATE_UNMAPPED_ROLES_PROPERTY, "true")
        .build()?;

    let user = env.factory(&config)?.create(
        &legacy_user().with_roles(["oldRole", "anotherRole"]),
        &env.realm(),
    )?;

    let granted: HashSet<_> = user.role_mappings.iter().copied().collect();
    let expected: HashSet<_> = [env.role_id("newRole")?, env.role_id("anotherRole")?]
        .into_iter()
        .collect();
    assert_eq!(granted, expected);
    Ok(())
}

/// A missing group is created at the top level and joined.
#[test]
fn test_unmapped_group_is_created() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let config = env
        .config()
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;

    let user = env
        .factory(&config)?
        .create(&legacy_user().with_groups(["newGroup"]), &env.realm())?;

    let top_level = env.store.list_top_level(env.realm_id)?;
    assert_eq!(top_level.len(), 1);
    assert_eq!(top_level[0].name, "newGroup");
    assert_eq!(user.groups, vec![top_level[0].id]);
    Ok(())
}

/// A composite path matching an existing subgroup creates nothing.
#[test]
fn test_existing_subgroup_is_joined() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let parent = env.store.create_group(env.realm_id, "parent", None)?;
    let child = env
        .store
        .create_group(env.realm_id, "child", Some(&parent))?;
    let config = env
        .config()
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;

    let user = env
        .factory(&config)?
        .create(&legacy_user().with_groups(["parent/child"]), &env.realm())?;

    assert_eq!(user.groups, vec![child.id]);
    assert_eq!(env.store.all_groups(env.realm_id).len(), 2);
    Ok(())
}

/// Null and blank group entries are skipped.
#[test]
fn test_null_and_blank_groups_are_skipped() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let config = env
        .config()
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;
    let legacy: LegacyUser =
        serde_json::from_str(r#"{ "username": "user", "groups": [null, ""] }"#)?;

    let user = env.factory(&config)?.create(&legacy, &env.realm())?;

    assert!(user.groups.is_empty());
    assert!(env.store.all_groups(env.realm_id).is_empty());
    Ok(())
}

/// A conflicting local record aborts the import before anything changes.
#[test]
fn test_identity_mismatch_aborts_import() -> anyhow::Result<()> {
    let env = TestEnv::new().with_roles(&["newRole"])?;
    env.store
        .put_user(User::with_id(env.realm_id, "legacy-user-id", "wrong_username"));
    let config = env
        .config()
        .config(ROLE_MAP_PROPERTY, "oldRole:newRole")
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;

    let err = env
        .factory(&config)?
        .create(
            &legacy_user()
                .with_id("legacy-user-id")
                .with_roles(["oldRole"])
                .with_groups(["newGroup"]),
            &env.realm(),
        )
        .unwrap_err();

    assert!(err.is_identity_mismatch());
    let stored = UserProvider::get_by_id(&env.store, env.realm_id, "legacy-user-id")?
        .ok_or_else(|| anyhow::anyhow!("user vanished"))?;
    assert!(stored.role_mappings.is_empty());
    assert!(stored.federation_link.is_none());
    assert!(env.store.all_groups(env.realm_id).is_empty());
    Ok(())
}

/// A legacy id whose username already belongs to another local user is a
/// conflicting identity.
#[test]
fn test_username_taken_by_other_id_aborts_import() -> anyhow::Result<()> {
    let env = TestEnv::new().with_roles(&["newRole"])?;
    env.store
        .put_user(User::with_id(env.realm_id, "other-id", "user"));
    let config = env
        .config()
        .config(ROLE_MAP_PROPERTY, "oldRole:newRole")
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;

    let err = env
        .factory(&config)?
        .create(
            &legacy_user()
                .with_id("legacy-user-id")
                .with_roles(["oldRole"])
                .with_groups(["newGroup"]),
            &env.realm(),
        )
        .unwrap_err();

    assert!(err.is_identity_mismatch(), "unexpected error: {err}");
    assert!(UserProvider::get_by_id(&env.store, env.realm_id, "legacy-user-id")?.is_none());
    let holder = UserProvider::get_by_id(&env.store, env.realm_id, "other-id")?
        .ok_or_else(|| anyhow::anyhow!("user vanished"))?;
    assert!(holder.role_mappings.is_empty());
    assert!(env.store.all_groups(env.realm_id).is_empty());
    Ok(())
}

/// A record without a usable username is rejected and nothing is stored.
#[test]
fn test_blank_username_is_rejected() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let config = env.config().build()?;
    let legacy: LegacyUser = serde_json::from_str(r#"{ "username": "" }"#)?;

    let err = env.factory(&config)?.create(&legacy, &env.realm()).unwrap_err();

    assert!(err.is_invalid_user(), "unexpected error: {err}");
    assert!(env.store.get_by_username(env.realm_id, "")?.is_none());
    Ok(())
}

/// A full JSON export round-trips into a linked, populated local user.
#[test]
fn test_import_from_json_export() -> anyhow::Result<()> {
    let env = TestEnv::new().with_roles(&["realm-admin", "viewer"])?;
    let config = env
        .config()
        .config_list(ROLE_MAP_PROPERTY, ["admin:realm-admin", "view:viewer"])
        .config(GROUP_MAP_PROPERTY, "Staff:Employees")
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;
    let legacy: LegacyUser = serde_json::from_str(
        r#"{
            "id": "8c1d6f1e-legacy",
            "username": "jsmith",
            "email": "jsmith@example.com",
            "emailVerified": true,
            "enabled": true,
            "firstName": "John",
            "lastName": "Smith",
            "attributes": { "department": ["R&D", "QA"] },
            "roles": ["admin", "view", "unknown", null],
            "groups": ["staff", "engineering/backend", null]
        }"#,
    )?;

    let factory = env.factory(&config)?;
    let user = factory.create(&legacy, &env.realm())?;

    assert_eq!(user.id, "8c1d6f1e-legacy");
    assert_eq!(user.federation_link.as_deref(), Some(factory.federation_link()));
    assert_eq!(user.email.as_deref(), Some("jsmith@example.com"));
    assert!(user.email_verified);
    assert_eq!(
        user.get_attribute("department"),
        Some(&vec!["R&D".to_string(), "QA".to_string()])
    );
    assert_eq!(
        user.role_mappings,
        vec![env.role_id("realm-admin")?, env.role_id("viewer")?]
    );

    // "staff" is unmapped (keys are case-sensitive) and passes through.
    let names: Vec<_> = env
        .store
        .all_groups(env.realm_id)
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["staff", "engineering", "backend"]);
    assert_eq!(user.groups.len(), 2);

    let stored = env
        .store
        .get_by_username(env.realm_id, "jsmith")?
        .ok_or_else(|| anyhow::anyhow!("user not stored"))?;
    assert_eq!(stored.groups, user.groups);
    Ok(())
}

/// Importing the same user twice reuses the user and its groups.
#[test]
fn test_reimport_is_stable() -> anyhow::Result<()> {
    let env = TestEnv::new().with_roles(&["newRole"])?;
    let config = env
        .config()
        .config(ROLE_MAP_PROPERTY, "oldRole:newRole")
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;
    let factory = env.factory(&config)?;
    let legacy = legacy_user()
        .with_roles(["oldRole"])
        .with_groups(["parent/child"]);

    let first = factory.create(&legacy, &env.realm())?;
    let second = factory.create(&legacy, &env.realm())?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.role_mappings, first.role_mappings);
    assert_eq!(second.groups, first.groups);
    assert_eq!(env.store.all_groups(env.realm_id).len(), 2);
    Ok(())
}

/// A malformed rename pair is rejected when the factory is built.
#[test]
fn test_malformed_rename_pair_fails_fast() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let config = env.config().config(GROUP_MAP_PROPERTY, "oldGroup").build()?;

    let err = env.factory(&config).unwrap_err();

    assert!(err.to_string().contains("oldGroup"));
    Ok(())
}
