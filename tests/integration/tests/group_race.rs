//! Concurrent imports that materialize the same group path.

use std::sync::{Arc, Barrier};
use std::thread;

use kc_federation::RealmLocks;
use kc_federation_legacy::{LegacyUser, UserModelFactory, MIGRATE_UNMAPPED_GROUPS_PROPERTY};
use kc_storage::GroupProvider;

use crate::common::TestEnv;

const IMPORTS: usize = 8;

/// Imports `IMPORTS` users in parallel, each joining `path`.
fn import_concurrently(
    env: &TestEnv,
    factories: &[UserModelFactory],
    path: &str,
) -> anyhow::Result<Vec<kc_model::User>> {
    let barrier = Barrier::new(factories.len());
    thread::scope(|scope| {
        let handles: Vec<_> = factories
            .iter()
            .enumerate()
            .map(|(i, factory)| {
                let barrier = &barrier;
                scope.spawn(move || {
                    let legacy = LegacyUser::new(format!("user-{i}")).with_groups([path]);
                    barrier.wait();
                    factory.create(&legacy, &env.realm())
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| anyhow::anyhow!("import thread panicked"))?
                    .map_err(anyhow::Error::from)
            })
            .collect()
    })
}

/// Factories sharing one lock set never duplicate a composite path.
#[test]
fn test_concurrent_imports_create_path_once() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let config = env
        .config()
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;
    let factories = (0..IMPORTS)
        .map(|_| env.factory(&config))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let users = import_concurrently(&env, &factories, "parent/child")?;

    let top_level = env.store.list_top_level(env.realm_id)?;
    assert_eq!(top_level.len(), 1, "parent created more than once");
    let children = env.store.list_children(env.realm_id, top_level[0].id)?;
    assert_eq!(children.len(), 1, "child created more than once");

    assert_eq!(users.len(), IMPORTS);
    assert!(users.iter().all(|u| u.groups == vec![children[0].id]));
    Ok(())
}

/// Single-segment paths are created once as well.
#[test]
fn test_concurrent_imports_create_top_level_once() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let config = env
        .config()
        .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
        .build()?;
    let factories = (0..IMPORTS)
        .map(|_| env.factory(&config))
        .collect::<anyhow::Result<Vec<_>>>()?;

    import_concurrently(&env, &factories, "Staff")?;

    assert_eq!(env.store.all_groups(env.realm_id).len(), 1);
    Ok(())
}

/// Locks are per realm: imports into different realms do not share groups.
#[test]
fn test_locks_are_scoped_per_realm() -> anyhow::Result<()> {
    let locks = RealmLocks::shared();
    let first = TestEnv {
        locks: Arc::clone(&locks),
        ..TestEnv::new()
    };
    let second = TestEnv {
        locks: Arc::clone(&locks),
        ..TestEnv::new()
    };

    for env in [&first, &second] {
        let config = env
            .config()
            .config(MIGRATE_UNMAPPED_GROUPS_PROPERTY, "true")
            .build()?;
        env.factory(&config)?
            .create(&LegacyUser::new("user").with_groups(["parent/child"]), &env.realm())?;
    }

    assert_eq!(first.store.all_groups(first.realm_id).len(), 2);
    assert_eq!(second.store.all_groups(second.realm_id).len(), 2);
    assert_eq!(locks.len(), 2);
    Ok(())
}
