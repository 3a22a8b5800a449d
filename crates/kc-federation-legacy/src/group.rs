//! Legacy group resolution.
//!
//! A legacy group name may be a `/`-delimited path. It resolves to an
//! existing group when it equals, ignoring case, either a top-level group
//! name or a `parent/child` name one level deep. Anything else is created
//! as a fresh chain of groups, one per path segment, even if a prefix of the
//! path already exists.

use std::sync::Arc;

use kc_federation::{FederationResult, RealmLocks, RenameTable, Resolution, SkipReason};
use kc_model::{eq_ignore_case, Group, GroupPath};
use kc_storage::RealmHandle;

/// Resolves legacy group names to realm groups, creating missing ones.
#[derive(Debug, Clone)]
pub struct GroupPathResolver {
    renames: RenameTable,
    migrate_unmapped: bool,
    locks: Arc<RealmLocks>,
}

impl GroupPathResolver {
    /// Creates a resolver over a rename table.
    ///
    /// Resolvers sharing `locks` never materialize the same path twice in a
    /// realm.
    #[must_use]
    pub fn new(renames: RenameTable, migrate_unmapped: bool, locks: Arc<RealmLocks>) -> Self {
        Self {
            renames,
            migrate_unmapped,
            locks,
        }
    }

    /// Resolves one legacy group name, creating groups if nothing matches.
    ///
    /// ## Errors
    ///
    /// Only storage faults from the group store are returned.
    pub fn resolve(
        &self,
        realm: &RealmHandle<'_>,
        legacy: Option<&str>,
    ) -> FederationResult<Resolution<Group>> {
        let name = match self.renames.translate(legacy, self.migrate_unmapped) {
            Resolution::Resolved(name) => name,
            Resolution::Skipped(reason) => {
                tracing::debug!(group = ?legacy, %reason, "Skipping legacy group");
                return Ok(Resolution::Skipped(reason));
            }
        };

        let path = GroupPath::parse(name);
        let Some((root, nested)) = path.segments.split_first() else {
            tracing::debug!(group = ?legacy, "Skipping legacy group without path segments");
            return Ok(Resolution::Skipped(SkipReason::Blank));
        };

        self.locks.with_realm(realm.realm_id, || -> FederationResult<_> {
            if let Some(group) = find_existing(realm, name)? {
                tracing::info!(group = %group.name, id = %group.id, "Found existing group");
                return Ok(Resolution::Resolved(group));
            }
            materialize(realm, root, nested).map(Resolution::Resolved)
        })
    }

    /// Resolves every legacy group name in order, keeping only resolved
    /// groups.
    ///
    /// ## Errors
    ///
    /// Only storage faults from the group store are returned.
    pub fn resolve_all<'n>(
        &self,
        realm: &RealmHandle<'_>,
        legacy: impl IntoIterator<Item = Option<&'n str>>,
    ) -> FederationResult<Vec<Group>> {
        let mut groups = Vec::new();
        for name in legacy {
            if let Resolution::Resolved(group) = self.resolve(realm, name)? {
                groups.push(group);
            }
        }
        Ok(groups)
    }
}

/// Top-level name match first, then `parent/child` one level deep.
fn find_existing(realm: &RealmHandle<'_>, name: &str) -> FederationResult<Option<Group>> {
    let top_level = realm.groups.list_top_level(realm.realm_id)?;
    if let Some(group) = top_level.iter().find(|g| g.name_matches(name)) {
        return Ok(Some(group.clone()));
    }

    for parent in &top_level {
        let children = realm.groups.list_children(realm.realm_id, parent.id)?;
        if let Some(child) = children
            .into_iter()
            .find(|child| eq_ignore_case(&parent.nested_name(child), name))
        {
            return Ok(Some(child));
        }
    }
    Ok(None)
}

fn materialize(realm: &RealmHandle<'_>, root: &str, nested: &[String]) -> FederationResult<Group> {
    let mut group = create(realm, root, None)?;
    for segment in nested {
        group = create(realm, segment, Some(&group))?;
    }
    Ok(group)
}

fn create(realm: &RealmHandle<'_>, name: &str, parent: Option<&Group>) -> FederationResult<Group> {
    let group = realm.groups.create_group(realm.realm_id, name, parent)?;
    tracing::info!(group = %group.name, id = %group.id, "Created group");
    Ok(group)
}
