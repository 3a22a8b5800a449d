//! Group domain model.
//!
//! Groups organize users into a tree. A group without a parent is a
//! top-level group; the tree itself is owned by the realm's group store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between segments of a composite group path.
pub const PATH_SEPARATOR: char = '/';

/// A group in the target realm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    // === Identity ===
    /// Unique identifier.
    pub id: Uuid,
    /// Group name.
    pub name: String,

    // === Hierarchy ===
    /// Realm this group belongs to.
    pub realm_id: Uuid,
    /// Parent group ID (None for top-level groups).
    pub parent_id: Option<Uuid>,

    // === Timestamps ===
    /// When the group was created.
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Creates a new top-level group.
    #[must_use]
    pub fn new(realm_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            realm_id,
            parent_id: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a new child group.
    #[must_use]
    pub fn new_child(realm_id: Uuid, parent_id: Uuid, name: impl Into<String>) -> Self {
        let mut group = Self::new(realm_id, name);
        group.parent_id = Some(parent_id);
        group
    }

    /// Checks if this is a top-level group.
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Case-insensitive comparison of this group's name.
    #[must_use]
    pub fn name_matches(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Composite `parent/child` name of `child` nested under this group.
    #[must_use]
    pub fn nested_name(&self, child: &Self) -> String {
        format!("{}{PATH_SEPARATOR}{}", self.name, child.name)
    }
}

/// Case-insensitive string equality over full Unicode case folding.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Segments of a `/`-delimited group path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPath {
    /// Path segments from root to leaf.
    pub segments: Vec<String>,
}

impl GroupPath {
    /// Parses a group path such as `parent/child`.
    ///
    /// Empty segments produced by leading, trailing or doubled separators
    /// are dropped.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split(PATH_SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { segments }
    }
}
