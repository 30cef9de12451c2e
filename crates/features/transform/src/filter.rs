//! Blacklist / whitelist gate deciding whether an entity is transformed at all.

use bemt_entity::{EntityError, EntityName, EntityRecord};
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One blacklist or whitelist entry: a bare block name or a structured entity.
///
/// Entries are compared by canonical string, so `"b1"` and `{ "block": "b1" }` are
/// the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MembershipEntry {
    Block(String),
    Entity(EntityRecord),
}

impl MembershipEntry {
    /// Canonical string of the entity this entry stands for.
    ///
    /// # Errors
    /// Returns the [`EntityError`] of [`EntityName::create`] for a malformed entry.
    pub fn canonical(&self) -> Result<String, EntityError> {
        let entity = match self {
            Self::Block(block) => EntityName::block_only(block.as_str())?,
            Self::Entity(record) => EntityName::create(record.clone())?,
        };
        Ok(entity.id().to_owned())
    }
}

impl From<&str> for MembershipEntry {
    fn from(block: &str) -> Self {
        Self::Block(block.to_owned())
    }
}

impl From<String> for MembershipEntry {
    fn from(block: String) -> Self {
        Self::Block(block)
    }
}

impl From<EntityRecord> for MembershipEntry {
    fn from(record: EntityRecord) -> Self {
        Self::Entity(record)
    }
}

impl From<&EntityName> for MembershipEntry {
    fn from(entity: &EntityName) -> Self {
        Self::Entity(entity.to_record())
    }
}

/// Normalizes `list` into its set of canonical strings.
///
/// The set is built fresh on every call.
///
/// # Errors
/// Fails on the first entry that is not a valid entity.
pub fn membership_set(list: &[MembershipEntry]) -> Result<FxHashSet<String>, EntityError> {
    list.iter().map(MembershipEntry::canonical).collect()
}

/// Decides whether `entity` should be transformed.
///
/// | whitelist        | blacklist   | result                          |
/// |------------------|-------------|---------------------------------|
/// | absent / empty   | absent / empty | `true`                       |
/// | present          | any         | `entity` ∈ whitelist            |
/// | absent           | non-empty   | `entity` ∉ blacklist            |
///
/// A present whitelist wins over any blacklist. Because the "no filtering" check runs
/// first, an empty whitelist only matters when the blacklist is non-empty, and then it
/// matches nothing.
///
/// # Errors
/// Propagates the [`EntityError`] of the first malformed entry of the list being evaluated.
pub fn should_transform(
    entity: &EntityName,
    blacklist: Option<&[MembershipEntry]>,
    whitelist: Option<&[MembershipEntry]>,
) -> Result<bool, EntityError> {
    let is_unset = |list: Option<&[MembershipEntry]>| list.is_none_or(<[_]>::is_empty);

    if is_unset(whitelist) && is_unset(blacklist) {
        return Ok(true);
    }

    if let Some(whitelist) = whitelist {
        return Ok(membership_set(whitelist)?.contains(entity.id()));
    }

    let blacklist = blacklist.unwrap_or_default();
    Ok(!membership_set(blacklist)?.contains(entity.id()))
}
