use crate::error::EntityError;
use crate::modifier::{ModValue, Modifier};
use crate::record::{EntityRecord, ModRecord, ModValueRecord};
use crate::{ELEM_DELIM, MOD_DELIM};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use strum::{AsRefStr, Display};

/// Kind of entity, derived from which parts are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum EntityType {
    Block,
    BlockMod,
    Elem,
    ElemMod,
}

/// A validated, immutable BEM entity name.
///
/// Two names are equal iff their canonical strings ([`EntityName::id`]) are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EntityRecord", into = "EntityRecord")]
pub struct EntityName {
    block: String,
    elem: Option<String>,
    modifier: Option<Modifier>,
    id: String,
}

impl EntityName {
    /// Validates and normalizes `record` into an entity name.
    ///
    /// Normalization rules:
    /// * an empty element is treated as absent;
    /// * a modifier without a value, with `true`, or with an empty string value is a
    ///   boolean modifier.
    ///
    /// # Errors
    /// * [`EntityError::MissingBlock`] if the block is empty.
    /// * [`EntityError::MissingModName`] if a modifier has an empty name.
    /// * [`EntityError::InvalidModValue`] if a modifier value is `false`.
    pub fn create(record: impl Into<EntityRecord>) -> Result<Self, EntityError> {
        let EntityRecord { block, elem, modifier } = record.into();

        if block.is_empty() {
            return Err(EntityError::MissingBlock { context: None });
        }

        let elem = elem.filter(|e| !e.is_empty());
        let modifier = modifier.map(|m| normalize_modifier(&block, m)).transpose()?;
        let id = canonical(&block, elem.as_deref(), modifier.as_ref());

        Ok(Self { block, elem, modifier, id })
    }

    /// Shorthand for an entity made of a single block.
    ///
    /// # Errors
    /// Returns [`EntityError::MissingBlock`] if `block` is empty.
    pub fn block_only(block: impl Into<String>) -> Result<Self, EntityError> {
        Self::create(EntityRecord::new(block))
    }

    #[must_use]
    pub fn block(&self) -> &str {
        &self.block
    }

    #[must_use]
    pub fn elem(&self) -> Option<&str> {
        self.elem.as_deref()
    }

    #[must_use]
    pub const fn modifier(&self) -> Option<&Modifier> {
        self.modifier.as_ref()
    }

    /// Canonical string form, e.g. `block__elem_mod_val`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        match (&self.elem, &self.modifier) {
            (None, None) => EntityType::Block,
            (None, Some(_)) => EntityType::BlockMod,
            (Some(_), None) => EntityType::Elem,
            (Some(_), Some(_)) => EntityType::ElemMod,
        }
    }

    /// Returns the structured record this entity was (or could have been) built from.
    #[must_use]
    pub fn to_record(&self) -> EntityRecord {
        EntityRecord {
            block: self.block.clone(),
            elem: self.elem.clone(),
            modifier: self.modifier.as_ref().map(ModRecord::from),
        }
    }
}

fn normalize_modifier(block: &str, raw: ModRecord) -> Result<Modifier, EntityError> {
    let (name, val) = match raw {
        ModRecord::Name(name) => (name, None),
        ModRecord::Full { name, val } => (name, val),
    };

    if name.is_empty() {
        return Err(EntityError::MissingModName { block: block.to_owned(), context: None });
    }

    let val = match val {
        None | Some(ModValueRecord::Flag(true)) => ModValue::Boolean,
        Some(ModValueRecord::Text(v)) if v.is_empty() => ModValue::Boolean,
        Some(ModValueRecord::Text(v)) => ModValue::Value(v),
        Some(ModValueRecord::Flag(false)) => {
            return Err(EntityError::InvalidModValue { name, context: None });
        }
    };

    Ok(Modifier { name, val })
}

fn canonical(block: &str, elem: Option<&str>, modifier: Option<&Modifier>) -> String {
    let mut id = String::from(block);

    if let Some(elem) = elem {
        id.push_str(ELEM_DELIM);
        id.push_str(elem);
    }

    if let Some(Modifier { name, val }) = modifier {
        id.push_str(MOD_DELIM);
        id.push_str(name);
        if let ModValue::Value(v) = val {
            id.push_str(MOD_DELIM);
            id.push_str(v);
        }
    }

    id
}

impl TryFrom<EntityRecord> for EntityName {
    type Error = EntityError;

    fn try_from(record: EntityRecord) -> Result<Self, EntityError> {
        Self::create(record)
    }
}

impl From<EntityName> for EntityRecord {
    fn from(entity: EntityName) -> Self {
        entity.to_record()
    }
}

impl PartialEq for EntityName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityName {}

impl Hash for EntityName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms() {
        let cases = [
            (EntityRecord::new("b1"), "b1", EntityType::Block),
            (EntityRecord::new("b1").bool_modifier("m"), "b1_m", EntityType::BlockMod),
            (EntityRecord::new("b1").modifier("m", "v"), "b1_m_v", EntityType::BlockMod),
            (EntityRecord::new("b1").elem("e1"), "b1__e1", EntityType::Elem),
            (EntityRecord::new("b1").elem("e1").modifier("m", "v"), "b1__e1_m_v", EntityType::ElemMod),
        ];

        for (record, id, kind) in cases {
            let entity = EntityName::create(record).unwrap();
            assert_eq!(entity.id(), id);
            assert_eq!(entity.entity_type(), kind);
        }
    }

    #[test]
    fn empty_block_is_rejected() {
        let err = EntityName::create(EntityRecord::new("")).unwrap_err();
        assert!(matches!(err, EntityError::MissingBlock { .. }));
    }

    #[test]
    fn empty_mod_name_is_rejected() {
        let err = EntityName::create(EntityRecord::new("b").modifier("", "v")).unwrap_err();
        assert!(matches!(err, EntityError::MissingModName { ref block, .. } if block == "b"));
    }

    #[test]
    fn false_mod_value_is_rejected() {
        let record = EntityRecord {
            modifier: Some(ModRecord::Full {
                name: "m".to_owned(),
                val: Some(ModValueRecord::Flag(false)),
            }),
            ..EntityRecord::new("b")
        };
        assert!(matches!(EntityName::create(record), Err(EntityError::InvalidModValue { .. })));
    }

    #[test]
    fn empty_parts_are_normalized() {
        let entity = EntityName::create(EntityRecord::new("b").elem("").modifier("m", "")).unwrap();
        assert_eq!(entity.elem(), None);
        assert_eq!(entity.modifier().map(Modifier::val), Some(&ModValue::Boolean));
        assert_eq!(entity.id(), "b_m");
    }

    #[test]
    fn entity_type_names() {
        assert_eq!(EntityType::ElemMod.to_string(), "elemMod");
        assert_eq!(EntityType::Block.as_ref(), "block");
    }
}
