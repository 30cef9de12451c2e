use crate::modifier::{ModValue, Modifier};
use serde::{Deserialize, Serialize};

/// Unvalidated, structured form of an entity name.
///
/// This is what callers hand to [`crate::EntityName::create`] and what an
/// `EntityName` serializes to. A missing `block` deserializes to an empty string so the
/// failure is reported by validation rather than by the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(default)]
    pub block: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<String>,
    #[serde(default, rename = "mod", skip_serializing_if = "Option::is_none")]
    pub modifier: Option<ModRecord>,
}

/// Raw modifier: either a bare name (boolean modifier) or a `{ name, val }` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModRecord {
    Name(String),
    Full {
        #[serde(default)]
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        val: Option<ModValueRecord>,
    },
}

/// Raw modifier value as it appears in JSON-like input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModValueRecord {
    Flag(bool),
    Text(String),
}

impl EntityRecord {
    /// Starts a record for `block` with no element and no modifier.
    #[must_use]
    pub fn new(block: impl Into<String>) -> Self {
        Self { block: block.into(), elem: None, modifier: None }
    }

    #[must_use]
    pub fn elem(mut self, elem: impl Into<String>) -> Self {
        self.elem = Some(elem.into());
        self
    }

    #[must_use]
    pub fn modifier(mut self, name: impl Into<String>, val: impl Into<String>) -> Self {
        self.modifier = Some(ModRecord::Full {
            name: name.into(),
            val: Some(ModValueRecord::Text(val.into())),
        });
        self
    }

    #[must_use]
    pub fn bool_modifier(mut self, name: impl Into<String>) -> Self {
        self.modifier =
            Some(ModRecord::Full { name: name.into(), val: Some(ModValueRecord::Flag(true)) });
        self
    }
}

impl From<&str> for EntityRecord {
    fn from(block: &str) -> Self {
        Self::new(block)
    }
}

impl From<String> for EntityRecord {
    fn from(block: String) -> Self {
        Self::new(block)
    }
}

impl From<&ModValue> for ModValueRecord {
    fn from(value: &ModValue) -> Self {
        match value {
            ModValue::Value(v) => Self::Text(v.clone()),
            ModValue::Boolean => Self::Flag(true),
        }
    }
}

impl From<&Modifier> for ModRecord {
    fn from(modifier: &Modifier) -> Self {
        Self::Full { name: modifier.name.clone(), val: Some((&modifier.val).into()) }
    }
}
