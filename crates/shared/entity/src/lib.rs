//! # Entity Names
//!
//! Immutable BEM entity names: a block, an optional element and an optional
//! modifier (`name` plus a string value or the boolean `true`).
//!
//! Entities are built from an [`EntityRecord`] through [`EntityName::create`], which
//! validates and normalizes the record. Equality and hashing go through the canonical
//! string form returned by [`EntityName::id`].
//!
//! ```rust
//! use bemt_entity::{EntityName, EntityRecord};
//!
//! let entity = EntityName::create(EntityRecord::new("button").elem("icon").modifier("size", "l"))?;
//! assert_eq!(entity.id(), "button__icon_size_l");
//!
//! let flag = EntityName::create(EntityRecord::new("button").bool_modifier("disabled"))?;
//! assert_eq!(flag.to_string(), "button_disabled");
//! # Ok::<(), bemt_entity::EntityError>(())
//! ```

mod error;
mod modifier;
mod name;
mod record;

pub use crate::error::{EntityError, EntityErrorExt};
pub use crate::modifier::{ModValue, Modifier};
pub use crate::name::{EntityName, EntityType};
pub use crate::record::{EntityRecord, ModRecord, ModValueRecord};

/// Separator between a block and its element in the canonical form.
pub const ELEM_DELIM: &str = "__";
/// Separator before a modifier name and before a modifier value.
pub const MOD_DELIM: &str = "_";
