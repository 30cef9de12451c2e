//! # BEM entity name transforms
//!
//! Renames [`EntityName`]s according to a naming preset, optional custom per-field
//! transforms, and an optional blacklist or whitelist.
//!
//! The pipeline for one entity is:
//!
//! ```text
//! entity ──▶ filter (blacklist / whitelist) ──▶ preset (origin | react) ──▶ custom transforms ──▶ entity
//!                 │ filtered out
//!                 └──────────────────────────────────────────────────────────▶ entity, unchanged
//! ```
//!
//! * [`Preset::Origin`]: `kebab-case` blocks and elements.
//! * [`Preset::React`] (default): `CamelCase` blocks and elements.
//!
//! ## Features
//!
//! * `settings`: `load_settings` and `TransformSettings`, a `config`-backed loader
//!   that reads options from a file plus `BEMT__*` environment variables. The transform
//!   itself performs no I/O.
//!
//! ## Example
//!
//! ```rust
//! use bemt_entity::{EntityName, EntityRecord};
//! use bemt_transform::{TransformOptions, bem_entity_name_transform};
//!
//! let entity = EntityName::create(EntityRecord::new("b1-with-long-name").elem("e1"))?;
//!
//! let react = bem_entity_name_transform(&entity, &TransformOptions::default())?;
//! assert_eq!(react.id(), "B1WithLongName__E1");
//!
//! let skipped = TransformOptions::builder().blacklist(["b1-with-long-name"]).build();
//! assert_eq!(bem_entity_name_transform(&entity, &skipped)?, entity);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod engine;
mod error;
mod filter;
mod name_transform;
mod options;
mod pipeline;
mod preset;
#[cfg(feature = "settings")]
mod settings;

pub use crate::engine::transform;
pub use crate::error::{TransformError, TransformErrorExt};
pub use crate::filter::{MembershipEntry, membership_set, should_transform};
pub use crate::name_transform::{ModValueFn, NameFn, NameTransform, NameTransformBuilder};
pub use crate::options::{Naming, TransformOptions, TransformOptionsBuilder};
pub use crate::pipeline::{Transformer, apply, bem_entity_name_transform};
pub use crate::preset::Preset;
#[cfg(feature = "settings")]
pub use crate::settings::{SettingsError, SettingsErrorExt, TransformSettings, load_settings};
pub use bemt_entity::{EntityError, EntityName, EntityRecord, ModValue};

pub mod prelude {
    pub use crate::error::{TransformError, TransformErrorExt};
    pub use crate::filter::MembershipEntry;
    pub use crate::name_transform::NameTransform;
    pub use crate::options::{Naming, TransformOptions};
    pub use crate::pipeline::{Transformer, bem_entity_name_transform};
    pub use crate::preset::Preset;
    pub use bemt_entity::{EntityError, EntityName, EntityRecord, ModValue};
}
