//! Facade crate for the `bemt` entity name transforms.
//! Re-exports the entity model, casing helpers and the transform pipeline.
//! Keep this crate thin: it composes other crates and holds no transform logic.
//!
//! ## Usage
//! ```rust
//! use bemt::prelude::*;
//!
//! let entity = EntityName::block_only("my-block").unwrap();
//! let out = bem_entity_name_transform(&entity, &TransformOptions::default()).unwrap();
//! assert_eq!(out.id(), "MyBlock");
//! ```

pub use bemt_casing as casing;
pub use bemt_entity as entity;
pub use bemt_transform as transform;

/// Names of the built-in naming presets, read from the registry.
pub fn presets() -> impl Iterator<Item = &'static str> {
    transform::Preset::all().map(Into::into)
}

pub mod prelude {
    pub use bemt_transform::prelude::*;
}
