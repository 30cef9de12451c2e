//! Named naming conventions applied as the base transform.

use crate::name_transform::NameTransform;
use bemt_casing::{to_camel_case, to_kebab_case};
use bemt_entity::{EntityError, EntityName};
use std::sync::LazyLock;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

static ORIGIN: LazyLock<NameTransform> = LazyLock::new(|| {
    NameTransform::builder().block(to_kebab_case).elem(to_kebab_case).build()
});

static REACT: LazyLock<NameTransform> = LazyLock::new(|| {
    NameTransform::builder().block(to_camel_case).elem(to_camel_case).build()
});

/// The preset registry.
///
/// Both presets case-convert the block and the element and leave the modifier name and
/// value untouched; neither adds a prefix or suffix.
///
/// ```rust
/// use bemt_transform::Preset;
///
/// assert_eq!(Preset::resolve("origin"), Some(Preset::Origin));
/// assert_eq!(Preset::resolve("vue"), None);
/// assert_eq!(Preset::React.to_string(), "react");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Preset {
    /// `kebab-case` blocks and elements.
    Origin,
    /// `CamelCase` blocks and elements.
    React,
}

impl Preset {
    /// Looks a preset up by its exact (case-sensitive) name.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Every registered preset, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// The process-wide transform specification of this preset.
    #[must_use]
    pub fn name_transform(self) -> &'static NameTransform {
        match self {
            Self::Origin => &ORIGIN,
            Self::React => &REACT,
        }
    }

    /// Applies the preset to `entity`.
    ///
    /// # Errors
    /// Returns [`EntityError`] if the case converter reduces a block to an empty string
    /// (e.g. a block made only of separators).
    pub fn apply(self, entity: &EntityName) -> Result<EntityName, EntityError> {
        self.name_transform().apply(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bemt_entity::EntityRecord;

    #[test]
    fn registry_has_exactly_two_entries() {
        let names: Vec<&'static str> = Preset::all().map(Into::into).collect();
        assert_eq!(names, ["origin", "react"]);
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Preset::resolve("react"), Some(Preset::React));
        assert_eq!(Preset::resolve("React"), None);
        assert_eq!(Preset::resolve(""), None);
    }

    #[test]
    fn presets_do_not_touch_modifiers() {
        let entity =
            EntityName::create(EntityRecord::new("my-block").modifier("some-mod", "some-val"))
                .unwrap();

        let react = Preset::React.apply(&entity).unwrap();

        assert_eq!(react.id(), "MyBlock_some-mod_some-val");
    }

    #[test]
    fn presets_have_no_prefix_or_suffix() {
        for preset in Preset::iter() {
            assert_eq!(preset.name_transform().prefix(), "");
            assert_eq!(preset.name_transform().suffix(), "");
        }
    }
}
