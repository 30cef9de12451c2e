use crate::error::{TransformError, TransformErrorExt};
use crate::filter::should_transform;
use crate::options::{Naming, TransformOptions};
use bemt_entity::EntityName;
use tracing::{debug, instrument, trace};

/// Renames `entity` according to `options`.
///
/// 1. The blacklist/whitelist gate runs first; a filtered-out entity is returned
///    unchanged and **no** transform runs, custom transforms included.
/// 2. The naming preset (default `react`) is applied; an unknown or disabled naming
///    skips this step.
/// 3. `options.transforms`, if set, is applied to the preset output as an independent
///    pass whose unset fields are identity.
///
/// # Errors
/// Returns [`TransformError::Entity`] when a blacklist/whitelist entry is not a valid
/// entity, or when a transform produces an invalid name.
///
/// # Example
/// ```rust
/// use bemt_entity::{EntityName, EntityRecord};
/// use bemt_transform::{NameTransform, Preset, TransformOptions, bem_entity_name_transform};
///
/// let entity = EntityName::create(EntityRecord::new("b1").elem("e1"))?;
/// let options = TransformOptions::builder()
///     .naming(Preset::Origin)
///     .transforms(NameTransform::builder().prefix("b-").suffix("-suf").build())
///     .build();
///
/// let renamed = bem_entity_name_transform(&entity, &options)?;
/// assert_eq!(renamed.id(), "b-b1-suf__e1");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(level = "trace", skip_all, fields(entity = %entity))]
pub fn bem_entity_name_transform(
    entity: &EntityName,
    options: &TransformOptions,
) -> Result<EntityName, TransformError> {
    let allowed =
        should_transform(entity, options.blacklist.as_deref(), options.whitelist.as_deref())
            .context("Evaluating blacklist/whitelist")?;

    if !allowed {
        debug!("Entity filtered out, returning it unchanged");
        return Ok(entity.clone());
    }

    let intermediate = match options.naming.preset() {
        Some(preset) => {
            let result = preset.apply(entity).context(format!("Applying preset '{preset}'"))?;
            trace!(%preset, result = %result, "Naming preset applied");
            result
        }
        None => {
            if let Naming::Named(name) = &options.naming {
                debug!(naming = %name, "Unknown naming preset, skipping base transform");
            }
            entity.clone()
        }
    };

    match &options.transforms {
        Some(custom) => custom.apply(&intermediate).context("Applying custom transforms"),
        None => Ok(intermediate),
    }
}

/// Alias of [`bem_entity_name_transform`].
///
/// # Errors
/// See [`bem_entity_name_transform`].
pub fn apply(entity: &EntityName, options: &TransformOptions) -> Result<EntityName, TransformError> {
    bem_entity_name_transform(entity, options)
}

/// Holds one set of options and renames any number of entities with it.
///
/// Membership sets are rebuilt on every call; nothing is cached between entities.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    options: TransformOptions,
}

impl Transformer {
    #[must_use]
    pub const fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// # Errors
    /// See [`bem_entity_name_transform`].
    pub fn apply(&self, entity: &EntityName) -> Result<EntityName, TransformError> {
        bem_entity_name_transform(entity, &self.options)
    }

    /// Renames every entity, stopping at the first failure.
    ///
    /// # Errors
    /// See [`bem_entity_name_transform`].
    pub fn apply_all<'a, I>(&self, entities: I) -> Result<Vec<EntityName>, TransformError>
    where
        I: IntoIterator<Item = &'a EntityName>,
    {
        entities.into_iter().map(|entity| self.apply(entity)).collect()
    }
}

impl From<TransformOptions> for Transformer {
    fn from(options: TransformOptions) -> Self {
        Self::new(options)
    }
}
