//! Field-wise application of a [`NameTransform`] to an entity.

use crate::name_transform::NameTransform;
use bemt_entity::{EntityError, EntityName, EntityRecord, ModRecord, ModValueRecord};

/// Builds a new entity by running every field of `entity` through `spec`.
///
/// * block: `prefix + block(entity.block) + suffix`
/// * element: `elem(entity.elem)`, only if the source has an element
/// * modifier: `{ mod_name(name), mod_val(val) }`, only if the source has a modifier
///
/// The result goes through [`EntityName::create`], so an element or modifier value the
/// functions map to `""` is normalized away exactly as it would be for caller input.
///
/// # Errors
/// Returns the [`EntityError`] raised by [`EntityName::create`] when the functions
/// produce an invalid name, e.g. an empty block or an empty modifier name.
pub fn transform(entity: &EntityName, spec: &NameTransform) -> Result<EntityName, EntityError> {
    let block = (spec.block)(entity.block());

    let mut full_block = String::with_capacity(spec.prefix.len() + block.len() + spec.suffix.len());
    full_block.push_str(&spec.prefix);
    full_block.push_str(&block);
    full_block.push_str(&spec.suffix);

    let record = EntityRecord {
        block: full_block,
        elem: entity.elem().map(|elem| (spec.elem)(elem)),
        modifier: entity.modifier().map(|m| ModRecord::Full {
            name: (spec.mod_name)(m.name()),
            val: Some(ModValueRecord::from(&(spec.mod_val)(m.val()))),
        }),
    };

    EntityName::create(record)
}

impl NameTransform {
    /// Applies this specification to `entity`. See [`transform`].
    ///
    /// # Errors
    /// See [`transform`].
    pub fn apply(&self, entity: &EntityName) -> Result<EntityName, EntityError> {
        transform(entity, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bemt_entity::ModValue;

    fn entity(record: EntityRecord) -> EntityName {
        EntityName::create(record).unwrap()
    }

    #[test]
    fn identity_is_a_no_op() {
        let source = entity(EntityRecord::new("b1").elem("e1").modifier("m", "v"));
        let result = transform(&source, &NameTransform::identity()).unwrap();

        assert_eq!(result, source);
    }

    #[test]
    fn prefix_and_suffix_wrap_block_only() {
        let source = entity(EntityRecord::new("b1").elem("e1"));
        let spec = NameTransform::builder().prefix("b-").suffix("-suf").build();

        let result = transform(&source, &spec).unwrap();

        assert_eq!(result.block(), "b-b1-suf");
        assert_eq!(result.elem(), Some("e1"));
    }

    #[test]
    fn absent_parts_stay_absent() {
        let source = entity(EntityRecord::new("b1"));
        let spec = NameTransform::builder()
            .elem(|_| "never".to_owned())
            .mod_name(|_| "never".to_owned())
            .build();

        let result = transform(&source, &spec).unwrap();

        assert_eq!(result.elem(), None);
        assert!(result.modifier().is_none());
    }

    #[test]
    fn mod_val_receives_boolean_sentinel() {
        let source = entity(EntityRecord::new("b1").bool_modifier("m"));
        let spec = NameTransform::builder()
            .mod_val(|v| match v {
                ModValue::Boolean => ModValue::from("on"),
                other => other.clone(),
            })
            .build();

        let result = transform(&source, &spec).unwrap();

        assert_eq!(result.id(), "b1_m_on");
    }

    #[test]
    fn mod_val_text_leaves_boolean_alone() {
        let spec = NameTransform::builder().mod_val_text(str::to_uppercase).build();

        let flag = transform(&entity(EntityRecord::new("b").bool_modifier("m")), &spec).unwrap();
        let text = transform(&entity(EntityRecord::new("b").modifier("m", "v")), &spec).unwrap();

        assert_eq!(flag.id(), "b_m");
        assert_eq!(text.id(), "b_m_V");
    }

    #[test]
    fn empty_block_result_is_an_error() {
        let spec = NameTransform::builder().block(|_| String::new()).build();

        let err = transform(&entity(EntityRecord::new("b1")), &spec).unwrap_err();

        assert!(matches!(err, EntityError::MissingBlock { .. }));
    }

    #[test]
    fn source_is_not_mutated() {
        let source = entity(EntityRecord::new("b1").elem("e1"));
        let spec = NameTransform::builder().block(|b| format!("{b}x")).build();

        let _ = transform(&source, &spec).unwrap();

        assert_eq!(source.id(), "b1__e1");
    }
}
