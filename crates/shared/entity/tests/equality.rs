use bemt_entity::{EntityName, EntityRecord};
use proptest::prelude::*;
use std::collections::HashSet;

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}"
}

proptest! {
    #[test]
    fn equality_follows_canonical_string(block in ident(), elem in proptest::option::of(ident())) {
        let mut record = EntityRecord::new(block);
        record.elem = elem;

        let a = EntityName::create(record.clone()).unwrap();
        let b = EntityName::create(record).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.id(), b.to_string());

        let set: HashSet<EntityName> = [a, b].into_iter().collect();
        prop_assert_eq!(set.len(), 1);
    }

    #[test]
    fn record_roundtrip_preserves_identity(block in ident(), name in ident(), val in ident()) {
        let entity = EntityName::create(EntityRecord::new(block).modifier(name, val)).unwrap();
        let rebuilt = EntityName::create(entity.to_record()).unwrap();

        prop_assert_eq!(entity.id(), rebuilt.id());
    }
}

#[test]
fn different_modifier_values_are_distinct() {
    let bool_mod = EntityName::create(EntityRecord::new("b").bool_modifier("m")).unwrap();
    let val_mod = EntityName::create(EntityRecord::new("b").modifier("m", "v")).unwrap();

    assert_ne!(bool_mod, val_mod);
}
