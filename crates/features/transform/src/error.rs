use bemt_entity::EntityError;
use std::borrow::Cow;

/// Failures of the transform pipeline.
#[bemt_derive::bemt_error]
pub enum TransformError {
    /// An entity could not be built: a malformed blacklist/whitelist entry, or a
    /// transform produced an invalid name (e.g. a custom `block` returning `""`).
    #[error("Entity error{}: {source}", format_context(.context))]
    Entity { source: EntityError, context: Option<Cow<'static, str>> },
}
