use std::borrow::Cow;

/// Validation failures raised while building an [`crate::EntityName`].
#[bemt_derive::bemt_error]
pub enum EntityError {
    /// The record has no block, or the block is an empty string.
    #[error("Invalid entity{}: the field `block` is empty", format_context(.context))]
    MissingBlock { context: Option<Cow<'static, str>> },

    /// A modifier was supplied without a name.
    #[error("Invalid entity{}: modifier of `{block}` has an empty name", format_context(.context))]
    MissingModName { block: String, context: Option<Cow<'static, str>> },

    /// A modifier value of `false`; only strings and `true` are accepted.
    #[error(
        "Invalid entity{}: modifier `{name}` has value `false`, expected a string or `true`",
        format_context(.context)
    )]
    InvalidModValue { name: String, context: Option<Cow<'static, str>> },
}
