#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `bemt` workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! bemt-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   so upstream errors propagate with `?`.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant uses named fields.
/// 3. Variants with a `source` field (or a field marked `#[source]`/`#[from]`) must also carry
///    `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use bemt_derive::bemt_error;
/// use std::borrow::Cow;
///
/// #[bemt_error]
/// pub enum TransformError {
///     #[error("Entity error{}: {source}", format_context(.context))]
///     Entity { source: EntityError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn run() -> Result<EntityName, TransformError> {
///     EntityName::create(record).context("Building blacklist entry")
/// }
/// ```
#[proc_macro_attribute]
pub fn bemt_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
