use bemt_derive::bemt_error;
use std::borrow::Cow;

#[bemt_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing field{}: {field}", format_context(.context))]
    Missing { field: &'static str, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i32, DemoError> {
    Ok(raw.parse::<i32>()?)
}

fn main() {
    assert!(parse("42").is_ok());
    assert!(matches!(parse("x"), Err(DemoError::Parse { context: None, .. })));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}
