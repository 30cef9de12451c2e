use bemt_derive::bemt_error;
use std::borrow::Cow;

#[bemt_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let from_source = "x".parse::<i32>().context("reading port");
    let Err(DemoError::Parse { context, .. }) = from_source else {
        panic!("expected parse error");
    };
    assert_eq!(context.as_deref(), Some("reading port"));

    let own: Result<(), DemoError> = Err(DemoError::from(String::from("late")));
    let err = own.context("shutdown").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (shutdown): late");
}
