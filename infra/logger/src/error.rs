use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[bemt_derive::bemt_error]
pub enum LoggerError {
    /// A global tracing subscriber has already been installed in this process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
