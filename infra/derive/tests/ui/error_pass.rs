use setorial_derive::setorial_error;
use std::borrow::Cow;

#[setorial_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<std::borrow::Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("disk"))?;
    Ok(())
}

fn main() {
    let _ = read();
    let _: DemoError = "boom".into();
}
