use setorial_derive::setorial_error;
use std::borrow::Cow;

#[setorial_error]
pub enum ProbeError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk unplugged"))
}

#[test]
fn setorial_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), ProbeError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, ProbeError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: disk unplugged");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("Reading draft").unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading draft): disk unplugged");
}

#[test]
fn context_is_attached_to_own_results() {
    let result: Result<(), ProbeError> =
        Err(ProbeError::Rejected { message: "too late".into(), context: None });

    let err = result.context("Submitting").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (Submitting): too late");
}

#[test]
fn strings_become_internal_errors() {
    let borrowed: ProbeError = "static failure".into();
    let owned: ProbeError = format!("failure #{}", 2).into();

    assert!(matches!(borrowed, ProbeError::Internal { .. }));
    assert_eq!(owned.to_string(), "Internal error: failure #2");
}
