use setorial_kernel::domain::config::FormConfig;
use setorial_registration::{Field, Phase, Registration, RegistrationError};
use std::time::Duration;

#[test]
fn init_builds_a_downcastable_slice() {
    let config = FormConfig { submit_delay_ms: 250, success_ttl_ms: 1_500 };
    let slice = setorial_registration::init(&config).unwrap();

    let registration = slice.downcast_ref::<Registration>().unwrap();
    assert_eq!(registration.timings.submit_delay, Duration::from_millis(250));
    assert_eq!(registration.timings.success_ttl, Duration::from_millis(1_500));

    let session = registration.session();
    session.change(Field::Phone, "79 99999-8888");
    assert_eq!(session.snapshot().phase, Phase::Editing);
    assert!(session.snapshot().errors.is_empty());
}

#[test]
fn zero_success_ttl_is_rejected() {
    let config = FormConfig { submit_delay_ms: 0, success_ttl_ms: 0 };
    let err = setorial_registration::init(&config).unwrap_err();

    assert!(matches!(err, RegistrationError::Config { .. }));
    assert!(err.to_string().contains("success_ttl_ms"));
}

#[test]
fn zero_submit_delay_is_allowed() {
    let config = FormConfig { submit_delay_ms: 0, success_ttl_ms: 10 };
    assert!(setorial_registration::init(&config).is_ok());
}
