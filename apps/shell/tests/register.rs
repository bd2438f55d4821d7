use setorial::domain::config::AppConfig;
use setorial::features::registration::{Field, FieldError, RegistrationDraft};
use setorial_shell::{Report, register};

fn draft(name: &str, sector: &str, email: &str, phone: &str) -> RegistrationDraft {
    RegistrationDraft {
        name: name.to_owned(),
        sector: sector.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
    }
}

#[tokio::test(start_paused = true)]
async fn valid_flags_register() {
    let platform = setorial::init(&AppConfig::default()).unwrap();
    let registration = platform.registration().unwrap();

    let submitted = draft("Carlos Lima", "infraestrutura", "carlos@ufs.br", "7999998888");
    let report = register(registration, submitted.clone()).await.unwrap();

    assert_eq!(report, Report::Registered(submitted));
}

#[tokio::test(start_paused = true)]
async fn invalid_flags_report_every_failure() {
    let platform = setorial::init(&AppConfig::default()).unwrap();
    let registration = platform.registration().unwrap();

    let report = register(registration, draft("", "", "carlos@gmail.com", "79 8888-7777")).await.unwrap();

    let Report::Invalid(errors) = report else { panic!("expected validation failures") };
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalidFormat));
    assert_eq!(errors.get(Field::Phone), Some(FieldError::PhoneInvalidFormat));
}
