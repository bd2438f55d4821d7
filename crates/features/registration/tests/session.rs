use setorial_registration::{
    Field, FieldError, FormSession, FormTimings, Phase, RegistrationDraft, SubmitOutcome,
};
use setorial_kernel::domain::constants::SUCCESS_MESSAGE;
use std::time::Duration;
use tokio::time::sleep;

fn session() -> FormSession {
    FormSession::new(FormTimings {
        submit_delay: Duration::from_millis(1_000),
        success_ttl: Duration::from_millis(3_000),
    })
}

fn fill(session: &FormSession) {
    session.change(Field::Name, "Maria José");
    session.change(Field::Sector, "academico");
    session.change(Field::Email, "maria@academico.ufs.br");
    session.change(Field::Phone, "(79) 99999-8888");
}

#[tokio::test(start_paused = true)]
async fn accepted_submission_completes_and_expires() {
    let session = session();
    fill(&session);

    let outcome = session.submit().unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted { after: Duration::from_millis(1_000) });
    assert_eq!(session.snapshot().phase, Phase::Submitting);
    assert_eq!(session.snapshot().submit_label(), "Salvando...");

    sleep(Duration::from_millis(999)).await;
    assert_eq!(session.snapshot().phase, Phase::Submitting);

    sleep(Duration::from_millis(2)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, Phase::Succeeded);
    assert_eq!(snapshot.success_message, Some(SUCCESS_MESSAGE));
    assert_eq!(snapshot.draft, RegistrationDraft::default());
    assert!(snapshot.errors.is_empty());

    sleep(Duration::from_millis(2_998)).await;
    assert_eq!(session.snapshot().success_message, Some(SUCCESS_MESSAGE));

    sleep(Duration::from_millis(2)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.success_message, None);
    assert_eq!(snapshot.phase, Phase::Editing);
    assert_eq!(snapshot.submit_label(), "Salvar");
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_in_flight_is_refused() {
    let session = session();
    fill(&session);

    assert!(matches!(session.submit().unwrap(), SubmitOutcome::Accepted { .. }));
    assert_eq!(session.submit().unwrap(), SubmitOutcome::AlreadySubmitting);

    let snapshot = session.wait_for(|s| s.phase == Phase::Succeeded).await.unwrap();
    assert_eq!(snapshot.success_message, Some(SUCCESS_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn rejected_submission_schedules_nothing() {
    let session = session();
    session.change(Field::Name, "João123");
    session.change(Field::Email, "joao@gmail.com");

    let SubmitOutcome::Rejected(errors) = session.submit().unwrap() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(Field::Name), Some(FieldError::NameInvalidChars));
    assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalidFormat));

    sleep(Duration::from_secs(10)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, Phase::Editing);
    assert_eq!(snapshot.draft.name, "João123");
    assert_eq!(snapshot.errors, errors);
}

#[tokio::test(start_paused = true)]
async fn older_expiry_does_not_hide_newer_success() {
    let session = session();

    fill(&session);
    session.submit().unwrap();
    sleep(Duration::from_millis(2_000)).await;
    assert_eq!(session.snapshot().phase, Phase::Succeeded);

    // Second round completes at 3s; the first expiry is due at 4s.
    fill(&session);
    session.submit().unwrap();
    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(session.snapshot().success_message, Some(SUCCESS_MESSAGE));

    sleep(Duration::from_millis(2_000)).await;
    assert_eq!(session.snapshot().success_message, None);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_session_cancels_timers() {
    let session = session();
    fill(&session);
    let mut receiver = session.subscribe();
    session.submit().unwrap();
    assert_eq!(receiver.borrow_and_update().phase, Phase::Submitting);

    drop(session);
    sleep(Duration::from_secs(5)).await;

    assert!(receiver.changed().await.is_err());
    assert_eq!(receiver.borrow().phase, Phase::Submitting);
}

#[tokio::test(start_paused = true)]
async fn editing_after_success_keeps_message_until_expiry() {
    let session = session();
    fill(&session);
    session.submit().unwrap();
    sleep(Duration::from_millis(1_500)).await;

    session.change(Field::Name, "Novo");
    let snapshot = session.snapshot();
    assert_eq!(snapshot.success_message, Some(SUCCESS_MESSAGE));
    assert_eq!(snapshot.draft.name, "Novo");

    let snapshot = session.wait_for(|s| s.success_message.is_none()).await.unwrap();
    assert_eq!(snapshot.draft.name, "Novo");
    assert_eq!(snapshot.phase, Phase::Editing);
}
