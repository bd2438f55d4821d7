use crate::controller::{Effect, FormController, FormSnapshot, FormTimings, SubmitOutcome};
use crate::error::RegistrationError;
use crate::field::Field;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{Instrument, debug, debug_span};

#[derive(Debug)]
struct Shared {
    controller: Mutex<FormController>,
    snapshots: watch::Sender<FormSnapshot>,
}

impl Shared {
    /// Waits for `effect`, feeds its event back and returns the follow-up timer, if any.
    async fn fire(&self, effect: Effect) -> Option<Effect> {
        tokio::time::sleep(effect.delay()).await;

        let mut controller = self.controller.lock();
        let next = controller.apply(effect.into_event());
        self.publish(&controller);
        drop(controller);
        next
    }

    /// Must be called with the controller lock held, so publications follow mutation order.
    fn publish(&self, controller: &FormController) {
        self.snapshots.send_replace(controller.snapshot());
    }
}

/// A live form driven by Tokio timers.
///
/// Every state change is published as a [`FormSnapshot`] on a watch channel.
/// Dropping the session aborts its pending timers, so a closed form never
/// fires a late completion.
#[derive(Debug)]
pub struct FormSession {
    shared: Arc<Shared>,
    timers: Mutex<JoinSet<()>>,
}

impl FormSession {
    #[must_use]
    pub fn new(timings: FormTimings) -> Self {
        let controller = FormController::new(timings);
        let (snapshots, _) = watch::channel(controller.snapshot());
        Self {
            shared: Arc::new(Shared { controller: Mutex::new(controller), snapshots }),
            timers: Mutex::new(JoinSet::new()),
        }
    }

    /// Receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.shared.snapshots.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        self.shared.snapshots.borrow().clone()
    }

    pub fn change(&self, field: Field, value: impl Into<String>) {
        let mut controller = self.shared.controller.lock();
        controller.change(field, value);
        self.shared.publish(&controller);
    }

    /// Validates the draft and, when accepted, schedules the completion timer.
    ///
    /// # Errors
    /// [`RegistrationError::Session`] when called outside a Tokio runtime; the
    /// form state is left untouched in that case.
    pub fn submit(&self) -> Result<SubmitOutcome, RegistrationError> {
        let handle = Handle::try_current().map_err(|e| RegistrationError::Session {
            message: e.to_string().into(),
            context: Some("Submitting requires a Tokio runtime".into()),
        })?;

        let outcome = {
            let mut controller = self.shared.controller.lock();
            let outcome = controller.submit();
            self.shared.publish(&controller);
            outcome
        };

        if let Some(effect) = outcome.effect() {
            self.schedule(&handle, effect);
        }
        Ok(outcome)
    }

    /// Resolves with the first snapshot (current one included) matching `predicate`.
    ///
    /// # Errors
    /// [`RegistrationError::Closed`] if the snapshot channel closes first.
    pub async fn wait_for(
        &self,
        mut predicate: impl FnMut(&FormSnapshot) -> bool,
    ) -> Result<FormSnapshot, RegistrationError> {
        let mut receiver = self.subscribe();
        let snapshot = receiver.wait_for(|snapshot| predicate(snapshot)).await?;
        Ok(snapshot.clone())
    }

    /// Runs `first` and every timer it leads to on one task.
    fn schedule(&self, handle: &Handle, first: Effect) {
        let shared = Arc::clone(&self.shared);
        let mut timers = self.timers.lock();
        while timers.try_join_next().is_some() {}

        debug!(delay_ms = first.delay().as_millis(), "Scheduling submission timers");
        timers.spawn_on(
            async move {
                let mut next = Some(first);
                while let Some(effect) = next {
                    next = shared.fire(effect).await;
                }
            }
            .instrument(debug_span!("form_timers")),
            handle,
        );
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(FormTimings::default())
    }
}
