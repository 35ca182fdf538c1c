use std::sync::Arc;
use std::time::Duration;

use country_quiz::api::{ApiError, CountryApi, Query};
use country_quiz::effect::{Effect, Ticket};
use country_quiz::quiz::QuizMessage;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::console::messages::RootMessage;

/// A spawned task that is aborted as soon as its owner lets go of it.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Carries out the effects the feature state machines ask for and reports
/// the outcomes back as messages.
pub struct Worker {
    api: Arc<dyn CountryApi>,
    output: UnboundedSender<RootMessage>,
    hide_timer: Option<AbortOnDrop>,
}

impl Worker {
    pub fn new(api: Arc<dyn CountryApi>, output: UnboundedSender<RootMessage>) -> Self {
        Self {
            api,
            output,
            hide_timer: None,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { ticket, query } => self.fetch(ticket, query),
                Effect::HideCorrectAfter { token, delay } => self.schedule_hide(token, delay),
            }
        }
    }

    // No cancellation: a superseded response still arrives and is dropped by
    // its feature's sequence check.
    #[instrument(skip(self))]
    fn fetch(&self, ticket: Ticket, query: Query) {
        let api = self.api.clone();
        let output = self.output.clone();

        tokio::spawn(async move {
            // ureq blocks, keep it off the runtime threads
            let result = tokio::task::spawn_blocking(move || api.fetch(&query))
                .await
                .unwrap_or_else(|e| {
                    warn!(%e, "fetch task failed");
                    Err(ApiError::Transport(e.to_string()))
                });

            if output.send(RootMessage::Fetched(ticket, result)).is_err() {
                debug!("session closed before response arrived");
            }
        });
    }

    /// Only the newest timer is kept; replacing it aborts the previous one.
    fn schedule_hide(&mut self, token: u64, delay: Duration) {
        let output = self.output.clone();

        self.hide_timer = Some(AbortOnDrop(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            output
                .send(RootMessage::Quiz(QuizMessage::CorrectAnimationElapsed(token)))
                .ok();
        })));
    }
}
