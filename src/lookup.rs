//! Free-text country lookup and "random country".

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::api::{ApiError, ApiResult, Query};
use crate::effect::{pick_random, Effect, Feature, RequestSeq, Ticket};
use crate::feedback::MessageState;
use crate::model::CountryRecord;

pub const NOT_FOUND: &str = "Could not find country";
pub const LOOKUP_FAILED: &str = "Failed to fetch country";
pub const RANDOM_FAILED: &str = "Failed to fetch random country";

#[derive(Debug, Clone)]
pub enum LookupMessage {
    QueryChanged(String),
    Lookup,
    Random,
    DismissMessage,
    Loaded(Ticket, ApiResult),
}

/// Which kind of request the pending ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    ByName,
    Random,
}

pub struct LookupState {
    query: String,
    record: Option<CountryRecord>,
    message: MessageState,
    requests: RequestSeq,
    pending: Option<Pending>,
    rng: StdRng,
}

impl LookupState {
    pub fn new(rng: StdRng) -> Self {
        Self {
            query: String::new(),
            record: None,
            message: MessageState::default(),
            requests: RequestSeq::default(),
            pending: None,
            rng,
        }
    }

    pub fn update(&mut self, message: LookupMessage) -> Vec<Effect> {
        match message {
            LookupMessage::QueryChanged(query) => {
                self.query = query;
                vec![]
            }
            LookupMessage::Lookup => vec![self.lookup_by_name()],
            LookupMessage::Random => vec![self.lookup_random()],
            LookupMessage::DismissMessage => {
                self.message.dismiss();
                vec![]
            }
            LookupMessage::Loaded(ticket, result) => {
                self.loaded(ticket, result);
                vec![]
            }
        }
    }

    pub fn lookup_by_name(&mut self) -> Effect {
        self.pending = Some(Pending::ByName);
        Effect::Fetch {
            ticket: self.requests.issue(Feature::Lookup),
            query: Query::Name(self.query.clone()),
        }
    }

    pub fn lookup_random(&mut self) -> Effect {
        self.pending = Some(Pending::Random);
        Effect::Fetch {
            ticket: self.requests.issue(Feature::Lookup),
            query: Query::All,
        }
    }

    fn loaded(&mut self, ticket: Ticket, result: ApiResult) {
        if !self.requests.is_current(ticket) {
            debug!(seq = ticket.seq, "discarding stale lookup response");
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };

        let outcome = match (pending, result) {
            // Ties between several matches go to the service's first result.
            (Pending::ByName, Ok(records)) => records.into_iter().next().ok_or(NOT_FOUND),
            (Pending::ByName, Err(ApiError::Status(_))) => Err(NOT_FOUND),
            (Pending::ByName, Err(e)) => {
                warn!(%e, "name lookup failed");
                Err(LOOKUP_FAILED)
            }
            (Pending::Random, Ok(records)) => pick_random(&records, &mut self.rng).ok_or(RANDOM_FAILED),
            (Pending::Random, Err(e)) => {
                warn!(%e, "random lookup failed");
                Err(RANDOM_FAILED)
            }
        };

        match outcome {
            Ok(record) => {
                info!(country = record.common_name(), "looked up country");
                self.record = Some(record);
            }
            Err(notice) => {
                self.message.show(notice);
                self.record = None;
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn record(&self) -> Option<&CountryRecord> {
        self.record.as_ref()
    }

    pub fn message(&self) -> &MessageState {
        &self.message
    }
}
