//! Side effects requested by the feature state machines.
//!
//! The state machines never perform I/O themselves; they hand back effects and
//! receive the outcome later as a message.

use std::time::Duration;

use rand::Rng;

use crate::api::Query;
use crate::model::CountryRecord;

/// How long the "correct" animation stays up.
pub const CORRECT_ANIMATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Lookup,
    Quiz,
}

/// Identifies one issued request, so the owner can tell stale responses apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub feature: Feature,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { ticket: Ticket, query: Query },
    /// Hide the success animation identified by `token` once `delay` passes.
    HideCorrectAfter { token: u64, delay: Duration },
}

/// Monotonic request counter. Only the most recently issued seq is current.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self, feature: Feature) -> Ticket {
        self.latest += 1;
        Ticket { feature, seq: self.latest }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.seq == self.latest
    }
}

/// Uniformly picks one record, `None` for an empty collection.
pub fn pick_random<R: Rng + ?Sized>(records: &[CountryRecord], rng: &mut R) -> Option<CountryRecord> {
    if records.is_empty() {
        return None;
    }

    let index = rng.random_range(0..records.len());
    records.get(index).cloned()
}
