#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use country_quiz::api::{ApiError, ApiResult, CountryApi, Query};
use country_quiz::effect::Effect;
use country_quiz::lookup::{LookupMessage, LookupState};
use country_quiz::model::{CountryName, CountryRecord, NumericInput, QuizMode, RegionFilter};
use country_quiz::quiz::{QuizMessage, QuizState};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Canned responses per query; anything unregistered answers 404.
#[derive(Default)]
pub struct FakeApi {
    responses: Mutex<HashMap<Query, ApiResult>>,
    calls: Mutex<Vec<Query>>,
}

impl FakeApi {
    pub fn respond(&self, query: Query, result: ApiResult) {
        self.responses.lock().unwrap().insert(query, result);
    }

    pub fn calls(&self) -> Vec<Query> {
        self.calls.lock().unwrap().clone()
    }
}

impl CountryApi for FakeApi {
    fn fetch(&self, query: &Query) -> ApiResult {
        self.calls.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or(Err(ApiError::Status(404)))
    }
}

pub fn country(common: &str, capital: &[&str]) -> CountryRecord {
    CountryRecord {
        name: CountryName {
            common: common.to_string(),
            official: format!("Official {common}"),
            native_name: None,
        },
        flag: format!("[{common} flag]"),
        flags: None,
        population: NumericInput::Integer(1_000_000),
        capital: capital.iter().map(|c| c.to_string()).collect(),
    }
}

/// Runs a quiz synchronously: fetches are answered immediately by the fake
/// api, hide timers are collected until [`QuizHarness::fire_timers`].
pub struct QuizHarness {
    pub quiz: QuizState,
    pub api: FakeApi,
    pub timers: Vec<u64>,
}

impl QuizHarness {
    pub fn mount(api: FakeApi, region: RegionFilter, mode: QuizMode) -> Self {
        let mut harness = Self {
            quiz: QuizState::new(region, mode, StdRng::seed_from_u64(11)),
            api,
            timers: vec![],
        };
        let effects = harness.quiz.mount();
        harness.apply(effects);
        harness
    }

    pub fn send(&mut self, message: QuizMessage) {
        let effects = self.quiz.update(message);
        self.apply(effects);
    }

    pub fn guess(&mut self, text: &str) {
        let effects = self.quiz.submit_guess(text);
        self.apply(effects);
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { ticket, query } => {
                    let result = self.api.fetch(&query);
                    let more = self.quiz.update(QuizMessage::TargetLoaded(ticket, result));
                    self.apply(more);
                }
                Effect::HideCorrectAfter { token, .. } => self.timers.push(token),
            }
        }
    }

    pub fn fire_timers(&mut self) {
        for token in std::mem::take(&mut self.timers) {
            self.send(QuizMessage::CorrectAnimationElapsed(token));
        }
    }
}

pub struct LookupHarness {
    pub lookup: LookupState,
    pub api: FakeApi,
}

impl LookupHarness {
    pub fn new(api: FakeApi) -> Self {
        Self {
            lookup: LookupState::new(StdRng::seed_from_u64(11)),
            api,
        }
    }

    pub fn send(&mut self, message: LookupMessage) {
        for effect in self.lookup.update(message) {
            if let Effect::Fetch { ticket, query } = effect {
                let result = self.api.fetch(&query);
                self.lookup.update(LookupMessage::Loaded(ticket, result));
            }
        }
    }

    pub fn search(&mut self, name: &str) {
        self.send(LookupMessage::QueryChanged(name.to_string()));
        self.send(LookupMessage::Lookup);
    }
}
