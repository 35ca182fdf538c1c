mod common;

use common::{country, FakeApi, LookupHarness};
use country_quiz::api::{ApiError, Query};
use country_quiz::lookup::{LookupMessage, NOT_FOUND, RANDOM_FAILED};

#[test]
fn non_success_lookup_clears_display() {
    let api = FakeApi::default();
    api.respond(Query::Name("Chile".to_string()), Ok(vec![country("Chile", &["Santiago"])]));
    api.respond(Query::Name("Brazil".to_string()), Err(ApiError::Status(500)));
    let mut h = LookupHarness::new(api);

    h.search("Chile");
    assert_eq!(h.lookup.record().unwrap().common_name(), "Chile");

    h.search("Brazil");
    assert!(h.lookup.record().is_none());
    assert_eq!(h.lookup.message().text(), Some(NOT_FOUND));
}

#[test]
fn unknown_name_is_not_found() {
    let mut h = LookupHarness::new(FakeApi::default());

    h.search("Atlantis");

    assert_eq!(h.api.calls(), vec![Query::Name("Atlantis".to_string())]);
    assert_eq!(h.lookup.message().text(), Some(NOT_FOUND));
}

#[test]
fn random_picks_from_full_collection() {
    let api = FakeApi::default();
    let all = vec![country("Chile", &[]), country("Peru", &[]), country("Fiji", &[])];
    api.respond(Query::All, Ok(all.clone()));
    let mut h = LookupHarness::new(api);

    h.send(LookupMessage::Random);

    assert_eq!(h.api.calls(), vec![Query::All]);
    assert!(all.contains(h.lookup.record().unwrap()));
}

#[test]
fn random_failure_clears_and_explains() {
    let api = FakeApi::default();
    api.respond(Query::Name("Peru".to_string()), Ok(vec![country("Peru", &["Lima"])]));
    api.respond(Query::All, Err(ApiError::Transport("dns".to_string())));
    let mut h = LookupHarness::new(api);
    h.search("Peru");

    h.send(LookupMessage::Random);

    assert!(h.lookup.record().is_none());
    assert_eq!(h.lookup.message().text(), Some(RANDOM_FAILED));

    h.send(LookupMessage::DismissMessage);
    assert!(!h.lookup.message().is_visible());
    assert_eq!(h.lookup.message().text(), None);
}
