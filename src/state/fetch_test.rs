use super::*;

// =============================================================
// LoadState
// =============================================================

#[test]
fn load_state_defaults_to_loading() {
    let state: LoadState<u32> = LoadState::default();
    assert_eq!(state, LoadState::Loading);
    assert_eq!(state.ready(), None);
}

#[test]
fn from_result_maps_not_found_separately() {
    let state: LoadState<u32> = LoadState::from_result(Err(ApiError::Rejected {
        status: 404,
        message: "College not found".to_owned(),
    }));
    assert_eq!(state, LoadState::NotFound);
}

#[test]
fn from_result_keeps_other_failures_as_messages() {
    let state: LoadState<u32> = LoadState::from_result(Err(ApiError::Rejected {
        status: 500,
        message: "Failed to fetch college".to_owned(),
    }));
    assert_eq!(state, LoadState::Failed("Failed to fetch college".to_owned()));

    let state: LoadState<u32> = LoadState::from_result(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state, LoadState::Failed("network error: offline".to_owned()));
}

#[test]
fn from_result_carries_values() {
    let state = LoadState::from_result(Ok(42));
    assert_eq!(state.ready(), Some(&42));
}

// =============================================================
// RequestTracker
// =============================================================

#[test]
fn latest_ticket_is_current() {
    let mut tracker = RequestTracker::new();
    let ticket = tracker.begin("c1");
    assert!(tracker.is_current(&ticket));
    assert_eq!(ticket.key(), "c1");
}

#[test]
fn superseded_ticket_is_stale() {
    let mut tracker = RequestTracker::new();
    let first = tracker.begin("c1");
    let second = tracker.begin("c2");
    assert!(!tracker.is_current(&first));
    assert!(tracker.is_current(&second));
}

#[test]
fn refetching_the_same_key_still_supersedes() {
    let mut tracker = RequestTracker::new();
    let first = tracker.begin("c1");
    let again = tracker.begin("c1");
    assert!(!tracker.is_current(&first));
    assert!(tracker.is_current(&again));
}
