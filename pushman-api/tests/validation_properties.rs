//! Property-based tests for input validation

mod helpers;

use helpers::{client_with, MockTransport};
use proptest::prelude::*;
use pushman_api::validation::{
    validate_channel_for_lookup, validate_channel_selector_for_batch, validate_event_name,
    validate_private_key, PRIVATE_KEY_LENGTH,
};
use pushman_api::{ApiError, Config, Payload};

// ============================================================================
// Strategies
// ============================================================================

/// Names made only of characters the service accepts
fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.:-]{1,24}"
}

/// Names with at least one whitespace character somewhere
fn whitespace_name_strategy() -> impl Strategy<Value = String> {
    ("[a-z_]{0,10}", prop::sample::select(vec![" ", "\t", "\n"]), "[a-z_]{0,10}")
        .prop_map(|(head, ws, tail)| format!("{}{}{}", head, ws, tail))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Whitespace anywhere in an event name is rejected before any request
    #[test]
    fn prop_whitespace_events_never_sent(event in whitespace_name_strategy()) {
        let transport = MockTransport::new();
        let result = client_with(&transport).push(&event, "public", &Payload::new());

        prop_assert!(matches!(result, Err(ApiError::InvalidEvent(_))));
        prop_assert_eq!(transport.call_count(), 0);
    }

    /// Valid event names pass
    #[test]
    fn prop_valid_events_accepted(event in valid_name_strategy()) {
        prop_assert!(validate_event_name(&event).is_ok());
    }

    /// One bad name poisons the whole batch, wherever it sits
    #[test]
    fn prop_batch_rejects_any_whitespace_entry(
        mut names in prop::collection::vec(valid_name_strategy(), 0..6),
        bad in whitespace_name_strategy(),
        position in any::<prop::sample::Index>(),
    ) {
        let index = position.index(names.len() + 1);
        names.insert(index, bad);

        let transport = MockTransport::new();
        let client = client_with(&transport);

        prop_assert!(matches!(
            validate_channel_selector_for_batch(names.clone()),
            Err(ApiError::InvalidChannel(_))
        ));
        prop_assert!(matches!(client.build_channel(names), Err(ApiError::InvalidChannel(_))));
        prop_assert_eq!(transport.call_count(), 0);
    }

    /// Valid batches come back unchanged and in order
    #[test]
    fn prop_batch_preserves_valid_names(names in prop::collection::vec(valid_name_strategy(), 1..8)) {
        let normalized = validate_channel_selector_for_batch(names.clone()).unwrap();
        prop_assert_eq!(normalized, names);
    }

    /// A single valid name resolves to itself for lookups
    #[test]
    fn prop_lookup_returns_single_name(name in valid_name_strategy()) {
        prop_assert_eq!(validate_channel_for_lookup(name.as_str()).unwrap(), name);
    }

    /// Only keys of exactly 60 characters are accepted
    #[test]
    fn prop_private_key_length(length in 0usize..130) {
        let key = "x".repeat(length);
        let accepted = validate_private_key(&key).is_ok();
        prop_assert_eq!(accepted, length == PRIVATE_KEY_LENGTH);
        prop_assert_eq!(Config::new(key, None).is_ok(), accepted);
    }
}
