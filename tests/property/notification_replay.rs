// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Notification Replay
//!
//! The notification fold binds its identity from whichever event arrives
//! first, whatever its kind. Replay must still be a deterministic left fold
//! over any history, and a live session must agree with its own log.

use court_progression::aggregate::commands::{AddRecipient, NotificationCommand, RequestNotification};
use court_progression::events::notification::*;
use court_progression::events::{EventRecord, NotificationEvent};
use court_progression::{
    fold, replay, replay_records, Aggregate, DomainEvent, EngineConfig, NotificationState,
    UpcasterRegistry,
};
use proptest::prelude::*;
use uuid::Uuid;

use crate::fixtures::*;

// ============================================================================
// Strategies
// ============================================================================

/// Two candidate ids so that histories can disagree about identity
fn notification_id() -> impl Strategy<Value = Uuid> {
    prop_oneof![
        Just(parse_uuid(NOTIFICATION_ID)),
        Just(Uuid::from_u128(0x3001)),
    ]
}

fn recipient() -> impl Strategy<Value = Recipient> {
    prop_oneof![Just(contactable_recipient()), Just(uncontactable_recipient())]
}

fn ignored_reason() -> impl Strategy<Value = IgnoredReason> {
    prop_oneof![
        Just(IgnoredReason::NotRequired),
        Just(IgnoredReason::NoContactableRecipients),
    ]
}

/// Any event of any kind, in any order
fn notification_event() -> impl Strategy<Value = NotificationEvent> {
    prop_oneof![
        (notification_id(), recipient()).prop_map(|(aggregate_id, recipient)| {
            NotificationEvent::RecipientAdded(RecipientAdded {
                aggregate_id,
                recipient,
            })
        }),
        (notification_id(), prop::collection::vec(recipient(), 0..3)).prop_map(
            |(aggregate_id, recipients)| {
                NotificationEvent::NotificationInitiated(NotificationInitiated {
                    aggregate_id,
                    case_id: parse_uuid(CASE_ID),
                    template: "hearing_listed".to_string(),
                    recipients,
                    occurred_at: fixed_timestamp(),
                })
            }
        ),
        (notification_id(), ignored_reason()).prop_map(|(aggregate_id, reason)| {
            NotificationEvent::NotificationIgnored(NotificationIgnored {
                aggregate_id,
                case_id: parse_uuid(CASE_ID),
                template: "hearing_listed".to_string(),
                reason,
                occurred_at: fixed_timestamp(),
            })
        }),
    ]
}

fn event_history() -> impl Strategy<Value = Vec<NotificationEvent>> {
    prop::collection::vec(notification_event(), 0..20)
}

fn addressed_to(command: NotificationCommand, notification_id: Uuid) -> NotificationCommand {
    match command {
        NotificationCommand::AddRecipient(c) => NotificationCommand::AddRecipient(AddRecipient {
            notification_id,
            ..c
        }),
        NotificationCommand::Request(c) => NotificationCommand::Request(RequestNotification {
            notification_id,
            ..c
        }),
    }
}

fn notification_command() -> impl Strategy<Value = NotificationCommand> {
    prop_oneof![
        (recipient(), notification_id())
            .prop_map(|(recipient, id)| addressed_to(add_recipient(recipient), id)),
        (any::<bool>(), notification_id())
            .prop_map(|(required, id)| addressed_to(request_notification(required), id)),
    ]
}

fn command_sequence() -> impl Strategy<Value = Vec<NotificationCommand>> {
    prop::collection::vec(notification_command(), 0..20)
}

/// Run commands against live state, folding as a session would
fn run_session(commands: Vec<NotificationCommand>) -> (NotificationState, Vec<NotificationEvent>) {
    let mut state = NotificationState::default();
    let mut history = Vec::new();

    for command in commands {
        if let Ok(events) = state.handle(command) {
            state = events.iter().fold(state, |s, e| s.apply(e));
            history.extend(events);
        }
    }

    (state, history)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Replaying the same history twice gives identical state
    #[test]
    fn prop_replay_is_deterministic(history in event_history()) {
        let state1: NotificationState = replay(&history);
        let state2: NotificationState = replay(&history);

        prop_assert_eq!(state1, state2, "Same events must produce same state");
    }

    /// Property: Identity comes from the first event, never a later one
    #[test]
    fn prop_identity_bound_by_first_event(history in event_history()) {
        let state: NotificationState = replay(&history);

        prop_assert_eq!(state.notification_id, history.first().map(DomainEvent::aggregate_id));
    }

    /// Property: Folding a prefix and then the rest equals folding the whole
    #[test]
    fn prop_replay_resumes_from_any_prefix(
        history in event_history(),
        split in any::<prop::sample::Index>(),
    ) {
        let at = split.index(history.len() + 1);
        let prefix: NotificationState = replay(&history[..at]);

        let resumed = history[at..].iter().fold(prefix, fold::<NotificationState>);

        prop_assert_eq!(resumed, replay::<NotificationState>(&history));
    }

    /// Property: Initiation is sticky once any initiated event is folded
    #[test]
    fn prop_initiated_follows_history(history in event_history()) {
        let state: NotificationState = replay(&history);

        let any_initiated = history
            .iter()
            .any(|e| matches!(e, NotificationEvent::NotificationInitiated(_)));
        prop_assert_eq!(state.initiated, any_initiated);
    }

    /// Property: Live session state equals replay of its own history
    #[test]
    fn prop_session_state_matches_replay(commands in command_sequence()) {
        let (live, history) = run_session(commands);

        let replayed: NotificationState = replay(&history);

        prop_assert_eq!(live, replayed);
    }

    /// Property: A session keeps the id it was first addressed by
    #[test]
    fn prop_session_history_has_one_identity(commands in command_sequence()) {
        let (live, history) = run_session(commands);

        let first = history.first().map(DomainEvent::aggregate_id);
        prop_assert!(history.iter().all(|e| Some(e.aggregate_id()) == first));
        prop_assert_eq!(live.notification_id, first);
    }

    /// Property: A session initiates at most once
    #[test]
    fn prop_session_initiates_at_most_once(commands in command_sequence()) {
        let (_, history) = run_session(commands);

        let initiated = history
            .iter()
            .filter(|e| matches!(e, NotificationEvent::NotificationInitiated(_)))
            .count();
        prop_assert!(initiated <= 1);
    }

    /// Property: Stored records replay to the same state as typed events
    #[test]
    fn prop_records_replay_like_events(commands in command_sequence()) {
        let (live, history) = run_session(commands);
        let records: Vec<EventRecord> = history
            .iter()
            .enumerate()
            .map(|(i, e)| EventRecord::encode(e, i as u64 + 1).unwrap())
            .collect();

        let stored: NotificationState = replay_records(
            &records,
            &UpcasterRegistry::standard(),
            &EngineConfig::default(),
        )
        .unwrap();

        prop_assert_eq!(live, stored);
    }
}
