//! Property-based tests for the daily session
//!
//! Uses proptest to check the selection invariants across random click,
//! close and add sequences.

use proptest::prelude::*;
use soundhaven_core::{Card, DailySession, SessionEffect, SessionEvent, TodayDiscovery, TrackUri};

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Op {
    Click(usize),
    Close,
    Add,
    AddSucceeded,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..4).prop_map(Op::Click),
        Just(Op::Close),
        Just(Op::Add),
        Just(Op::AddSucceeded),
    ]
}

fn daily_set() -> Vec<Card> {
    (0..3)
        .map(|i| Card::new(format!("Card {i}"), "Artist", format!("spotify:track:{i}")))
        .collect()
}

fn loaded(prior: Option<usize>) -> DailySession {
    let mut session = DailySession::new();
    session
        .update(SessionEvent::Loaded {
            cards: daily_set(),
            today: prior.map(|i| TodayDiscovery::new(format!("spotify:track:{i}"))),
        })
        .unwrap();
    session
}

// ===== Property Tests =====

proptest! {
    /// Property: the committed card never changes within a day, and at most
    /// one choice is ever persisted
    #[test]
    fn choice_is_made_at_most_once(
        prior in proptest::option::of(0usize..3),
        ops in prop::collection::vec(arbitrary_op(), 1..40)
    ) {
        let mut session = loaded(prior);
        let mut first_choice = session.chosen_index();
        let mut persisted = 0;

        for op in ops {
            let effects = match op {
                Op::Click(i) => session.update(SessionEvent::CardClicked(i)),
                Op::Close => session.update(SessionEvent::CloseRequested),
                Op::Add => session.update(SessionEvent::AddRequested(None)),
                Op::AddSucceeded => match session.open_card().map(|c| c.track_uri.clone()) {
                    Some(uri) => session.update(SessionEvent::AddSucceeded(uri)),
                    None => Ok(Vec::new()),
                },
            };

            if let Ok(effects) = effects {
                persisted += effects
                    .iter()
                    .filter(|e| matches!(e, SessionEffect::PersistChoice(_)))
                    .count();
            }

            if first_choice.is_none() {
                first_choice = session.chosen_index();
            }
            prop_assert_eq!(session.chosen_index(), first_choice);

            // Only the chosen card can ever be open
            if let Some(open) = session.open_index() {
                prop_assert_eq!(Some(open), session.chosen_index());
            }
        }

        prop_assert!(persisted <= 1);
        if prior.is_some() {
            prop_assert_eq!(persisted, 0);
        }
    }

    /// Property: once committed, clicking any other card changes nothing
    #[test]
    fn locked_clicks_are_inert(chosen in 0usize..3, other in 0usize..3, open in any::<bool>()) {
        prop_assume!(chosen != other);

        let mut session = loaded(None);
        session.update(SessionEvent::CardClicked(chosen)).unwrap();
        if !open {
            session.update(SessionEvent::CloseRequested).unwrap();
        }

        let before = (session.open_index(), session.chosen_index(), session.is_committed());
        let effects = session.update(SessionEvent::CardClicked(other)).unwrap();
        let after = (session.open_index(), session.chosen_index(), session.is_committed());

        prop_assert!(effects.is_empty());
        prop_assert_eq!(before, after);
    }

    /// Property: close always clears the open card and nothing else
    #[test]
    fn close_only_clears_open(prior in proptest::option::of(0usize..3), click in 0usize..3) {
        let mut session = loaded(prior);
        let _ = session.update(SessionEvent::CardClicked(click));
        let chosen = session.chosen_index();
        let committed = session.is_committed();

        session.update(SessionEvent::CloseRequested).unwrap();

        prop_assert_eq!(session.open_index(), None);
        prop_assert_eq!(session.chosen_index(), chosen);
        prop_assert_eq!(session.is_committed(), committed);
    }

    /// Property: an added track is never requested again
    #[test]
    fn added_track_is_never_requested_again(click in 0usize..3, repeats in 1usize..10) {
        let mut session = loaded(None);
        session.update(SessionEvent::CardClicked(click)).unwrap();
        let uri = TrackUri::new(format!("spotify:track:{click}"));
        session.update(SessionEvent::AddSucceeded(uri.clone())).unwrap();

        for _ in 0..repeats {
            prop_assert!(session.update(SessionEvent::AddRequested(None)).is_err());
            prop_assert!(session.update(SessionEvent::AddRequested(Some(uri.clone()))).is_err());
        }
    }
}
