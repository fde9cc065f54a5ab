//! Session integration tests.
//!
//! These play whole sessions over shuffled decks and check the move, score,
//! time, and history accounting end to end.

use pairs_match::cards::CardStatus;
use pairs_match::core::{GameRng, ManualClock, SessionId, SessionIdGenerator, DECK_SIZE};
use pairs_match::deck::{DeckError, FlipOutcome};
use pairs_match::history::{FileHistory, InMemoryHistory};
use pairs_match::session::{Session, SessionError, SessionState};

type TestSession = Session<ManualClock, InMemoryHistory>;

/// Route engine logs to the test harness. Set `RUST_LOG=pairs_match=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn shuffled_session(seed: u64) -> (TestSession, ManualClock, InMemoryHistory) {
    init_tracing();
    let clock = ManualClock::new();
    let history = InMemoryHistory::new();
    let session = Session::new(
        SessionId::new(seed),
        &mut GameRng::new(seed),
        clock.clone(),
        history.clone(),
    );
    (session, clock, history)
}

/// Position of the other card with the same rank as `position`.
fn partner_of(session: &TestSession, position: usize) -> usize {
    let rank = session.deck().cards()[position].rank();
    (0..DECK_SIZE)
        .find(|&p| p != position && session.deck().cards()[p].rank() == rank)
        .expect("every rank appears twice")
}

/// Match every remaining pair with perfect recall.
fn solve(session: &mut TestSession) {
    for position in 0..DECK_SIZE {
        if session.card_status(position) == Some(CardStatus::Hidden) {
            let partner = partner_of(session, position);
            session.flip(position).unwrap();
            assert!(session.flip(partner).unwrap().is_match());
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Flipping a card and its partner matches them.
#[test]
fn test_first_pair_matches() {
    let (mut session, _, _) = shuffled_session(42);
    let partner = partner_of(&session, 0);

    assert!(matches!(session.flip(0), Ok(FlipOutcome::Pending { position: 0 })));
    let outcome = session.flip(partner).unwrap();

    assert!(matches!(outcome, FlipOutcome::Matched { positions, .. } if positions == [0, partner]));
    assert_eq!(session.remaining(), 14);
    assert_eq!(session.moves(), 2);
}

/// Flipping two cards of different rank sends both back face down.
#[test]
fn test_mismatch_hides_both() {
    let (mut session, _, _) = shuffled_session(42);
    let other = (1..DECK_SIZE)
        .find(|&p| p != partner_of(&session, 0))
        .unwrap();

    session.flip(0).unwrap();
    let outcome = session.flip(other).unwrap();

    assert!(matches!(outcome, FlipOutcome::Mismatched { .. }));
    assert_eq!(session.card_status(0), Some(CardStatus::Hidden));
    assert_eq!(session.card_status(other), Some(CardStatus::Hidden));
    assert_eq!(session.remaining(), 16);
    assert_eq!(session.moves(), 2);
}

/// Flipping an already matched card is rejected without side effects.
#[test]
fn test_flip_matched_card_is_rejected() {
    let (mut session, _, _) = shuffled_session(9);
    let partner = partner_of(&session, 0);
    session.flip(0).unwrap();
    session.flip(partner).unwrap();

    let err = session.flip(partner).unwrap_err();

    assert!(matches!(err, SessionError::Deck(DeckError::InvalidTransition(_))));
    assert!(err.is_rejected_flip());
    assert_eq!(session.moves(), 2);
    assert_eq!(session.remaining(), 14);
    assert!(session.deck().revealed().is_empty());
}

/// A perfect game finishes with 16 moves, three stars, and one record.
#[test]
fn test_perfect_game() {
    let (mut session, clock, history) = shuffled_session(7);
    session.start().unwrap();
    clock.advance(30_000);

    solve(&mut session);

    assert_eq!(session.state(), SessionState::Finished);
    let record = history.last().unwrap();
    assert_eq!(record.session_id, SessionId::new(7));
    assert_eq!(record.moves, 16);
    assert_eq!(record.score, 3);
    assert_eq!(record.elapsed_ms, 30_000);
    assert_eq!(history.len(), 1);
}

/// Time only accrues while running; pauses in the middle do not count.
#[test]
fn test_finish_after_pause_and_resume() {
    let (mut session, clock, history) = shuffled_session(3);

    session.start().unwrap();
    clock.advance(4_000);
    session.pause().unwrap();
    clock.advance(100_000);
    session.resume().unwrap();
    clock.advance(6_000);

    solve(&mut session);

    assert_eq!(history.last().unwrap().elapsed_ms, 10_000);
}

/// Finishing while paused records the time accrued before the pause.
#[test]
fn test_finish_while_paused() {
    let (mut session, clock, history) = shuffled_session(5);
    session.start().unwrap();
    clock.advance(2_000);
    session.pause().unwrap();
    clock.advance(9_000);

    solve(&mut session);

    assert_eq!(history.last().unwrap().elapsed_ms, 2_000);
    assert_eq!(session.summary().elapsed_ms, 2_000);
}

/// A sloppy game loses stars as moves pile up.
#[test]
fn test_sloppy_game_loses_stars() {
    let (mut session, _, history) = shuffled_session(11);
    let partner = partner_of(&session, 0);
    let wrong = (1..DECK_SIZE).find(|&p| p != partner).unwrap();

    // 40 mismatched pairs = 80 moves
    for _ in 0..40 {
        session.flip(0).unwrap();
        session.flip(wrong).unwrap();
    }
    assert_eq!(session.score(), 1);

    solve(&mut session);
    let record = history.last().unwrap();
    assert_eq!(record.moves, 96);
    assert_eq!(record.score, 1);
}

/// Aborting never writes a record, even with most pairs matched.
#[test]
fn test_abort_is_not_recorded() {
    let (mut session, clock, history) = shuffled_session(13);
    session.start().unwrap();
    clock.advance(1_000);

    let partner = partner_of(&session, 0);
    session.flip(0).unwrap();
    session.flip(partner).unwrap();

    session.abort().unwrap();

    assert!(history.is_empty());
    assert_eq!(session.remaining(), 14);
    assert_eq!(session.summary().elapsed_ms, 1_000);
    assert!(!session.summary().finished);
}

/// Host-owned ids flow into the records of consecutive sessions.
#[test]
fn test_consecutive_sessions_share_history() {
    let mut ids = SessionIdGenerator::new();
    let mut root = GameRng::new(100);
    let history = InMemoryHistory::new();

    for _ in 0..3 {
        let mut session = Session::new(ids.next_id(), &mut root.fork(), ManualClock::new(), history.clone());
        solve(&mut session);
    }

    let ids: Vec<u64> = history.snapshot().iter().map(|r| r.session_id.raw()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

/// Same seed, same deal.
#[test]
fn test_deal_is_reproducible() {
    let (a, _, _) = shuffled_session(77);
    let (b, _, _) = shuffled_session(77);
    assert_eq!(a.deck().cards(), b.deck().cards());
}

/// Sessions can write straight to a history file.
#[test]
fn test_file_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.log");

    let store = FileHistory::open_or_create(&path).unwrap();
    let mut session = Session::new(SessionId::new(1), &mut GameRng::new(1), ManualClock::new(), store);
    for position in 0..DECK_SIZE {
        if session.card_status(position) == Some(CardStatus::Hidden) {
            let rank = session.deck().cards()[position].rank();
            let partner = (0..DECK_SIZE)
                .find(|&p| p != position && session.deck().cards()[p].rank() == rank)
                .unwrap();
            session.flip(position).unwrap();
            session.flip(partner).unwrap();
        }
    }

    let records = session.history().load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].moves, 16);
}
