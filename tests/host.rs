extern crate reaction_ttt;

use std::time::Duration;

use tokio::sync::mpsc::unbounded_channel;
use tokio_util::sync::CancellationToken;

use reaction_ttt::game::tic_tac_toe::Glyphs;
use reaction_ttt::game::{FinishedState, GameSession};
use reaction_ttt::host::runner::ChannelPresenter;
use reaction_ttt::host::{
    ChannelMoveSource, Frame, Member, MoveEvent, ReactionControls, SessionEnd, SessionRunner,
};

const ALICE: u64 = 1;
const BOB: u64 = 2;

fn session() -> GameSession<Member> {
    GameSession::new(Member::new(ALICE, "alice"), Member::new(BOB, "bob")).unwrap()
}

fn frames() -> (ChannelPresenter, tokio::sync::mpsc::UnboundedReceiver<Frame>) {
    let (sender, receiver) = unbounded_channel();
    (ChannelPresenter::new(sender), receiver)
}

#[tokio::test]
async fn plays_a_game_with_arrow_reactions() {
    let (events, source) = ChannelMoveSource::new();
    let (presenter, mut frames) = frames();
    let mut runner = SessionRunner::new(session(), source, presenter);

    for (player, symbol) in [
        (ALICE, "\u{2196}"), // top-left
        (BOB, "\u{23FA}"),   // center
        (ALICE, "\u{2B06}"), // top
        (BOB, "\u{2198}"),   // bottom-right
        (ALICE, "\u{2197}"), // top-right
    ] {
        events.send(MoveEvent::new(player, symbol)).unwrap();
    }

    let end = runner.run().await.unwrap();
    assert_eq!(end, SessionEnd::Finished(FinishedState::Win(ALICE)));

    let first = frames.recv().await.unwrap();
    assert_eq!(first.description, "@alice vs. @bob\n@alice's turn!");
    assert_eq!(first.controls.len(), 9);

    let mut last = first;
    let mut count = 1;
    while let Ok(frame) = frames.try_recv() {
        last = frame;
        count += 1;
    }
    // initial frame plus one per accepted move
    assert_eq!(count, 6);
    assert_eq!(last.description, "@alice vs. @bob\n@alice has won!");
    assert_eq!(
        last.grid,
        ":regional_indicator_x::regional_indicator_x::regional_indicator_x:\n\
         :white_large_square::o2::white_large_square:\n\
         :white_large_square::white_large_square::o2:"
    );
    assert!(last.controls.is_empty());
}

#[tokio::test]
async fn invalid_events_are_dropped() {
    let (events, source) = ChannelMoveSource::new();
    let (presenter, mut frames) = frames();
    let mut runner = SessionRunner::new(session(), source, presenter)
        .with_controls(ReactionControls::keypad())
        .with_glyphs(Glyphs::plain());

    for (player, symbol) in [
        (BOB, "5"),    // not bob's turn
        (ALICE, "0"),  // unknown symbol
        (ALICE, "5"),  // accepted
        (BOB, "5"),    // occupied
        (99, "1"),     // stranger
    ] {
        events.send(MoveEvent::new(player, symbol)).unwrap();
    }
    drop(events);

    let end = runner.run().await.unwrap();
    assert_eq!(end, SessionEnd::SourceClosed);
    assert_eq!(runner.session().render(&Glyphs::plain()), "...\n.X.\n...");

    let mut count = 0;
    while frames.try_recv().is_ok() {
        count += 1;
    }
    assert_eq!(count, 2);
}

#[tokio::test(start_paused = true)]
async fn session_is_abandoned_after_turn_timeout() {
    let (events, source) = ChannelMoveSource::new();
    let (presenter, _frames) = frames();
    let mut runner = SessionRunner::new(session(), source, presenter)
        .with_controls(ReactionControls::keypad())
        .with_turn_timeout(Duration::from_secs(60));

    events.send(MoveEvent::new(ALICE, "5")).unwrap();
    // bob never answers, the sender stays open
    let end = runner.run().await.unwrap();

    assert_eq!(end, SessionEnd::TimedOut);
    assert!(!runner.session().is_finished());
    drop(events);
}

#[tokio::test(start_paused = true)]
async fn default_timeout_is_a_day() {
    let (_events, source) = ChannelMoveSource::<u64>::new();
    let (presenter, _frames) = frames();
    let mut runner = SessionRunner::new(session(), source, presenter);

    let started = tokio::time::Instant::now();
    assert_eq!(runner.run().await.unwrap(), SessionEnd::TimedOut);
    let waited = started.elapsed();
    assert!(waited >= Duration::from_secs(60 * 60 * 24), "{waited:?}");
    assert!(waited < Duration::from_secs(60 * 60 * 24 + 1), "{waited:?}");
}

#[tokio::test]
async fn session_can_be_cancelled() {
    let (_events, source) = ChannelMoveSource::<u64>::new();
    let (presenter, _frames) = frames();
    let ct = CancellationToken::new();
    let mut runner = SessionRunner::new(session(), source, presenter).with_cancellation(ct.clone());

    ct.cancel();
    assert_eq!(runner.run().await.unwrap(), SessionEnd::Cancelled);
}
