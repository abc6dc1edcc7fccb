use clap::Parser;
use tokio::io::{stdin, stdout, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use reaction_ttt::game::{FinishedState, Player};
use reaction_ttt::host::member::UserId;
use reaction_ttt::host::{
    challenge, Frame, HostError, HostResult, Member, MoveEvent, Presenter, SessionEnd,
    SessionRunner, StreamMoveSource,
};
use reaction_ttt::settings::Settings;

/// Prints every frame to stdout.
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    async fn present(&mut self, frame: &Frame) -> HostResult<()> {
        let mut text = format!("\n{}\n{}\n\n{}\n", frame.title, frame.description, frame.grid);
        if !frame.controls.is_empty() {
            text.push_str(&format!("free: {}\n", frame.controls.join(" ")));
        }
        let mut out = stdout();
        out.write_all(text.as_bytes())
            .await
            .map_err(|err| HostError::presenter(err.to_string()))?;
        out.flush()
            .await
            .map_err(|err| HostError::presenter(err.to_string()))
    }
}

/// Turns stdin lines like `a 5` into move events of the first (`a`) or second (`b`) seat.
fn stdin_events(a: UserId, b: UserId) -> impl Stream<Item = MoveEvent<UserId>> {
    async_stream::stream! {
        let mut lines = LinesStream::new(BufReader::new(stdin()).lines());
        while let Some(line) = lines.next().await {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    error!(%err, "failed to read from stdin");
                    break;
                }
            };
            let mut parts = line.split_whitespace();
            let player = match parts.next() {
                Some("a") => a,
                Some("b") => b,
                Some(other) => {
                    warn!(seat = other, "expected `a` or `b`");
                    continue;
                }
                None => continue,
            };
            let Some(symbol) = parts.next() else {
                warn!("missing control symbol");
                continue;
            };
            yield MoveEvent::new(player, symbol);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::parse();
    let player_a = Member::new(1, settings.player_a.as_str());
    let player_b = Member::new(2, settings.player_b.as_str());
    let events = stdin_events(player_a.id(), player_b.id());
    let session = challenge(player_a, Some(player_b))?;

    let ct = CancellationToken::new();
    let mut runner = SessionRunner::new(
        session,
        StreamMoveSource::new(Box::pin(events)),
        TerminalPresenter,
    )
    .with_controls(settings.controls.into())
    .with_glyphs(settings.glyphs.into())
    .with_turn_timeout(settings.turn_timeout())
    .with_cancellation(ct.clone());

    let shutdown = tokio::spawn(async move {
        if let Err(err) = signal::ctrl_c().await {
            error!(%err, "unable to listen for shutdown signal");
            return;
        }
        ct.cancel();
    });

    let end = runner.run().await?;
    shutdown.abort();

    match end {
        SessionEnd::Finished(FinishedState::Win(id)) => {
            let winner = runner.session().player(&id).map(Member::name);
            info!(winner = winner.unwrap_or("unknown"), "game over");
        }
        SessionEnd::Finished(FinishedState::Draw) => info!("game over, draw"),
        SessionEnd::TimedOut => info!("game abandoned, no move in time"),
        SessionEnd::SourceClosed => info!("game abandoned, input closed"),
        SessionEnd::Cancelled => info!("game cancelled"),
    }
    Ok(())
}
