//! Blockfall terminal runner (default binary).
//!
//! A single-threaded loop: read input, advance gravity, play sound cues for
//! the session's events, redraw. Input uses crossterm; rendering goes through
//! the framebuffer renderer in `blockfall::term`.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::audio::{open_sink, play_events, AudioSink};
use blockfall::core::{Clock, GameSession, GameSnapshot, MonotonicClock};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// Seed for the piece sequence; random when omitted.
    #[arg(long, env = "BLOCKFALL_SEED")]
    seed: Option<u32>,

    /// Disable sound effects.
    #[arg(long)]
    mute: bool,

    /// Frame rate cap.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, fps = args.fps, mute = args.mute, "starting");

    let mut audio = open_sink(args.mute);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, audio.as_mut(), seed, args.fps);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, audio: &mut dyn AudioSink, seed: u32, fps: u32) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut game = GameSession::with_seed(seed);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(1000 / u64::from(fps));

    while game.running() {
        // Input.
        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = if should_quit(key) {
                        Some(GameAction::Quit)
                    } else {
                        handle_key_event(key, game.status())
                    };
                    if let Some(action) = action {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        game.tick(clock.now_ms());

        // Sound.
        let events = game.take_events();
        play_events(audio, &events);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }

    tracing::info!(score = game.score(), level = game.level(), lines = game.lines(), "quit");
    Ok(())
}
