mod hud;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use side_scroller::config::EntityParams;
use side_scroller::entities::{FrameInput, GameStatus};
use side_scroller::level::Level;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

const LOG_FILE: &str = "side_scroller.log";

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// OS key repeat is ≥ 15 Hz, so 8 frames (≈133 ms) is refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn held_any(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum Outcome {
    Finished(GameStatus),
    Quit,
}

/// Step the level until it is won, lost, or the user quits.
///
/// Directions use the hold-window model so they stay live between OS key
/// repeats; jump and attack are edge-triggered from this frame's presses.
fn game_loop<W: Write>(
    out: &mut W,
    level: &mut Level,
    viewport_height: f64,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<Outcome> {
    let mut rng = thread_rng();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let mut input = FrameInput::idle();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(Outcome::Quit);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(Outcome::Quit);
                        }
                        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
                            input.jump_pressed = true;
                        }
                        KeyCode::Char('s') | KeyCode::Char('S') => {
                            input.attack_pressed = true;
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        input.left_held = held_any(
            &key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        );
        input.right_held = held_any(
            &key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        );

        level.update(&input, &mut rng);

        let status = level.status(viewport_height);
        hud::render(out, level, status)?;
        if status != GameStatus::Playing {
            return Ok(Outcome::Finished(status));
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging() -> anyhow::Result<()> {
    let file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("cannot create log file {LOG_FILE}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(config_path), Some(level_path)) = (args.next(), args.next()) else {
        bail!("usage: side_scroller <config.toml> <level.csv>");
    };
    let (config_path, level_path) = (PathBuf::from(config_path), PathBuf::from(level_path));

    init_logging()?;

    // Everything that can fail happens before the terminal is touched.
    let params = EntityParams::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let mut level = Level::load(&level_path, &params)
        .with_context(|| format!("loading {}", level_path.display()))?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads live on their own thread so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &mut level, params.window_height, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let status = result?;
    info!(?status, score = level.score(), "run finished");
    level.reset();
    match status {
        Some(GameStatus::Won) => println!("Level complete! Score: {}", level.score()),
        Some(GameStatus::GameOver) => println!("Game over. Score: {}", level.score()),
        _ => {}
    }
    Ok(())
}

fn run<W: Write>(
    out: &mut W,
    level: &mut Level,
    viewport_height: f64,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<Option<GameStatus>> {
    match game_loop(out, level, viewport_height, rx)? {
        Outcome::Quit => Ok(None),
        Outcome::Finished(status) => {
            // Hold the final screen until any key press.
            while let Ok(ev) = rx.recv() {
                if let Event::Key(KeyEvent {
                    kind: KeyEventKind::Press,
                    ..
                }) = ev
                {
                    break;
                }
            }
            Ok(Some(status))
        }
    }
}
