mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use display::TerminalSurface;
use shadows_adventure::compute::{apply_command, init_session};
use shadows_adventure::entities::{GameSession, Mode};
use shadows_adventure::frame::{FrameDriver, FrameOutcome};
use shadows_adventure::input::{Command, Direction, InputState};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliMode {
    Easy,
    Hard,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Easy => Mode::Easy,
            CliMode::Hard => Mode::Hard,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "shadows_adventure")]
#[command(about = "Dodge the enemies, grab the coins, survive as long as you can")]
struct Cli {
    /// Mode preselected on the start screen
    #[arg(long, value_enum, default_value_t = CliMode::Easy)]
    mode: CliMode,
    /// Seed for a reproducible run (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Target frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Held keys ─────────────────────────────────────────────────────────────────

/// How long a key stays held after its last press/repeat on terminals that
/// never report releases. Has to outlast the OS delay before auto-repeat
/// starts, which runs up to about 600 ms.
const HOLD_FALLBACK: Duration = Duration::from_millis(650);

const ARROWS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

/// Frame number of the last press/repeat seen for every key.
///
/// With release reporting a key is held from its press until its release.
/// Without it, a key counts as held for `hold_frames` after it was last seen.
struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
    releases_reported: bool,
    hold_frames: u64,
}

impl HeldKeys {
    fn new(releases_reported: bool, frame_time: Duration) -> Self {
        let frame_ms = (frame_time.as_millis() as u64).max(1);
        Self {
            last_seen: HashMap::new(),
            releases_reported,
            hold_frames: (HOLD_FALLBACK.as_millis() as u64).div_ceil(frame_ms),
        }
    }

    fn seen(&mut self, code: KeyCode, frame: u64) {
        self.last_seen.insert(code, frame);
    }

    fn released(&mut self, code: KeyCode) {
        self.last_seen.remove(&code);
    }

    fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        match self.last_seen.get(&code) {
            None => false,
            Some(_) if self.releases_reported => true,
            Some(&last) => frame.saturating_sub(last) <= self.hold_frames,
        }
    }

    /// Turn the map into press/release edges on the input state.
    fn sync(&self, input: &mut InputState, frame: u64) {
        for (code, dir) in ARROWS {
            if self.is_held(code, frame) {
                input.press(dir);
            } else {
                input.release(dir);
            }
        }
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

fn mode_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Command::SelectEasy),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::SelectHard),
        _ => None,
    }
}

// ── Start screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Easy => "Easy",
        Mode::Hard => "Hard",
    }
}

fn draw_menu<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let top = (height / 2).saturating_sub(5);

    let selected = format!("Selected Mode: {}", mode_label(session.mode));
    let lines: [(&str, Color); 8] = [
        ("Shadow's Adventure", Color::Cyan),
        ("All the enemies have an invisible aura", Color::White),
        ("that will end your game", Color::White),
        ("Use arrow keys to move", Color::White),
        ("", Color::White),
        ("Press enter to start", Color::Yellow),
        ("Press E for easy and H for hard", Color::Yellow),
        (selected.as_str(), Color::Green),
    ];

    for (i, (text, color)) in lines.iter().enumerate() {
        let row = top + i as u16;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(text.chars().count() as u16 / 2),
            row,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }

    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()
}

/// Block until the player starts or quits, applying mode picks as they come.
fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    session: &mut GameSession,
    rng: &mut StdRng,
) -> std::io::Result<MenuResult> {
    draw_menu(out, session)?;
    loop {
        let (code, kind, modifiers) = match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) => (code, kind, modifiers),
            Ok(_) => {
                // Resize and friends: redraw for the new size.
                draw_menu(out, session)?;
                continue;
            }
            // Input thread gone, nothing more can arrive.
            Err(_) => return Ok(MenuResult::Quit),
        };
        if kind == KeyEventKind::Release {
            continue;
        }
        if is_quit(code, modifiers) {
            return Ok(MenuResult::Quit);
        }
        if code == KeyCode::Enter {
            apply_command(session, Command::Start, rng);
            return Ok(MenuResult::Start);
        }
        if let Some(cmd) = mode_command(code) {
            apply_command(session, cmd, rng);
            draw_menu(out, session)?;
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program, `false` → back to the start screen.
///
/// Input model: `HeldKeys` records key events as they arrive and each frame
/// syncs the held arrows into the `InputState` the player reads.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    frame_time: Duration,
    releases_reported: bool,
) -> std::io::Result<bool> {
    let mut keys = HeldKeys::new(releases_reported, frame_time);
    let mut input = InputState::new();
    let mut driver = FrameDriver::new();
    let clock = Instant::now();
    let mut frame: u64 = 0;
    let mut final_frame_shown = false;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    keys.seen(code, frame);
                    if is_quit(code, modifiers) {
                        return Ok(true);
                    }
                    if matches!(code, KeyCode::Char('r') | KeyCode::Char('R'))
                        && session.is_over()
                    {
                        return Ok(false);
                    }
                    if let Some(cmd) = mode_command(code) {
                        apply_command(session, cmd, rng);
                    }
                }
                KeyEventKind::Repeat => keys.seen(code, frame),
                KeyEventKind::Release => keys.released(code),
            }
        }
        keys.sync(&mut input, frame);

        // ── Step + draw until the run ends, then hold the final frame ─────────
        if !driver.is_halted() {
            let (cols, rows) = terminal::size()?;
            let mut surface = TerminalSurface::new(out, cols, rows);
            surface.begin()?;
            let timestamp = clock.elapsed().as_secs_f64() * 1000.0;
            let outcome = driver.run_frame(session, &input, timestamp, rng, &mut surface)?;
            if outcome == FrameOutcome::Halted {
                surface.hint("R - Play Again  Q - Quit")?;
            }
            surface.finish()?;
        } else if !final_frame_shown {
            final_frame_shown = true;
            info!("final score {}", session.score);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("starting with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let frame_time = Duration::from_secs_f64(1.0 / cli.fps as f64);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for key-release (and key-repeat) events where the terminal speaks
    // the kitty keyboard protocol; elsewhere held keys expire on a timer.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!("key release reporting: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(
        &mut out,
        &rx,
        &mut rng,
        cli.mode.into(),
        frame_time,
        keyboard_enhanced,
    );

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    mut mode: Mode,
    frame_time: Duration,
    releases_reported: bool,
) -> std::io::Result<()> {
    loop {
        // A restart is a brand new session; only the mode choice carries over.
        let mut session = init_session(mode, rng);
        match show_menu(out, rx, &mut session, rng)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let quit = game_loop(out, &mut session, rx, rng, frame_time, releases_reported)?;
                mode = session.mode;
                if quit {
                    break;
                }
            }
        }
    }
    Ok(())
}
