//! crossterm backend: renderer, input source and terminal session.
//!
//! Input is polled without blocking on the loop thread, so the whole game
//! (input, simulation, drawing) runs on one thread.

use std::io::{stdout, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};

use super::{CellGrid, Frame, Renderer, Rgb};
use crate::config::Config;
use crate::engine::clock::FixedClock;
use crate::engine::input::{InputEvent, InputSnapshot, InputSource, Key, KeyTracker};
use crate::engine::rng::GameRng;
use crate::engine::runner::{self, Game};
use crate::error::Result;

/// A key counts as held this long after its last press/repeat. Longer
/// than the usual OS key-repeat interval (≥ 15 Hz).
pub const HOLD_WINDOW: Duration = Duration::from_millis(133);

// ── Session ───────────────────────────────────────────────────────────────────

/// Raw mode, hidden cursor and (unless embedded) the alternate screen.
///
/// The session exists before any setup command is issued, so a failure
/// part way through still restores the terminal on drop.
pub struct TerminalSession<W: Write = Stdout> {
    out: W,
    embedded: bool,
    raw_mode: bool,
    keyboard_enhanced: bool,
    mouse_captured: bool,
}

impl TerminalSession<Stdout> {
    pub fn enter(embedded: bool) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut session = Self::over(stdout(), embedded);
        session.raw_mode = true;

        // Key-release events (kitty protocol terminals). Others fall back
        // to the hold window.
        let enhance = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
        session.setup(enhance)?;
        Ok(session)
    }
}

impl<W: Write> TerminalSession<W> {
    /// A session drawing to `out` that has changed nothing yet.
    pub fn over(out: W, embedded: bool) -> Self {
        Self {
            out,
            embedded,
            raw_mode: false,
            keyboard_enhanced: false,
            mouse_captured: false,
        }
    }

    /// Switch screens, hide the cursor and request the optional input
    /// features. Only the screen commands are fatal.
    pub fn setup(&mut self, keyboard_enhancement: bool) -> Result<()> {
        if !self.embedded {
            self.out.execute(terminal::EnterAlternateScreen)?;
        }
        self.out.execute(cursor::Hide)?;
        self.out.execute(terminal::Clear(terminal::ClearType::All))?;

        self.keyboard_enhanced = keyboard_enhancement
            && self
                .out
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();
        if !self.keyboard_enhanced {
            log::warn!("keyboard enhancement unavailable; using key-repeat hold window");
        }

        self.mouse_captured = self.out.execute(EnableMouseCapture).is_ok();
        if !self.mouse_captured {
            log::warn!("mouse capture unavailable; use the keyboard instead of clicks");
        }
        Ok(())
    }

    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        let out = &mut self.out;
        if self.mouse_captured {
            let _ = out.execute(DisableMouseCapture);
        }
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = out.execute(style::ResetColor);
        let _ = out.execute(cursor::Show);
        if !self.embedded {
            let _ = out.execute(terminal::LeaveAlternateScreen);
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Draws frames as coloured cells, rewriting only cells that changed
/// since the previous frame.
pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Fixed grid size; `None` follows the terminal size.
    size: Option<(u16, u16)>,
    previous: Option<CellGrid>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            size: None,
            previous: None,
        }
    }

    pub fn with_size(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            size: Some((cols, rows)),
            previous: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn grid_size(&self) -> Result<(u16, u16)> {
        match self.size {
            Some(size) => Ok(size),
            None => Ok(terminal::size()?),
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let (cols, rows) = self.grid_size()?;
        let grid = CellGrid::rasterize(frame, cols, rows);

        // Resize (or first frame): repaint everything.
        let previous = self
            .previous
            .take()
            .filter(|p| p.cols() == cols && p.rows() == rows);
        if previous.is_none() {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut current_fg: Option<Rgb> = None;
        let mut cursor_at: Option<(u16, u16)> = None;
        for row in 0..rows {
            for col in 0..cols {
                let Some(cell) = grid.get(col, row) else {
                    continue;
                };
                let unchanged = previous
                    .as_ref()
                    .and_then(|p| p.get(col, row))
                    .is_some_and(|old| old == cell);
                if unchanged || (previous.is_none() && cell.ch == ' ') {
                    continue;
                }
                // Runs of changed cells on one row need a single move.
                if cursor_at != Some((col, row)) {
                    self.out.queue(cursor::MoveTo(col, row))?;
                }
                if current_fg != Some(cell.fg) {
                    self.out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                    current_fg = Some(cell.fg);
                }
                self.out.queue(Print(cell.ch))?;
                cursor_at = Some((col + 1, row));
            }
        }

        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
        self.out.flush()?;
        self.previous = Some(grid);
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

pub struct TerminalInput {
    keys: KeyTracker,
}

impl TerminalInput {
    pub fn new(hold_window_ticks: u64) -> Self {
        Self {
            keys: KeyTracker::new(hold_window_ticks),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, tick: u64) -> Result<InputSnapshot> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            translate(ev, tick, &mut self.keys, &mut events);
        }
        let held = self.keys.held(tick);
        Ok(InputSnapshot::new(tick, events, held))
    }
}

/// Fold one terminal event into the tick's event queue and key state.
/// Events the games have no use for are dropped.
pub fn translate(ev: Event, tick: u64, keys: &mut KeyTracker, events: &mut Vec<InputEvent>) {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                events.push(InputEvent::Quit);
                return;
            }
            let Some(key) = map_key(code) else {
                return;
            };
            match kind {
                KeyEventKind::Press => {
                    keys.press(key, tick);
                    events.push(InputEvent::KeyDown(key));
                }
                KeyEventKind::Repeat => keys.press(key, tick),
                KeyEventKind::Release => keys.release(key),
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) => events.push(InputEvent::MouseDown),
        _ => {}
    }
}

pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        _ => None,
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run `game` in the terminal until the player quits.
pub fn play<G: Game>(game: &mut G, config: &Config, rng: &mut GameRng) -> Result<()> {
    let mut clock = FixedClock::new(config.fps);
    let mut input = TerminalInput::new(clock.ticks_for(HOLD_WINDOW));
    let mut renderer = TerminalRenderer::new(BufWriter::new(stdout()));

    let session = TerminalSession::enter(config.embedded)?;
    let result = runner::run(game, &mut input, &mut renderer, &mut clock, rng);
    drop(session);

    let ticks = result?;
    log::info!("{}: exited cleanly after {} ticks", game.title(), ticks);
    Ok(())
}
