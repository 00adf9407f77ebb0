//! Per-tick input snapshot.
//!
//! Discrete events are drained once per tick and handed to the game in a
//! snapshot; continuous key state is a read-only set that can be queried
//! any number of times.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Escape,
    /// Printable key, always lower-cased.
    Char(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / Ctrl-C.
    Quit,
    KeyDown(Key),
    MouseDown,
}

/// Everything the simulation may know about input for one tick.
#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    tick: u64,
    events: Vec<InputEvent>,
    held: HashSet<Key>,
}

impl InputSnapshot {
    pub fn new(tick: u64, events: Vec<InputEvent>, held: HashSet<Key>) -> Self {
        Self { tick, events, held }
    }

    pub fn empty(tick: u64) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_held(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn any_held(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.held.contains(k))
    }

    /// A key-press for `key` arrived since the previous tick.
    pub fn pressed(&self, key: Key) -> bool {
        self.events.contains(&InputEvent::KeyDown(key))
    }

    pub fn any_pressed(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&k| self.pressed(k))
    }

    pub fn clicked(&self) -> bool {
        self.events.contains(&InputEvent::MouseDown)
    }

    /// Global exit: window close, Escape or `q`.
    pub fn quit_requested(&self) -> bool {
        self.events.iter().any(|e| {
            matches!(
                e,
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) | InputEvent::KeyDown(Key::Char('q'))
            )
        })
    }
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Tracks which keys are currently held.
///
/// Terminals with keyboard enhancement report releases and the key is
/// dropped immediately. Classic terminals only repeat presses, so a key
/// also counts as held while its last press/repeat is within
/// `hold_window` ticks.
#[derive(Clone, Debug)]
pub struct KeyTracker {
    last_seen: HashMap<Key, u64>,
    hold_window: u64,
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            hold_window,
        }
    }

    /// Press or auto-repeat.
    pub fn press(&mut self, key: Key, tick: u64) {
        self.last_seen.insert(key, tick);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    pub fn is_held(&self, key: Key, tick: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| tick.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    /// Snapshot of held keys; stale entries are forgotten.
    pub fn held(&mut self, tick: u64) -> HashSet<Key> {
        let window = self.hold_window;
        self.last_seen
            .retain(|_, &mut last| tick.saturating_sub(last) <= window);
        self.last_seen.keys().copied().collect()
    }
}

// ── Sources ───────────────────────────────────────────────────────────────────

pub trait InputSource {
    /// Drain all pending events and sample key state for `tick`.
    fn poll(&mut self, tick: u64) -> Result<InputSnapshot>;
}

/// Replays a fixed list of snapshots, then reports a quit.
/// Drives the loop headlessly.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, tick: u64) -> Result<InputSnapshot> {
        Ok(self
            .script
            .pop_front()
            .map(|s| InputSnapshot { tick, ..s })
            .unwrap_or_else(|| InputSnapshot::empty(tick).with_event(InputEvent::Quit)))
    }
}
