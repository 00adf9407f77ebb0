//! Coarse game phases and the transitions between them.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Title / attract screen before play.
    Attract,
    Playing,
    /// Simulation frozen, rendering continues.
    Paused,
    /// Win or loss; waiting for restart.
    RoundOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Attract => "attract",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::RoundOver => "round-over",
        };
        f.write_str(name)
    }
}

/// Per-game choices about the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseRules {
    pub initial: Phase,
    pub pausable: bool,
    /// Where a restart from `RoundOver` lands.
    pub restart_to: Phase,
}

#[derive(Clone, Debug)]
pub struct PhaseMachine {
    rules: PhaseRules,
    phase: Phase,
}

impl PhaseMachine {
    pub fn new(rules: PhaseRules) -> Self {
        Self {
            rules,
            phase: rules.initial,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rules(&self) -> PhaseRules {
        self.rules
    }

    /// Update, Collision and Spawner only run while playing.
    pub fn runs_simulation(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// `Attract → Playing`.
    pub fn start(&mut self) -> bool {
        self.transition(Phase::Attract, Phase::Playing)
    }

    /// `Playing ↔ Paused`, for games that allow pausing.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.rules.pausable {
            return false;
        }
        match self.phase {
            Phase::Playing => self.transition(Phase::Playing, Phase::Paused),
            Phase::Paused => self.transition(Phase::Paused, Phase::Playing),
            _ => false,
        }
    }

    /// `Playing → RoundOver`.
    pub fn finish(&mut self) -> bool {
        self.transition(Phase::Playing, Phase::RoundOver)
    }

    /// `RoundOver → restart_to`. The caller clears the registry.
    pub fn restart(&mut self) -> bool {
        let to = self.rules.restart_to;
        self.transition(Phase::RoundOver, to)
    }

    fn transition(&mut self, from: Phase, to: Phase) -> bool {
        if self.phase != from {
            return false;
        }
        log::debug!("phase {} -> {}", from, to);
        self.phase = to;
        true
    }
}
