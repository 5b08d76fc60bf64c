use rand::Rng;

use crate::config::{GameConfig, GameType};
use crate::roster::{PlayerId, Roster};
use crate::selection::pick_active;

/// Outcome of a task round as acknowledged by the group.
/// `NotRequired` covers Simple rounds and Tasks rounds without elimination,
/// where no prompt is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskVerdict {
    NotRequired,
    Completed,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleEffect {
    Kept,
    Eliminated,
}

/// One game's worth of state: the immutable config, the roster it owns,
/// and a latch so the winner is announced exactly once.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    roster: Roster,
    winner_announced: bool,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            roster: Roster::new(config.players as usize),
            winner_announced: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Selection stays available while at least two players remain in play.
    pub fn can_select(&self) -> bool {
        self.roster.active_count() > 1
    }

    pub fn draw<R: Rng>(&self, rng: &mut R) -> Option<PlayerId> {
        pick_active(&self.roster, rng)
    }

    /// Tasks with elimination require an explicit completed/failed
    /// acknowledgement before the roster is touched.
    pub fn needs_verdict(&self) -> bool {
        self.config.elimination && self.config.game_type == GameType::Tasks
    }

    /// Applies the elimination rule for a settled round: the chosen player
    /// goes out iff elimination mode is on and either the game is Simple or
    /// the task was acknowledged as failed.
    pub fn settle(&mut self, chosen: PlayerId, verdict: TaskVerdict) -> SettleEffect {
        let eliminate = self.config.elimination
            && match self.config.game_type {
                GameType::Simple => true,
                GameType::Tasks => verdict == TaskVerdict::Failed,
            };
        if eliminate && self.roster.eliminate(chosen) {
            SettleEffect::Eliminated
        } else {
            SettleEffect::Kept
        }
    }

    /// Some(winner) the first time exactly one active player remains in
    /// elimination mode; None on every later call.
    pub fn take_winner(&mut self) -> Option<PlayerId> {
        if !self.config.elimination || self.winner_announced {
            return None;
        }
        let winner = self.roster.sole_active()?;
        self.winner_announced = true;
        Some(winner)
    }
}
