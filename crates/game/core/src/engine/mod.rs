//! Turn resolution.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! borrows the state exclusively for one transition, draws every random
//! value from the injected [`RandomSource`], and returns the narrative
//! events of that transition in a [`TurnOutcome`].
//!
//! Operations map one-to-one onto player intents:
//!
//! - [`GameEngine::attempt_move`]: blocked move, dialogue, bump attack, or
//!   a plain move followed by one enemy AI step
//! - [`GameEngine::interact`] / [`GameEngine::advance_dialogue`]
//! - [`GameEngine::use_potion`]
//! - [`GameEngine::respawn`]: second half of the defeat transition
//!
//! [`GameEngine::apply`] routes an [`Intent`] by the current [`Mode`] for
//! callers that do not want to do it themselves.

mod ai;
mod combat;
mod dialogue;
mod errors;
mod inventory;
mod movement;

pub use ai::step_enemies;
pub use errors::EngineError;

use crate::action::{Direction, Intent};
use crate::env::{GameEnv, RandomSource};
use crate::event::TurnOutcome;
use crate::state::{GameState, Mode};

/// Engine that resolves player intents against a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
    rng: &'a mut dyn RandomSource,
}

impl<'a> GameEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>, rng: &'a mut dyn RandomSource) -> Self {
        Self { state, env, rng }
    }

    /// Read access to the state being transitioned.
    pub fn state(&self) -> &GameState {
        &*self.state
    }

    /// Route an intent according to the current mode.
    ///
    /// While a dialogue is open, movement advances it. `Interact` opens or
    /// advances a dialogue. Everything except `Respawn` is refused while the
    /// player is defeated.
    pub fn apply(&mut self, intent: Intent) -> Result<TurnOutcome, EngineError> {
        match (intent, self.state.mode) {
            (Intent::Move(_), Mode::Dialogue) => self.advance_dialogue(),
            (Intent::Move(direction), _) => self.attempt_move(direction),
            (Intent::Interact, _) => self.interact(),
            (Intent::UsePotion, _) => self.use_potion(),
            (Intent::Respawn, _) => self.respawn(),
        }
    }

    /// [`Self::attempt_move`] for a raw `(dx, dy)` delta.
    ///
    /// Fails with [`EngineError::InvalidDirection`] for anything that is not
    /// a single orthogonal step.
    pub fn attempt_move_delta(&mut self, dx: i32, dy: i32) -> Result<TurnOutcome, EngineError> {
        let direction = Direction::from_delta(dx, dy)?;
        self.attempt_move(direction)
    }

    fn ensure_exploring(&self) -> Result<(), EngineError> {
        match self.state.mode {
            Mode::Exploring => Ok(()),
            Mode::Dialogue => Err(EngineError::DialogueActive),
            Mode::Defeated => Err(EngineError::PlayerDefeated),
        }
    }

    fn ensure_not_defeated(&self) -> Result<(), EngineError> {
        if self.state.mode == Mode::Defeated {
            return Err(EngineError::PlayerDefeated);
        }
        Ok(())
    }

    fn debug_check_invariants(&self) {
        let hp = self.state.player.hp;
        debug_assert!(hp.current <= hp.maximum, "player hp {hp} out of range");
        debug_assert!(
            self.state.mode != Mode::Dialogue || self.state.dialogue.is_some(),
            "dialogue mode without an active dialogue"
        );
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::config::GameConfig;
    use crate::state::{EnemyId, EnemyKind, EnemyTable, GameState, Npc, Player, Position};
    use crate::world::{MapDimensions, Tile, World};

    /// 32×32 grass field with the player at (16, 16) and nobody else.
    pub(crate) fn open_field() -> GameState {
        let config = GameConfig::default();
        let world = World::filled(MapDimensions::new(32, 32), Tile::Grass);
        GameState::new(world, Player::from_config(&config), Vec::new(), Vec::new())
    }

    pub(crate) fn with_enemy(state: &mut GameState, kind: EnemyKind, position: Position) -> usize {
        let table = EnemyTable::default();
        let id = EnemyId(state.enemies.len() as u32);
        let enemy = table
            .get(kind)
            .map(|template| template.spawn(id, position))
            .expect("default table has every kind");
        state.enemies.push(enemy);
        state.enemies.len() - 1
    }

    pub(crate) fn with_npc(state: &mut GameState, name: &str, position: Position, lines: &[&str]) {
        state
            .npcs
            .push(Npc::new(name, position, lines.iter().copied()));
    }
}
