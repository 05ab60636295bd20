//! Move resolution.
//!
//! A move attempt resolves into exactly one of these branches, checked in
//! order against the target tile:
//!
//! 1. out of bounds → rejected
//! 2. terrain blocks the player → rejected
//! 3. NPC → dialogue opens, player stays
//! 4. living enemy → bump attack, player stays, no AI step
//! 5. otherwise → pick up items on the target, move, one enemy AI step,
//!    surprise exchange if an enemy wandered onto the player's new tile,
//!    terrain flavor
//!
//! During the AI step the tile the player left is closed to enemies and the
//! tile the player entered is open, so a wandering enemy can catch the
//! player.

use crate::action::Direction;
use crate::event::{GameEvent, MoveRejection, Rejection, TurnOutcome};

use super::{EngineError, GameEngine, ai};

impl GameEngine<'_> {
    /// Resolve one step of the player in `direction`.
    ///
    /// Only valid while exploring; a move during dialogue or defeat is a
    /// routing bug and returns an error without touching state.
    pub fn attempt_move(&mut self, direction: Direction) -> Result<TurnOutcome, EngineError> {
        self.ensure_exploring()?;

        let target = self.state.player.position.step(direction);
        let Some(tile) = self.state.tile(target) else {
            return Ok(rejected(MoveRejection::OutOfBounds));
        };

        if tile.blocks_player(self.env.config().settlements_block_player) {
            return Ok(rejected(MoveRejection::Terrain(tile)));
        }

        if let Some(npc) = self.state.npc_at(target) {
            return Ok(self.open_dialogue(npc));
        }

        let mut events = Vec::new();

        if let Some(enemy) = self.state.living_enemy_at(target) {
            self.strike_enemy(enemy, &mut events);
            self.debug_check_invariants();
            return Ok(TurnOutcome {
                events,
                rejection: None,
            });
        }

        self.pick_up_items(target, &mut events);
        let origin = std::mem::replace(&mut self.state.player.position, target);

        ai::step_enemies(self.state, self.env.config(), &mut *self.rng, origin);

        if let Some(enemy) = self.state.living_enemy_at(target) {
            self.surprise_exchange(enemy, &mut events);
        }

        events.push(GameEvent::TerrainFlavor(tile));
        self.debug_check_invariants();
        Ok(TurnOutcome {
            events,
            rejection: None,
        })
    }
}

fn rejected(reason: MoveRejection) -> TurnOutcome {
    TurnOutcome::rejected(
        Rejection::Move(reason),
        Some(GameEvent::MoveRejected(reason)),
    )
}
