//! Item pickup, potions and getting back up after a defeat.

use crate::combat::apply_respawn;
use crate::event::{GameEvent, Rejection, TurnOutcome};
use crate::state::{ItemKind, Mode, Position};

use super::{EngineError, GameEngine};

impl GameEngine<'_> {
    /// Move every ground item on `target` into the inventory, in drop order.
    pub(super) fn pick_up_items(&mut self, target: Position, events: &mut Vec<GameEvent>) {
        let (picked, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut self.state.items)
            .into_iter()
            .partition(|item| item.position == target);
        self.state.items = remaining;

        let inventory = &mut self.state.player.inventory;
        for item in picked {
            inventory.add(item.kind);
            events.push(GameEvent::ItemPickedUp {
                kind: item.kind,
                total: inventory.count(item.kind),
            });
        }
    }

    /// Drink one potion.
    ///
    /// Heals up to `potion_heal` without exceeding max HP. The potion is
    /// consumed even when nothing is healed. Without a potion the outcome is
    /// rejected and the state is left alone.
    pub fn use_potion(&mut self) -> Result<TurnOutcome, EngineError> {
        self.ensure_not_defeated()?;

        if !self.state.player.inventory.take(ItemKind::Potion) {
            return Ok(TurnOutcome::rejected(Rejection::NoPotion, None));
        }

        let healed = self
            .state
            .player
            .hp
            .restore(self.env.config().potion_heal);

        self.debug_check_invariants();
        Ok(TurnOutcome {
            events: vec![GameEvent::PotionUsed { healed }],
            rejection: None,
        })
    }

    /// Second half of the defeat transition.
    ///
    /// Moves the player to the respawn point with half max HP (at least 1)
    /// and half the gold; the inventory is kept.
    pub fn respawn(&mut self) -> Result<TurnOutcome, EngineError> {
        let mode = self.state.mode;
        if mode != Mode::Defeated {
            return Err(EngineError::NotDefeated { mode });
        }

        let player = &mut self.state.player;
        apply_respawn(player, self.env.config());
        let event = GameEvent::PlayerRespawned {
            hp: player.hp.current,
            gold: player.gold,
        };
        self.state.mode = Mode::Exploring;

        self.debug_check_invariants();
        Ok(TurnOutcome {
            events: vec![event],
            rejection: None,
        })
    }
}
