//! Bump attacks, surprise exchanges and the first half of defeat.

use crate::combat::{check_level_up, grant_reward, roll_enemy_damage, roll_player_damage};
use crate::event::GameEvent;
use crate::state::{GroundItem, ItemKind, Mode};

use super::GameEngine;

impl GameEngine<'_> {
    /// Player strikes the living enemy at `index`.
    ///
    /// Draws the damage roll, then the potion roll only if the enemy died.
    pub(super) fn strike_enemy(&mut self, index: usize, events: &mut Vec<GameEvent>) {
        let config = self.env.config();
        let amount = roll_player_damage(config, &mut *self.rng);

        let enemy = &mut self.state.enemies[index];
        enemy.hp.drain(amount);
        events.push(GameEvent::EnemyHit {
            enemy: enemy.id,
            kind: enemy.kind,
            amount,
        });

        if !enemy.hp.is_depleted() {
            return;
        }

        enemy.alive = false;
        let (id, kind, position, reward) = (enemy.id, enemy.kind, enemy.position, enemy.reward);

        grant_reward(&mut self.state.player, reward);

        let potion_dropped = self.rng.percent(config.potion_drop_chance);
        if potion_dropped {
            self.state
                .items
                .push(GroundItem::new(position, ItemKind::Potion));
        }

        events.push(GameEvent::EnemyDefeated {
            enemy: id,
            kind,
            exp: reward.exp,
            gold: reward.gold,
            potion_dropped,
        });

        if let Some(level) = check_level_up(&mut self.state.player, config) {
            events.push(GameEvent::LevelUp { level });
        }
    }

    /// An enemy shares the player's tile after the AI step: it hits first,
    /// and the player strikes back only if still standing.
    pub(super) fn surprise_exchange(&mut self, index: usize, events: &mut Vec<GameEvent>) {
        let enemy = &self.state.enemies[index];
        let (attacker, base) = (enemy.kind, enemy.damage);

        let amount = roll_enemy_damage(base, &mut *self.rng);
        self.state.player.hp.drain(amount);
        events.push(GameEvent::PlayerHit { attacker, amount });

        if self.state.player.is_defeated() {
            self.resolve_defeat(events);
        } else {
            self.strike_enemy(index, events);
        }
    }

    /// Immediate half of the defeat transition.
    ///
    /// HP is pinned at zero and the mode switches to [`Mode::Defeated`];
    /// position, gold and inventory are untouched until
    /// [`GameEngine::respawn`] runs.
    pub(super) fn resolve_defeat(&mut self, events: &mut Vec<GameEvent>) {
        self.state.player.hp.current = 0;
        self.state.mode = Mode::Defeated;
        self.state.dialogue = None;
        events.push(GameEvent::PlayerDefeated);
    }
}
