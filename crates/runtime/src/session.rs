//! Playable session around the pure engine.
//!
//! A [`GameSession`] owns one [`GameState`] and the seeded [`PcgRng`] every
//! transition draws from, so a seed plus a list of intents replays a game
//! exactly. Each submitted intent runs as one atomic engine transition; its
//! events are traced and their narrative text lands in the [`MessageLog`].

use realm_content::Content;
use realm_core::{
    DialogueStep, EnemyTable, GameConfig, GameEngine, GameEnv, GameError, GameEvent, GameState,
    Intent, Mode, PcgRng, TurnOutcome, new_game,
};
use tracing::{debug, error, info, trace, warn};

use crate::error::{Result, SessionError};
use crate::log::MessageLog;

/// Messages every session opens with, oldest first.
pub const WELCOME_MESSAGES: [&str; 2] = [
    "Welcome to the realm, adventurer!",
    "Use arrow keys or buttons to move.",
];

/// Session behavior that is not part of the game rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Run the respawn transition right after a defeat instead of waiting
    /// for an explicit [`Intent::Respawn`].
    pub auto_respawn: bool,
    pub log_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_respawn: false,
            log_capacity: MessageLog::DEFAULT_CAPACITY,
        }
    }
}

pub struct GameSession {
    state: GameState,
    rng: PcgRng,
    config: GameConfig,
    enemies: EnemyTable,
    settings: SessionConfig,
    log: MessageLog,
    seed: u64,
    turn: u64,
}

impl GameSession {
    /// Start a new game with default session settings.
    pub fn new(content: Content, seed: u64) -> Result<Self> {
        Self::with_config(content, seed, SessionConfig::default())
    }

    pub fn with_config(content: Content, seed: u64, settings: SessionConfig) -> Result<Self> {
        let Content {
            config,
            npcs,
            enemies,
        } = content;

        let mut rng = PcgRng::new(seed);
        let state = new_game(GameEnv::new(&config, &enemies), npcs, &mut rng).map_err(|err| {
            error!(
                seed,
                code = err.error_code(),
                severity = err.severity().as_str(),
                %err,
                "failed to set up game"
            );
            SessionError::Setup(err)
        })?;

        info!(
            seed,
            enemies = state.enemies.len(),
            npcs = state.npcs.len(),
            "new game started"
        );

        let mut log = MessageLog::new(settings.log_capacity);
        for message in WELCOME_MESSAGES {
            log.push(message);
        }

        Ok(Self {
            state,
            rng,
            config,
            enemies,
            settings,
            log,
            seed,
            turn: 0,
        })
    }

    /// Resolve one intent.
    ///
    /// Gameplay refusals come back as a rejected [`TurnOutcome`]; an `Err`
    /// means the intent made no sense in the current [`Mode`] and nothing
    /// changed.
    pub fn submit(&mut self, intent: Intent) -> Result<TurnOutcome> {
        let env = GameEnv::new(&self.config, &self.enemies);
        let mut outcome = GameEngine::new(&mut self.state, env, &mut self.rng)
            .apply(intent)
            .inspect_err(|err| {
                let code = err.error_code();
                let severity = err.severity().as_str();
                if err.severity().is_internal() {
                    error!(?intent, code, severity, %err, "engine state inconsistent");
                } else {
                    warn!(?intent, code, severity, %err, "intent refused");
                }
            })?;

        self.turn += 1;
        if let Some(rejection) = outcome.rejection {
            debug!(turn = self.turn, ?intent, ?rejection, "intent rejected");
        }

        if outcome.player_defeated() {
            info!(turn = self.turn, gold = self.state.player.gold, "player defeated");
            if self.settings.auto_respawn {
                self.respawn_now(&mut outcome)?;
            }
        }

        self.record(&outcome.events);
        Ok(outcome)
    }

    fn respawn_now(&mut self, outcome: &mut TurnOutcome) -> Result<()> {
        let env = GameEnv::new(&self.config, &self.enemies);
        let respawned = GameEngine::new(&mut self.state, env, &mut self.rng).respawn()?;
        debug!(turn = self.turn, "auto respawn");
        outcome.events.extend(respawned.events);
        Ok(())
    }

    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            trace!(turn = self.turn, ?event, "event");
            match event {
                GameEvent::EnemyDefeated { kind, exp, gold, .. } => {
                    debug!(turn = self.turn, %kind, exp, gold, "enemy defeated");
                }
                GameEvent::PlayerHit { attacker, amount } => {
                    debug!(
                        turn = self.turn,
                        %attacker,
                        amount,
                        hp = %self.state.player.hp,
                        "player hit"
                    );
                }
                GameEvent::LevelUp { level } => {
                    info!(turn = self.turn, level, "level up");
                }
                _ => {}
            }

            // Conversation lines are shown from the dialogue panel, not the log.
            let logged = !matches!(
                event,
                GameEvent::DialogueOpened { .. }
                    | GameEvent::DialogueAdvanced {
                        step: DialogueStep::Line(_),
                        ..
                    }
            );
            if logged {
                self.log.push(event.to_string());
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn settings(&self) -> &SessionConfig {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of intents resolved so far, rejected ones included.
    pub fn turn(&self) -> u64 {
        self.turn
    }
}
