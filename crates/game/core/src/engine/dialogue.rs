//! Conversations with NPCs.

use crate::event::{DialogueStep, GameEvent, Rejection, TurnOutcome};
use crate::state::{ActiveDialogue, Mode};

use super::{EngineError, GameEngine};

impl GameEngine<'_> {
    /// Start talking to the NPC at `index`.
    ///
    /// An NPC with no lines closes the conversation on the spot and leaves
    /// the mode at [`Mode::Exploring`].
    pub(super) fn open_dialogue(&mut self, index: usize) -> TurnOutcome {
        let npc = &self.state.npcs[index];
        let name = npc.name.clone();

        let events = match npc.line(0) {
            Some(line) => {
                let line = line.to_owned();
                self.state.mode = Mode::Dialogue;
                self.state.dialogue = Some(ActiveDialogue {
                    npc: index,
                    line: 0,
                });
                vec![GameEvent::DialogueOpened { npc: name, line }]
            }
            None => vec![GameEvent::DialogueAdvanced {
                npc: name,
                step: DialogueStep::Closed,
            }],
        };

        self.debug_check_invariants();
        TurnOutcome {
            events,
            rejection: None,
        }
    }

    /// Show the next line of the open conversation, or close it after the
    /// last one.
    pub fn advance_dialogue(&mut self) -> Result<TurnOutcome, EngineError> {
        let mode = self.state.mode;
        let active = match (mode, self.state.dialogue) {
            (Mode::Dialogue, Some(active)) => active,
            _ => return Err(EngineError::NoActiveDialogue { mode }),
        };
        let npc = self
            .state
            .npcs
            .get(active.npc)
            .ok_or(EngineError::DialogueDesync { npc: active.npc })?;

        let next = active.line + 1;
        let step = match npc.line(next) {
            Some(line) => DialogueStep::Line(line.to_owned()),
            None => DialogueStep::Closed,
        };
        let name = npc.name.clone();

        match step {
            DialogueStep::Line(_) => {
                self.state.dialogue = Some(ActiveDialogue { line: next, ..active });
            }
            DialogueStep::Closed => {
                self.state.mode = Mode::Exploring;
                self.state.dialogue = None;
            }
        }

        self.debug_check_invariants();
        Ok(TurnOutcome {
            events: vec![GameEvent::DialogueAdvanced { npc: name, step }],
            rejection: None,
        })
    }

    /// Talk to the first orthogonally adjacent NPC, or advance the open
    /// conversation.
    pub fn interact(&mut self) -> Result<TurnOutcome, EngineError> {
        self.ensure_not_defeated()?;
        if self.state.mode == Mode::Dialogue {
            return self.advance_dialogue();
        }

        match self.state.adjacent_npc() {
            Some(index) => Ok(self.open_dialogue(index)),
            None => Ok(TurnOutcome::rejected(
                Rejection::NothingToInteract,
                Some(GameEvent::InteractionRejected),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::fixtures::{open_field, with_npc};
    use crate::env::{GameEnv, ScriptedRng};
    use crate::error::GameError;
    use crate::state::{EnemyTable, GameState, Position};

    fn elder_nearby() -> GameState {
        let mut state = open_field();
        with_npc(
            &mut state,
            "Elder",
            Position::new(16, 15),
            &["Welcome!", "Beware the dungeon.", "Farewell."],
        );
        state
    }

    fn with_engine<T>(state: &mut GameState, body: impl FnOnce(&mut GameEngine<'_>) -> T) -> T {
        let config = GameConfig::default();
        let table = EnemyTable::default();
        let mut rng = ScriptedRng::constant(0);
        let mut engine = GameEngine::new(state, GameEnv::new(&config, &table), &mut rng);
        body(&mut engine)
    }

    fn step_of(outcome: &TurnOutcome) -> &DialogueStep {
        match outcome.events.as_slice() {
            [GameEvent::DialogueAdvanced { step, .. }] => step,
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn conversation_walks_every_line_then_closes() {
        let mut state = elder_nearby();

        let opened = with_engine(&mut state, |e| e.interact()).unwrap();
        assert_eq!(
            opened.events,
            vec![GameEvent::DialogueOpened {
                npc: "Elder".into(),
                line: "Welcome!".into()
            }]
        );

        let second = with_engine(&mut state, |e| e.advance_dialogue()).unwrap();
        assert_eq!(
            step_of(&second),
            &DialogueStep::Line("Beware the dungeon.".into())
        );
        assert_eq!(state.dialogue_line().map(|(_, line)| line), Some("Beware the dungeon."));

        let third = with_engine(&mut state, |e| e.interact()).unwrap();
        assert_eq!(step_of(&third), &DialogueStep::Line("Farewell.".into()));

        let closed = with_engine(&mut state, |e| e.advance_dialogue()).unwrap();
        assert_eq!(step_of(&closed), &DialogueStep::Closed);
        assert_eq!(state.mode, Mode::Exploring);
        assert_eq!(state.dialogue, None);
        assert_eq!(closed.events[0].to_string(), "Goodbye, traveler.");
    }

    #[test]
    fn interact_without_a_neighbour_is_rejected() {
        let mut state = open_field();
        with_npc(&mut state, "Elder", Position::new(18, 16), &["Hi."]);
        let before = state.clone();

        let outcome = with_engine(&mut state, |e| e.interact()).unwrap();

        assert_eq!(state, before);
        assert_eq!(outcome.rejection, Some(Rejection::NothingToInteract));
        assert_eq!(outcome.events, vec![GameEvent::InteractionRejected]);
    }

    #[test]
    fn diagonal_npcs_are_not_adjacent() {
        let mut state = open_field();
        with_npc(&mut state, "Trader", Position::new(17, 17), &["Wares!"]);
        let outcome = with_engine(&mut state, |e| e.interact()).unwrap();
        assert!(outcome.is_rejected());
    }

    #[test]
    fn first_roster_npc_wins_when_several_are_adjacent() {
        let mut state = open_field();
        with_npc(&mut state, "Guard", Position::new(15, 16), &["Halt."]);
        with_npc(&mut state, "Trader", Position::new(17, 16), &["Wares!"]);

        let outcome = with_engine(&mut state, |e| e.interact()).unwrap();

        assert_eq!(
            outcome.events,
            vec![GameEvent::DialogueOpened {
                npc: "Guard".into(),
                line: "Halt.".into()
            }]
        );
    }

    #[test]
    fn advancing_without_a_conversation_is_an_error() {
        let mut state = open_field();
        let err = with_engine(&mut state, |e| e.advance_dialogue()).unwrap_err();
        assert_eq!(
            err,
            EngineError::NoActiveDialogue {
                mode: Mode::Exploring
            }
        );
    }

    #[test]
    fn defeated_players_cannot_talk() {
        let mut state = elder_nearby();
        state.mode = Mode::Defeated;
        let err = with_engine(&mut state, |e| e.interact()).unwrap_err();
        assert_eq!(err, EngineError::PlayerDefeated);
    }

    #[test]
    fn dangling_npc_index_is_reported() {
        let mut state = open_field();
        state.mode = Mode::Dialogue;
        state.dialogue = Some(ActiveDialogue { npc: 4, line: 0 });
        let err = with_engine(&mut state, |e| e.advance_dialogue()).unwrap_err();
        assert_eq!(err, EngineError::DialogueDesync { npc: 4 });
        assert!(err.severity().is_internal());
        assert_eq!(err.severity().as_str(), "internal");
    }
}
