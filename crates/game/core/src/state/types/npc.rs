use super::Position;

/// A stationary, talkative character.
///
/// NPCs never move and carry no per-conversation state; the current line
/// index lives in [`crate::state::ActiveDialogue`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    pub name: String,
    pub position: Position,
    pub lines: Vec<String>,
}

impl Npc {
    pub fn new<L>(name: impl Into<String>, position: Position, lines: L) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            name: name.into(),
            position,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The village roster every session starts with unless content overrides it.
    pub fn default_roster() -> Vec<Npc> {
        vec![
            Npc::new(
                "Elder",
                Position::new(16, 14),
                [
                    "Welcome, traveler! I am the village elder.",
                    "Many adventures await you in these lands.",
                    "Lord British needs brave souls to help him.",
                    "May the light guide your path.",
                ],
            ),
            Npc::new(
                "Guard",
                Position::new(7, 6),
                [
                    "Halt! Who goes there?",
                    "The castle is private property.",
                    "Lord British is within, but he is busy.",
                    "Stay out of trouble, traveler.",
                ],
            ),
            Npc::new(
                "Trader",
                Position::new(16, 18),
                [
                    "Fine goods for sale! ...Just kidding, I'm broke too.",
                    "Gold is hard to come by these days.",
                    "I've heard of treasures in the dungeons to the south.",
                    "Safe travels, friend.",
                ],
            ),
        ]
    }
}
