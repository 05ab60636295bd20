//! Line commands typed at the prompt.

use realm_core::{Direction, Intent, Mode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Intent),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. While a dialogue is open any input other than
    /// quit advances it, an empty line included.
    pub fn parse(input: &str, mode: Mode) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();

        if matches!(input.as_str(), "q" | "quit" | "exit") {
            return Some(Command::Quit);
        }
        if mode == Mode::Dialogue {
            return Some(Command::Play(Intent::Interact));
        }

        let command = match input.as_str() {
            "w" | "k" | "up" | "north" => Command::Play(Intent::Move(Direction::North)),
            "s" | "j" | "down" | "south" => Command::Play(Intent::Move(Direction::South)),
            "a" | "h" | "left" | "west" => Command::Play(Intent::Move(Direction::West)),
            "d" | "l" | "right" | "east" => Command::Play(Intent::Move(Direction::East)),
            "e" | "talk" | "interact" => Command::Play(Intent::Interact),
            "p" | "potion" | "drink" => Command::Play(Intent::UsePotion),
            "r" | "respawn" | "rise" => Command::Play(Intent::Respawn),
            "?" | "help" => Command::Help,
            _ => return None,
        };
        Some(command)
    }
}

pub const HELP: &str = "\
Commands:
  w/a/s/d   move north/west/south/east
  e         talk to an adjacent character
  p         drink a potion
  r         get back up after a defeat
  ?         this help
  q         quit";
