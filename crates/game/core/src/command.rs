//! Textual command surface parsed into closed enums.
//!
//! Parsing happens once, at the boundary. Everything past this module works
//! on enums; the engine and combat resolver never compare strings.

use std::str::FromStr;

/// Compass direction used for room exits and movement commands.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Spells a wizard can cast during combat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Spell {
    Fireball,
    Shield,
    Heal,
}

impl Spell {
    /// Mana cost of casting this spell.
    pub fn mana_cost(self) -> u32 {
        match self {
            Spell::Fireball => 3,
            Spell::Shield => 2,
            Spell::Heal => 4,
        }
    }
}

/// One line of player input, classified.
///
/// The full surface parses regardless of mode; the engine decides what a
/// command means (or rejects it) based on its current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Movement: `n`/`s`/`e`/`w` or a full direction name.
    Move(Direction),
    /// `:d` toggles the debug overlay in any mode.
    ToggleDebug,
    /// `q` or `:q` quits in any mode.
    Quit,
    /// `attack` (combat).
    Attack,
    /// `cast <spell>` with a recognized spell name (combat).
    Cast(Spell),
    /// `cast` with a missing or unrecognized spell name (combat).
    CastUnknown,
    /// `flee` (combat).
    Flee,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parse a raw input line, case-insensitively.
    pub fn parse(input: &str) -> Command {
        let input = input.trim().to_ascii_lowercase();

        match input.as_str() {
            "n" => return Command::Move(Direction::North),
            "s" => return Command::Move(Direction::South),
            "e" => return Command::Move(Direction::East),
            "w" => return Command::Move(Direction::West),
            ":d" => return Command::ToggleDebug,
            "q" | ":q" => return Command::Quit,
            "attack" => return Command::Attack,
            "flee" => return Command::Flee,
            _ => {}
        }

        if let Ok(direction) = Direction::from_str(&input) {
            return Command::Move(direction);
        }

        // `cast` with no argument is still a cast attempt; `castle` is not.
        if input == "cast" {
            return Command::CastUnknown;
        }
        if let Some(rest) = input.strip_prefix("cast ") {
            return match Spell::from_str(rest.trim()) {
                Ok(spell) => Command::Cast(spell),
                Err(_) => Command::CastUnknown,
            };
        }

        Command::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_letter_movement() {
        assert_eq!(Command::parse("n"), Command::Move(Direction::North));
        assert_eq!(Command::parse("s"), Command::Move(Direction::South));
        assert_eq!(Command::parse("e"), Command::Move(Direction::East));
        assert_eq!(Command::parse("w"), Command::Move(Direction::West));
    }

    #[test]
    fn parses_full_direction_names() {
        assert_eq!(Command::parse("north"), Command::Move(Direction::North));
        assert_eq!(Command::parse("WEST"), Command::Move(Direction::West));
    }

    #[test]
    fn parses_meta_commands() {
        assert_eq!(Command::parse(":d"), Command::ToggleDebug);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse(":q"), Command::Quit);
    }

    #[test]
    fn parses_combat_commands() {
        assert_eq!(Command::parse("attack"), Command::Attack);
        assert_eq!(Command::parse("flee"), Command::Flee);
        assert_eq!(Command::parse("cast fireball"), Command::Cast(Spell::Fireball));
        assert_eq!(Command::parse("cast shield"), Command::Cast(Spell::Shield));
        assert_eq!(Command::parse("cast heal"), Command::Cast(Spell::Heal));
    }

    #[test]
    fn is_case_insensitive_and_trims() {
        assert_eq!(Command::parse("  ATTACK  "), Command::Attack);
        assert_eq!(Command::parse("Cast Fireball"), Command::Cast(Spell::Fireball));
    }

    #[test]
    fn unknown_spells_keep_the_spell_enum_closed() {
        assert_eq!(Command::parse("cast meteor"), Command::CastUnknown);
        assert_eq!(Command::parse("cast"), Command::CastUnknown);
    }

    #[test]
    fn garbage_parses_to_unknown() {
        assert_eq!(Command::parse("dance"), Command::Unknown);
        assert_eq!(Command::parse(""), Command::Unknown);
        // A `cast` prefix without the separating space is not a cast.
        assert_eq!(Command::parse("castle"), Command::Unknown);
    }

    #[test]
    fn spell_mana_costs() {
        assert_eq!(Spell::Fireball.mana_cost(), 3);
        assert_eq!(Spell::Shield.mana_cost(), 2);
        assert_eq!(Spell::Heal.mana_cost(), 4);
    }
}
