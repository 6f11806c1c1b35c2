//! Abilities that gate which command tokens an actor may execute.
//!
//! An actor owns intrinsic abilities and borrows the abilities of every item
//! equipped in registers `1`-`9`. A requirement token (`"d"`, `"H"`, `"dd"`)
//! is satisfied when any of those abilities fulfills it.

use std::fmt;

use strum::{Display, EnumString, IntoStaticStr};

/// A single ability-gate token produced by command binding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requirement(pub String);

impl Requirement {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Requirement {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<char> for Requirement {
    fn from(token: char) -> Self {
        Self(token.to_string())
    }
}

impl PartialEq<&str> for Requirement {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Behaviour modifiers that do not unlock a command on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PassiveKind {
    /// Delete-along-path attacks without moving the actor.
    Ranged,
    /// Movement and delete also yank every item on the covered cells.
    Magnetic,
    /// Reveals nearby actors; consumed by field-of-view logic outside the core.
    Echolocate,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    /// Fulfills every requirement.
    Omnipotent,
    /// Fulfills any short command token (one or two characters).
    AllCommands,
    /// Fulfills exactly one token.
    Command(String),
    Passive(PassiveKind),
}

impl Ability {
    pub fn command(token: impl Into<String>) -> Self {
        Self::Command(token.into())
    }

    /// Returns true if this ability is sufficient to meet `requirement`.
    pub fn fulfills(&self, requirement: &Requirement) -> bool {
        match self {
            Self::Omnipotent => true,
            Self::AllCommands => requirement.as_str().chars().count() <= 2,
            Self::Command(token) => token == requirement.as_str(),
            Self::Passive(kind) => {
                let name: &'static str = kind.into();
                name == requirement.as_str()
            }
        }
    }

    pub fn is_passive(&self, kind: PassiveKind) -> bool {
        matches!(self, Self::Passive(k) if *k == kind)
    }

    /// Short label shown in ability listings.
    pub fn label(&self) -> String {
        match self {
            Self::Omnipotent => "all abilities".to_owned(),
            Self::AllCommands => "all commands".to_owned(),
            Self::Command(token) => token.clone(),
            Self::Passive(kind) => kind.to_string(),
        }
    }
}

/// Parses a comma-free ability name as used in level files and configuration.
///
/// `*` is omnipotence, `**` grants all commands, passive names map to
/// [`PassiveKind`], anything else is a single command token.
impl std::str::FromStr for Ability {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "*" => Self::Omnipotent,
            "**" => Self::AllCommands,
            other => match other.parse::<PassiveKind>() {
                Ok(kind) => Self::Passive(kind),
                Err(_) => Self::Command(other.to_owned()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_commands_accepts_only_short_tokens() {
        let ability = Ability::AllCommands;
        assert!(ability.fulfills(&"d".into()));
        assert!(ability.fulfills(&"dd".into()));
        assert!(!ability.fulfills(&"ranged".into()));
    }

    #[test]
    fn command_ability_matches_exactly() {
        let ability = Ability::command("H");
        assert!(ability.fulfills(&"H".into()));
        assert!(!ability.fulfills(&"L".into()));
    }

    #[test]
    fn parses_passives_and_commands() {
        assert_eq!("magnetic".parse::<Ability>(), Ok(Ability::Passive(PassiveKind::Magnetic)));
        assert_eq!("*".parse::<Ability>(), Ok(Ability::Omnipotent));
        assert_eq!("f".parse::<Ability>(), Ok(Ability::command("f")));
    }
}
