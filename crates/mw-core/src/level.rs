//! Quiz difficulty levels.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::problem::OperandKind;

/// Difficulty of a quiz, from 1 (addition and subtraction) to 3 (all four
/// operations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    /// Addition and subtraction with operands up to 20.
    One,
    /// Multiplication and division with operands up to 12.
    Two,
    /// Any of the four operations.
    Three,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// The numeric level (1-3).
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// The operand kinds this level draws from, each equally likely.
    pub fn operand_kinds(self) -> &'static [OperandKind] {
        match self {
            Self::One => &[OperandKind::Add, OperandKind::Subtract],
            Self::Two => &[OperandKind::Multiply, OperandKind::Divide],
            Self::Three => &OperandKind::ALL,
        }
    }

    /// Parse a level from a spoken slot value such as `"2"`.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer in
    /// 1-3 yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let n: i64 = s.trim().parse().ok()?;
        Self::try_from(n).ok()
    }
}

impl TryFrom<i64> for Level {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(CoreError::InvalidLevel(other)),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(Level::One.number(), 1);
        assert_eq!(Level::Two.number(), 2);
        assert_eq!(Level::Three.number(), 3);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Level::try_from(0i64), Err(CoreError::InvalidLevel(0)));
        assert_eq!(Level::try_from(4i64), Err(CoreError::InvalidLevel(4)));
        assert_eq!(Level::try_from(-1i64), Err(CoreError::InvalidLevel(-1)));
        assert_eq!(Level::try_from(2i64), Ok(Level::Two));
    }

    #[test]
    fn parse_slot_values() {
        assert_eq!(Level::parse("1"), Some(Level::One));
        assert_eq!(Level::parse(" 3 "), Some(Level::Three));
        assert_eq!(Level::parse("4"), None);
        assert_eq!(Level::parse("two"), None);
        assert_eq!(Level::parse(""), None);
    }

    #[test]
    fn operand_kinds_per_level() {
        assert_eq!(
            Level::One.operand_kinds(),
            &[OperandKind::Add, OperandKind::Subtract]
        );
        assert_eq!(
            Level::Two.operand_kinds(),
            &[OperandKind::Multiply, OperandKind::Divide]
        );
        assert_eq!(Level::Three.operand_kinds().len(), 4);
    }

    #[test]
    fn serde_as_number() {
        assert_eq!(serde_json::to_string(&Level::Two).unwrap(), "2");
        let level: Level = serde_json::from_str("3").unwrap();
        assert_eq!(level, Level::Three);
        assert!(serde_json::from_str::<Level>("7").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Level::Three.to_string(), "3");
    }
}
