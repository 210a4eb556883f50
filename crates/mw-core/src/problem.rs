//! Arithmetic problems and the operations they use.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Exclusive upper bound for addition and subtraction operands (0-20).
pub const ADD_SUB_LIMIT: u32 = 21;

/// Exclusive upper bound for multiplication operands, divisors and
/// quotients (0-12).
pub const MUL_DIV_LIMIT: u32 = 13;

/// One of the four arithmetic operations a problem can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandKind {
    /// `a + b`
    Add,
    /// `a - b`, never negative.
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, always exact.
    Divide,
}

impl OperandKind {
    /// Every operand kind, in level order.
    pub const ALL: [OperandKind; 4] = [
        OperandKind::Add,
        OperandKind::Subtract,
        OperandKind::Multiply,
        OperandKind::Divide,
    ];

    /// The word used when reading a problem aloud.
    pub fn word(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divided by",
        }
    }

    /// Exclusive upper bound for operands drawn for this kind.
    pub fn operand_limit(self) -> u32 {
        match self {
            Self::Add | Self::Subtract => ADD_SUB_LIMIT,
            Self::Multiply | Self::Divide => MUL_DIV_LIMIT,
        }
    }
}

impl std::fmt::Display for OperandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.word())
    }
}

/// A single quiz problem: `first <kind> second`.
///
/// Construction goes through [`Problem::new`], so every value satisfies the
/// range rules of its operand kind and has an exact, non-negative answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem")]
pub struct Problem {
    first: u32,
    kind: OperandKind,
    second: u32,
}

#[derive(Deserialize)]
struct RawProblem {
    first: u32,
    kind: OperandKind,
    second: u32,
}

impl TryFrom<RawProblem> for Problem {
    type Error = CoreError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        Problem::new(raw.first, raw.kind, raw.second)
    }
}

impl Problem {
    /// Build a problem, checking the operands against the rules for `kind`.
    ///
    /// - add: both operands in 0-20
    /// - subtract: both operands in 0-20 and `second <= first`
    /// - multiply: both operands in 0-12
    /// - divide: divisor in 1-12, `first` a multiple of it with quotient 0-12
    pub fn new(first: u32, kind: OperandKind, second: u32) -> CoreResult<Self> {
        let limit = kind.operand_limit();
        let valid = match kind {
            OperandKind::Add | OperandKind::Multiply => first < limit && second < limit,
            OperandKind::Subtract => first < limit && second <= first,
            OperandKind::Divide => {
                second != 0 && second < limit && first % second == 0 && first / second < limit
            }
        };

        if valid {
            Ok(Self {
                first,
                kind,
                second,
            })
        } else {
            Err(CoreError::InvalidProblem(format!("{first} {kind} {second}")))
        }
    }

    /// The left-hand operand.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// The operation.
    pub fn kind(&self) -> OperandKind {
        self.kind
    }

    /// The right-hand operand.
    pub fn second(&self) -> u32 {
        self.second
    }

    /// The exact answer.
    pub fn answer(&self) -> u32 {
        match self.kind {
            OperandKind::Add => self.first + self.second,
            OperandKind::Subtract => self.first - self.second,
            OperandKind::Multiply => self.first * self.second,
            OperandKind::Divide => self.first / self.second,
        }
    }

    /// The problem as it is read aloud, e.g. `"7 times 6"`.
    pub fn spoken(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.first, self.kind, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers() {
        assert_eq!(Problem::new(7, OperandKind::Multiply, 6).unwrap().answer(), 42);
        assert_eq!(Problem::new(12, OperandKind::Add, 9).unwrap().answer(), 21);
        assert_eq!(Problem::new(15, OperandKind::Subtract, 15).unwrap().answer(), 0);
        assert_eq!(Problem::new(144, OperandKind::Divide, 12).unwrap().answer(), 12);
        assert_eq!(Problem::new(0, OperandKind::Divide, 5).unwrap().answer(), 0);
    }

    #[test]
    fn spoken_form() {
        let p = Problem::new(7, OperandKind::Multiply, 6).unwrap();
        assert_eq!(p.spoken(), "7 times 6");
        let p = Problem::new(20, OperandKind::Subtract, 3).unwrap();
        assert_eq!(p.spoken(), "20 minus 3");
        let p = Problem::new(36, OperandKind::Divide, 4).unwrap();
        assert_eq!(p.spoken(), "36 divided by 4");
        let p = Problem::new(1, OperandKind::Add, 2).unwrap();
        assert_eq!(p.spoken(), "1 plus 2");
    }

    #[test]
    fn subtract_never_negative() {
        assert!(Problem::new(3, OperandKind::Subtract, 4).is_err());
        assert!(Problem::new(4, OperandKind::Subtract, 4).is_ok());
    }

    #[test]
    fn divide_requires_exact_nonzero_divisor() {
        assert!(Problem::new(10, OperandKind::Divide, 0).is_err());
        assert!(Problem::new(10, OperandKind::Divide, 3).is_err());
        assert!(Problem::new(156, OperandKind::Divide, 12).is_err());
        assert!(Problem::new(12, OperandKind::Divide, 3).is_ok());
    }

    #[test]
    fn operand_ranges() {
        assert!(Problem::new(21, OperandKind::Add, 0).is_err());
        assert!(Problem::new(20, OperandKind::Add, 20).is_ok());
        assert!(Problem::new(13, OperandKind::Multiply, 1).is_err());
        assert!(Problem::new(12, OperandKind::Multiply, 12).is_ok());
    }

    #[test]
    fn invalid_problem_message() {
        let err = Problem::new(3, OperandKind::Subtract, 9).unwrap_err();
        assert_eq!(err.to_string(), "invalid problem: 3 minus 9");
    }

    #[test]
    fn serde_roundtrip_validates() {
        let p = Problem::new(9, OperandKind::Divide, 3).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"first":9,"kind":"divide","second":3}"#);
        let back: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        let bad = r#"{"first":9,"kind":"divide","second":0}"#;
        assert!(serde_json::from_str::<Problem>(bad).is_err());
    }
}
