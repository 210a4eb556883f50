//! Random problem generation.
//!
//! Each problem first draws an operand kind uniformly from the level's
//! eligible kinds, then draws operands uniformly within that kind's range.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{CoreError, CoreResult};
use crate::level::Level;
use crate::problem::{ADD_SUB_LIMIT, MUL_DIV_LIMIT, OperandKind, Problem};

/// Generate `count` problems for the given level.
///
/// Returns [`CoreError::InvalidCount`] when `count` is zero.
pub fn generate(level: Level, count: usize, rng: &mut StdRng) -> CoreResult<Vec<Problem>> {
    if count < 1 {
        return Err(CoreError::InvalidCount(count));
    }
    (0..count).map(|_| generate_problem(level, rng)).collect()
}

/// Generate a single problem for the given level.
pub fn generate_problem(level: Level, rng: &mut StdRng) -> CoreResult<Problem> {
    let kinds = level.operand_kinds();
    let kind = kinds[rng.random_range(0..kinds.len())];
    let (first, second) = draw_operands(kind, rng);
    Problem::new(first, kind, second)
}

fn draw_operands(kind: OperandKind, rng: &mut StdRng) -> (u32, u32) {
    match kind {
        OperandKind::Add => (
            rng.random_range(0..ADD_SUB_LIMIT),
            rng.random_range(0..ADD_SUB_LIMIT),
        ),
        OperandKind::Subtract => {
            let first = rng.random_range(0..ADD_SUB_LIMIT);
            (first, rng.random_range(0..=first))
        }
        OperandKind::Multiply => (
            rng.random_range(0..MUL_DIV_LIMIT),
            rng.random_range(0..MUL_DIV_LIMIT),
        ),
        OperandKind::Divide => {
            let divisor = rng.random_range(1..MUL_DIV_LIMIT);
            let quotient = rng.random_range(0..MUL_DIV_LIMIT);
            (quotient * divisor, divisor)
        }
    }
}
