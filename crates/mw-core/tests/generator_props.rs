//! Property tests for the problem generator.

use std::collections::HashMap;

use mw_core::{Level, OperandKind, Problem, generate};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn level_strategy() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::One), Just(Level::Two), Just(Level::Three)]
}

fn check_invariants(p: &Problem) {
    match p.kind() {
        OperandKind::Add => {
            assert!(p.first() < 21 && p.second() < 21, "{p}");
        }
        OperandKind::Subtract => {
            assert!(p.first() < 21, "{p}");
            assert!(p.second() <= p.first(), "{p}");
        }
        OperandKind::Multiply => {
            assert!(p.first() < 13 && p.second() < 13, "{p}");
        }
        OperandKind::Divide => {
            assert_ne!(p.second(), 0, "{p}");
            assert!(p.second() < 13, "{p}");
            assert_eq!(p.first() % p.second(), 0, "{p}");
            assert!(p.first() / p.second() < 13, "{p}");
        }
    }
}

fn exact(p: &Problem) -> i64 {
    let (a, b) = (i64::from(p.first()), i64::from(p.second()));
    match p.kind() {
        OperandKind::Add => a + b,
        OperandKind::Subtract => a - b,
        OperandKind::Multiply => a * b,
        OperandKind::Divide => a / b,
    }
}

proptest! {
    #[test]
    fn batches_have_requested_length_and_valid_problems(
        level in level_strategy(),
        count in 1usize..=20,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let problems = generate(level, count, &mut rng).unwrap();
        prop_assert_eq!(problems.len(), count);
        for p in &problems {
            prop_assert!(level.operand_kinds().contains(&p.kind()));
            check_invariants(p);
            prop_assert_eq!(i64::from(p.answer()), exact(p));
            let spoken = format!("{} {} {}", p.first(), p.kind().word(), p.second());
            prop_assert_eq!(p.spoken(), spoken);
        }
    }
}

#[test]
fn subtraction_never_goes_negative() {
    let mut rng = StdRng::seed_from_u64(2024);
    let problems = generate(Level::One, 5000, &mut rng).unwrap();
    let subtractions: Vec<_> = problems
        .iter()
        .filter(|p| p.kind() == OperandKind::Subtract)
        .collect();
    assert!(subtractions.len() >= 1000);
    for p in subtractions {
        assert!(p.second() <= p.first(), "{p}");
    }
}

#[test]
fn division_is_always_exact() {
    let mut rng = StdRng::seed_from_u64(99);
    let problems = generate(Level::Two, 5000, &mut rng).unwrap();
    let divisions: Vec<_> = problems
        .iter()
        .filter(|p| p.kind() == OperandKind::Divide)
        .collect();
    assert!(divisions.len() >= 1000);
    for p in divisions {
        assert_ne!(p.second(), 0);
        assert_eq!(p.first() % p.second(), 0, "{p}");
    }
}

#[test]
fn level_one_kinds_are_balanced() {
    let mut rng = StdRng::seed_from_u64(11);
    let problems = generate(Level::One, 2000, &mut rng).unwrap();
    let mut counts: HashMap<OperandKind, usize> = HashMap::new();
    for p in &problems {
        *counts.entry(p.kind()).or_default() += 1;
    }
    for n in counts.values() {
        assert!((850..1150).contains(n), "{counts:?}");
    }
}
