//! Interjections spoken after an answer.

use rand::Rng;
use rand::rngs::StdRng;

/// Said after a correct answer.
pub const CORRECT_EXCLAMATIONS: &[&str] = &[
    "Booya",
    "All righty",
    "Bam",
    "Bazinga",
    "Bingo",
    "Boom",
    "Bravo",
    "Cha Ching",
    "Cheers",
    "Dynomite",
    "Hip hip hooray",
    "Hurrah",
    "Hurray",
    "Huzzah",
    "Oh dear.  Just kidding.  Hurray",
    "Kaboom",
    "Kaching",
    "Oh snap",
    "Phew",
    "Righto",
    "Way to go",
    "Well done",
    "Whee",
    "Woo hoo",
    "Yay",
    "Wowza",
    "Yowsa",
];

/// Said after a wrong or unintelligible answer.
pub const WRONG_EXCLAMATIONS: &[&str] = &[
    "Argh",
    "Aw man",
    "Blarg",
    "Blast",
    "Boo",
    "Bummer",
    "Darn",
    "D'oh",
    "Dun dun dun",
    "Eek",
    "Honk",
    "Le sigh",
    "Mamma mia",
    "Oh boy",
    "Oh dear",
    "Oof",
    "Ouch",
    "Ruh roh",
    "Shucks",
    "Uh oh",
    "Wah wah",
    "Whoops a daisy",
    "Yikes",
];

/// Pick an exclamation for a graded answer.
pub fn exclamation(correct: bool, rng: &mut StdRng) -> &'static str {
    let pool = if correct {
        CORRECT_EXCLAMATIONS
    } else {
        WRONG_EXCLAMATIONS
    };
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn pool_sizes() {
        assert_eq!(CORRECT_EXCLAMATIONS.len(), 27);
        assert_eq!(WRONG_EXCLAMATIONS.len(), 23);
    }

    #[test]
    fn picks_from_matching_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(CORRECT_EXCLAMATIONS.contains(&exclamation(true, &mut rng)));
            assert!(WRONG_EXCLAMATIONS.contains(&exclamation(false, &mut rng)));
        }
    }

    #[test]
    fn every_exclamation_reachable() {
        let mut rng = StdRng::seed_from_u64(0);
        let seen: HashSet<_> = (0..3000).map(|_| exclamation(true, &mut rng)).collect();
        assert_eq!(seen.len(), CORRECT_EXCLAMATIONS.len());
    }

    #[test]
    fn seeded_selection_is_repeatable() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..10).map(|_| exclamation(false, &mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..10).map(|_| exclamation(false, &mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
