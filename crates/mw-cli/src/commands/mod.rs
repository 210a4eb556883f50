pub mod generate;
pub mod play;
pub mod turn;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// A seeded RNG, or one seeded from the operating system.
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
