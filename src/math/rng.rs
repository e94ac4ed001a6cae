use rand::{Rng as _, SeedableRng};
use rand_pcg::Pcg32;

use std::{
    ops::Range,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

pub type Rng = Pcg32;

pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_nanos() as u64
}

pub fn from_seed(seed: u64) -> Rng {
    Pcg32::seed_from_u64(seed)
}

/// A whole number drawn from `bound`, returned as a float.
pub fn random_int(rng: &mut Rng, bound: Range<i32>) -> f32 {
    rng.random_range(bound) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = from_seed(42);
        let mut b = from_seed(42);

        for _ in 0..100 {
            assert_eq!(random_int(&mut a, -300..300), random_int(&mut b, -300..300));
        }
    }

    #[test]
    fn stays_in_bound_and_is_whole() {
        let mut rng = from_seed(7);

        for _ in 0..1000 {
            let n = random_int(&mut rng, 10..50);
            assert!((10.0..50.0).contains(&n));
            assert_eq!(n, n.trunc());
        }
    }
}
