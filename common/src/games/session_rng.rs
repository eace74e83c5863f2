use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-session random source. Seeded so a session can be reproduced in tests.
#[derive(Clone, Debug)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let left: Vec<usize> = (0..16).map(|_| a.random_below(25)).collect();
        let right: Vec<usize> = (0..16).map(|_| b.random_below(25)).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_random_below_stays_in_range() {
        let mut rng = SessionRng::new(1);
        for _ in 0..1000 {
            assert!(rng.random_below(3) < 3);
        }
    }
}
