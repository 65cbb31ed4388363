//! Random Source Port
//!
//! Every table lookup goes through this trait so callers can swap in a
//! seeded or scripted source and assert exact selections.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..upper`. `upper` of zero yields zero.
    fn index(&self, upper: usize) -> usize;

    /// Fair coin
    fn coin(&self) -> bool {
        self.index(2) == 1
    }
}

/// Pick one element uniformly, `None` for an empty slice
pub fn choose<'a, T>(random: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(random.index(items.len()))
}

/// Thread-local generator seeded from the OS
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        rand::rng().random_range(0..upper)
    }
}

/// Reproducible generator for a fixed seed
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..upper)
    }
}

/// Replays a fixed list of picks, wrapping each into range.
///
/// After the list is exhausted it starts over.
#[derive(Debug)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always pick the first element
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&self, upper: usize) -> usize {
        if upper == 0 || self.picks.is_empty() {
            return 0;
        }
        let at = self.cursor.fetch_add(1, Ordering::Relaxed) % self.picks.len();
        self.picks[at] % upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_empty_is_none() {
        let empty: [&str; 0] = [];
        assert!(choose(&ThreadRandom, &empty).is_none());
    }

    #[test]
    fn test_thread_random_stays_in_range() {
        for _ in 0..200 {
            assert!(ThreadRandom.index(3) < 3);
        }
        assert_eq!(ThreadRandom.index(0), 0);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let left: Vec<usize> = (0..20).map(|_| a.index(10)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.index(10)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_scripted_random_replays_and_wraps() {
        let random = ScriptedRandom::new(vec![1, 7]);
        assert_eq!(random.index(5), 1);
        assert_eq!(random.index(5), 2);
        assert_eq!(random.index(5), 1);

        let coins = ScriptedRandom::new(vec![1, 0]);
        assert!(coins.coin());
        assert!(!coins.coin());
    }
}
