//! Random next-episode selection
//!
//! Shuffle does not precompute an order. Each "next" draws a fresh index,
//! uniformly over the whole queue, and may land on the current episode again.

use rand::Rng;

/// Pick a uniformly random index in `[0, len)`
///
/// Returns `None` for an empty queue.
pub(crate) fn pick_random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_queue_has_no_pick() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_random_index(&mut rng, 0), None);
    }

    #[test]
    fn single_episode_always_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(pick_random_index(&mut rng, 1), Some(0));
        }
    }

    #[test]
    fn picks_stay_in_range_and_cover_queue() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let index = pick_random_index(&mut rng, 5).unwrap();
            assert!(index < 5);
            seen.insert(index);
        }

        // 500 draws over 5 slots; every slot shows up
        assert_eq!(seen.len(), 5);
    }
}
