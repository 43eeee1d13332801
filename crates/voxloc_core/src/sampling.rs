//! Random selection of k elements from a slice
//!
//! Non-repeating draws use rejection sampling: an element equal to one
//! already picked is thrown away and drawn again. Asking for at least as
//! many distinct elements as the slice holds yields an empty result instead
//! of a partial one; callers that need a full sample check sizes first.

use std::sync::{Mutex, OnceLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Process-wide engine, seeded from OS entropy on first use
static SHARED: OnceLock<SamplingEngine> = OnceLock::new();

/// Default number of rejected draws tolerated per call
pub const DEFAULT_MAX_REDRAWS: usize = 100_000;

/// Sampling engine settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingOptions {
    /// Fixed seed for reproducible draws; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Rejected draws allowed per non-repeating call before giving up
    pub max_redraws: usize,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_redraws: DEFAULT_MAX_REDRAWS,
        }
    }
}

/// A random source shared between callers
///
/// The generator sits behind a mutex so one engine can serve several threads.
pub struct SamplingEngine {
    rng: Mutex<StdRng>,
    max_redraws: usize,
}

impl Default for SamplingEngine {
    fn default() -> Self {
        Self::new(SamplingOptions::default())
    }
}

impl SamplingEngine {
    /// Create an engine from options
    pub fn new(options: SamplingOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
            max_redraws: options.max_redraws,
        }
    }

    /// Create a deterministic engine
    pub fn seeded(seed: u64) -> Self {
        Self::new(SamplingOptions {
            seed: Some(seed),
            ..SamplingOptions::default()
        })
    }

    /// The process-wide engine
    ///
    /// Initialized once with entropy and never reseeded.
    pub fn shared() -> &'static SamplingEngine {
        SHARED.get_or_init(SamplingEngine::default)
    }

    /// Rejected draws allowed per call
    #[inline]
    pub fn max_redraws(&self) -> usize {
        self.max_redraws
    }

    /// Choose `count` elements of `items` in draw order
    ///
    /// See [`choose_random_with`] for the exact rules.
    pub fn choose_random<T: Clone + PartialEq>(
        &self,
        items: &[T],
        count: usize,
        allow_repeats: bool,
    ) -> Vec<T> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        choose_random_with(&mut *rng, items, count, allow_repeats, self.max_redraws)
    }
}

/// Choose `count` elements of `items` using `rng`
///
/// - `allow_repeats == false` and `count >= items.len()`: empty result.
/// - `allow_repeats == false`: elements equal to an earlier pick are redrawn.
///   More than `max_redraws` rejections abandons the draw with an empty result.
/// - `allow_repeats == true`: every draw is kept; an empty `items` gives an
///   empty result.
///
/// The result is in draw order, not input order.
pub fn choose_random_with<T, R>(
    rng: &mut R,
    items: &[T],
    count: usize,
    allow_repeats: bool,
    max_redraws: usize,
) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng,
{
    if !allow_repeats && items.len() <= count {
        log::debug!(
            "Cannot draw {} distinct elements from {}; returning nothing",
            count,
            items.len()
        );
        return Vec::new();
    }
    if items.is_empty() {
        if count > 0 {
            log::warn!("Asked for {} elements from an empty sequence", count);
        }
        return Vec::new();
    }

    let mut chosen: Vec<T> = Vec::with_capacity(count);
    let mut rejected = 0usize;
    while chosen.len() < count {
        let candidate = &items[rng.gen_range(0..items.len())];
        if !allow_repeats && chosen.contains(candidate) {
            rejected += 1;
            if rejected > max_redraws {
                log::warn!(
                    "Gave up after {} rejected draws with {} of {} distinct elements chosen",
                    rejected,
                    chosen.len(),
                    count
                );
                return Vec::new();
            }
            continue;
        }
        chosen.push(candidate.clone());
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
        items
            .iter()
            .enumerate()
            .any(|(i, a)| items[i + 1..].iter().any(|b| a == b))
    }

    #[test]
    fn test_non_repeating_draw_has_no_duplicates() {
        let engine = SamplingEngine::seeded(7);
        let items = [1, 1, 1, 1, 5, 6, 7, 8, 9];
        for _ in 0..50 {
            let chosen = engine.choose_random(&items, 5, false);
            assert_eq!(chosen.len(), 5);
            assert!(!has_duplicates(&chosen), "duplicates in {:?}", chosen);
        }
    }

    #[test]
    fn test_repeating_draw_keeps_duplicates() {
        let engine = SamplingEngine::seeded(11);
        let items = [1, 1, 1, 1, 5];
        let chosen = engine.choose_random(&items, 5, true);
        assert_eq!(chosen.len(), 5);
        // Only two distinct values exist, so five picks must repeat
        assert!(has_duplicates(&chosen));
        assert!(chosen.iter().all(|v| *v == 1 || *v == 5));
    }

    #[test]
    fn test_size_guard_returns_empty() {
        let engine = SamplingEngine::seeded(1);
        let empty: [i32; 0] = [];
        assert!(engine.choose_random(&empty, 1, false).is_empty());
        assert!(engine.choose_random(&[1, 2, 3], 3, false).is_empty());
        assert!(engine.choose_random(&[1, 2, 3], 4, false).is_empty());
    }

    #[test]
    fn test_size_guard_is_not_applied_with_repeats() {
        let engine = SamplingEngine::seeded(1);
        let chosen = engine.choose_random(&[1, 2, 3], 10, true);
        assert_eq!(chosen.len(), 10);
    }

    #[test]
    fn test_repeats_from_empty_sequence_is_empty() {
        let engine = SamplingEngine::seeded(1);
        let empty: [u8; 0] = [];
        assert!(engine.choose_random(&empty, 3, true).is_empty());
    }

    #[test]
    fn test_zero_count_is_empty() {
        let engine = SamplingEngine::seeded(1);
        assert!(engine.choose_random(&[1, 2, 3], 0, false).is_empty());
        assert!(engine.choose_random(&[1, 2, 3], 0, true).is_empty());
    }

    #[test]
    fn test_redraw_budget_stops_impossible_draw() {
        // Three picks but only two distinct values: the guard passes, the draw cannot finish
        let mut rng = StdRng::seed_from_u64(3);
        let chosen = choose_random_with(&mut rng, &[1, 1, 1, 2, 2], 3, false, 1_000);
        assert!(chosen.is_empty());
    }

    #[test]
    fn test_same_seed_same_draw() {
        let items: Vec<u32> = (0..100).collect();
        let a = SamplingEngine::seeded(42).choose_random(&items, 10, false);
        let b = SamplingEngine::seeded(42).choose_random(&items, 10, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shared_engine_is_single_instance() {
        let a = SamplingEngine::shared() as *const SamplingEngine;
        let b = SamplingEngine::shared() as *const SamplingEngine;
        assert_eq!(a, b);
        assert_eq!(SamplingEngine::shared().max_redraws(), DEFAULT_MAX_REDRAWS);
    }

    #[test]
    fn test_shared_engine_across_threads() {
        let items: Vec<u32> = (0..64).collect();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (0..100)
                            .map(|_| SamplingEngine::shared().choose_random(&items, 5, false))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            for handle in handles {
                for chosen in handle.join().unwrap() {
                    assert_eq!(chosen.len(), 5);
                    assert!(!has_duplicates(&chosen), "duplicates in {:?}", chosen);
                    assert!(chosen.iter().all(|v| items.contains(v)));
                }
            }
        });
    }

    #[test]
    fn test_result_elements_come_from_input() {
        let engine = SamplingEngine::seeded(5);
        let items = ["a", "b", "c", "d"];
        let chosen = engine.choose_random(&items, 2, false);
        assert!(chosen.iter().all(|c| items.contains(c)));
    }
}
