//! Source of randomness for password generation

use rand::Rng;

/// Uniform random floats in `[0, 1)`.
///
/// Every `rand::Rng` is a source, so callers can pass `rand::rng()` or a
/// seeded `StdRng`. Tests can also replay fixed values through their own
/// implementation.
pub trait RandomSource {
    /// Next value in `[0, 1)`
    fn next_f64(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Random index into a collection of `len` elements.
///
/// Computed as `floor(next * len)` and clamped to the last index, so a source
/// returning `1.0` still lands in range. `len` must be non-zero.
pub(crate) fn random_index<S: RandomSource + ?Sized>(source: &mut S, len: usize) -> usize {
    debug_assert!(len > 0);
    let idx = (source.next_f64() * len as f64).floor() as usize;
    idx.min(len - 1)
}

/// Random character from `chars`, or `None` when it is empty
pub(crate) fn random_char<S: RandomSource + ?Sized>(source: &mut S, chars: &[char]) -> Option<char> {
    if chars.is_empty() {
        return None;
    }
    Some(chars[random_index(source, chars.len())])
}

/// Fisher-Yates shuffle driven by `source`
pub(crate) fn shuffle<T, S: RandomSource + ?Sized>(source: &mut S, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random_index(source, i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_random_index_bounds() {
        assert_eq!(random_index(&mut Fixed(0.0), 10), 0);
        assert_eq!(random_index(&mut Fixed(0.55), 10), 5);
        assert_eq!(random_index(&mut Fixed(0.999), 10), 9);
        // Out of contract, still in range
        assert_eq!(random_index(&mut Fixed(1.0), 10), 9);
    }

    #[test]
    fn test_random_char_empty() {
        assert_eq!(random_char(&mut Fixed(0.5), &[]), None);
        assert_eq!(random_char(&mut Fixed(0.5), &['a', 'b', 'c']), Some('b'));
    }

    #[test]
    fn test_rng_source_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_with_zero_source_rotates() {
        // j is always 0: each step swaps position i with the head
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut Fixed(0.0), &mut items);
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut empty: Vec<char> = Vec::new();
        shuffle(&mut Fixed(0.3), &mut empty);
        assert!(empty.is_empty());

        let mut single = vec!['x'];
        shuffle(&mut Fixed(0.3), &mut single);
        assert_eq!(single, vec!['x']);
    }
}
