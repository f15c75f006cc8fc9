pub mod legacy;
pub mod xoroshiro;

use crate::legacy::LegacyRandom;
use crate::xoroshiro::XoroshiroRandom;

pub trait Random {
    fn next_u32(&mut self) -> u32;

    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    fn next_u32_bound(&mut self, bound: u32) -> u32;
}

/// Uniform integer source consumed by the enchanting engine.
///
/// Both bounds are inclusive. When `max <= min` the result is `min`.
pub trait RandomInteger {
    fn generate_integer(&mut self, min: i32, max: i32) -> i32;
}

#[inline]
fn bounded_integer<R: Random>(random: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    let span = (max as u32).wrapping_sub(min as u32).wrapping_add(1);
    if span == 0 {
        // full i32 range
        return random.next_u32() as i32;
    }
    min.wrapping_add(random.next_u32_bound(span) as i32)
}

impl RandomInteger for LegacyRandom {
    fn generate_integer(&mut self, min: i32, max: i32) -> i32 {
        bounded_integer(self, min, max)
    }
}

impl RandomInteger for XoroshiroRandom {
    fn generate_integer(&mut self, min: i32, max: i32) -> i32 {
        bounded_integer(self, min, max)
    }
}

impl RandomInteger for RandomSource {
    fn generate_integer(&mut self, min: i32, max: i32) -> i32 {
        bounded_integer(self, min, max)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RandomSource {
    Legacy(LegacyRandom),
    Xoroshiro(XoroshiroRandom),
}

impl RandomSource {
    pub fn new(seed: u64, legacy: bool) -> Self {
        if legacy {
            RandomSource::Legacy(LegacyRandom::new(seed))
        } else {
            RandomSource::Xoroshiro(XoroshiroRandom::new(seed))
        }
    }
}

impl Random for RandomSource {
    fn next_u32(&mut self) -> u32 {
        match self {
            RandomSource::Legacy(random) => random.next_u32(),
            RandomSource::Xoroshiro(random) => random.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            RandomSource::Legacy(random) => random.next_u64(),
            RandomSource::Xoroshiro(random) => random.next_u64(),
        }
    }

    fn next_u32_bound(&mut self, bound: u32) -> u32 {
        match self {
            RandomSource::Legacy(random) => random.next_u32_bound(bound),
            RandomSource::Xoroshiro(random) => random.next_u32_bound(bound),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{RandomInteger, RandomSource};

    #[test]
    fn generate_integer_stays_in_range() {
        for legacy in [true, false] {
            let mut random = RandomSource::new(42, legacy);
            for _ in 0..1000 {
                let value = random.generate_integer(0, 16);
                assert!((0..=16).contains(&value), "{value} out of range");
            }
            for _ in 0..1000 {
                let value = random.generate_integer(-5, 5);
                assert!((-5..=5).contains(&value), "{value} out of range");
            }
        }
    }

    #[test]
    fn generate_integer_degenerate_range() {
        let mut random = RandomSource::new(7, false);
        assert_eq!(random.generate_integer(3, 3), 3);
        assert_eq!(random.generate_integer(9, 2), 9);
    }

    #[test]
    fn generate_integer_hits_both_bounds() {
        let mut random = RandomSource::new(1, true);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[random.generate_integer(0, 2) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn generate_integer_covers_wide_ranges() {
        for legacy in [true, false] {
            let mut random = RandomSource::new(1, legacy);
            let (mut negative, mut positive) = (false, false);
            for _ in 0..256 {
                let value = random.generate_integer(i32::MIN + 1, i32::MAX);
                assert_ne!(value, i32::MIN);
                negative |= value < 0;
                positive |= value > 0;
            }
            assert!(negative && positive, "legacy={legacy}");

            for _ in 0..256 {
                let value = random.generate_integer(-2, i32::MAX);
                assert!(value >= -2, "{value} out of range");
                let value = random.generate_integer(i32::MIN, i32::MAX - 1);
                assert_ne!(value, i32::MAX);
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomSource::new(1234, false);
        let mut b = RandomSource::new(1234, false);
        for _ in 0..32 {
            assert_eq!(a.generate_integer(0, 99), b.generate_integer(0, 99));
        }
        assert!(matches!(a, RandomSource::Xoroshiro(_)));
        assert!(matches!(RandomSource::new(0, true), RandomSource::Legacy(_)));
    }
}
