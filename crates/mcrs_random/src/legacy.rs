use crate::Random;

const MODULUS_BITS: usize = 48;
const MODULUS_MASK: u64 = 281474976710655;
const MULTIPLIER: u64 = 25214903917;
const INCREMENT: u64 = 11;

/// 48-bit linear congruential generator, bit-compatible with `java.util.Random`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRandom {
    pub seed: u64,
}

impl LegacyRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MODULUS_MASK,
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MODULUS_MASK;
    }

    fn next_bits(&mut self, bits: usize) -> u64 {
        self.advance();
        self.seed >> (MODULUS_BITS - bits)
    }
}

impl Random for LegacyRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        // high word is sign-extended like Java's nextLong
        let hi = self.next_bits(32) as u32 as i32 as i64;
        let lo = self.next_bits(32) as u32 as i32 as i64;
        (hi << 32).wrapping_add(lo) as u64
    }

    fn next_u32_bound(&mut self, bound: u32) -> u32 {
        if bound > 1 << 31 {
            // 31 bits cannot cover the range; only one multiple of `bound` fits in 32 bits
            loop {
                let n = self.next_u32();
                if n < bound {
                    return n;
                }
            }
        }
        if (bound & (bound - 1)) == 0 {
            let n = self.next_bits(31);
            return ((bound as u64).wrapping_mul(n) >> 31) as u32;
        }
        let mut a;
        let mut b;
        loop {
            a = self.next_bits(31) as i64;
            b = a % bound as i64;
            if a - b + (bound as i64 - 1) < (1i64 << 31) {
                break;
            }
        }
        b as u32
    }
}
