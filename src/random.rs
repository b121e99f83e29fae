use crate::sequence::Sequence;
use crate::{Error, Result};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of uniformly distributed indexes.
///
/// Shuffling only ever asks one question of its randomness: "give me an index below `bound`".
/// Every [RngCore] answers it, and tests can answer it with a fixed script.
pub trait IndexSource {
    /// Returns an index drawn uniformly from `0..bound`. `bound` must be positive.
    fn try_index(&mut self, bound: usize) -> Result<usize>;
}

impl<R> IndexSource for R
where
    R: RngCore + ?Sized,
{
    fn try_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(Error::EmptyRange);
        }
        // widening multiply: the high word is the index, low words below 2^64 mod bound
        // belong to an incomplete last bucket and are drawn again
        let range = bound as u64;
        let threshold = range.wrapping_neg() % range;
        loop {
            let mut bytes = [0u8; 8];
            self.try_fill_bytes(&mut bytes)?;
            let wide = u64::from_le_bytes(bytes) as u128 * range as u128;
            if (wide as u64) >= threshold {
                return Ok((wide >> 64) as usize);
            }
        }
    }
}

pub trait RngExt: RngCore {
    /// Shuffle `seq` in place, see [crate::shuffle()].
    fn shuffle<S>(&mut self, seq: &mut S)
    where
        S: Sequence + ?Sized,
    {
        crate::shuffle::shuffle(seq, self)
    }

    /// Shuffle `seq` in place, surfacing generator failures, see [crate::try_shuffle].
    fn try_shuffle<S>(&mut self, seq: &mut S) -> Result<()>
    where
        S: Sequence + ?Sized,
    {
        crate::shuffle::try_shuffle(seq, self)
    }
}

impl<T> RngExt for T where T: RngCore + ?Sized {}

/// Seeded generator producing the same permutations for the same `seed` on every platform.
pub fn reproducible(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
