use crate::random::IndexSource;
use crate::sequence::Sequence;
use crate::{Error, Result};
use rand::Rng;

/// Shuffle `seq` in place, picking each of its `n!` orderings with equal probability.
///
/// This is the backward Fisher-Yates shuffle: positions are fixed from the back, each one
/// swapped with a partner drawn uniformly from the positions not fixed yet (itself included).
/// Consumes exactly `n - 1` draws from `rng` for sequences of two or more elements.
pub fn shuffle<S, R>(seq: &mut S, rng: &mut R)
where
    S: Sequence + ?Sized,
    R: Rng + ?Sized,
{
    for i in (1..seq.len()).rev() {
        let j = rng.gen_range(0..=i);
        seq.swap(i, j);
    }
}

/// Same as [shuffle], but draws through an [IndexSource] which is allowed to fail.
///
/// A failed draw stops the shuffle and is returned as is. Swaps made before it are kept, so
/// `seq` still holds all of its original elements, only less thoroughly mixed.
pub fn try_shuffle<S, R>(seq: &mut S, source: &mut R) -> Result<()>
where
    S: Sequence + ?Sized,
    R: IndexSource + ?Sized,
{
    let len = seq.len();
    for i in (1..len).rev() {
        match draw(source, i + 1) {
            Ok(j) => seq.swap(i, j),
            Err(cause) => {
                let swapped = len - 1 - i;
                log::debug!("shuffle of {len} elements interrupted after {swapped} swaps: {cause}");
                return Err(cause);
            }
        }
    }
    Ok(())
}

/// Shuffle an owned sequence and give it back.
pub fn shuffled<S, R>(mut seq: S, rng: &mut R) -> S
where
    S: Sequence,
    R: Rng + ?Sized,
{
    shuffle(&mut seq, rng);
    seq
}

#[inline]
fn draw<R: IndexSource + ?Sized>(source: &mut R, bound: usize) -> Result<usize> {
    let index = source.try_index(bound)?;
    if index < bound {
        Ok(index)
    } else {
        Err(Error::OutOfRange { index, bound })
    }
}
