use crate::sequence::Sequence;

/// Reverse the order of elements in `seq`, in place.
///
/// Element at index `i` ends up at `len - 1 - i`. With an odd length the middle element stays
/// where it was.
pub fn reverse<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    let (mut lo, mut hi) = (0, len - 1);
    while lo < hi {
        seq.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }
}

/// Reverse an owned sequence and give it back.
pub fn reversed<S: Sequence>(mut seq: S) -> S {
    reverse(&mut seq);
    seq
}

#[cfg(test)]
mod test {
    use crate::random::{reproducible, RngExt};
    use crate::reverse::{reverse, reversed};
    use smallvec::{smallvec, SmallVec};
    use std::collections::VecDeque;

    #[test]
    fn reverse_even_and_back() {
        let mut values = vec![1, 2, 3, 4];
        reverse(&mut values);
        assert_eq!(values, vec![4, 3, 2, 1]);
        reverse(&mut values);
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn reverse_odd_keeps_middle() {
        let mut values = ["a", "b", "mid", "d", "e"];
        reverse(&mut values);
        assert_eq!(values, ["e", "d", "mid", "b", "a"]);
    }

    #[test]
    fn reverse_empty_and_single() {
        let mut empty: Vec<u8> = Vec::new();
        reverse(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        reverse(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn reverse_mirrors_every_index() {
        let mut rng = reproducible(99);
        for len in 0..50usize {
            let mut original: Vec<usize> = (0..len).collect();
            rng.shuffle(&mut original);

            let mut values: VecDeque<_> = original.iter().copied().collect();
            reverse(&mut values);
            assert_eq!(values.len(), len);
            for (i, v) in values.iter().enumerate() {
                assert_eq!(*v, original[len - 1 - i]);
            }

            reverse(&mut values);
            assert!(values.iter().eq(original.iter()));
        }
    }

    #[test]
    fn reverse_slices_and_inline_vectors() {
        let mut values = vec![1, 2, 3, 4, 5, 6];
        reverse(&mut values[1..4]);
        assert_eq!(values, vec![1, 4, 3, 2, 5, 6]);

        let inline: SmallVec<[char; 3]> = smallvec!['p', 'i', 'c', 'k'];
        assert_eq!(reversed(inline).as_slice(), &['k', 'c', 'i', 'p']);
    }
}
