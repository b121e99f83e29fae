mod random;
mod reverse;
mod sequence;
mod shuffle;

pub use random::{reproducible, IndexSource, RngExt};
pub use reverse::{reverse, reversed};
pub use sequence::Sequence;
pub use shuffle::{shuffle, shuffled, try_shuffle};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying random generator failed to produce data.
    #[error("random source failed: {0}")]
    Random(#[from] rand::Error),
    /// Index source answered with an index outside of requested range.
    #[error("index source returned {index} for bound {bound}")]
    OutOfRange { index: usize, bound: usize },
    #[error("cannot draw an index from an empty range")]
    EmptyRange,
}

pub type Result<T> = std::result::Result<T, Error>;
