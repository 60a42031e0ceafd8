pub mod prelude {
    pub use super::{
        config::{Config, ConfigBuilder},
        deque::Deque,
        End, Error,
    };

    pub type IResult<T> = Result<T, Error>;
}

mod config;
mod deque;
mod ds;
mod iter;

pub use config::{Config, ConfigBuilder, ConfigInner};
pub use deque::Deque;
pub use iter::{IntoIter, Iter};
pub use prelude::IResult;

use serde::{Deserialize, Serialize};

/// One of the two ends of a deque.
///
/// Every head/tail operation is the same algorithm parameterized by an
/// `End`; links and anchors are indexed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    Head,
    Tail,
}

impl End {
    /// The other end.
    pub fn opposite(self) -> Self {
        match self {
            End::Head => End::Tail,
            End::Tail => End::Head,
        }
    }

    #[inline]
    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index {index} out of bounds for deque of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("corrupted chain: {0}")]
    Corrupted(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_opposite() {
        assert_eq!(End::Head.opposite(), End::Tail);
        assert_eq!(End::Tail.opposite(), End::Head);
        assert_eq!(End::Head.opposite().opposite(), End::Head);
    }

    #[test]
    fn test_end_serde() {
        for &end in [End::Head, End::Tail].iter() {
            let bytes = bincode::serialize(&end).unwrap();
            let decoded: End = bincode::deserialize(&bytes).unwrap();
            assert_eq!(decoded, end);
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of bounds for deque of length 2");
        assert_eq!(
            Error::Corrupted("dangling link").to_string(),
            "corrupted chain: dangling link"
        );
    }
}
