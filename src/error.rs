/// Failures reported by the fallible operations of a
/// [`BlockDeque`](crate::BlockDeque).
///
/// Every failing operation validates before it mutates, so receiving an
/// error never leaves the container in a partially updated state.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A positional access named an index past the end of the container.
    #[error("index out of bounds: the index is {index} but the length is {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// A front/back/pop style operation ran against an empty container.
    #[error("the container is empty")]
    Empty,

    /// A position belonging to another container, a position whose element
    /// has been removed, or the end position used where an element is
    /// required.
    #[error("the position does not refer to a live element of this container")]
    InvalidPosition,

    /// The structural audit found a mismatch between stored counts and the
    /// reachable chain. Well-formed operations never produce this.
    #[error("internal bookkeeping mismatch detected")]
    Corrupted,
}
