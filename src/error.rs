use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The element at `index` is not comparable to itself, e.g. a NaN float, or to one of the
    /// other elements. The input is left unchanged.
    #[error("element at index {index} is not comparable, the input has no total order")]
    Incomparable { index: usize },

    /// The Jacobsthal term following the last one below `bound` does not fit in a `usize`.
    #[error("jacobsthal sequence overflows usize before reaching {bound}")]
    JacobsthalOverflow { bound: usize },
}
