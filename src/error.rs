use std::fmt::{Display, Formatter};

/// Errors reported by [`DynamicArray`](crate::DynamicArray) operations.
///
/// Every failing operation leaves the container exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A requested initial capacity was negative.
    InvalidArgument {
        /// The rejected capacity.
        capacity: isize,
    },

    /// An index fell outside the range accepted by the operation.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound the index was checked against.
        bound: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { capacity } => write!(f, "illegal capacity: {capacity}"),
            Self::IndexOutOfBounds { index, bound } => {
                write!(f, "index {index} out of bounds for length {bound}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type returned by fallible [`DynamicArray`](crate::DynamicArray) operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn test_display_invalid_argument() {
        let sut = Error::InvalidArgument { capacity: -1 };
        assert_eq!(sut.to_string(), "illegal capacity: -1");
    }

    #[test]
    fn test_display_index_out_of_bounds() {
        let sut = Error::IndexOutOfBounds { index: 7, bound: 3 };
        assert_eq!(sut.to_string(), "index 7 out of bounds for length 3");
    }

    #[test]
    fn test_error_is_std_error() {
        let sut: Box<dyn std::error::Error> = Box::new(Error::IndexOutOfBounds { index: 0, bound: 0 });
        assert_eq!(sut.to_string(), "index 0 out of bounds for length 0");
    }
}
