#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitArrayError {
    #[cfg_attr(
        feature = "std",
        error("Bit index {index} is out of range for capacity {capacity}")
    )]
    IndexOutOfRange { index: usize, capacity: usize },

    #[cfg_attr(feature = "std", error("Invalid argument: {0}"))]
    InvalidArgument(&'static str),

    #[cfg_attr(feature = "std", error("Field width {0} exceeds 64 bits"))]
    FieldTooWide(usize),

    #[cfg_attr(
        feature = "std",
        error("Byte length mismatch: expected {expected}, found {found}")
    )]
    LengthMismatch { expected: usize, found: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::IndexOutOfRange { index, capacity } => {
                write!(
                    f,
                    "Bit index {} is out of range for capacity {}",
                    index, capacity
                )
            }
            BitArrayError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BitArrayError::FieldTooWide(n) => write!(f, "Field width {} exceeds 64 bits", n),
            BitArrayError::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "Byte length mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}
