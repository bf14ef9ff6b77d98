//! Human-readable forms of a bit array.
//!
//! # Examples
//!
//! ```rust
//! use bit_array::PackedBitArray;
//!
//! let mut bits = PackedBitArray::new(4).expect("failed to create array");
//! bits.set_field(1, 2, 0b11).unwrap();
//!
//! assert_eq!(bits.to_string(), "[0,1,1,0]");
//! assert_eq!(bits.to_hex_string(), "06");
//! ```

use core::fmt::{self, Write};

use crate::PackedBitArray;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

/// Formats `bytes` as colon-separated two-digit uppercase hex octets.
pub fn hex_octets(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}

impl PackedBitArray {
    pub fn to_hex_string(&self) -> String {
        hex_octets(self.as_bytes())
    }
}

/// Lists the value of every bit in `0..bit_count`.
impl fmt::Display for PackedBitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, bit) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{bit}")?;
        }
        f.write_char(']')
    }
}
