//! Fixed-size packed bit array.
//!
//! # Examples
//!
//! ```rust
//! use bit_array::PackedBitArray;
//!
//! let mut bits = PackedBitArray::new(20).expect("failed to create array");
//! bits.set_field(5, 3, 3).unwrap();
//!
//! assert_eq!(bits.get_bit(5), Ok(1));
//! assert_eq!(bits.get_bit(6), Ok(1));
//! assert_eq!(bits.get_bit(7), Ok(0));
//! assert_eq!(bits.to_bytes(), vec![0x60, 0x00, 0x00]);
//! ```
//!
//! ## Wrapping received bytes
//!
//! ```rust
//! use bit_array::PackedBitArray;
//!
//! let message = [0x00, 0x10, 0x60];
//! let bits = PackedBitArray::from_bytes(&message, 24).unwrap();
//! assert!(bits.is_set(12).unwrap());
//! assert_eq!(bits.get_field(21, 2), Ok(0b11));
//! ```

use crate::BitArrayError;
use crate::bit_ops;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

type Result<T> = core::result::Result<T, BitArrayError>;

/// A fixed number of bits packed LSB-first into a byte buffer.
///
/// The buffer holds `ceil(bit_count / 8)` bytes for the whole lifetime of the
/// array. Indices are checked against the allocated capacity
/// (`byte_count * 8`), so the padding bits past `bit_count` in the last byte
/// are addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackedBitArray {
    bytes: Vec<u8>,
    bit_count: usize,
}

#[inline(always)]
fn validate_bit_count(bit_count: usize) -> Result<()> {
    if bit_count == 0 {
        Err(BitArrayError::InvalidArgument("bit count must be positive"))
    } else {
        Ok(())
    }
}

impl PackedBitArray {
    /// Creates an all-zero array of `bit_count` bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if `bit_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::PackedBitArray;
    ///
    /// let bits = PackedBitArray::new(20).expect("failed to create array");
    /// assert_eq!(bits.byte_count(), 3);
    /// assert_eq!(bits.capacity(), 24);
    /// ```
    pub fn new(bit_count: usize) -> Result<Self> {
        validate_bit_count(bit_count)?;
        let byte_count = bit_count.div_ceil(8);
        log::debug!("allocating {byte_count} bytes for {bit_count} bits");
        Ok(Self {
            bytes: vec![0u8; byte_count],
            bit_count,
        })
    }

    /// Wraps a copy of `bytes` as an array of `bit_count` bits.
    ///
    /// `bytes` must be exactly `ceil(bit_count / 8)` long.
    pub fn from_bytes(bytes: &[u8], bit_count: usize) -> Result<Self> {
        validate_bit_count(bit_count)?;
        let expected = bit_count.div_ceil(8);
        if bytes.len() != expected {
            return Err(BitArrayError::LengthMismatch {
                expected,
                found: bytes.len(),
            });
        }
        log::debug!("importing {expected} bytes as {bit_count} bits");
        Ok(Self {
            bytes: bytes.to_vec(),
            bit_count,
        })
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn byte_count(&self) -> usize {
        self.bytes.len()
    }

    /// Number of addressable bits, including the padding of the last byte.
    pub fn capacity(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Returns bit `index` as `0` or `1`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfRange`] if `index / 8 >= byte_count()`.
    pub fn get_bit(&self, index: usize) -> Result<u8> {
        bit_ops::get_bit(&self.bytes, index)
    }

    pub fn is_set(&self, index: usize) -> Result<bool> {
        Ok(self.get_bit(index)? == 1)
    }

    /// Sets (`true`) or clears (`false`) bit `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::{BitArrayError, PackedBitArray};
    ///
    /// let mut bits = PackedBitArray::new(12).unwrap();
    /// bits.set_bit(9, true).unwrap();
    /// assert_eq!(bits.as_bytes(), &[0x00, 0x02]);
    ///
    /// // 12 bits occupy two bytes, so index 16 is past the buffer
    /// assert_eq!(
    ///     bits.set_bit(16, true),
    ///     Err(BitArrayError::IndexOutOfRange { index: 16, capacity: 16 })
    /// );
    /// ```
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        bit_ops::set_bit(&mut self.bytes, index, value)
    }

    /// Like [`set_bit`](Self::set_bit), treating any nonzero `value` as 1.
    pub fn set_bit_value(&mut self, index: usize, value: u64) -> Result<()> {
        self.set_bit(index, value != 0)
    }

    pub fn clear_bit(&mut self, index: usize) -> Result<()> {
        self.set_bit(index, false)
    }

    pub fn toggle_bit(&mut self, index: usize) -> Result<()> {
        bit_ops::toggle_bit(&mut self.bytes, index)
    }

    /// Writes the low `count` bits of `value` to `first..first + count`,
    /// bit 0 of `value` landing on index `first`.
    ///
    /// `count == 0` changes nothing. Bits are written in ascending order; if
    /// an index runs past the buffer the error is returned with the lower
    /// bits already written. A field running past `usize::MAX` reports
    /// `index == usize::MAX`.
    pub fn set_field(&mut self, first: usize, count: usize, value: u64) -> Result<()> {
        log::trace!("set_field first={first} count={count} value={value:#x}");
        bit_ops::set_bits(&mut self.bytes, first, count, value)
    }

    /// Reads `first..first + count` back into an integer, LSB-first.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::FieldTooWide`] if `count > 64`, or
    /// [`BitArrayError::IndexOutOfRange`] if the field runs past the buffer.
    pub fn get_field(&self, first: usize, count: usize) -> Result<u64> {
        bit_ops::get_bits(&self.bytes, first, count)
    }

    /// Number of set bits among the first `bit_count` bits.
    pub fn count_ones(&self) -> usize {
        self.iter().filter(|&bit| bit == 1).count()
    }

    /// Zeroes every byte; the size is unchanged.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copies out the raw buffer: byte `k` holds bits `8k..8k + 7`.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            index: 0,
        }
    }
}

/// Iterator over the bit values `0..bit_count` of a [`PackedBitArray`].
pub struct Iter<'a> {
    array: &'a PackedBitArray,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u8;
    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.array.bit_count {
            return None;
        }
        let bit = self.array.get_bit(self.index).ok();
        self.index += 1;
        bit
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.bit_count - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a PackedBitArray {
    type Item = u8;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
