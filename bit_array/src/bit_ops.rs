//! Bit-level primitives over plain byte slices.
//!
//! Bit `i` lives in byte `i / 8` under mask `1 << (i % 8)`. Every function
//! checks the byte index against the slice length and reports
//! [`BitArrayError::IndexOutOfRange`] instead of panicking.

use crate::BitArrayError;

type Result<T> = core::result::Result<T, BitArrayError>;

#[inline(always)]
fn locate(len: usize, index: usize) -> Result<(usize, u8)> {
    let byte = index / 8;
    if byte >= len {
        return Err(BitArrayError::IndexOutOfRange {
            index,
            capacity: len * 8,
        });
    }
    Ok((byte, 1 << (index % 8)))
}

#[inline]
pub fn get_bit(slice: &[u8], index: usize) -> Result<u8> {
    let (byte, _) = locate(slice.len(), index)?;
    Ok((slice[byte] >> (index % 8)) & 1)
}

#[inline]
pub fn set_bit(slice: &mut [u8], index: usize, value: bool) -> Result<()> {
    let (byte, mask) = locate(slice.len(), index)?;
    if value {
        slice[byte] |= mask;
    } else {
        slice[byte] &= !mask;
    }
    Ok(())
}

#[inline]
pub fn toggle_bit(slice: &mut [u8], index: usize) -> Result<()> {
    let (byte, mask) = locate(slice.len(), index)?;
    slice[byte] ^= mask;
    Ok(())
}

/// Absolute position of bit `i` of a field starting at `bit_offset`.
///
/// Saturates at `usize::MAX`, which never falls inside a slice, so a field
/// running past the end of the address space reports
/// [`BitArrayError::IndexOutOfRange`] with `index == usize::MAX`.
#[inline(always)]
fn field_pos(bit_offset: usize, i: usize) -> usize {
    bit_offset.saturating_add(i)
}

/// Writes the low `bit_width` bits of `value` starting at `bit_offset`,
/// least-significant bit first.
///
/// Bits are applied one at a time, so an out-of-range position leaves the
/// lower-order bits already written.
pub fn set_bits(slice: &mut [u8], bit_offset: usize, bit_width: usize, value: u64) -> Result<()> {
    for i in 0..bit_width {
        let pos = field_pos(bit_offset, i);
        // positions past the width of `value` read as zero
        let bit = i < 64 && (value >> i) & 1 == 1;
        set_bit(slice, pos, bit)?;
    }
    Ok(())
}

/// Reads `bit_width` bits starting at `bit_offset` into the low bits of the
/// result, least-significant bit first.
pub fn get_bits(slice: &[u8], bit_offset: usize, bit_width: usize) -> Result<u64> {
    if bit_width > 64 {
        return Err(BitArrayError::FieldTooWide(bit_width));
    }

    let mut value = 0u64;
    for i in 0..bit_width {
        let pos = field_pos(bit_offset, i);
        value |= (get_bit(slice, pos)? as u64) << i;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_bits() {
        let mut buf = [0u8; 8];
        set_bits(&mut buf, 3, 5, 0b10101).unwrap();
        assert_eq!(get_bits(&buf, 3, 5).unwrap(), 0b10101);
    }

    #[test]
    fn lsb_first_within_byte() {
        let mut buf = [0u8; 2];
        set_bit(&mut buf, 0, true).unwrap();
        set_bit(&mut buf, 9, true).unwrap();
        assert_eq!(buf, [0x01, 0x02]);
    }

    #[test]
    fn field_straddles_byte_boundary() {
        let mut buf = [0u8; 2];
        set_bits(&mut buf, 6, 4, 0b1111).unwrap();
        assert_eq!(buf, [0xC0, 0x03]);
        assert_eq!(get_bits(&buf, 6, 4).unwrap(), 0b1111);
    }

    #[test]
    fn out_of_range_after_partial_write() {
        let mut buf = [0u8; 1];
        let err = set_bits(&mut buf, 6, 4, 0b1111).unwrap_err();
        assert_eq!(
            err,
            BitArrayError::IndexOutOfRange {
                index: 8,
                capacity: 8
            }
        );
        // bits 6 and 7 landed before the failure
        assert_eq!(buf, [0xC0]);
    }

    #[test]
    fn wide_field_rejected() {
        let buf = [0u8; 16];
        assert_eq!(
            get_bits(&buf, 0, 65),
            Err(BitArrayError::FieldTooWide(65))
        );
    }

    #[test]
    fn field_past_address_space_reports_saturated_index() {
        let mut buf = [0u8; 4];
        let overflow = BitArrayError::IndexOutOfRange {
            index: usize::MAX,
            capacity: 32,
        };
        assert_eq!(field_pos(usize::MAX - 1, 3), usize::MAX);
        assert_eq!(set_bits(&mut buf, usize::MAX, 4, 0xF), Err(overflow.clone()));
        assert_eq!(get_bits(&buf, usize::MAX, 2), Err(overflow));
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn toggle_flips_single_bit() {
        let mut buf = [0b0000_0100u8];
        toggle_bit(&mut buf, 2).unwrap();
        toggle_bit(&mut buf, 3).unwrap();
        assert_eq!(buf, [0b0000_1000]);
    }
}
