//! # bit_array
//!
//! A `no_std` compatible fixed-size packed bit array.
//!
//! Bit `i` lives in byte `i / 8` at mask `1 << (i % 8)`, so the exported
//! bytes read LSB-first.
//!
//! ```rust
//! use bit_array::PackedBitArray;
//!
//! let mut bits = PackedBitArray::new(20).expect("failed to create array");
//! bits.set_field(5, 3, 3).unwrap();
//!
//! assert_eq!(bits.to_bytes(), vec![0x60, 0x00, 0x00]);
//! assert_eq!(bits.to_hex_string(), "60:00:00");
//! ```
//!
//! ## Out-of-range access
//!
//! ```rust
//! use bit_array::{BitArrayError, PackedBitArray};
//!
//! let bits = PackedBitArray::new(20).expect("failed to create array");
//!
//! // 20 bits round up to 3 bytes: indices 20..24 are padding, 24 is out
//! assert_eq!(bits.get_bit(23), Ok(0));
//! assert!(matches!(
//!     bits.get_bit(24),
//!     Err(BitArrayError::IndexOutOfRange { index: 24, capacity: 24 })
//! ));
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitArrayError;

pub mod bit_ops;

pub mod bit_array;
pub use bit_array::PackedBitArray;

pub mod render;
pub use render::hex_octets;
