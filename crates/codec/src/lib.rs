//! IEEE-754 bit-pattern codec for binary16, binary32 and binary64.
//!
//! Converts between raw fixed-width bit patterns and native floats with a
//! single bit-manipulation algorithm: decoding repacks the pattern into the
//! native layout and reinterprets it with `from_bits`; encoding takes
//! `to_bits` and repacks into the target layout, rounding half to even.
//!
//! # Overview
//!
//! - [`decode_half`] / [`encode_half`] - binary16 to and from `f32`
//! - [`decode_single`] / [`encode_single`] - binary32 to and from `f32`
//! - [`decode_double`] / [`encode_double`] - binary64 to and from `f64`
//! - [`decode`] / [`encode`] - the same, selected by a runtime [`Format`]
//! - [`decode_exact`] / [`encode_exact`] - keeps NaN payload bits
//! - [`Fields`], [`classify`] - sign/exponent/fraction views
//!
//! # Example
//!
//! ```
//! use ieee_fp_codec::{decode_half, encode_half};
//!
//! let value = decode_half(0x3555);
//! assert_eq!(encode_half(value), 0x3555);
//!
//! // Negative zero keeps its sign bit.
//! assert_eq!(encode_half(decode_half(0x8000)), 0x8000);
//! ```

mod class;
mod convert;
mod decode;
mod encode;
mod error;
mod exact;
mod fields;
mod format;

pub use class::{classify, is_canonical, FloatClass};
pub use decode::{decode, decode_double, decode_half, decode_single};
pub use encode::{encode, encode_double, encode_half, encode_single};
pub use error::CodecError;
pub use exact::{decode_exact, encode_exact, Decoded};
pub use fields::Fields;
pub use format::Format;
