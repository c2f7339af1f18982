//! Writer/Reader roundtrip matrix and byte-order checks for IEEE-754 values.

use ieee_fp_buffers::{print_bits, print_fields, BufferError, Reader, Writer};
use ieee_fp_codec::{encode, encode_half, Format};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_unsigned() {
    let mut w = Writer::new();
    w.u8(0xFF);
    w.u16(0x0102);
    w.u32(u32::MAX);
    w.u64(0x0102_0304_0506_0708);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0xFF));
    assert_eq!(r.u16(), Ok(0x0102));
    assert_eq!(r.u32(), Ok(u32::MAX));
    assert_eq!(r.u64(), Ok(0x0102_0304_0506_0708));
    assert_eq!(r.size(), 0);
}

#[test]
fn roundtrip_f16_known_values() {
    let values = [1.0f32, -2.0, 65504.0, 0.5, 5.9604645e-8, f32::NEG_INFINITY];
    let mut w = Writer::new();
    for value in values {
        w.f16(value);
    }
    let data = w.flush();
    assert_eq!(data.len(), 12);
    let mut r = Reader::new(&data);
    for value in values {
        assert_eq!(r.f16(), Ok(value));
    }
}

#[test]
fn roundtrip_signed_zero() {
    let mut w = Writer::new();
    w.f16(-0.0);
    w.f32(-0.0);
    w.f64(-0.0);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert!(r.f16().unwrap().is_sign_negative());
    assert!(r.f32().unwrap().is_sign_negative());
    assert!(r.f64().unwrap().is_sign_negative());
}

#[test]
fn roundtrip_nan_stays_nan() {
    let mut w = Writer::new();
    w.f16(f32::NAN);
    w.f32(-f32::NAN);
    w.f64(f64::NAN);
    let data = w.flush();
    assert_eq!(&data[..2], &[0x7E, 0x00]);
    assert_eq!(&data[2..6], &[0xFF, 0xC0, 0x00, 0x00]);
    let mut r = Reader::new(&data);
    assert!(r.f16().unwrap().is_nan());
    assert!(r.f32().unwrap().is_sign_negative());
    assert!(r.f64().unwrap().is_nan());
}

#[test]
fn roundtrip_mixed_formats() {
    let mut w = Writer::new();
    w.u8(0x42);
    w.float(Format::Half, -2.0);
    w.float(Format::Single, std::f64::consts::PI);
    w.float(Format::Double, 23.0);
    let data = w.flush();

    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0x42));
    assert_eq!(r.float(Format::Half), Ok(-2.0));
    assert_eq!(r.float(Format::Single), Ok(std::f32::consts::PI as f64));
    assert_eq!(r.float(Format::Double), Ok(23.0));
    assert_eq!(r.size(), 0);
}

// ---------------------------------------------------------------------------
// byte order
// ---------------------------------------------------------------------------

#[test]
fn bytes_are_big_endian() {
    let mut w = Writer::new();
    w.f64(23.0);
    assert_eq!(w.flush(), 0x4037_0000_0000_0000u64.to_be_bytes());
    w.f32(std::f32::consts::PI);
    assert_eq!(w.flush(), 0x4049_0FDBu32.to_be_bytes());
    w.f16(65504.0);
    assert_eq!(w.flush(), 0x7BFFu16.to_be_bytes());
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn short_reads_report_needed_and_remaining() {
    let data = [0x3F, 0x80, 0x00];
    let mut r = Reader::new(&data);
    assert_eq!(
        r.f32(),
        Err(BufferError::EndOfBuffer {
            needed: 4,
            remaining: 3
        })
    );
    assert_eq!(r.f16(), Ok(1.875));
    assert_eq!(
        r.float(Format::Double),
        Err(BufferError::EndOfBuffer {
            needed: 8,
            remaining: 1
        })
    );
    assert_eq!(r.skip(2), Err(BufferError::EndOfBuffer { needed: 2, remaining: 1 }));
}

#[test]
fn reset_rewinds_onto_new_data() {
    let first = [0x3C, 0x00];
    let second = [0xC0, 0x00];
    let mut r = Reader::new(&first);
    assert_eq!(r.f16(), Ok(1.0));
    r.reset(&second);
    assert_eq!(r.f16(), Ok(-2.0));
}

// ---------------------------------------------------------------------------
// bit strings
// ---------------------------------------------------------------------------

#[test]
fn print_bits_matches_encoded_patterns() {
    assert_eq!(print_bits(encode_half(1.0) as u64, 16), "0011110000000000");
    assert_eq!(
        print_bits(encode(Format::Single, -2.0), 32),
        "11000000000000000000000000000000"
    );
    assert_eq!(print_fields(Format::Half, 0x7E00), "0 11111 1000000000");
}

proptest! {
    #[test]
    fn writer_bytes_equal_to_be_bytes(value in any::<f64>()) {
        let mut w = Writer::new();
        w.float(Format::Double, value);
        prop_assert_eq!(w.flush(), encode(Format::Double, value).to_be_bytes().to_vec());
    }

    #[test]
    fn f16_written_then_read_is_stable(bits in any::<u16>()) {
        let mut r_data = Vec::new();
        r_data.extend_from_slice(&bits.to_be_bytes());
        let mut r = Reader::new(&r_data);
        let value = r.f16().unwrap();
        let mut w = Writer::new();
        w.f16(value);
        let data = w.flush();
        let mut r = Reader::new(&data);
        let again = r.f16().unwrap();
        if value.is_nan() {
            prop_assert!(again.is_nan());
        } else {
            prop_assert_eq!(again.to_bits(), value.to_bits());
        }
    }
}
