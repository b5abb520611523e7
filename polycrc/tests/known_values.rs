//! Published CRC check values reproduced with the raw division engine.
//!
//! The engine divides MSB-first from a zero remainder. Catalogue CRCs that
//! use an initial value fold it into the first `degree` bits of the message;
//! reflected CRCs reverse each input byte and the final remainder.

mod common;

use common::nibbles;
use polycrc::{
    CrcError, Polynomial, build_table, divide_big_table, divide_no_table, divide_small_table,
    divide_with_table, divide_word_table,
};

const CHECK: &[u8] = b"123456789";

/// XOR `init` into the first bytes of `data`, most significant byte first.
fn fold_init(data: &[u8], init: u64, degree: u32) -> Vec<u8> {
    let mut folded = data.to_vec();
    let init_bytes = (degree / 8) as usize;
    for (i, byte) in folded.iter_mut().take(init_bytes).enumerate() {
        let shift = degree - 8 * (i as u32 + 1);
        *byte ^= (init >> shift) as u8;
    }
    folded
}

fn reflect_bytes(data: &[u8]) -> Vec<u8> {
    data.iter().map(|b| b.reverse_bits()).collect()
}

#[test]
fn test_crc8_atm_three_bytes() {
    let data = [0x01u8, 0x02, 0x03];
    let table = build_table(8, 0x07u8, 8).unwrap();

    let reference = divide_no_table(8, 0x07u8, &data).unwrap();
    assert_eq!(reference, 0x48);
    assert_eq!(divide_word_table(8, 0x07u8, &data, &table).unwrap(), reference);
}

#[test]
fn test_crc8_smbus_check() {
    assert_eq!(divide_no_table(8, 0x07u8, CHECK).unwrap(), 0xF4);
}

#[test]
fn test_crc16_xmodem_check() {
    let poly = Polynomial::new(16, 0x1021u16).unwrap();
    assert_eq!(poly.divide(CHECK).unwrap(), 0x31C3);

    for width in [1, 2, 4, 8, 16] {
        let table = poly.build_table(width).unwrap();
        assert_eq!(
            poly.divide_with_table(CHECK, &table).unwrap(),
            0x31C3,
            "table width {width}"
        );
    }
}

#[test]
fn test_crc16_xmodem_over_nibbles() {
    let data = nibbles(CHECK);
    assert_eq!(divide_no_table(16, 0x1021u16, &data).unwrap(), 0x31C3);

    let table = build_table(16, 0x1021u16, 16).unwrap();
    assert_eq!(divide_big_table(16, 0x1021u16, &data, &table).unwrap(), 0x31C3);
}

#[test]
fn test_crc16_arc_check() {
    // Reflected in and out
    let raw = divide_no_table(16, 0x8005u16, &reflect_bytes(CHECK)).unwrap();
    assert_eq!(raw.reverse_bits(), 0xBB3D);
}

#[test]
fn test_crc24_openpgp_check() {
    let data = fold_init(CHECK, 0xB704CE, 24);
    let table = build_table(24, 0x864CFBu32, 8).unwrap();
    assert_eq!(divide_word_table(24, 0x864CFBu32, &data, &table).unwrap(), 0x21CF02);
}

#[test]
fn test_crc32_cksum_check() {
    // CRC-32/CKSUM without the length suffix, before its final inversion
    let raw = divide_no_table(32, 0x04C11DB7u32, CHECK).unwrap();
    assert_eq!(raw, 0x89A1897F);
    assert_eq!(raw ^ 0xFFFFFFFF, 0x765E7680);
}

#[test]
fn test_crc32_mpeg2_check() {
    let data = fold_init(CHECK, 0xFFFFFFFF, 32);
    let table = build_table(32, 0x04C11DB7u32, 4).unwrap();
    assert_eq!(divide_small_table(32, 0x04C11DB7u32, &data, &table).unwrap(), 0x0376E6E7);
}

#[test]
fn test_crc32_iso_hdlc_check() {
    // The CRC-32 of ZIP, GZIP and PNG
    let data = reflect_bytes(&fold_init(CHECK, 0xFFFFFFFF, 32));
    let table = build_table(32, 0x04C11DB7u32, 16).unwrap();
    let raw = divide_big_table(32, 0x04C11DB7u32, &data, &table).unwrap();
    assert_eq!(raw.reverse_bits() ^ 0xFFFFFFFF, 0xCBF43926);
}

#[test]
fn test_crc64_ecma_182_check() {
    let table = build_table(64, 0x42F0E1EBA9EA3693u64, 8).unwrap();
    assert_eq!(
        divide_with_table(64, 0x42F0E1EBA9EA3693u64, CHECK, &table).unwrap(),
        0x6C40DF5F0B497347
    );
}

#[test]
fn test_crc64_xz_check() {
    let data = reflect_bytes(&fold_init(CHECK, u64::MAX, 64));
    let raw = divide_no_table(64, 0x42F0E1EBA9EA3693u64, &data).unwrap();
    assert_eq!(raw.reverse_bits() ^ u64::MAX, 0x995DC9BBDF1939FA);
}

#[test]
fn test_chunk_larger_than_degree_fails() {
    let err = divide_no_table(8, 0x07u32, &[0u16; 4]).unwrap_err();
    assert!(matches!(err, CrcError::InvalidPolynomial { degree: 8, .. }));

    let err = build_table(8, 0x07u32, 9).unwrap_err();
    assert!(matches!(err, CrcError::InvalidPolynomial { degree: 8, .. }));
}
