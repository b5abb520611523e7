mod common;

use common::nibbles;
use polycrc::{
    build_table, divide_big_table, divide_no_table, divide_small_table, divide_word_table,
};
use proptest::prelude::*;

/// A degree that fits a u64 register and a generator truncated to it.
fn polynomial(min_degree: u32) -> impl Strategy<Value = (u32, u64)> {
    (min_degree..=64u32, any::<u64>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn word_table_matches_reference(
        (degree, generator) in polynomial(8),
        data in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        let table = build_table(degree, generator, 8).unwrap();
        prop_assert_eq!(
            divide_word_table(degree, generator, &data, &table).unwrap(),
            divide_no_table(degree, generator, &data).unwrap()
        );
    }

    #[test]
    fn small_table_matches_reference(
        (degree, generator) in polynomial(8),
        block_size in prop::sample::select(vec![1u32, 2, 4]),
        data in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        let table = build_table(degree, generator, block_size).unwrap();
        prop_assert_eq!(
            divide_small_table(degree, generator, &data, &table).unwrap(),
            divide_no_table(degree, generator, &data).unwrap()
        );
    }

    #[test]
    fn big_table_matches_reference_for_any_length(
        (degree, generator) in polynomial(12),
        group in 1u32..=3,
        data in proptest::collection::vec(any::<u8>(), 0..=64),
        odd_tail in any::<bool>(),
    ) {
        let mut words = nibbles(&data);
        if odd_tail {
            words.pop();
        }
        let table = build_table(degree, generator, 4 * group).unwrap();
        prop_assert_eq!(
            divide_big_table(degree, generator, &words, &table).unwrap(),
            divide_no_table(degree, generator, &words).unwrap()
        );
    }

    #[test]
    fn remainder_fits_degree(
        (degree, generator) in polynomial(8),
        data in proptest::collection::vec(any::<u8>(), 0..=128),
    ) {
        let crc = divide_no_table(degree, generator, &data).unwrap();
        if degree < 64 {
            prop_assert_eq!(crc >> degree, 0);
        }
    }

    #[test]
    fn appending_zero_words_shifts_remainder(
        (degree, generator) in polynomial(8),
        data in proptest::collection::vec(any::<u8>(), 1..=64),
    ) {
        // Appending a zero byte multiplies the remainder by x^8 mod G.
        let crc = divide_no_table(degree, generator, &data).unwrap();
        let mut extended = data.clone();
        extended.push(0);
        let table = build_table(degree, generator, 8).unwrap();
        let index = (crc >> (degree - 8)) as usize;
        let mask = if degree == 64 { u64::MAX } else { (1u64 << degree) - 1 };
        let expected = ((crc << 8) ^ table[index]) & mask;
        prop_assert_eq!(divide_no_table(degree, generator, &extended).unwrap(), expected);
    }
}
