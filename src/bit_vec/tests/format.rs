#[cfg(test)]
mod tests {
    use crate::bit_vec::BitVec;
    use crate::bit_vec::tests::vec_a;
    use proptest::proptest;
    use roaring::RoaringTreemap;

    #[test]
    fn test_to_string() {
        assert_eq!(vec_a().to_string(), "1011");
    }

    #[test]
    fn zeros_and_ones() {
        assert_eq!(BitVec::zeros(6).to_string(), "000000");
        assert_eq!(BitVec::ones(3).to_string(), "111");
    }

    ///空のBitVecは空文字列になる
    #[test]
    fn empty_is_empty_string() {
        assert_eq!(BitVec::new().to_string(), "");
    }

    ///インデックスiのビットが文字列のi番目の文字に対応する
    #[test]
    fn set_bit_appears_at_its_index() {
        let support = RoaringTreemap::from_iter([2u64]);
        let a = BitVec::from_support(5, &support).unwrap();

        assert_eq!(a.to_string(), "00100");
    }

    proptest! {
        #[test]
        fn random_test_format(a in BitVec::arb(256)) {
            let text = a.to_string();

            assert_eq!(text.len(), a.len());
            for (i, c) in text.chars().enumerate() {
                let expected = if a.get(i).unwrap() { '1' } else { '0' };
                assert_eq!(c, expected);
            }
        }
    }
}
