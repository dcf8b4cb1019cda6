#[cfg(any(test))]
use proptest::prelude::*;

#[cfg(any(test, feature = "random"))]
use rand::Rng;

use crate::bit_vec::BitVec;

impl BitVec {
    /// 指定した長さのランダムな [`BitVec`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random(len: usize) -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng, len)
    }

    /// 外部の乱数生成器を使用してランダムな [`BitVec`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R, len: usize) -> Self {
        BitVec((0..len).map(|_| rng.random()).collect())
    }

    #[cfg(any(test))]
    pub fn arb(max_len: usize) -> impl Strategy<Value = Self> {
        proptest::collection::vec(any::<bool>(), 0..=max_len).prop_map(BitVec)
    }

    #[cfg(any(test))]
    pub fn arb_at(len: usize) -> impl Strategy<Value = Self> {
        proptest::collection::vec(any::<bool>(), len).prop_map(BitVec)
    }
}
