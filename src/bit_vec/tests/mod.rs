use crate::bit_vec::BitVec;

#[cfg(any(test))]
use proptest::prelude::Strategy;

pub mod format;

///要素ごとの論理演算をVec<bool>の上で直接計算するオラクル
/// テスト以外では使用しないため、ここに定義
#[cfg(any(test))]
pub fn elementwise(a: &BitVec, b: &BitVec, op: impl Fn(bool, bool) -> bool) -> Vec<bool> {
    a.iter().zip(b.iter()).map(|(x, y)| op(x, y)).collect()
}

///BitVec Aを生成する
#[cfg(any(test))]
pub fn vec_a() -> BitVec {
    BitVec::from_slice(&[true, false, true, true])
}

///BitVec Bを生成する（Aと同じ長さ）
#[cfg(any(test))]
pub fn vec_b() -> BitVec {
    BitVec::from_slice(&[true, true, false, true])
}

///BitVec Cを生成する（Aと同じ長さ）
#[cfg(any(test))]
pub fn vec_c() -> BitVec {
    BitVec::from_slice(&[false, true, true, false])
}

///テストのために、同じ長さのBitVecの組を生成する関数
#[cfg(any(test))]
pub fn arb_equal_len_pair(max_len: usize) -> impl Strategy<Value = (BitVec, BitVec)> {
    (0..=max_len).prop_flat_map(|len| (BitVec::arb_at(len), BitVec::arb_at(len)))
}
