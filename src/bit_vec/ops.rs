use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::bit_vec::BitVec;
use crate::error::Error;

///演算子糖衣のために、長さ不一致のエラーをパニックへ変換する
fn unwrap_or_panic(result: Result<BitVec, Error>) -> BitVec {
    match result {
        Ok(bit_vec) => bit_vec,
        Err(e) => panic!("{e}"),
    }
}

/// `&` 演算子。`and` と同じ計算を行う
///
/// # Panics
/// 2つのBitVecの長さが一致しない場合
impl BitAnd for BitVec {
    type Output = BitVec;

    fn bitand(self, rhs: BitVec) -> BitVec {
        unwrap_or_panic(self.and(&rhs))
    }
}

impl BitAnd for &BitVec {
    type Output = BitVec;

    fn bitand(self, rhs: &BitVec) -> BitVec {
        unwrap_or_panic(self.and(rhs))
    }
}

/// `|` 演算子。`or` と同じ計算を行う
///
/// # Panics
/// 2つのBitVecの長さが一致しない場合
impl BitOr for BitVec {
    type Output = BitVec;

    fn bitor(self, rhs: BitVec) -> BitVec {
        unwrap_or_panic(self.or(&rhs))
    }
}

impl BitOr for &BitVec {
    type Output = BitVec;

    fn bitor(self, rhs: &BitVec) -> BitVec {
        unwrap_or_panic(self.or(rhs))
    }
}

/// `^` 演算子。`xor` と同じ計算を行う
///
/// # Panics
/// 2つのBitVecの長さが一致しない場合
impl BitXor for BitVec {
    type Output = BitVec;

    fn bitxor(self, rhs: BitVec) -> BitVec {
        unwrap_or_panic(self.xor(&rhs))
    }
}

impl BitXor for &BitVec {
    type Output = BitVec;

    fn bitxor(self, rhs: &BitVec) -> BitVec {
        unwrap_or_panic(self.xor(rhs))
    }
}

/// `!` 演算子。`negate` と同じ計算を行う
impl Not for BitVec {
    type Output = BitVec;

    fn not(self) -> BitVec {
        self.negate()
    }
}

impl Not for &BitVec {
    type Output = BitVec;

    fn not(self) -> BitVec {
        self.negate()
    }
}

/// `<<` 演算子。`lshift` と同じ計算を行う
impl Shl<usize> for BitVec {
    type Output = BitVec;

    fn shl(self, amount: usize) -> BitVec {
        self.lshift(amount)
    }
}

impl Shl<usize> for &BitVec {
    type Output = BitVec;

    fn shl(self, amount: usize) -> BitVec {
        self.lshift(amount)
    }
}

/// `>>` 演算子。`rshift` と同じ計算を行う
impl Shr<usize> for BitVec {
    type Output = BitVec;

    fn shr(self, amount: usize) -> BitVec {
        self.rshift(amount)
    }
}

impl Shr<usize> for &BitVec {
    type Output = BitVec;

    fn shr(self, amount: usize) -> BitVec {
        self.rshift(amount)
    }
}
