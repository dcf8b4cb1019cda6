pub mod convert;
pub mod format;
pub mod logic;
pub mod ops;
pub mod random;
pub mod shift;

#[cfg(test)]
mod tests;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 固定長のBit列を値として扱う構造体
///
/// 1bitを1つのboolとして保持し、機械語へのパッキングは行わない。
/// 長さは生成時に確定し、以後変わらない。全ての演算は受け手を変更せず、
/// 新しいBitVecを返す。
///
/// `PartialOrd` / `Ord` はBTreeコレクションへの格納用であり、
/// ビット列の数値的な大小を意味しない。
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitVec(pub(crate) Vec<bool>);

impl Default for BitVec {
    fn default() -> Self {
        Self::new()
    }
}

impl BitVec {
    /// 空の BitVec を生成する
    pub fn new() -> Self {
        BitVec(Vec::new())
    }

    /// 全ビットが0の BitVec を生成する
    ///
    /// # 引数
    /// * `len` - ビット数
    pub fn zeros(len: usize) -> Self {
        BitVec(vec![false; len])
    }

    /// 全ビットが1の BitVec を生成する
    ///
    /// # 引数
    /// * `len` - ビット数
    pub fn ones(len: usize) -> Self {
        BitVec(vec![true; len])
    }

    /// Vec<bool> から BitVec を生成する
    ///
    /// # 引数
    /// * `v` - boolのベクトル
    pub fn from_vec(v: Vec<bool>) -> Self {
        BitVec(v)
    }

    /// スライスから BitVec を生成する
    ///
    /// 内容は常にコピーされ、呼び出し元のバッファとは独立する。
    ///
    /// # 引数
    /// * `s` - boolのスライス
    pub fn from_slice(s: &[bool]) -> Self {
        BitVec(s.to_vec())
    }

    /// 指定位置のビットを読み出す
    ///
    /// # 引数
    /// * `index` - 読み出す位置（0始まり）
    ///
    /// # エラー
    /// `index` が長さ以上の場合は `Error::IndexOutOfRange` を返す
    pub fn get(&self, index: usize) -> Result<bool, Error> {
        self.0.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            len: self.0.len(),
        })
    }

    ///ビット数を返す
    pub fn len(&self) -> usize {
        self.0.len()
    }

    ///長さが0かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
