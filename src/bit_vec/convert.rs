use roaring::RoaringTreemap;

use crate::bit_vec::BitVec;
use crate::error::Error;

impl BitVec {
    /// 各ビットを値コピーした Vec<bool> を返す
    ///
    /// 返されたバッファはこのBitVecと独立しており、書き換えても影響しない。
    pub fn to_vec(&self) -> Vec<bool> {
        self.0.clone()
    }

    ///ビットをインデックス順に列挙するイテレータを返す
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, bool>> {
        self.0.iter().copied()
    }

    /// 1が立っているインデックスの集合を RoaringTreemap として返す
    pub fn support(&self) -> RoaringTreemap {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i as u64))
            .collect()
    }

    /// 1を立てるインデックスの集合から BitVec を生成する
    ///
    /// # 引数
    /// * `len` - 生成するビット数
    /// * `support` - 1を立てるインデックスの集合
    ///
    /// # エラー
    /// `len` 以上のインデックスが含まれる場合は `Error::IndexOutOfRange` を返す
    pub fn from_support(len: usize, support: &RoaringTreemap) -> Result<BitVec, Error> {
        if let Some(max) = support.max()
            && max >= len as u64
        {
            return Err(Error::IndexOutOfRange {
                index: max as usize,
                len,
            });
        }
        let mut bits = vec![false; len];
        for index in support {
            bits[index as usize] = true;
        }
        Ok(BitVec(bits))
    }
}

impl From<Vec<bool>> for BitVec {
    fn from(v: Vec<bool>) -> Self {
        BitVec::from_vec(v)
    }
}

impl From<&[bool]> for BitVec {
    fn from(s: &[bool]) -> Self {
        BitVec::from_slice(s)
    }
}

impl<const N: usize> From<[bool; N]> for BitVec {
    fn from(bits: [bool; N]) -> Self {
        BitVec(bits.to_vec())
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitVec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BitVec {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl IntoIterator for BitVec {
    type Item = bool;
    type IntoIter = std::vec::IntoIter<bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
