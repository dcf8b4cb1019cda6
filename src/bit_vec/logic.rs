use crate::bit_vec::BitVec;
use crate::error::Error;

impl BitVec {
    ///2つのBitVecの長さが一致することを確認する
    fn check_len(&self, other: &Self) -> Result<(), Error> {
        if self.0.len() == other.0.len() {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                left: self.0.len(),
                right: other.0.len(),
            })
        }
    }

    /// ビットごとのANDを計算し、新しいBitVecとして返す
    ///
    /// # 引数
    /// * `other` - 同じ長さのBitVec
    ///
    /// # エラー
    /// 長さが一致しない場合は `Error::LengthMismatch` を返す
    pub fn and(&self, other: &Self) -> Result<BitVec, Error> {
        self.check_len(other)?;
        Ok(BitVec(
            self.0.iter().zip(&other.0).map(|(a, b)| *a & *b).collect(),
        ))
    }

    /// ビットごとのORを計算し、新しいBitVecとして返す
    ///
    /// # 引数
    /// * `other` - 同じ長さのBitVec
    ///
    /// # エラー
    /// 長さが一致しない場合は `Error::LengthMismatch` を返す
    pub fn or(&self, other: &Self) -> Result<BitVec, Error> {
        self.check_len(other)?;
        Ok(BitVec(
            self.0.iter().zip(&other.0).map(|(a, b)| *a | *b).collect(),
        ))
    }

    /// ビットごとのXORを計算し、新しいBitVecとして返す
    ///
    /// # 引数
    /// * `other` - 同じ長さのBitVec
    ///
    /// # エラー
    /// 長さが一致しない場合は `Error::LengthMismatch` を返す
    pub fn xor(&self, other: &Self) -> Result<BitVec, Error> {
        self.check_len(other)?;
        Ok(BitVec(
            self.0.iter().zip(&other.0).map(|(a, b)| *a ^ *b).collect(),
        ))
    }

    /// 全ビットを反転した新しいBitVecを返す
    pub fn negate(&self) -> BitVec {
        BitVec(self.0.iter().map(|&b| !b).collect())
    }
}
