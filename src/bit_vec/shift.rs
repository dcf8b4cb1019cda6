use crate::bit_vec::BitVec;

impl BitVec {
    /// ビットをインデックス0の方向へ `amount` だけ論理シフトする
    ///
    /// 元のインデックスiのビットは、`i >= amount` のとき新しいインデックス
    /// `i - amount` に置かれる。インデックス0を越えて溢れたビットは失われ、
    /// 上位側は0で埋められる。長さは変わらない。
    ///
    /// `amount` が0なら恒等変換、長さ以上なら全ビットが0になる。
    ///
    /// # 引数
    /// * `amount` - シフトするビット数
    pub fn lshift(&self, amount: usize) -> BitVec {
        let len = self.0.len();
        let mut bits = vec![false; len];
        for i in amount..len {
            bits[i - amount] = self.0[i];
        }
        BitVec(bits)
    }

    /// ビットを上位インデックスの方向へ `amount` だけ論理シフトする
    ///
    /// lshiftの鏡像。元のインデックスiのビットは、収まる場合にのみ
    /// 新しいインデックス `i + amount` に置かれる。末尾を越えたビットは失われ、
    /// 下位側は0で埋められる。長さは変わらない。
    ///
    /// `amount` が0なら恒等変換、長さ以上なら全ビットが0になる。
    ///
    /// # 引数
    /// * `amount` - シフトするビット数
    pub fn rshift(&self, amount: usize) -> BitVec {
        let len = self.0.len();
        let mut bits = vec![false; len];
        for i in 0..len.saturating_sub(amount) {
            bits[i + amount] = self.0[i];
        }
        BitVec(bits)
    }
}
