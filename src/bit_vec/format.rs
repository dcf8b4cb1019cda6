use core::fmt;

use crate::bit_vec::BitVec;

/// インデックス0のビットを左端として、'1'と'0'を並べた文字列にする
impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
