/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 固定長Bit列の型と演算を定義。
mod bit_vec;

pub use roaring::RoaringTreemap;

pub use bit_vec::BitVec;
pub use error::Error;
