#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("index '{index}' is out of range (valid: 0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("right length '{right}' does not match left length '{left}'")]
    LengthMismatch { left: usize, right: usize },
}
