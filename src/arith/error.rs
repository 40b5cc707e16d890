use crate::value::Tag;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumError {
    #[error("unsupported operands for +: {lhs} and {rhs}")]
    UnsupportedOperands { lhs: Tag, rhs: Tag },
}

pub type Result<T> = std::result::Result<T, NumError>;
