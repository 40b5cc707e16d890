pub mod add;
pub mod config;
pub mod error;

pub use add::{add, add_with, Arithmetic};
pub use config::{ArithConfig, FloatLhsPolicy};
pub use error::{NumError, Result};
