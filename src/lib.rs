//! Tagged numeric values with a promoting `add`.
//!
//! When the left operand is `Float` the outcome depends on
//! [`FloatLhsPolicy`]: the default promotes symmetrically, `Reject` fails
//! with [`NumError::UnsupportedOperands`].

pub mod arith;
pub mod report;
pub mod value;

// Re-export main types for convenient usage
pub use arith::{add, add_with, ArithConfig, Arithmetic, FloatLhsPolicy, NumError, Result};
pub use report::{FnReporter, RecordingReporter, Reporter, SilentReporter, StdoutReporter};
pub use value::{make_float, make_int, Tag, Value};
