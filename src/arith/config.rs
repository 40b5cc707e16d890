//! Settings for the `add` combinator.
//!
//! Only decides which operand pairs are accepted and whether a trace line is
//! emitted. The arithmetic itself is fixed.

/// What `add` does when its left operand is tagged `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatLhsPolicy {
    /// Widen an integer right operand and add as `f64`.
    #[default]
    Promote,

    /// Fail with `UnsupportedOperands`.
    Reject,
}

#[derive(Debug, Clone)]
pub struct ArithConfig {
    /// Handling of `Float + Int` and `Float + Float`
    pub float_lhs: FloatLhsPolicy,

    /// Report a trace line after each successful addition
    pub trace: bool,
}

impl Default for ArithConfig {
    fn default() -> Self {
        ArithConfig {
            float_lhs: FloatLhsPolicy::Promote,
            trace: true,
        }
    }
}

impl ArithConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as the default, but with `Float`-first additions rejected.
    pub fn strict() -> Self {
        ArithConfig {
            float_lhs: FloatLhsPolicy::Reject,
            ..Self::default()
        }
    }
}
