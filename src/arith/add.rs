use crate::arith::config::{ArithConfig, FloatLhsPolicy};
use crate::arith::error::{NumError, Result};
use crate::report::Reporter;
use crate::value::Value;

/// Add two values under the default configuration.
///
/// `Int + Int` stays `Int` (wrapping on overflow); any pairing with a `Float`
/// yields `Float`. The trace line for the result is handed to `reporter`
/// before returning.
pub fn add<R>(a: Value, b: Value, reporter: &mut R) -> Result<Value>
where
    R: Reporter + ?Sized,
{
    add_with(&ArithConfig::default(), a, b, reporter)
}

/// Add two values, honouring `config`.
///
/// Nothing is reported when the operands are rejected.
pub fn add_with<R>(config: &ArithConfig, a: Value, b: Value, reporter: &mut R) -> Result<Value>
where
    R: Reporter + ?Sized,
{
    let result = sum(config.float_lhs, a, b)?;

    if config.trace {
        reporter.report(&result.trace_line());
    }

    Ok(result)
}

fn sum(policy: FloatLhsPolicy, a: Value, b: Value) -> Result<Value> {
    match (a, b) {
        (Value::Int(a_val), Value::Int(b_val)) => Ok(Value::Int(a_val.wrapping_add(b_val))),
        (Value::Int(a_val), Value::Float(b_val)) => Ok(Value::Float(a_val as f64 + b_val)),
        (Value::Float(a_val), rhs) => match policy {
            FloatLhsPolicy::Promote => Ok(Value::Float(a_val + rhs.widen())),
            FloatLhsPolicy::Reject => Err(NumError::UnsupportedOperands {
                lhs: a.tag(),
                rhs: rhs.tag(),
            }),
        },
    }
}

/// A configuration paired with the reporter its additions write to.
pub struct Arithmetic<R: Reporter> {
    config: ArithConfig,
    reporter: R,
}

impl<R: Reporter> Arithmetic<R> {
    pub fn new(config: ArithConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn add(&mut self, a: Value, b: Value) -> Result<Value> {
        add_with(&self.config, a, b, &mut self.reporter)
    }

    pub fn config(&self) -> &ArithConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}

impl<R: Reporter + Default> Default for Arithmetic<R> {
    fn default() -> Self {
        Self::new(ArithConfig::default(), R::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use crate::value::{make_float, make_int, Tag};

    #[test]
    fn int_plus_int() {
        let mut rec = RecordingReporter::new();
        let res = add(make_int(2), make_int(3), &mut rec).expect("add failed");
        assert_eq!(res, Value::Int(5));
        assert_eq!(rec.lines(), ["INT: 5"]);
    }

    #[test]
    fn int_plus_float_promotes() {
        let mut rec = RecordingReporter::new();
        let res = add(make_int(2), make_float(3.5), &mut rec).expect("add failed");
        assert_eq!(res, Value::Float(5.5));
        assert_eq!(rec.lines(), ["FLOAT: 5.500000"]);
    }

    #[test]
    fn float_lhs_promotes_by_default() {
        let mut rec = RecordingReporter::new();
        let a = add(make_float(1.0), make_int(2), &mut rec).expect("add failed");
        let b = add(make_float(1.0), make_float(2.0), &mut rec).expect("add failed");
        assert_eq!(a, Value::Float(3.0));
        assert_eq!(b, Value::Float(3.0));
        assert_eq!(rec.drain(), vec!["FLOAT: 3.000000", "FLOAT: 3.000000"]);
    }

    #[test]
    fn float_lhs_rejected_when_strict() {
        let cfg = ArithConfig::strict();
        let mut rec = RecordingReporter::new();

        let err = add_with(&cfg, make_float(1.0), make_int(2), &mut rec).unwrap_err();
        assert_eq!(
            err,
            NumError::UnsupportedOperands {
                lhs: Tag::Float,
                rhs: Tag::Int
            }
        );
        assert_eq!(err.to_string(), "unsupported operands for +: FLOAT and INT");

        let err = add_with(&cfg, make_float(1.0), make_float(2.0), &mut rec).unwrap_err();
        assert_eq!(
            err,
            NumError::UnsupportedOperands {
                lhs: Tag::Float,
                rhs: Tag::Float
            }
        );
        assert!(rec.lines().is_empty());

        // Int-first rows are unaffected by the policy.
        let ok = add_with(&cfg, make_int(1), make_float(0.25), &mut rec).expect("add failed");
        assert_eq!(ok, Value::Float(1.25));
        assert_eq!(rec.lines(), ["FLOAT: 1.250000"]);
    }

    #[test]
    fn int_overflow_wraps() {
        let mut rec = RecordingReporter::new();
        let res = add(make_int(i64::MAX), make_int(1), &mut rec).expect("add failed");
        assert_eq!(res, Value::Int(i64::MIN));
        assert_eq!(rec.lines(), [format!("INT: {}", i64::MIN)]);
    }

    #[test]
    fn operands_left_untouched() {
        let a = make_int(4);
        let b = make_float(0.5);
        let mut rec = RecordingReporter::new();
        let _ = add(a, b, &mut rec);
        assert_eq!(a, Value::Int(4));
        assert_eq!(b, Value::Float(0.5));
    }

    #[test]
    fn tracing_can_be_disabled() {
        let cfg = ArithConfig {
            trace: false,
            ..ArithConfig::new()
        };
        let mut calc = Arithmetic::new(cfg, RecordingReporter::new());
        assert_eq!(calc.add(make_int(1), make_int(1)), Ok(Value::Int(2)));
        assert!(calc.reporter().lines().is_empty());
    }

    #[test]
    fn arithmetic_reports_in_call_order() {
        let mut calc: Arithmetic<RecordingReporter> = Arithmetic::default();
        calc.add(make_int(1), make_int(2)).expect("add failed");
        calc.add(make_int(1), make_float(2.0)).expect("add failed");
        calc.add(make_float(0.5), make_int(-1)).expect("add failed");

        assert_eq!(calc.config().float_lhs, FloatLhsPolicy::Promote);
        assert_eq!(
            calc.into_reporter().lines(),
            ["INT: 3", "FLOAT: 3.000000", "FLOAT: -0.500000"]
        );
    }
}
