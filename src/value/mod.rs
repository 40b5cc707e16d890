use core::fmt;

/// Discriminator naming which variant a [`Value`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Int,
    Float,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tag::Int => write!(f, "INT"),
            Tag::Float => write!(f, "FLOAT"),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn int(v: i64) -> Self {
        Value::Int(v)
    }

    pub fn float(v: f64) -> Self {
        Value::Float(v)
    }

    pub fn tag(&self) -> Tag {
        match self {
            Value::Int(_) => Tag::Int,
            Value::Float(_) => Tag::Float,
        }
    }

    /// Integer payload, or `None` when the value is tagged `Float`.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i),
            Value::Float(_) => None,
        }
    }

    /// Float payload, or `None` when the value is tagged `Int`.
    /// Integers are not widened here.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(x) => Some(x),
            Value::Int(_) => None,
        }
    }

    /// The payload as `f64`, promoting integers.
    pub(crate) fn widen(&self) -> f64 {
        match *self {
            Value::Int(i) => i as f64,
            Value::Float(x) => x,
        }
    }

    /// Line reported after an addition produced this value.
    pub fn trace_line(&self) -> String {
        match self {
            Value::Int(i) => format!("{}: {i}", Tag::Int),
            Value::Float(x) => format!("{}: {x:.6}", Tag::Float),
        }
    }
}

pub fn make_int(v: i64) -> Value {
    Value::int(v)
}

pub fn make_float(v: f64) -> Value {
    Value::float(v)
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i} : Int"),
            Value::Float(x) => write!(f, "{x:?} : Float"),
        }
    }
}
