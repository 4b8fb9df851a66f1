use serde_json::Value;

/// How a descriptor's inputs are handed to its solution, fixed once per
/// descriptor from the declared parameter count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallShape {
    /// The raw input is always a single argument.
    Single,
    /// A sequence input is spread into positional arguments.
    Spread,
}

/// A test-case input, tagged by its wire shape before the call shape is
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Scalar(Value),
    Sequence(Vec<Value>),
}

impl Argument {
    pub fn classify(input: &Value) -> Argument {
        match input {
            Value::Array(items) => Argument::Sequence(items.clone()),
            other => Argument::Scalar(other.clone()),
        }
    }

    /// Resolve the argument list for one invocation.
    ///
    /// Only a sequence under `Spread` becomes multiple positional
    /// arguments; every other combination passes the original input
    /// unchanged as one argument. This is a heuristic, not a type-safe
    /// contract: a single-parameter problem whose input is a
    /// sequence-of-sequences still gets one argument, and a
    /// multi-parameter problem spreads whatever sequence it is given,
    /// whatever its length.
    pub fn into_args(self, shape: CallShape) -> Vec<Value> {
        match (shape, self) {
            (CallShape::Spread, Argument::Sequence(items)) => items,
            (_, Argument::Sequence(items)) => vec![Value::Array(items)],
            (_, Argument::Scalar(value)) => vec![value],
        }
    }
}
