//! Reference solutions, one module per problem id. Each module exposes an
//! `entry()` describing itself to the registry.

mod contains_duplicate;
mod two_sum;

use serde_json::Value;

use crate::error::InvocationFault;
use crate::registry::Registry;

pub fn register(registry: &mut Registry) {
    registry.insert(contains_duplicate::entry());
    registry.insert(two_sum::entry());
}

// --- Shared argument decoding ---

pub(crate) fn expect_arity(args: &[Value], expected: usize) -> Result<(), InvocationFault> {
    if args.len() != expected {
        return Err(InvocationFault::new(format!(
            "Expected {} argument(s), got {}",
            expected,
            args.len()
        )));
    }
    Ok(())
}

pub(crate) fn as_int_array(value: &Value) -> Result<Vec<i64>, InvocationFault> {
    let items = value
        .as_array()
        .ok_or_else(|| InvocationFault::new(format!("Expected an array, got {}", value)))?;
    items
        .iter()
        .map(|v| {
            v.as_i64()
                .ok_or_else(|| InvocationFault::new(format!("Expected an integer, got {}", v)))
        })
        .collect()
}

pub(crate) fn as_int(value: &Value) -> Result<i64, InvocationFault> {
    value
        .as_i64()
        .ok_or_else(|| InvocationFault::new(format!("Expected an integer, got {}", value)))
}
