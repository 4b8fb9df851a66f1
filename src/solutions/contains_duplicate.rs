use std::collections::HashSet;

use serde_json::Value;

use crate::error::InvocationFault;
use crate::registry::SolutionEntry;

use super::{as_int_array, expect_arity};

pub fn entry() -> SolutionEntry {
    SolutionEntry {
        id: "contains_duplicate",
        function: "contains_duplicate",
        run: contains_duplicate,
    }
}

/// True if any value appears at least twice in the array.
fn contains_duplicate(args: &[Value]) -> Result<Value, InvocationFault> {
    expect_arity(args, 1)?;
    let nums = as_int_array(&args[0])?;

    let mut seen = HashSet::with_capacity(nums.len());
    for num in nums {
        if !seen.insert(num) {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}
