use std::collections::HashMap;

use serde_json::Value;

use crate::error::InvocationFault;
use crate::registry::SolutionEntry;

use super::{as_int, as_int_array, expect_arity};

pub fn entry() -> SolutionEntry {
    SolutionEntry {
        id: "two_sum",
        function: "two_sum",
        run: two_sum,
    }
}

/// Indices of the two numbers that add up to `target`, assuming exactly
/// one solution exists.
fn two_sum(args: &[Value]) -> Result<Value, InvocationFault> {
    expect_arity(args, 2)?;
    let nums = as_int_array(&args[0])?;
    let target = as_int(&args[1])?;

    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (i, num) in nums.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - num)) {
            return Ok(Value::from(vec![j as u64, i as u64]));
        }
        seen.insert(*num, i);
    }

    Err(InvocationFault::new(format!(
        "No two elements sum to {}",
        target
    )))
}
