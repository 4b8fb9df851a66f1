//! The execution driver: resolve each descriptor's solution, invoke it per
//! test case, compare results, aggregate failures.
//!
//! Per descriptor the evaluation walks
//! Discovered → {ResolutionFailed | Resolved} → {LookupFailed | Ready} →
//! {Skipped | Executed(Pass | Fail)}, in that order, exactly once. Nothing
//! in here aborts the run; every failure lands in the report.

use crate::error::ResolveError;
use crate::models::{
    Argument, FailureRecord, Outcome, ProblemDescriptor, ProblemReport, ProblemStore, RunReport,
};
use crate::naming::camel_to_snake;
use crate::registry::{Registry, SolutionEntry};

/// Evaluate every descriptor in the store, in store (sorted-by-id) order.
pub fn run_store(store: &ProblemStore, registry: &Registry) -> RunReport {
    let problems = store
        .problems()
        .iter()
        .map(|desc| run_problem(desc, registry))
        .collect();

    RunReport {
        problems,
        parse_failures: store.parse_failures().to_vec(),
    }
}

/// Evaluate a single descriptor against the registry.
pub fn run_problem(desc: &ProblemDescriptor, registry: &Registry) -> ProblemReport {
    let solution_exists = registry.contains(&desc.id);
    let has_visible_cases = desc.has_visible_cases();
    let total_cases = desc.case_count();

    let report = |outcome, failures| ProblemReport {
        id: desc.id.clone(),
        outcome,
        total_cases,
        failures,
        solution_exists,
        has_visible_cases,
    };

    let entry = match resolve(desc, registry) {
        Ok(entry) => entry,
        Err(ResolveError::MissingSolution { .. }) => {
            return report(Outcome::ResolutionFailed, Vec::new())
        }
        Err(ResolveError::MissingFunction { .. }) => {
            return report(Outcome::LookupFailed, Vec::new())
        }
    };

    if total_cases == 0 {
        return report(Outcome::Skipped, Vec::new());
    }

    let shape = desc.call_shape();
    let mut failures = Vec::new();

    for (i, case) in desc.all_cases().enumerate() {
        let case_number = i + 1;
        let args = Argument::classify(&case.input).into_args(shape);

        match (entry.run)(&args) {
            Ok(actual) if actual == case.expected => {}
            Ok(actual) => failures.push(FailureRecord::mismatch(
                case_number,
                case.input.clone(),
                case.expected.clone(),
                actual,
            )),
            Err(fault) => failures.push(FailureRecord::fault(
                case_number,
                case.input.clone(),
                case.expected.clone(),
                fault.message,
            )),
        }
    }

    let outcome = if failures.is_empty() {
        Outcome::Pass
    } else {
        Outcome::Fail
    };
    report(outcome, failures)
}

/// Two-step resolution: registry lookup by id, then entry-point match
/// against the descriptor's translated `functionName`.
pub fn resolve<'r>(
    desc: &ProblemDescriptor,
    registry: &'r Registry,
) -> Result<&'r SolutionEntry, ResolveError> {
    let entry = registry
        .get(&desc.id)
        .ok_or_else(|| ResolveError::MissingSolution {
            id: desc.id.clone(),
        })?;

    let function = camel_to_snake(&desc.function_name);
    if entry.function != function {
        return Err(ResolveError::MissingFunction {
            id: desc.id.clone(),
            function,
        });
    }

    Ok(entry)
}
