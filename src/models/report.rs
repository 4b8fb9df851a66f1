use serde::Serialize;
use serde_json::Value;

use super::store::ParseFailure;

/// Terminal state of one descriptor's evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    /// Zero combined test cases; distinct from Pass and Fail.
    Skipped,
    /// No solution registered for the descriptor's id.
    ResolutionFailed,
    /// A solution exists but does not export the expected entry point.
    LookupFailed,
}

/// One failing test case: either a mismatch (`actual` set) or a fault
/// raised during invocation (`error` set).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureRecord {
    /// 1-based, continuous across visible ++ hidden cases.
    pub case_number: usize,
    pub input: Value,
    pub expected: Value,
    pub actual: Option<Value>,
    pub error: Option<String>,
}

impl FailureRecord {
    pub fn mismatch(case_number: usize, input: Value, expected: Value, actual: Value) -> Self {
        Self {
            case_number,
            input,
            expected,
            actual: Some(actual),
            error: None,
        }
    }

    pub fn fault(case_number: usize, input: Value, expected: Value, message: String) -> Self {
        Self {
            case_number,
            input,
            expected,
            actual: None,
            error: Some(message),
        }
    }
}

/// Machine-checkable result for a single descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemReport {
    pub id: String,
    pub outcome: Outcome,
    pub total_cases: usize,
    pub failures: Vec<FailureRecord>,
    /// Authoring check: a solution is registered for this id.
    pub solution_exists: bool,
    /// Authoring check: at least one visible test case is declared.
    /// Hidden cases do not count here.
    pub has_visible_cases: bool,
}

/// Result of one full run over the store. Carries no timestamp: two runs
/// over the same store and registry serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub problems: Vec<ProblemReport>,
    pub parse_failures: Vec<ParseFailure>,
}

impl RunReport {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.problems.iter().filter(|p| p.outcome == outcome).count()
    }

    /// True when nothing needs attention: no behavioral failures, no
    /// unresolved descriptors, no unparseable files. Skipped descriptors
    /// are clean.
    pub fn all_green(&self) -> bool {
        self.parse_failures.is_empty()
            && self.problems.iter().all(|p| {
                matches!(p.outcome, Outcome::Pass | Outcome::Skipped)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(outcome: Outcome) -> ProblemReport {
        ProblemReport {
            id: "p".to_string(),
            outcome,
            total_cases: 1,
            failures: Vec::new(),
            solution_exists: true,
            has_visible_cases: true,
        }
    }

    #[test]
    fn test_all_green_accepts_skipped() {
        let run = RunReport {
            problems: vec![report(Outcome::Pass), report(Outcome::Skipped)],
            parse_failures: Vec::new(),
        };
        assert!(run.all_green());
    }

    #[test]
    fn test_all_green_rejects_resolution_failures() {
        let run = RunReport {
            problems: vec![report(Outcome::ResolutionFailed)],
            parse_failures: Vec::new(),
        };
        assert!(!run.all_green());
    }

    #[test]
    fn test_all_green_rejects_parse_failures() {
        let run = RunReport {
            problems: vec![report(Outcome::Pass)],
            parse_failures: vec![super::ParseFailure {
                path: "bad.json".into(),
                message: "nope".to_string(),
            }],
        };
        assert!(!run.all_green());
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(Outcome::ResolutionFailed).unwrap(),
            json!("resolution_failed")
        );
    }
}
