use serde::Deserialize;
use serde_json::Value;

use super::argument::CallShape;

/// One exercise descriptor, deserialized from a single JSON file in the
/// problem store. The wire field names are `id`, `functionName`,
/// `parameters`, `testCases`, `hiddenTestCases`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDescriptor {
    pub id: String,
    /// Entry-point name as declared by the problem author, in camelCase.
    pub function_name: String,
    /// Ordered parameter declarations. Only the length is consumed, so the
    /// elements stay untyped; authoring drift between plain names and
    /// structured declarations never fails a parse.
    #[serde(default)]
    pub parameters: Vec<Value>,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub hidden_test_cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub input: Value,
    pub expected: Value,
}

impl ProblemDescriptor {
    /// Visible cases followed by hidden cases. Reporting indices are
    /// 1-based and continuous across the concatenation.
    pub fn all_cases(&self) -> impl Iterator<Item = &TestCase> {
        self.test_cases.iter().chain(self.hidden_test_cases.iter())
    }

    pub fn case_count(&self) -> usize {
        self.test_cases.len() + self.hidden_test_cases.len()
    }

    pub fn has_visible_cases(&self) -> bool {
        !self.test_cases.is_empty()
    }

    /// Call shape is fixed by the declared arity, decided once here rather
    /// than re-derived per invocation.
    pub fn call_shape(&self) -> CallShape {
        if self.parameters.len() > 1 {
            CallShape::Spread
        } else {
            CallShape::Single
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::argument::CallShape;

    fn parse(json: &str) -> ProblemDescriptor {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_full_descriptor() {
        let desc = parse(
            r#"{
                "id": "two_sum",
                "functionName": "twoSum",
                "parameters": ["nums", "target"],
                "testCases": [{ "input": [[2, 7, 11, 15], 9], "expected": [0, 1] }],
                "hiddenTestCases": [{ "input": [[3, 3], 6], "expected": [0, 1] }]
            }"#,
        );
        assert_eq!(desc.id, "two_sum");
        assert_eq!(desc.function_name, "twoSum");
        assert_eq!(desc.parameters.len(), 2);
        assert_eq!(desc.test_cases.len(), 1);
        assert_eq!(desc.hidden_test_cases.len(), 1);
        assert_eq!(desc.case_count(), 2);
    }

    #[test]
    fn test_missing_case_lists_default_empty() {
        let desc = parse(r#"{ "id": "stub", "functionName": "stub" }"#);
        assert_eq!(desc.case_count(), 0);
        assert!(!desc.has_visible_cases());
    }

    #[test]
    fn test_structured_parameter_declarations_parse() {
        // Some authoring formats declare parameters as objects; only the
        // arity matters.
        let desc = parse(
            r#"{
                "id": "stub",
                "functionName": "stub",
                "parameters": [{ "name": "nums", "type": "int[]" }]
            }"#,
        );
        assert_eq!(desc.parameters.len(), 1);
        assert_eq!(desc.call_shape(), CallShape::Single);
    }

    #[test]
    fn test_call_shape_from_arity() {
        let none = parse(r#"{ "id": "a", "functionName": "a", "parameters": [] }"#);
        let one = parse(r#"{ "id": "b", "functionName": "b", "parameters": ["x"] }"#);
        let two = parse(r#"{ "id": "c", "functionName": "c", "parameters": ["x", "y"] }"#);
        assert_eq!(none.call_shape(), CallShape::Single);
        assert_eq!(one.call_shape(), CallShape::Single);
        assert_eq!(two.call_shape(), CallShape::Spread);
    }

    #[test]
    fn test_all_cases_orders_visible_before_hidden() {
        let desc = parse(
            r#"{
                "id": "x",
                "functionName": "x",
                "testCases": [{ "input": 1, "expected": 1 }],
                "hiddenTestCases": [{ "input": 2, "expected": 2 }]
            }"#,
        );
        let inputs: Vec<i64> = desc.all_cases().map(|c| c.input.as_i64().unwrap()).collect();
        assert_eq!(inputs, vec![1, 2]);
    }

    #[test]
    fn test_rejects_missing_id() {
        let result: Result<ProblemDescriptor, _> =
            serde_json::from_str(r#"{ "functionName": "twoSum" }"#);
        assert!(result.is_err());
    }
}
