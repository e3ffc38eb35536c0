use uuid::Uuid;

use crate::expression::{ConditionExpression, Expression};
use crate::types::{
    CompareOp, DataDef, EvalError, ExecutionState, MetadataState, Value, ViolationList,
};

/// Compares the value at a property path against a configured literal.
///
/// Evaluation fetches the path from the execution state and applies
/// [`Value::compare`]; incomparable kinds evaluate to `false`. A path
/// that does not resolve is a hard failure — the integrity check exists
/// to catch that ahead of time.
#[derive(Debug)]
pub struct Comparison {
    path: String,
    op: CompareOp,
    literal: Value,
    negated: bool,
    uuid: Uuid,
}

impl Comparison {
    #[must_use]
    pub fn new(path: impl Into<String>, op: CompareOp, literal: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            op,
            literal: literal.into(),
            negated: false,
            uuid: Uuid::new_v4(),
        }
    }

    /// Invert the comparison result.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }
}

/// Whether a value of the given definition can be compared with the
/// literal. Int and Float cross-compare; everything else matches by kind.
fn comparable(def: &DataDef, literal: &Value) -> bool {
    matches!(
        (def, literal),
        (DataDef::Int | DataDef::Float, Value::Int(_) | Value::Float(_))
            | (DataDef::Bool, Value::Bool(_))
            | (DataDef::String, Value::String(_))
    )
}

impl Expression for Comparison {
    fn id(&self) -> &'static str {
        "comparison"
    }

    fn label(&self) -> &'static str {
        "Data comparison"
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn check_integrity(&self, metadata: &mut MetadataState) -> ViolationList {
        let mut violations = ViolationList::new();

        let def = match metadata.fetch_definition_by_path(&self.path) {
            Ok(def) => def,
            Err(err) => {
                violations.add_with_message(
                    format!("Data selector '{}' cannot be resolved. {err}", self.path),
                    self.uuid,
                );
                return violations;
            }
        };

        if !def.is_scalar() {
            violations.add_with_message(
                format!(
                    "The data type of '{}' is {} and cannot be compared.",
                    self.path,
                    def.kind()
                ),
                self.uuid,
            );
            return violations;
        }

        if !comparable(def, &self.literal) {
            violations.add_with_message(
                format!(
                    "The value {} cannot be compared with '{}' of type {}.",
                    self.literal,
                    self.path,
                    def.kind()
                ),
                self.uuid,
            );
        }
        violations
    }
}

impl ConditionExpression for Comparison {
    fn evaluate(&self, state: &mut ExecutionState) -> Result<bool, EvalError> {
        let actual = state.fetch_by_path(&self.path)?;
        Ok(actual.compare(self.op, &self.literal).unwrap_or(false))
    }

    fn is_negated(&self) -> bool {
        self.negated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_against_state() {
        let condition = Comparison::new("user.age", CompareOp::Gte, 18_i64);
        let user = Value::Map([("age".to_owned(), Value::Int(25))].into_iter().collect());
        let mut state = ExecutionState::new().with_variable("user", user);
        assert!(condition.evaluate(&mut state).unwrap());

        let condition = Comparison::new("user.age", CompareOp::Lt, 18_i64);
        assert!(!condition.evaluate(&mut state).unwrap());
    }

    #[test]
    fn unresolvable_path_is_a_hard_failure() {
        let condition = Comparison::new("user.age", CompareOp::Gte, 18_i64);
        let mut state = ExecutionState::new();
        let err = condition.evaluate(&mut state).unwrap_err();
        assert_eq!(err.to_string(), "unknown variable 'user'");
    }

    #[test]
    fn incomparable_kinds_evaluate_to_false() {
        let condition = Comparison::new("name", CompareOp::Eq, 1_i64);
        let mut state = ExecutionState::new().with_variable("name", "zoe");
        assert!(!condition.evaluate(&mut state).unwrap());
    }

    #[test]
    fn negation_applies_in_effective_result() {
        let condition = Comparison::new("count", CompareOp::Eq, 3_i64).negated();
        let mut state = ExecutionState::new().with_variable("count", 3_i64);
        assert!(condition.evaluate(&mut state).unwrap());
        assert!(!condition.evaluate_effective(&mut state).unwrap());
    }

    #[test]
    fn integrity_unresolvable_selector() {
        let condition = Comparison::new("user.age", CompareOp::Gte, 18_i64);
        let mut metadata = MetadataState::new();
        let violations = condition.check_integrity(&mut metadata);

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.first().unwrap().message(),
            "Data selector 'user.age' cannot be resolved. unknown variable 'user'"
        );
    }

    #[test]
    fn integrity_non_scalar_definition() {
        let condition = Comparison::new("tags", CompareOp::Eq, "rust");
        let mut metadata =
            MetadataState::new().with_definition("tags", DataDef::list_of(DataDef::String));
        let violations = condition.check_integrity(&mut metadata);

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.first().unwrap().message(),
            "The data type of 'tags' is list and cannot be compared."
        );
    }

    #[test]
    fn integrity_incomparable_literal() {
        let condition = Comparison::new("count", CompareOp::Eq, "three");
        let mut metadata = MetadataState::new().with_definition("count", DataDef::Int);
        let violations = condition.check_integrity(&mut metadata);

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.first().unwrap().message(),
            "The value \"three\" cannot be compared with 'count' of type int."
        );
    }

    #[test]
    fn integrity_accepts_numeric_cross_compare() {
        let condition = Comparison::new("ratio", CompareOp::Gt, 1_i64);
        let mut metadata = MetadataState::new().with_definition("ratio", DataDef::Float);
        assert!(condition.check_integrity(&mut metadata).is_empty());
    }

    #[test]
    fn integrity_valid_comparison_is_clean() {
        let condition = Comparison::new("count", CompareOp::Lte, 10_i64);
        let mut metadata = MetadataState::new().with_definition("count", DataDef::Int);
        assert!(condition.check_integrity(&mut metadata).is_empty());
    }
}
