use uuid::Uuid;

use crate::expression::{
    check_children, prepare_children, ConditionExpression, Expression,
};
use crate::types::{EvalError, ExecutionState, MetadataState, ViolationList};

/// Evaluates a group of conditions with a logical AND.
///
/// Children are evaluated in order with their own negation applied; the
/// first effective `false` short-circuits the group, so later children
/// are never evaluated. An empty group evaluates to `false` — a rule
/// with no conditions must not silently fire.
#[derive(Debug)]
pub struct AndGroup {
    conditions: Vec<Box<dyn ConditionExpression>>,
    negated: bool,
    uuid: Uuid,
}

impl AndGroup {
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            negated: false,
            uuid: Uuid::new_v4(),
        }
    }

    /// Append a child condition.
    #[must_use]
    pub fn condition(mut self, condition: impl ConditionExpression + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }

    /// Invert the group's own result. Applied by whoever evaluates the
    /// group via [`evaluate_effective`](ConditionExpression::evaluate_effective).
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl Expression for AndGroup {
    fn id(&self) -> &'static str {
        "and"
    }

    fn label(&self) -> &'static str {
        "Logical AND group"
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn check_integrity(&self, metadata: &mut MetadataState) -> ViolationList {
        check_children(&self.conditions, metadata)
    }

    fn prepare_metadata(&self, metadata: &mut MetadataState, until: Option<Uuid>) -> bool {
        if let Some(target) = until {
            if target == self.uuid {
                return true;
            }
        }
        prepare_children(&self.conditions, metadata, until)
    }
}

impl ConditionExpression for AndGroup {
    fn evaluate(&self, state: &mut ExecutionState) -> Result<bool, EvalError> {
        for condition in &self.conditions {
            if !condition.evaluate_effective(state)? {
                return Ok(false);
            }
        }
        Ok(!self.conditions.is_empty())
    }

    fn is_negated(&self) -> bool {
        self.negated
    }
}
