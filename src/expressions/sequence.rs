use tracing::trace;
use uuid::Uuid;

use crate::expression::{check_children, prepare_children, ActionExpression, Expression};
use crate::types::{EvalError, ExecutionState, MetadataState, ViolationList};

/// Runs a list of actions in configured order.
///
/// The first failing action aborts the sequence; later actions do not
/// run. Introduces no variables of its own.
#[derive(Debug)]
pub struct ActionSequence {
    actions: Vec<Box<dyn ActionExpression>>,
    uuid: Uuid,
}

impl ActionSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            uuid: Uuid::new_v4(),
        }
    }

    /// Append a child action.
    #[must_use]
    pub fn action(mut self, action: impl ActionExpression + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Expression for ActionSequence {
    fn id(&self) -> &'static str {
        "action_sequence"
    }

    fn label(&self) -> &'static str {
        "Action sequence"
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn check_integrity(&self, metadata: &mut MetadataState) -> ViolationList {
        check_children(&self.actions, metadata)
    }

    fn prepare_metadata(&self, metadata: &mut MetadataState, until: Option<Uuid>) -> bool {
        if let Some(target) = until {
            if target == self.uuid {
                return true;
            }
        }
        prepare_children(&self.actions, metadata, until)
    }
}

impl ActionExpression for ActionSequence {
    fn execute(&self, state: &mut ExecutionState) -> Result<(), EvalError> {
        trace!(actions = self.actions.len(), "executing action sequence");
        for action in &self.actions {
            action.execute(state)?;
        }
        Ok(())
    }
}
