use tracing::trace;
use uuid::Uuid;

use crate::expression::{ActionExpression, Expression};
use crate::types::{EvalError, ExecutionState, MetadataState, ViolationList};

/// Copies the value at a property path into a named variable.
///
/// Unlike the loop item, an assigned variable stays in scope after this
/// action: the integrity check registers its definition permanently so
/// later sibling expressions can refer to it.
#[derive(Debug)]
pub struct AssignVariable {
    name: String,
    source: String,
    uuid: Uuid,
}

impl AssignVariable {
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            uuid: Uuid::new_v4(),
        }
    }
}

impl Expression for AssignVariable {
    fn id(&self) -> &'static str {
        "assign_variable"
    }

    fn label(&self) -> &'static str {
        "Assign a variable"
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn check_integrity(&self, metadata: &mut MetadataState) -> ViolationList {
        let mut violations = ViolationList::new();

        if self.name.is_empty() {
            violations.add_with_message("Variable name is missing.", self.uuid);
            return violations;
        }

        if metadata.has_definition(&self.name) {
            violations.add_with_message(
                format!(
                    "Variable name '{}' conflicts with an existing variable.",
                    self.name
                ),
                self.uuid,
            );
            return violations;
        }

        match metadata.fetch_definition_by_path(&self.source) {
            Ok(def) => {
                let def = def.clone();
                metadata.set_definition(self.name.as_str(), def);
            }
            Err(err) => {
                violations.add_with_message(
                    format!("Data selector '{}' cannot be resolved. {err}", self.source),
                    self.uuid,
                );
            }
        }
        violations
    }

    fn prepare_metadata(&self, metadata: &mut MetadataState, until: Option<Uuid>) -> bool {
        if let Some(target) = until {
            if target == self.uuid {
                return true;
            }
        }
        if !self.name.is_empty() {
            let def = metadata.fetch_definition_by_path(&self.source).ok().cloned();
            if let Some(def) = def {
                metadata.set_definition(self.name.as_str(), def);
            }
        }
        until.is_none()
    }
}

impl ActionExpression for AssignVariable {
    fn execute(&self, state: &mut ExecutionState) -> Result<(), EvalError> {
        let value = state.fetch_by_path(&self.source)?.clone();
        trace!(name = %self.name, source = %self.source, "assigning variable");
        state.set_variable(self.name.as_str(), value);
        Ok(())
    }
}
