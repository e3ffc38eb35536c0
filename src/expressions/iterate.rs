use tracing::trace;
use uuid::Uuid;

use crate::expression::{check_children, prepare_children, ActionExpression, Expression};
use crate::types::{EvalError, ExecutionState, MetadataState, Value, ViolationList};

/// Fallback iteration variable name when none is configured.
const DEFAULT_ITEM_NAME: &str = "list_item";

/// Runs a set of actions once per item of a list variable.
///
/// Each iteration binds the current item to the iteration variable
/// (configured via [`item_name`](Loop::item_name), defaulting to
/// `"list_item"`), overwriting the previous iteration's binding. The
/// variable is removed again on every exit path — after the last
/// iteration, after zero iterations, and when a child action fails
/// mid-loop — so sibling expressions never observe it.
#[derive(Debug)]
pub struct Loop {
    list: String,
    item_name: Option<String>,
    actions: Vec<Box<dyn ActionExpression>>,
    uuid: Uuid,
}

impl Loop {
    /// Create a loop over the list at the given property path.
    #[must_use]
    pub fn over(list: impl Into<String>) -> Self {
        Self {
            list: list.into(),
            item_name: None,
            actions: Vec::new(),
            uuid: Uuid::new_v4(),
        }
    }

    /// Name the iteration variable instead of the default `"list_item"`.
    #[must_use]
    pub fn item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    /// Append a child action, run once per item.
    #[must_use]
    pub fn action(mut self, action: impl ActionExpression + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    fn item_name_or_default(&self) -> &str {
        self.item_name.as_deref().unwrap_or(DEFAULT_ITEM_NAME)
    }

    fn run_iterations(
        &self,
        item_name: &str,
        items: Vec<Value>,
        state: &mut ExecutionState,
    ) -> Result<(), EvalError> {
        for (index, item) in items.into_iter().enumerate() {
            trace!(list = %self.list, index, "loop iteration");
            state.set_variable(item_name, item);
            for action in &self.actions {
                action.execute(state)?;
            }
        }
        Ok(())
    }
}

impl Expression for Loop {
    fn id(&self) -> &'static str {
        "loop"
    }

    fn label(&self) -> &'static str {
        "Loop"
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn check_integrity(&self, metadata: &mut MetadataState) -> ViolationList {
        let mut violations = ViolationList::new();

        if self.list.is_empty() {
            violations.add_with_message("List variable is missing.", self.uuid);
            return violations;
        }

        let list_def = match metadata.fetch_definition_by_path(&self.list) {
            Ok(def) => def.clone(),
            Err(err) => {
                violations.add_with_message(
                    format!("List variable '{}' does not exist. {err}", self.list),
                    self.uuid,
                );
                return violations;
            }
        };

        let item_name = self.item_name_or_default();
        if metadata.has_definition(item_name) {
            violations.add_with_message(
                format!("List item name '{item_name}' conflicts with an existing variable."),
                self.uuid,
            );
            return violations;
        }

        let Some(item_def) = list_def.item_def() else {
            violations.add_with_message(
                format!("The data type of list variable '{}' is not a list.", self.list),
                self.uuid,
            );
            return violations;
        };

        metadata.set_definition(item_name, item_def.clone());
        let violations = check_children(&self.actions, metadata);
        // The item variable is out of scope after the loop.
        metadata.remove_definition(item_name);
        violations
    }

    fn prepare_metadata(&self, metadata: &mut MetadataState, until: Option<Uuid>) -> bool {
        if let Some(target) = until {
            if target == self.uuid {
                return true;
            }
        }

        let item_name = self.item_name_or_default();
        // Best effort: an unresolvable or non-list path just leaves the
        // item variable untyped.
        let item_def = metadata
            .fetch_definition_by_path(&self.list)
            .ok()
            .and_then(|def| def.item_def().cloned());
        if let Some(def) = item_def {
            metadata.set_definition(item_name, def);
        }

        if until.is_some() {
            if prepare_children(&self.actions, metadata, until) {
                // Stopped at the target: the item variable is still in
                // scope there, so it stays registered.
                return true;
            }
            metadata.remove_definition(item_name);
            return false;
        }

        prepare_children(&self.actions, metadata, None);
        metadata.remove_definition(item_name);
        true
    }
}

impl ActionExpression for Loop {
    fn execute(&self, state: &mut ExecutionState) -> Result<(), EvalError> {
        let items = match state.fetch_by_path(&self.list)? {
            Value::List(items) => items.clone(),
            other => {
                return Err(EvalError::NotAList {
                    path: self.list.clone(),
                    kind: other.kind(),
                })
            }
        };

        let item_name = self.item_name_or_default();
        let result = self.run_iterations(item_name, items, state);
        // The item variable is out of scope after the loop, also when an
        // action failed mid-iteration.
        state.remove_variable(item_name);
        result
    }
}
