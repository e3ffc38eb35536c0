use std::fmt;

use uuid::Uuid;

use crate::types::{EvalError, ExecutionState, MetadataState, ViolationList};

/// A node in a rule tree.
///
/// Every expression carries plugin identity (a stable machine id and a
/// display label), a per-node v4 UUID, and the two static passes: strict
/// integrity checking and best-effort metadata preparation. Conditions
/// and actions extend this with their runtime operation.
///
/// Implementations must be immutable after construction so a finished
/// tree can be shared behind `Arc` across threads, each evaluation
/// owning its own [`ExecutionState`].
pub trait Expression: fmt::Debug + Send + Sync {
    /// Stable machine-readable identifier of the expression type.
    fn id(&self) -> &'static str;

    /// Human-readable label of the expression type.
    fn label(&self) -> &'static str;

    /// Identity of this node, used to locate it during partial tree walks.
    fn uuid(&self) -> Uuid;

    /// Statically validate this expression against the variables declared
    /// in `metadata`. An empty list means the expression is safe to
    /// execute. Containers aggregate their children's violations;
    /// expressions that introduce variables must retract them before
    /// returning.
    fn check_integrity(&self, metadata: &mut MetadataState) -> ViolationList;

    /// Populate `metadata` with the variables this expression introduces,
    /// swallowing resolution failures.
    ///
    /// With `until` set, the walk stops as soon as the node with that
    /// UUID is reached and reports `true`, leaving every definition
    /// registered on the way there in place — this answers "which
    /// variables are in scope right before node X". When the target is
    /// not in this subtree, introduced definitions are retracted and the
    /// walk reports `false`. Without `until` the whole subtree is
    /// processed, definitions are retracted on exit, and the walk
    /// reports `true`.
    ///
    /// The default implementation suits leaves that introduce no
    /// variables.
    fn prepare_metadata(&self, metadata: &mut MetadataState, until: Option<Uuid>) -> bool {
        let _ = metadata;
        match until {
            Some(target) => target == self.uuid(),
            None => true,
        }
    }
}

/// An expression that evaluates to a boolean, optionally negated.
pub trait ConditionExpression: Expression {
    /// Evaluate the raw condition result, ignoring negation.
    fn evaluate(&self, state: &mut ExecutionState) -> Result<bool, EvalError>;

    /// Whether the result of [`evaluate`](Self::evaluate) is inverted.
    fn is_negated(&self) -> bool {
        false
    }

    /// Evaluate with negation applied, as `result XOR negated`.
    fn evaluate_effective(&self, state: &mut ExecutionState) -> Result<bool, EvalError> {
        Ok(self.evaluate(state)? ^ self.is_negated())
    }
}

/// An expression executed for its effect on the [`ExecutionState`].
pub trait ActionExpression: Expression {
    fn execute(&self, state: &mut ExecutionState) -> Result<(), EvalError>;
}

/// Generic container pass of the integrity check: walk children in
/// order, merging their violation lists. Unlike the fail-fast checks of
/// the individual expressions, this pass can report many violations.
pub(crate) fn check_children<E: Expression + ?Sized>(
    children: &[Box<E>],
    metadata: &mut MetadataState,
) -> ViolationList {
    let mut violations = ViolationList::new();
    for child in children {
        violations.merge(child.check_integrity(metadata));
    }
    violations
}

/// Generic container pass of metadata preparation.
///
/// With a target, each child's UUID is compared before descending into
/// it; the first match (or any child reporting the target found deeper
/// down) stops the walk. Without a target every child is processed and
/// the walk reports `true`.
pub(crate) fn prepare_children<E: Expression + ?Sized>(
    children: &[Box<E>],
    metadata: &mut MetadataState,
    until: Option<Uuid>,
) -> bool {
    match until {
        Some(target) => {
            for child in children {
                if child.uuid() == target {
                    return true;
                }
                if child.prepare_metadata(metadata, until) {
                    return true;
                }
            }
            false
        }
        None => {
            for child in children {
                child.prepare_metadata(metadata, None);
            }
            true
        }
    }
}
