mod expression;
mod expressions;
mod types;

pub use expression::{ActionExpression, ConditionExpression, Expression};
pub use expressions::{ActionSequence, AndGroup, AssignVariable, Comparison, Loop};
pub use types::{
    CompareOp, DataDef, EvalError, ExecutionState, MetadataState, ResolveError, Value, Violation,
    ViolationList,
};
pub use uuid::Uuid;
