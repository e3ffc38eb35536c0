mod definition;
mod error;
mod metadata;
mod state;
mod value;
mod violation;

pub use definition::DataDef;
pub use error::{EvalError, ResolveError};
pub use metadata::MetadataState;
pub use state::ExecutionState;
pub use value::{CompareOp, Value};
pub use violation::{Violation, ViolationList};
