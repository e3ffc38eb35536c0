use std::collections::HashMap;

use super::error::ResolveError;
use super::value::Value;

/// Mutable variable bindings threaded through expression execution.
///
/// Variables are addressed by name, and nested data by dotted property
/// paths such as `order.lines.0.amount`. Map values traverse by field
/// name, list values by decimal index.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionState {
    variables: HashMap<String, Value>,
}

impl ExecutionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`set_variable`](Self::set_variable).
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Bind a variable, replacing any existing binding with the same name.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn get_variable(&self, name: &str) -> Result<&Value, ResolveError> {
        self.variables
            .get(name)
            .ok_or_else(|| ResolveError::UnknownVariable {
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Unbind a variable, returning its value if it was bound.
    pub fn remove_variable(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// Resolve a dotted property path to a value. The first segment names a
    /// variable, each further segment selects a map field or list index.
    /// Errors report the longest prefix that resolved.
    pub fn fetch_by_path(&self, path: &str) -> Result<&Value, ResolveError> {
        let mut segments = path.split('.');
        let name = segments.next().unwrap_or_default();
        let mut current = self.get_variable(name)?;
        let mut walked = name.to_owned();
        for segment in segments {
            current = match current {
                Value::Map(fields) => {
                    fields
                        .get(segment)
                        .ok_or_else(|| ResolveError::UnknownProperty {
                            path: walked.clone(),
                            segment: segment.to_owned(),
                        })?
                }
                Value::List(items) => {
                    let index: usize =
                        segment.parse().map_err(|_| ResolveError::BadListIndex {
                            path: walked.clone(),
                            segment: segment.to_owned(),
                        })?;
                    items
                        .get(index)
                        .ok_or_else(|| ResolveError::UnknownProperty {
                            path: walked.clone(),
                            segment: segment.to_owned(),
                        })?
                }
                _ => return Err(ResolveError::NotTraversable { path: walked }),
            };
            walked.push('.');
            walked.push_str(segment);
        }
        Ok(current)
    }
}
