use std::collections::HashMap;

use super::definition::DataDef;
use super::error::ResolveError;

/// Static counterpart of [`ExecutionState`](super::ExecutionState): maps
/// variable names to definitions instead of values. Integrity checking
/// and metadata preparation mutate this state to mirror the variables
/// each expression would add at runtime.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataState {
    definitions: HashMap<String, DataDef>,
}

impl MetadataState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`set_definition`](Self::set_definition).
    #[must_use]
    pub fn with_definition(mut self, name: impl Into<String>, def: DataDef) -> Self {
        self.definitions.insert(name.into(), def);
        self
    }

    /// Declare a variable definition, replacing any existing one.
    pub fn set_definition(&mut self, name: impl Into<String>, def: DataDef) {
        self.definitions.insert(name.into(), def);
    }

    pub fn get_definition(&self, name: &str) -> Result<&DataDef, ResolveError> {
        self.definitions
            .get(name)
            .ok_or_else(|| ResolveError::UnknownVariable {
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub fn has_definition(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Retract a variable definition, returning it if it was declared.
    pub fn remove_definition(&mut self, name: &str) -> Option<DataDef> {
        self.definitions.remove(name)
    }

    /// Resolve a dotted property path to a definition, walking the same
    /// shape as [`ExecutionState::fetch_by_path`]. Any decimal index
    /// resolves against a list definition; bounds are a runtime concern.
    ///
    /// [`ExecutionState::fetch_by_path`]: super::ExecutionState::fetch_by_path
    pub fn fetch_definition_by_path(&self, path: &str) -> Result<&DataDef, ResolveError> {
        let mut segments = path.split('.');
        let name = segments.next().unwrap_or_default();
        let mut current = self.get_definition(name)?;
        let mut walked = name.to_owned();
        for segment in segments {
            current = match current {
                DataDef::Map(fields) => {
                    fields
                        .get(segment)
                        .ok_or_else(|| ResolveError::UnknownProperty {
                            path: walked.clone(),
                            segment: segment.to_owned(),
                        })?
                }
                DataDef::List(item) => {
                    if segment.parse::<usize>().is_err() {
                        return Err(ResolveError::BadListIndex {
                            path: walked,
                            segment: segment.to_owned(),
                        });
                    }
                    item
                }
                _ => return Err(ResolveError::NotTraversable { path: walked }),
            };
            walked.push('.');
            walked.push_str(segment);
        }
        Ok(current)
    }
}
