use std::fmt;

use uuid::Uuid;

/// A single integrity problem found in an expression tree, tied to the
/// expression that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    message: String,
    uuid: Uuid,
}

impl Violation {
    #[must_use]
    pub fn new(message: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            message: message.into(),
            uuid,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Uuid of the expression the violation belongs to.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

/// Accumulated result of an integrity check. An empty list means the
/// tree is safe to execute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViolationList {
    violations: Vec<Violation>,
}

impl ViolationList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_with_message(&mut self, message: impl Into<String>, uuid: Uuid) {
        self.violations.push(Violation::new(message, uuid));
    }

    /// Append all violations from another list.
    pub fn merge(&mut self, other: ViolationList) {
        self.violations.extend(other.violations);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation.message())?;
        }
        Ok(())
    }
}
