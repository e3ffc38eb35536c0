use std::collections::HashMap;
use std::fmt;

/// Static type descriptors for variables, mirroring the kinds of
/// [`Value`](super::Value). Integrity checking reasons about these
/// instead of runtime values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataDef {
    /// A 64-bit signed integer.
    Int,
    /// A 64-bit floating-point number.
    Float,
    /// A boolean value.
    Bool,
    /// A UTF-8 string.
    String,
    /// An ordered sequence whose items all share the boxed definition.
    List(Box<DataDef>),
    /// A string-keyed record with a definition per field.
    Map(HashMap<String, DataDef>),
}

impl DataDef {
    /// Shorthand for a homogeneous list definition.
    #[must_use]
    pub fn list_of(item: DataDef) -> Self {
        DataDef::List(Box::new(item))
    }

    /// Shorthand for a map definition from field name and definition pairs.
    #[must_use]
    pub fn map(fields: impl IntoIterator<Item = (String, DataDef)>) -> Self {
        DataDef::Map(fields.into_iter().collect())
    }

    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, DataDef::List(_))
    }

    /// The item definition of a list, or `None` for any other kind.
    #[must_use]
    pub fn item_def(&self) -> Option<&DataDef> {
        match self {
            DataDef::List(item) => Some(item),
            _ => None,
        }
    }

    /// Whether values of this definition can take part in comparisons.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            DataDef::Int | DataDef::Float | DataDef::Bool | DataDef::String
        )
    }

    /// Lowercase kind name, used in error and violation messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            DataDef::Int => "int",
            DataDef::Float => "float",
            DataDef::Bool => "bool",
            DataDef::String => "string",
            DataDef::List(_) => "list",
            DataDef::Map(_) => "map",
        }
    }
}

impl fmt::Display for DataDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataDef::List(item) => write!(f, "list of {item}"),
            DataDef::Map(_) => write!(f, "map"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_of_builds_nested_definition() {
        let def = DataDef::list_of(DataDef::Int);
        assert!(def.is_list());
        assert_eq!(def.item_def(), Some(&DataDef::Int));
    }

    #[test]
    fn item_def_is_none_for_scalars() {
        assert_eq!(DataDef::Int.item_def(), None);
        assert_eq!(DataDef::String.item_def(), None);
    }

    #[test]
    fn scalar_classification() {
        assert!(DataDef::Int.is_scalar());
        assert!(DataDef::Float.is_scalar());
        assert!(DataDef::Bool.is_scalar());
        assert!(DataDef::String.is_scalar());
        assert!(!DataDef::list_of(DataDef::Int).is_scalar());
        assert!(!DataDef::map([]).is_scalar());
    }

    #[test]
    fn map_constructor_collects_fields() {
        let def = DataDef::map([
            ("age".to_owned(), DataDef::Int),
            ("name".to_owned(), DataDef::String),
        ]);
        match &def {
            DataDef::Map(fields) => {
                assert_eq!(fields.get("age"), Some(&DataDef::Int));
                assert_eq!(fields.get("name"), Some(&DataDef::String));
            }
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(DataDef::Int.to_string(), "int");
        assert_eq!(DataDef::list_of(DataDef::String).to_string(), "list of string");
        assert_eq!(
            DataDef::list_of(DataDef::list_of(DataDef::Int)).to_string(),
            "list of list of int"
        );
        assert_eq!(DataDef::map([]).to_string(), "map");
    }
}
