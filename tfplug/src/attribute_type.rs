use std::collections::HashMap;
use std::fmt;

/// Element and value types for attributes. Int64, Int32 and Float64 are
/// number-backed but keep their precision in descriptors.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    Bool,
    Number,
    Int64,
    Int32,
    Float64,
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(HashMap<String, AttributeType>),
}

impl AttributeType {
    pub fn list_of(element: AttributeType) -> Self {
        AttributeType::List(Box::new(element))
    }

    pub fn set_of(element: AttributeType) -> Self {
        AttributeType::Set(Box::new(element))
    }

    pub fn map_of(element: AttributeType) -> Self {
        AttributeType::Map(Box::new(element))
    }

    /// Element type of a list, set or map
    pub fn element_type(&self) -> Option<&AttributeType> {
        match self {
            AttributeType::List(e) | AttributeType::Set(e) | AttributeType::Map(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        self.element_type().is_some()
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::String => write!(f, "string"),
            AttributeType::Bool => write!(f, "bool"),
            AttributeType::Number => write!(f, "number"),
            AttributeType::Int64 => write!(f, "int64"),
            AttributeType::Int32 => write!(f, "int32"),
            AttributeType::Float64 => write!(f, "float64"),
            AttributeType::List(e) => write!(f, "list({})", e),
            AttributeType::Set(e) => write!(f, "set({})", e),
            AttributeType::Map(e) => write!(f, "map({})", e),
            AttributeType::Object(attrs) => {
                let mut names: Vec<_> = attrs.iter().collect();
                names.sort_by(|a, b| a.0.cmp(b.0));
                write!(f, "object({{")?;
                for (i, (name, ty)) in names.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", name, ty)?;
                }
                write!(f, "}})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_constructors_wrap_element_type() {
        let list = AttributeType::list_of(AttributeType::String);
        let set = AttributeType::set_of(AttributeType::Int64);
        let map = AttributeType::map_of(AttributeType::Bool);

        assert_eq!(list.element_type(), Some(&AttributeType::String));
        assert_eq!(set.element_type(), Some(&AttributeType::Int64));
        assert_eq!(map.element_type(), Some(&AttributeType::Bool));
    }

    #[test]
    fn scalar_types_have_no_element_type() {
        assert!(AttributeType::Float64.element_type().is_none());
        assert!(!AttributeType::Int32.is_collection());
    }

    #[test]
    fn object_type_displays_sorted_attributes() {
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), AttributeType::String);
        attrs.insert("age".to_string(), AttributeType::Int64);

        let attr_type = AttributeType::Object(attrs);
        assert_eq!(attr_type.to_string(), "object({age=int64, name=string})");
    }

    #[test]
    fn nested_collection_types_display() {
        let attr_type = AttributeType::list_of(AttributeType::map_of(AttributeType::String));

        assert_eq!(attr_type.to_string(), "list(map(string))");
    }
}
