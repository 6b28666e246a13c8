//! Type tags attached to declarations.
//!
//! Tags are bookkeeping only: the front end records what a declaration says
//! (or `Unknown` when it says nothing) and never infers or checks types.
//!
//! - Primitive tags (int, float, bool, string, void, null)
//! - Function shapes built from parameter and return tags
//! - Named shapes (struct, class, generic, custom)

use std::fmt::Display;

use super::ast::join;

/// A named field of a struct or class tag.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub field_type: TypeTag,
}

impl Display for StructField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field_type, self.name)
    }
}

#[derive(Debug, Clone)]
pub enum TypeTag {
    Int,
    Float,
    Bool,
    String,
    Void,
    Null,
    Unknown,
    Function {
        parameters: Vec<TypeTag>,
        return_type: Box<TypeTag>,
    },
    Struct {
        name: String,
        fields: Vec<StructField>,
    },
    Class {
        name: String,
        fields: Vec<StructField>,
    },
    Generic {
        name: String,
        parameters: Vec<TypeTag>,
    },
    Custom(String),
}

impl TypeTag {
    pub fn function(parameters: Vec<TypeTag>, return_type: TypeTag) -> Self {
        TypeTag::Function {
            parameters,
            return_type: Box::new(return_type),
        }
    }

    pub fn generic(name: &str, parameters: Vec<TypeTag>) -> Self {
        TypeTag::Generic {
            name: name.to_string(),
            parameters,
        }
    }

    pub fn structure(name: &str, fields: Vec<StructField>) -> Self {
        TypeTag::Struct {
            name: name.to_string(),
            fields,
        }
    }

    pub fn class(name: &str, fields: Vec<StructField>) -> Self {
        TypeTag::Class {
            name: name.to_string(),
            fields,
        }
    }

    /// Returns the name carried by named tags.
    pub fn get_name(&self) -> Option<&str> {
        match self {
            TypeTag::Struct { name, .. }
            | TypeTag::Class { name, .. }
            | TypeTag::Generic { name, .. } => Some(name),
            TypeTag::Custom(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, TypeTag::Function { .. })
    }
}

// Equality is by kind and name, plus the parameter lists of function and
// generic tags. Return types and field lists do not take part.
impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                TypeTag::Function { parameters: a, .. },
                TypeTag::Function { parameters: b, .. },
            ) => a == b,
            (
                TypeTag::Generic {
                    name: a_name,
                    parameters: a,
                },
                TypeTag::Generic {
                    name: b_name,
                    parameters: b,
                },
            ) => a_name == b_name && a == b,
            (TypeTag::Struct { name: a, .. }, TypeTag::Struct { name: b, .. }) => a == b,
            (TypeTag::Class { name: a, .. }, TypeTag::Class { name: b, .. }) => a == b,
            (TypeTag::Custom(a), TypeTag::Custom(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::Int => write!(f, "int"),
            TypeTag::Float => write!(f, "float"),
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::String => write!(f, "string"),
            TypeTag::Void => write!(f, "void"),
            TypeTag::Null => write!(f, "null"),
            TypeTag::Unknown => write!(f, "unknown"),
            TypeTag::Function {
                parameters,
                return_type,
            } => write!(f, "fn({}) -> {}", join(parameters), return_type),
            TypeTag::Struct { name, fields } => write_fields(f, "struct", name, fields),
            TypeTag::Class { name, fields } => write_fields(f, "class", name, fields),
            TypeTag::Generic { name, parameters } => {
                write!(f, "{}<{}>", name, join(parameters))
            }
            TypeTag::Custom(name) => write!(f, "{}", name),
        }
    }
}

fn write_fields(
    f: &mut std::fmt::Formatter<'_>,
    keyword: &str,
    name: &str,
    fields: &[StructField],
) -> std::fmt::Result {
    if fields.is_empty() {
        return write!(f, "{} {} {{}}", keyword, name);
    }

    let fields = fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<String>>()
        .join("; ");
    write!(f, "{} {} {{ {} }}", keyword, name, fields)
}
