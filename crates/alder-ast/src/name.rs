//! Declaration names, name qualifiers, and semantic types.

use serde::{Deserialize, Serialize};

use crate::ids::{QualifierId, TypeLocId};

/// The name of a declared entity, or of an entity being referenced.
///
/// Most names are plain identifiers. The interesting case is a conversion
/// function (`operator T`): its name embeds written type syntax, which the
/// traversal engine visits like any other type locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclName {
    /// An ordinary identifier.
    Identifier(String),
    /// A constructor. The class name is not separate syntax.
    Constructor,
    /// A destructor.
    Destructor,
    /// A conversion function; the target type is written syntax.
    Conversion { type_loc: TypeLocId },
    /// An overloaded operator, e.g. `operator+`.
    Operator(String),
    /// An unnamed entity (anonymous struct, unnamed parameter).
    Anonymous,
}

impl DeclName {
    /// Convenience constructor for identifier names.
    pub fn ident(name: impl Into<String>) -> Self {
        DeclName::Identifier(name.into())
    }

    /// Render the name for diagnostics.
    pub fn display(&self) -> String {
        match self {
            DeclName::Identifier(s) => s.clone(),
            DeclName::Constructor => "(constructor)".to_string(),
            DeclName::Destructor => "(destructor)".to_string(),
            DeclName::Conversion { .. } => "operator(conversion)".to_string(),
            DeclName::Operator(op) => format!("operator{op}"),
            DeclName::Anonymous => "(anonymous)".to_string(),
        }
    }
}

/// One component of a nested name qualifier (`A::B::`).
///
/// Qualifiers form a linked list through `prefix`: `A::B::` is a
/// [`Qualifier`] whose segment is `B` and whose prefix is the qualifier for
/// `A::`. The traversal engine visits the prefix before the final component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifier {
    /// The qualifier to the left of this segment, if any.
    pub prefix: Option<QualifierId>,
    /// The final component of this qualifier.
    pub segment: QualifierSegment,
}

/// The final component of a [`Qualifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualifierSegment {
    /// The global scope, `::`.
    Global,
    /// A namespace name.
    Namespace { name: String },
    /// A type written as scope syntax, e.g. `vector<T>::`.
    TypeSpec { type_loc: TypeLocId },
    /// A dependent identifier that could not be resolved to a type.
    Identifier { name: String },
    /// A segment kind this library does not classify.
    Unclassified { tag: u32 },
}

/// A semantic type with no written syntax behind it.
///
/// Used where the front end synthesized a type the programmer never wrote
/// (an implicit method's signature, a compiler-generated declaration). The
/// engine reports these through a dedicated leaf hook instead of the type
/// locator path, so clients can keep real syntax and inferred values apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemType(pub String);

impl SemType {
    pub fn new(rendered: impl Into<String>) -> Self {
        SemType(rendered.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decl_name_display() {
        assert_eq!(DeclName::ident("x").display(), "x");
        assert_eq!(DeclName::Operator("+".into()).display(), "operator+");
        assert_eq!(DeclName::Constructor.display(), "(constructor)");
    }

    #[test]
    fn qualifier_chains_through_prefix() {
        let inner = Qualifier {
            prefix: None,
            segment: QualifierSegment::Namespace { name: "A".into() },
        };
        let outer = Qualifier {
            prefix: Some(QualifierId(0)),
            segment: QualifierSegment::Namespace { name: "B".into() },
        };
        assert!(inner.prefix.is_none());
        assert_eq!(outer.prefix, Some(QualifierId(0)));
    }
}
