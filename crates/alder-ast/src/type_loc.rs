//! The type-locator node family.
//!
//! A type locator is the *written* syntax of a type — `const T *` as it
//! appears in the source — as opposed to the semantic type it denotes.
//! Traversal sticks to locators; semantic types with no written syntax are
//! reported through a separate leaf hook (see
//! [`SemType`](crate::name::SemType)).

use serde::{Deserialize, Serialize};

use crate::ids::{DeclId, QualifierId, StmtId, TemplateArgId, TypeLocId};

/// A type-locator node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeLoc {
    pub kind: TypeLocKind,
}

/// Concrete kind of a type locator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeLocKind {
    Builtin { name: String },
    /// A reference to a named type (typedef, record, enum, template
    /// parameter). The referenced declaration is a back-edge and is not
    /// traversed.
    Named { name: String, target: Option<DeclId> },
    Qualified { quals: String, inner: TypeLocId },
    Pointer { pointee: TypeLocId },
    LValueReference { pointee: TypeLocId },
    RValueReference { pointee: TypeLocId },
    MemberPointer {
        class_type: TypeLocId,
        pointee: TypeLocId,
    },
    Array {
        element: TypeLocId,
        size: Option<StmtId>,
    },
    /// A function type. Parameters are declaration nodes shared with the
    /// function declaration that carries this locator; the traversal
    /// reaches them here.
    Function {
        ret: TypeLocId,
        params: Vec<DeclId>,
    },
    Paren { inner: TypeLocId },
    /// A type with a written scope qualifier, `typename A::B`.
    Elaborated {
        qualifier: Option<QualifierId>,
        named: TypeLocId,
    },
    TemplateSpecialization {
        name: String,
        args: Vec<TemplateArgId>,
    },
    PackExpansion { pattern: TypeLocId },
    Atomic { value: TypeLocId },
    Decltype { expr: StmtId },
    TypeOfExpr { expr: StmtId },

    /// A type-locator kind outside the classified set. Traversal treats it
    /// as a leaf rather than failing.
    Unclassified { tag: u32 },
}

impl TypeLoc {
    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            TypeLocKind::Builtin { .. } => "Builtin",
            TypeLocKind::Named { .. } => "Named",
            TypeLocKind::Qualified { .. } => "Qualified",
            TypeLocKind::Pointer { .. } => "Pointer",
            TypeLocKind::LValueReference { .. } => "LValueReference",
            TypeLocKind::RValueReference { .. } => "RValueReference",
            TypeLocKind::MemberPointer { .. } => "MemberPointer",
            TypeLocKind::Array { .. } => "Array",
            TypeLocKind::Function { .. } => "Function",
            TypeLocKind::Paren { .. } => "Paren",
            TypeLocKind::Elaborated { .. } => "Elaborated",
            TypeLocKind::TemplateSpecialization { .. } => "TemplateSpecialization",
            TypeLocKind::PackExpansion { .. } => "PackExpansion",
            TypeLocKind::Atomic { .. } => "Atomic",
            TypeLocKind::Decltype { .. } => "Decltype",
            TypeLocKind::TypeOfExpr { .. } => "TypeOfExpr",
            TypeLocKind::Unclassified { .. } => "Unclassified",
        }
    }
}
