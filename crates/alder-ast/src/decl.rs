//! The declaration node family.
//!
//! Declaration kinds form an overlapping classification lattice rather than
//! a flat partition: a constructor is also a function, a function is also a
//! declarator, a class template specialization is also a record. The flat
//! [`DeclKind`] enum carries the concrete kind; the capability queries
//! (`as_declarator`, `as_function`, `as_record`, `as_template`,
//! `specialization`) expose the lattice so consumers can test categories in
//! an explicit, most-specific-first order.
//!
//! # Redeclarations and canonical identity
//!
//! An entity may be declared several times (forward declaration plus
//! definition, repeated `extern` declarations). Every [`Decl`] records the
//! id of its canonical representative; two declarations denote the same
//! entity iff their canonical ids are equal. Per-entity structures that must
//! be visited exactly once (template specialization sets) hang off the
//! canonical declaration.

use serde::{Deserialize, Serialize};

use crate::ids::{DeclId, QualifierId, StmtId, TemplateArgId, TypeLocId};
use crate::name::{DeclName, SemType};
use crate::template::TemplateParamList;

/// A declaration-family node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decl {
    pub name: DeclName,
    pub kind: DeclKind,
    /// Canonical representative of this entity's redeclaration chain.
    /// Equal to the node's own id for first declarations.
    pub canonical: DeclId,
    /// True for compiler-synthesized declarations the programmer never
    /// wrote (closure classes, implicit members, instantiations).
    pub implicit: bool,
}

/// Concrete kind of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeclKind {
    /// The root of the tree. Exactly one per [`Ast`](crate::Ast).
    TranslationUnit { members: Vec<DeclId> },
    Namespace { members: Vec<DeclId> },
    /// `extern "C" { ... }` and friends.
    LinkageSpec { language: String, members: Vec<DeclId> },
    Export { members: Vec<DeclId> },

    Record(RecordData),
    Enum(EnumData),
    EnumConstant { init: Option<StmtId> },
    /// `typedef` and `using` aliases; the aliased type is written syntax.
    TypeAlias { type_loc: TypeLocId },

    Var(VarData),
    Param(ParamData),
    Field(FieldData),
    Function(FunctionData),

    ClassTemplate(TemplateData),
    FunctionTemplate(TemplateData),
    VarTemplate(TemplateData),
    ClassTemplateSpecialization {
        spec: SpecializationData,
        record: RecordData,
    },
    ClassTemplatePartialSpecialization {
        spec: SpecializationData,
        params: TemplateParamList,
        /// The argument pattern written after the template name.
        args_written: Vec<TemplateArgId>,
        record: RecordData,
    },

    TemplateTypeParam { default_type: Option<TypeLocId> },
    NonTypeTemplateParam {
        type_loc: Option<TypeLocId>,
        default_value: Option<StmtId>,
    },
    TemplateTemplateParam { params: TemplateParamList },

    Friend(FriendTarget),
    FriendTemplate {
        params: TemplateParamList,
        target: FriendTarget,
    },

    StaticAssert {
        condition: StmtId,
        message: Option<StmtId>,
    },
    FileScopeAsm { string: StmtId },

    /// A declaration kind outside the classified set. Traversal treats it
    /// as a leaf rather than failing.
    Unclassified { tag: u32 },
}

/// Record (class/struct/union) payload, shared by plain records and class
/// template specializations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordData {
    pub keyword: RecordKeyword,
    /// Out-of-line qualifier, e.g. the `N::` in `struct N::S { ... };`.
    pub qualifier: Option<QualifierId>,
    pub bases: Vec<BaseSpecifier>,
    pub members: Vec<DeclId>,
    pub is_definition: bool,
    /// Set when this record is the synthesized closure class of a lambda.
    /// Such a record is skipped when enumerating its lexical container's
    /// members and visited under the lambda expression instead.
    pub closure_of: Option<StmtId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKeyword {
    Struct,
    Class,
    Union,
}

/// One base class in a record definition's base list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSpecifier {
    pub type_loc: TypeLocId,
    pub is_virtual: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumData {
    pub qualifier: Option<QualifierId>,
    pub is_scoped: bool,
    /// Written underlying type, e.g. the `: u8` part.
    pub underlying: Option<TypeLocId>,
    pub members: Vec<DeclId>,
    pub is_definition: bool,
}

/// Syntax shared by every declarator-like declaration: variables,
/// parameters, fields, functions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeclaratorData {
    /// Out-of-line qualifier; visited before the declarator type.
    pub qualifier: Option<QualifierId>,
    /// Template parameter lists preceding an out-of-line member of a class
    /// template, outermost first.
    pub outer_params: Vec<TemplateParamList>,
    /// The written type. `None` for declarations with no written type
    /// syntax; `implicit_type` then carries the inferred value.
    pub type_loc: Option<TypeLocId>,
    pub implicit_type: Option<SemType>,
    pub trailing_requires: Option<StmtId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarData {
    pub declarator: DeclaratorData,
    pub init: Option<StmtId>,
    pub is_definition: bool,
    /// Present when this variable is a specialization of a variable
    /// template.
    pub specialization: Option<SpecializationData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamData {
    pub declarator: DeclaratorData,
    pub default_value: Option<StmtId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldData {
    pub declarator: DeclaratorData,
    pub bit_width: Option<StmtId>,
    pub init: Option<StmtId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionData {
    pub declarator: DeclaratorData,
    pub form: FunctionForm,
    /// Parameter declarations. When the declarator carries a function type
    /// locator, that locator references these same ids; the traversal then
    /// reaches them through the locator, not through this list.
    pub params: Vec<DeclId>,
    /// Member initializers; populated only on a defining constructor.
    pub ctor_inits: Vec<CtorInit>,
    pub body: Option<StmtId>,
    pub is_definition: bool,
    /// Present when this function is a specialization of a function
    /// template.
    pub specialization: Option<SpecializationData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionForm {
    Free,
    Method,
    Constructor,
    Destructor,
    Conversion,
    DeductionGuide,
}

/// A constructor member initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtorInit {
    pub target: CtorInitTarget,
    pub init: StmtId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CtorInitTarget {
    /// Initializes a base class; the class name is written type syntax.
    Base { type_loc: TypeLocId },
    /// Delegates to a sibling constructor; likewise written syntax.
    Delegating { type_loc: TypeLocId },
    /// Initializes a member; the member name is not separate type syntax.
    Member { field: DeclId },
}

/// Payload of a template declaration (class, function, or variable
/// template).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    pub params: TemplateParamList,
    /// The entity being templated (a record, function, or variable decl).
    pub templated: DeclId,
    /// Specialization set. Meaningful only on the canonical declaration;
    /// includes implicit instantiations, explicit instantiations, and
    /// explicit specializations, but not partial specializations (those
    /// are ordinary members of their lexical context).
    pub specializations: Vec<DeclId>,
}

/// Data attached to a specialization of a templated entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationData {
    pub kind: SpecializationKind,
    /// The template this node was actually instantiated from: the primary
    /// template, or a partial specialization. `None` for specializations
    /// with no resolved origin (deduction-guide-only specializations),
    /// which are attributed to the primary.
    pub instantiated_from: Option<DeclId>,
    /// Explicitly written template arguments, when the programmer wrote
    /// them (explicit and partial specializations).
    pub args_written: Option<Vec<TemplateArgId>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecializationKind {
    ImplicitInstantiation,
    ExplicitInstantiationDecl,
    ExplicitInstantiationDef,
    ExplicitSpecialization,
}

impl SpecializationKind {
    /// True for specializations produced by instantiation, as opposed to
    /// an explicit specialization the programmer wrote out.
    pub fn is_instantiation(&self) -> bool {
        !matches!(self, SpecializationKind::ExplicitSpecialization)
    }
}

/// Target of a friend declaration: either a declaration or a bare type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FriendTarget {
    Decl(DeclId),
    Type(TypeLocId),
}

impl Decl {
    /// Declarator-lattice capability: variables, parameters, fields, and
    /// functions all carry declarator syntax.
    pub fn as_declarator(&self) -> Option<&DeclaratorData> {
        match &self.kind {
            DeclKind::Var(v) => Some(&v.declarator),
            DeclKind::Param(p) => Some(&p.declarator),
            DeclKind::Field(f) => Some(&f.declarator),
            DeclKind::Function(f) => Some(&f.declarator),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionData> {
        match &self.kind {
            DeclKind::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Record-lattice capability: plain records and class template
    /// (partial) specializations all carry record syntax.
    pub fn as_record(&self) -> Option<&RecordData> {
        match &self.kind {
            DeclKind::Record(r) => Some(r),
            DeclKind::ClassTemplateSpecialization { record, .. } => Some(record),
            DeclKind::ClassTemplatePartialSpecialization { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn as_template(&self) -> Option<&TemplateData> {
        match &self.kind {
            DeclKind::ClassTemplate(t)
            | DeclKind::FunctionTemplate(t)
            | DeclKind::VarTemplate(t) => Some(t),
            _ => None,
        }
    }

    /// Specialization data regardless of which entity category carries it.
    pub fn specialization(&self) -> Option<&SpecializationData> {
        match &self.kind {
            DeclKind::ClassTemplateSpecialization { spec, .. } => Some(spec),
            DeclKind::ClassTemplatePartialSpecialization { spec, .. } => Some(spec),
            DeclKind::Function(f) => f.specialization.as_ref(),
            DeclKind::Var(v) => v.specialization.as_ref(),
            _ => None,
        }
    }

    /// Members of a pure declaration container (translation unit,
    /// namespace, linkage spec, export). Records and enums enumerate their
    /// members through record/enum-specific traversal instead.
    pub fn container_members(&self) -> Option<&[DeclId]> {
        match &self.kind {
            DeclKind::TranslationUnit { members }
            | DeclKind::Namespace { members }
            | DeclKind::LinkageSpec { members, .. }
            | DeclKind::Export { members } => Some(members),
            _ => None,
        }
    }

    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            DeclKind::TranslationUnit { .. } => "TranslationUnit",
            DeclKind::Namespace { .. } => "Namespace",
            DeclKind::LinkageSpec { .. } => "LinkageSpec",
            DeclKind::Export { .. } => "Export",
            DeclKind::Record(_) => "Record",
            DeclKind::Enum(_) => "Enum",
            DeclKind::EnumConstant { .. } => "EnumConstant",
            DeclKind::TypeAlias { .. } => "TypeAlias",
            DeclKind::Var(_) => "Var",
            DeclKind::Param(_) => "Param",
            DeclKind::Field(_) => "Field",
            DeclKind::Function(_) => "Function",
            DeclKind::ClassTemplate(_) => "ClassTemplate",
            DeclKind::FunctionTemplate(_) => "FunctionTemplate",
            DeclKind::VarTemplate(_) => "VarTemplate",
            DeclKind::ClassTemplateSpecialization { .. } => "ClassTemplateSpecialization",
            DeclKind::ClassTemplatePartialSpecialization { .. } => {
                "ClassTemplatePartialSpecialization"
            }
            DeclKind::TemplateTypeParam { .. } => "TemplateTypeParam",
            DeclKind::NonTypeTemplateParam { .. } => "NonTypeTemplateParam",
            DeclKind::TemplateTemplateParam { .. } => "TemplateTemplateParam",
            DeclKind::Friend(_) => "Friend",
            DeclKind::FriendTemplate { .. } => "FriendTemplate",
            DeclKind::StaticAssert { .. } => "StaticAssert",
            DeclKind::FileScopeAsm { .. } => "FileScopeAsm",
            DeclKind::Unclassified { .. } => "Unclassified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declarator() -> DeclaratorData {
        DeclaratorData::default()
    }

    #[test]
    fn function_is_also_a_declarator() {
        let d = Decl {
            name: DeclName::ident("f"),
            kind: DeclKind::Function(FunctionData {
                declarator: declarator(),
                form: FunctionForm::Free,
                params: vec![],
                ctor_inits: vec![],
                body: None,
                is_definition: false,
                specialization: None,
            }),
            canonical: DeclId(0),
            implicit: false,
        };
        assert!(d.as_declarator().is_some());
        assert!(d.as_function().is_some());
        assert!(d.as_record().is_none());
    }

    #[test]
    fn specialization_is_also_a_record() {
        let d = Decl {
            name: DeclName::ident("S"),
            kind: DeclKind::ClassTemplateSpecialization {
                spec: SpecializationData {
                    kind: SpecializationKind::ImplicitInstantiation,
                    instantiated_from: Some(DeclId(1)),
                    args_written: None,
                },
                record: RecordData {
                    keyword: RecordKeyword::Struct,
                    qualifier: None,
                    bases: vec![],
                    members: vec![],
                    is_definition: true,
                    closure_of: None,
                },
            },
            canonical: DeclId(0),
            implicit: true,
        };
        assert!(d.as_record().is_some());
        assert!(d.specialization().is_some());
        assert!(d.specialization().unwrap().kind.is_instantiation());
    }

    #[test]
    fn explicit_specialization_is_not_an_instantiation() {
        assert!(!SpecializationKind::ExplicitSpecialization.is_instantiation());
        assert!(SpecializationKind::ImplicitInstantiation.is_instantiation());
        assert!(SpecializationKind::ExplicitInstantiationDef.is_instantiation());
    }
}
