//! Syntax-tree data model for a C++-like front end.
//!
//! This crate stands in for the external front end that builds the tree:
//! everything here is an already-built, heterogeneous, DAG-shaped graph of
//! nodes, consumed through read-only queries. There is no parser and no
//! semantic analysis — trees come from a front end, a deserialized file, or
//! a test fixture, and the traversal engine in `alder-visit` only ever asks
//! the questions exposed here.
//!
//! # Node families
//!
//! - **Declarations** ([`Decl`]) — entities with names, redeclaration
//!   chains, and canonical identity.
//! - **Statements/expressions** ([`Stmt`]) — one dense kind enum for both.
//! - **Type locators** ([`TypeLoc`]) — the written syntax of types.
//! - **Template arguments** ([`TemplateArg`]).
//! - **Name qualifiers** ([`Qualifier`]) — `A::B::` chains.
//! - **Declaration names** ([`DeclName`]) — inline values, not arena nodes.
//!
//! # Identity
//!
//! Nodes are addressed by typed arena ids; identity is id equality and
//! never structural equality. The tree is a DAG: template instantiations,
//! specializations, and synthesized declarations are legitimately reachable
//! from more than one parent.
//!
//! # Example
//!
//! ```
//! use alder_ast::{Ast, DeclKind, DeclName};
//!
//! let mut ast = Ast::new();
//! let tu = ast.push_decl(
//!     DeclName::Anonymous,
//!     DeclKind::TranslationUnit { members: vec![] },
//! );
//! ast.set_root(tu);
//! assert_eq!(ast.root(), tu);
//! ```

mod decl;
mod ids;
mod name;
mod stmt;
mod template;
mod tree;
mod type_loc;

pub use decl::{
    BaseSpecifier, CtorInit, CtorInitTarget, Decl, DeclKind, DeclaratorData, EnumData, FieldData,
    FriendTarget, FunctionData, FunctionForm, ParamData, RecordData, RecordKeyword,
    SpecializationData, SpecializationKind, TemplateData, VarData,
};
pub use ids::{DeclId, QualifierId, StmtId, TemplateArgId, TypeLocId};
pub use name::{DeclName, Qualifier, QualifierSegment, SemType};
pub use stmt::{
    BinaryOp, CallExpr, CallForm, Capture, CastExpr, CastForm, ConstructExpr, InitListExpr,
    LambdaExpr, Literal, Stmt, StmtKind, UnaryOp,
};
pub use template::{TemplateArg, TemplateArgKind, TemplateParamList};
pub use tree::Ast;
pub use type_loc::{TypeLoc, TypeLocKind};
