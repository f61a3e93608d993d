//! Template arguments and template parameter lists.

use serde::{Deserialize, Serialize};

use crate::ids::{DeclId, StmtId, TemplateArgId, TypeLocId};

/// A template-argument node, as written at a use site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateArg {
    pub kind: TemplateArgKind,
}

/// Concrete kind of a template argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemplateArgKind {
    /// A type argument; the written type is traversed.
    Type { type_loc: TypeLocId },
    /// A value argument that is still an expression.
    Expression { expr: StmtId },
    /// A template-name argument, `template <...> class X` bound to `X`.
    Template { name: String },
    /// A value argument the front end already evaluated.
    Integral { value: i64, type_name: String },
    /// An argument pack; elements are traversed in order.
    Pack { elements: Vec<TemplateArgId> },

    /// A template-argument kind outside the classified set. Traversal
    /// treats it as a leaf rather than failing.
    Unclassified { tag: u32 },
}

impl TemplateArg {
    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            TemplateArgKind::Type { .. } => "Type",
            TemplateArgKind::Expression { .. } => "Expression",
            TemplateArgKind::Template { .. } => "Template",
            TemplateArgKind::Integral { .. } => "Integral",
            TemplateArgKind::Pack { .. } => "Pack",
            TemplateArgKind::Unclassified { .. } => "Unclassified",
        }
    }
}

/// A template parameter list: the parameters, then the requires clause if
/// one was written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateParamList {
    pub params: Vec<DeclId>,
    pub requires_clause: Option<StmtId>,
}
