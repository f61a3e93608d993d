//! Typed node identifiers.
//!
//! Every node family is stored in its own arena table inside
//! [`Ast`](crate::Ast), and nodes are addressed by a typed index. Identity is
//! id equality: two ids denote the same node iff they are equal, and two
//! structurally identical nodes with different ids are different nodes. The
//! tree is a DAG, so the same id may be reachable from several parents.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! node_id {
    (
        $(
            $(#[$meta:meta])*
            $name:ident => $label:literal
        ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
                Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub u32);

            impl $name {
                /// Create an id with the given raw value.
                pub fn new(id: u32) -> Self {
                    Self(id)
                }

                /// Get the raw u32 value.
                pub fn as_u32(&self) -> u32 {
                    self.0
                }

                /// Index into the owning arena table.
                pub(crate) fn index(&self) -> usize {
                    self.0 as usize
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, concat!($label, "({})"), self.0)
                }
            }
        )*
    };
}

node_id! {
    /// Identifier of a declaration-family node.
    DeclId => "DeclId",

    /// Identifier of a statement/expression-family node.
    StmtId => "StmtId",

    /// Identifier of a type-locator node (the written syntax of a type).
    TypeLocId => "TypeLocId",

    /// Identifier of a template-argument node.
    TemplateArgId => "TemplateArgId",

    /// Identifier of a name-qualifier node.
    QualifierId => "QualifierId",
}
