//! The mutable traversal facade.
//!
//! The read-only engine never needs mutable access, and nothing stops a
//! client from smuggling a mutable tree handle into a [`Visitor`]
//! implementation on its own. This facade exists so that a client wanting
//! to mutate the tree during traversal has a clearly-named override point
//! instead of an ad hoc back door: implement [`MutVisitor`], expand
//! [`forward_to_mut!`] inside the `impl Visitor` block, and override
//! `visit_decl_mut`/`visit_stmt_mut`.
//!
//! The default mutable hooks recurse using the read-only engine's own walk
//! functions, so the facade adds exactly one extra dispatch per covered
//! node and preserves node-for-node traversal-order equivalence with the
//! read-only engine — a tested property, not an aspiration.
//!
//! Structural edits beneath the node currently being visited take effect
//! on the next traversal, not the current one: each walk snapshots a
//! node's child ids before recursing.
//!
//! ```
//! use alder_ast::{Ast, DeclId, DeclName};
//! use alder_visit::{forward_to_mut, DeclContext, MutVisitor, Visitor};
//!
//! struct Renamer<'a> {
//!     ast: &'a mut Ast,
//! }
//!
//! impl Visitor for Renamer<'_> {
//!     fn ast(&self) -> &Ast {
//!         self.ast
//!     }
//!
//!     forward_to_mut!();
//! }
//!
//! impl MutVisitor for Renamer<'_> {
//!     fn ast_mut(&mut self) -> &mut Ast {
//!         self.ast
//!     }
//!
//!     fn visit_decl_mut(&mut self, context: DeclContext, decl: DeclId) {
//!         self.ast_mut().decl_mut(decl).name = DeclName::ident("renamed");
//!         alder_visit::walk_decl(self, context, decl);
//!     }
//! }
//! ```

use alder_ast::{Ast, DeclId, StmtId};

use crate::context::{DeclContext, StmtContext};
use crate::traits::Visitor;
use crate::walk;

/// A [`Visitor`] with mutable access to the tree between hook calls.
///
/// Only the declaration and statement families get mutable hooks; the
/// remaining families are reached through id handles that carry no
/// constness of their own, so their read-only hooks already suffice.
pub trait MutVisitor: Visitor {
    /// Mutable access to the tree being traversed.
    fn ast_mut(&mut self) -> &mut Ast;

    /// Mutable counterpart of `visit_decl`. Default: recurse using the
    /// read-only engine's default.
    fn visit_decl_mut(&mut self, context: DeclContext, decl: DeclId) {
        walk::walk_decl(self, context, decl);
    }

    /// Mutable counterpart of `visit_stmt`. Default: recurse using the
    /// read-only engine's default.
    fn visit_stmt_mut(&mut self, context: StmtContext, stmt: StmtId) {
        walk::walk_stmt(self, context, stmt);
    }
}

/// Generate the read-only `visit_decl`/`visit_stmt` overrides that forward
/// to the mutable hooks. Expand inside an `impl Visitor` block of a type
/// that also implements [`MutVisitor`]; recursion below any node then
/// routes every declaration and statement through the mutable hooks.
#[macro_export]
macro_rules! forward_to_mut {
    () => {
        fn visit_decl(&mut self, context: $crate::DeclContext, decl: $crate::DeclId) {
            $crate::MutVisitor::visit_decl_mut(self, context, decl);
        }

        fn visit_stmt(&mut self, context: $crate::StmtContext, stmt: $crate::StmtId) {
            $crate::MutVisitor::visit_stmt_mut(self, context, stmt);
        }
    };
}
