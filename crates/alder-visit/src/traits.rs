//! The `Visitor` trait: the engine's public hook surface.
//!
//! Each hook is both an override point and the traversal mechanism: the
//! default body of every hook is the corresponding `walk_*` function, which
//! recurses into the node's children. A client that overrides a hook and
//! wants to continue below that node must re-invoke the `walk_*` function;
//! not doing so halts recursion at that point. This is the mechanism for
//! filtering, pre/post-order bracketing, and scoped state:
//!
//! ```
//! use alder_ast::{Ast, DeclId};
//! use alder_visit::{walk_decl, DeclContext, Visitor};
//!
//! struct DeclCounter<'a> {
//!     ast: &'a Ast,
//!     count: usize,
//! }
//!
//! impl Visitor for DeclCounter<'_> {
//!     fn ast(&self) -> &Ast {
//!         self.ast
//!     }
//!
//!     fn visit_decl(&mut self, context: DeclContext, decl: DeclId) {
//!         self.count += 1;
//!         // Pre-order work happens before this call, post-order after.
//!         walk_decl(self, context, decl);
//!     }
//! }
//! ```
//!
//! The visitor owns no tree state; seen-sets, nesting flags, and other
//! traversal state belong to the implementing struct and live for one
//! traversal invocation.

use alder_ast::{Ast, DeclId, DeclName, SemType, StmtId, TemplateArgId, TypeLocId};
use alder_ast::QualifierId;

use crate::context::{
    DeclContext, DeclNameContext, QualifierContext, StmtContext, TemplateArgContext, TypeContext,
};
use crate::walk;

/// Read-only pre-order visitor over an [`Ast`].
pub trait Visitor {
    /// The tree being traversed. The engine consults it for every
    /// classification and child-access query.
    fn ast(&self) -> &Ast;

    /// Instantiation-ordering policy. The default (`false`) visits a
    /// template's instantiations at its canonical declaration, which can
    /// place an instantiation before the template body it was instantiated
    /// from. Returning `true` selects the experimental definition-first
    /// policy: instantiations are visited at the declaration that is also
    /// the definition, falling back to the canonical declaration when no
    /// definition exists anywhere.
    fn instantiations_after_definitions(&self) -> bool {
        false
    }

    // -------- Core hooks --------
    //
    // One per node family. Default: classify the node and visit its
    // children.

    /// Visit a declaration. Default: visit the children of `decl`.
    fn visit_decl(&mut self, context: DeclContext, decl: DeclId) {
        walk::walk_decl(self, context, decl);
    }

    /// Visit a statement or expression. Default: visit the children of
    /// `stmt`.
    fn visit_stmt(&mut self, context: StmtContext, stmt: StmtId) {
        walk::walk_stmt(self, context, stmt);
    }

    /// Visit a written type. Default: visit the children of `type_loc`.
    fn visit_type_loc(&mut self, context: TypeContext, type_loc: TypeLocId) {
        walk::walk_type_loc(self, context, type_loc);
    }

    /// Visit a template argument. Default: visit the children of `arg`.
    fn visit_template_arg(&mut self, context: TemplateArgContext, arg: TemplateArgId) {
        walk::walk_template_arg(self, context, arg);
    }

    /// Visit a name qualifier. Default: visit the prefix of `qualifier`
    /// if it exists, then its final component.
    fn visit_qualifier(&mut self, context: QualifierContext, qualifier: QualifierId) {
        walk::walk_qualifier(self, context, qualifier);
    }

    /// Visit a declaration name. Default: if the name embeds written type
    /// syntax (a conversion function's target type), visit it; otherwise
    /// do nothing.
    fn visit_decl_name(&mut self, context: DeclNameContext, name: &DeclName) {
        walk::walk_decl_name(self, context, name);
    }

    // -------- Auxiliary hooks --------
    //
    // By default these iterate over the attributed instantiations of a
    // template; clients override them to skip or post-process. The engine
    // only calls them on the declaration the scheduling policy selects, so
    // each specialization's containing traversal happens exactly once.

    /// Visit the instantiations attributed to a class template (or class
    /// template partial specialization).
    fn visit_class_template_instantiations(&mut self, template_decl: DeclId) {
        walk::walk_template_instantiations(
            self,
            template_decl,
            DeclContext::ClassTemplateInstantiation,
        );
    }

    /// Visit the instantiations attributed to a function template.
    fn visit_function_template_instantiations(&mut self, template_decl: DeclId) {
        walk::walk_template_instantiations(
            self,
            template_decl,
            DeclContext::FunctionTemplateInstantiation,
        );
    }

    /// Visit the instantiations attributed to a variable template.
    fn visit_var_template_instantiations(&mut self, template_decl: DeclId) {
        walk::walk_template_instantiations(
            self,
            template_decl,
            DeclContext::VarTemplateInstantiation,
        );
    }

    // -------- Dual-view hooks --------
    //
    // An initializer list exposes a syntactic and a semantic arrangement
    // of the same children, and the engine visits both. When the two
    // views coincide this double-visits the children; a client that needs
    // single visitation overrides one of these, checks
    // `InitListExpr::views_coincide`, and skips.

    /// Visit the syntactic view of an initializer list.
    fn visit_init_list_syntactic(&mut self, init_list: StmtId) {
        walk::walk_init_list_syntactic(self, init_list);
    }

    /// Visit the semantic view of an initializer list.
    fn visit_init_list_semantic(&mut self, init_list: StmtId) {
        walk::walk_init_list_semantic(self, init_list);
    }

    // -------- Leaf hooks --------

    /// Called where the tree would normally carry a type locator but the
    /// type is compiler-inferred and was never written, so no locator
    /// exists. Keeps real syntax and inferred values distinguishable.
    /// Default: do nothing.
    fn visit_implicit_type(&mut self, context: TypeContext, sem_type: &SemType) {
        let _ = (context, sem_type);
    }
}
