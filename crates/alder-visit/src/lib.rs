//! Pre-order traversal engine for the `alder-ast` syntax tree.
//!
//! This crate is the traversal core: a visitor over a heterogeneous,
//! DAG-shaped tree whose node kinds are individually classified and
//! dispatched, with explicit context tags describing *why* each node is
//! being visited, deliberate handling of shared sub-structures (template
//! instantiations are visited under the canonical template declaration,
//! exactly once), and a mutable facade layered on the read-only engine.
//!
//! # Shape of the API
//!
//! - [`Visitor`] — one hook per node family plus auxiliary, dual-view, and
//!   leaf hooks. Every hook's default body is the matching `walk_*`
//!   function; an override re-invokes it to continue recursion, or doesn't,
//!   to halt below that node.
//! - [`walk_tree`] — the single whole-tree entry point.
//! - `walk_*` / `visit_*` helpers — the engine's default recursion bodies
//!   and the optional/collection conveniences, all free functions so an
//!   overriding hook can reuse them piecemeal.
//! - [`MutVisitor`] + [`forward_to_mut!`] — the mutable facade.
//!
//! # Traversal guarantees
//!
//! Under the default engine, each reachable declaration and statement is
//! visited at most once, with two documented exceptions: the children of an
//! initializer list whose syntactic and semantic views coincide, and the
//! parameters of a capture-less closure's implicit invocation method. Both
//! are inherited quirks of the tree shape, not accidents, and both are
//! pinned by conformance tests.
//!
//! Traversal is strictly single-threaded, synchronous recursion; the only
//! resource consumed is call-stack depth, bounded by the tree's nesting.

mod context;
mod mut_visit;
mod traits;
mod walk;

pub use context::{
    DeclContext, DeclNameContext, QualifierContext, StmtContext, TemplateArgContext, TypeContext,
};
pub use mut_visit::MutVisitor;
pub use traits::Visitor;
pub use walk::{
    visit_base_specifier, visit_container_members, visit_ctor_initializer,
    visit_ctor_initializers, visit_decl_list, visit_decl_opt, visit_function_type_params,
    visit_implicit_function_parameters, visit_lambda_captures, visit_qualifier_final_component,
    visit_qualifier_opt, visit_record_bases, visit_stmt_list, visit_stmt_opt,
    visit_template_arg_list, visit_template_instantiations_if_scheduled,
    visit_template_param_list, visit_type_loc_opt, walk_decl, walk_decl_name,
    walk_init_list_semantic, walk_init_list_syntactic, walk_qualifier, walk_record_parts,
    walk_stmt, walk_template_arg, walk_template_instantiations, walk_tree, walk_type_loc,
};

// Re-exported so `forward_to_mut!` expansions and hook signatures resolve
// without a direct `alder-ast` dependency in every client.
pub use alder_ast::{DeclId, QualifierId, StmtId, TemplateArgId, TypeLocId};
