//! Detailed per-node record dumping.
//!
//! One record per reachable declaration or statement, keyed by the
//! visitation-order number, with the identity facts the engine exposes:
//! context of first visit, canonical representative, definition flag,
//! implicitness, and specialization data. Compiler-synthesized
//! declarations are suppressed from the rendering by default and restored
//! with [`DumpOptions::include_implicit`].

use std::collections::HashSet;
use std::fmt::Write as _;

use alder_ast::{Ast, DeclId, SpecializationKind, StmtId};
use alder_visit::{walk_decl, walk_stmt, walk_tree, DeclContext, StmtContext, Visitor};

use crate::number::{NodeNumbers, Numberer};

/// Rendering options for the dumper.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Render records for compiler-synthesized declarations too.
    pub include_implicit: bool,
    /// Traverse with the experimental definition-first instantiation
    /// policy instead of the default canonical-declaration policy.
    pub definition_first: bool,
}

/// Dump one record per reachable node.
pub fn dump_nodes(ast: &Ast, options: &DumpOptions) -> String {
    let numbers = Numberer::number_with(ast, options.definition_first);
    let mut dumper = NodeDumper {
        ast,
        numbers,
        definition_first: options.definition_first,
        seen_decls: HashSet::new(),
        seen_stmts: HashSet::new(),
        entries: Vec::new(),
    };
    walk_tree(&mut dumper);
    dumper.render(options)
}

enum Entry {
    Decl { context: DeclContext, id: DeclId },
    Stmt { context: StmtContext, id: StmtId },
}

struct NodeDumper<'a> {
    ast: &'a Ast,
    numbers: NodeNumbers,
    definition_first: bool,
    seen_decls: HashSet<DeclId>,
    seen_stmts: HashSet<StmtId>,
    entries: Vec<Entry>,
}

impl NodeDumper<'_> {
    fn render(&self, options: &DumpOptions) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                Entry::Decl { context, id } => {
                    let decl = self.ast.decl(*id);
                    if decl.implicit && !options.include_implicit {
                        continue;
                    }
                    let number = self.numbers.decl(*id).unwrap_or(0);
                    let _ = write!(
                        out,
                        "Decl #{number}: {} '{}' context={}",
                        decl.kind_name(),
                        decl.name.display(),
                        context.symbol()
                    );
                    let canonical = self.ast.canonical_decl(*id);
                    if canonical != *id {
                        match self.numbers.decl(canonical) {
                            Some(n) => {
                                let _ = write!(out, " canonical=#{n}");
                            }
                            None => {
                                let _ = write!(out, " canonical=?");
                            }
                        }
                    }
                    if self.ast.decl_is_definition(*id) {
                        out.push_str(" definition");
                    }
                    if decl.implicit {
                        out.push_str(" implicit");
                    }
                    if let Some(spec) = decl.specialization() {
                        let _ = write!(out, " specialization={}", spec_kind_symbol(spec.kind));
                        match spec.instantiated_from {
                            Some(from) => match self.numbers.decl(from) {
                                Some(n) => {
                                    let _ = write!(out, " from=#{n}");
                                }
                                None => out.push_str(" from=?"),
                            },
                            None => out.push_str(" from=none"),
                        }
                    }
                    out.push('\n');
                }
                Entry::Stmt { context, id } => {
                    let number = self.numbers.stmt(*id).unwrap_or(0);
                    let _ = writeln!(
                        out,
                        "Stmt #{number}: {} context={}",
                        self.ast.stmt(*id).kind_name(),
                        context.symbol()
                    );
                }
            }
        }
        out
    }
}

fn spec_kind_symbol(kind: SpecializationKind) -> &'static str {
    match kind {
        SpecializationKind::ImplicitInstantiation => "implicit-instantiation",
        SpecializationKind::ExplicitInstantiationDecl => "explicit-instantiation-decl",
        SpecializationKind::ExplicitInstantiationDef => "explicit-instantiation-def",
        SpecializationKind::ExplicitSpecialization => "explicit-specialization",
    }
}

impl Visitor for NodeDumper<'_> {
    fn ast(&self) -> &Ast {
        self.ast
    }

    fn instantiations_after_definitions(&self) -> bool {
        self.definition_first
    }

    fn visit_decl(&mut self, context: DeclContext, decl: DeclId) {
        // First visit wins; shared nodes keep the record of the context
        // they were first reached under.
        if self.seen_decls.insert(decl) {
            self.entries.push(Entry::Decl { context, id: decl });
            walk_decl(self, context, decl);
        }
    }

    fn visit_stmt(&mut self, context: StmtContext, stmt: StmtId) {
        if self.seen_stmts.insert(stmt) {
            self.entries.push(Entry::Stmt { context, id: stmt });
            walk_stmt(self, context, stmt);
        }
    }
}
