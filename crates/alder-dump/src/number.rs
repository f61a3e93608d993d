//! Node numbering in visitation order.
//!
//! Assigns dense sequential numbers to declarations and statements, in the
//! order the default engine first visits them. Numbers are what the dumper
//! and outline printer show instead of raw arena ids: they are stable
//! across runs over the same tree, start at 1, and share one counter so a
//! reader can reconstruct the interleaving of the two families.

use std::collections::HashMap;

use alder_ast::{Ast, DeclId, StmtId};
use alder_visit::{walk_decl, walk_stmt, walk_tree, DeclContext, StmtContext, Visitor};

/// Side table mapping nodes to their visitation-order numbers.
#[derive(Debug, Default)]
pub struct NodeNumbers {
    decls: HashMap<DeclId, u32>,
    stmts: HashMap<StmtId, u32>,
    next: u32,
}

impl NodeNumbers {
    pub fn new() -> Self {
        NodeNumbers {
            decls: HashMap::new(),
            stmts: HashMap::new(),
            next: 1,
        }
    }

    /// The number assigned to a declaration, if it was reached.
    pub fn decl(&self, id: DeclId) -> Option<u32> {
        self.decls.get(&id).copied()
    }

    /// The number assigned to a statement, if it was reached.
    pub fn stmt(&self, id: StmtId) -> Option<u32> {
        self.stmts.get(&id).copied()
    }

    /// Total numbered nodes across both families.
    pub fn len(&self) -> usize {
        self.decls.len() + self.stmts.len()
    }

    /// Numbered declarations.
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    /// Numbered statements.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty() && self.stmts.is_empty()
    }

    fn record_decl(&mut self, id: DeclId) -> bool {
        if self.decls.contains_key(&id) {
            return false;
        }
        self.decls.insert(id, self.next);
        self.next += 1;
        true
    }

    fn record_stmt(&mut self, id: StmtId) -> bool {
        if self.stmts.contains_key(&id) {
            return false;
        }
        self.stmts.insert(id, self.next);
        self.next += 1;
        true
    }
}

/// The numbering visitor. First visit wins; the documented double-visit
/// cases keep their original numbers.
pub struct Numberer<'a> {
    ast: &'a Ast,
    numbers: NodeNumbers,
    definition_first: bool,
}

impl<'a> Numberer<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Numberer {
            ast,
            numbers: NodeNumbers::new(),
            definition_first: false,
        }
    }

    /// Number every declaration and statement reachable from the root.
    pub fn number(ast: &'a Ast) -> NodeNumbers {
        Numberer::number_with(ast, false)
    }

    /// Like [`Numberer::number`], but selecting the instantiation-ordering
    /// policy, so numbers agree with a traversal under the same policy.
    pub fn number_with(ast: &'a Ast, definition_first: bool) -> NodeNumbers {
        let mut numberer = Numberer::new(ast);
        numberer.definition_first = definition_first;
        walk_tree(&mut numberer);
        numberer.numbers
    }

    pub fn into_numbers(self) -> NodeNumbers {
        self.numbers
    }
}

impl Visitor for Numberer<'_> {
    fn ast(&self) -> &Ast {
        self.ast
    }

    fn instantiations_after_definitions(&self) -> bool {
        self.definition_first
    }

    fn visit_decl(&mut self, context: DeclContext, decl: DeclId) {
        // Recurse only on first visit; a re-visit of a shared node must
        // not renumber or re-walk its subtree.
        if self.numbers.record_decl(decl) {
            walk_decl(self, context, decl);
        }
    }

    fn visit_stmt(&mut self, context: StmtContext, stmt: StmtId) {
        if self.numbers.record_stmt(stmt) {
            walk_stmt(self, context, stmt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alder_ast::{DeclKind, DeclName, Literal, StmtKind, VarData};

    fn small_tree() -> (Ast, DeclId, StmtId) {
        let mut ast = Ast::new();
        let lit = ast.push_stmt(StmtKind::Literal(Literal::Int(1)));
        let var = ast.push_decl(
            DeclName::ident("x"),
            DeclKind::Var(VarData {
                declarator: alder_ast::DeclaratorData::default(),
                init: Some(lit),
                is_definition: true,
                specialization: None,
            }),
        );
        let tu = ast.push_decl(
            DeclName::Anonymous,
            DeclKind::TranslationUnit { members: vec![var] },
        );
        ast.set_root(tu);
        (ast, var, lit)
    }

    #[test]
    fn numbers_follow_visitation_order() {
        let (ast, var, lit) = small_tree();
        let numbers = Numberer::number(&ast);

        assert_eq!(numbers.decl(ast.root()), Some(1));
        assert_eq!(numbers.decl(var), Some(2));
        assert_eq!(numbers.stmt(lit), Some(3));
        assert_eq!(numbers.len(), 3);
    }

    #[test]
    fn renumbering_an_unchanged_tree_is_deterministic() {
        let (ast, var, lit) = small_tree();
        let first = Numberer::number(&ast);
        let second = Numberer::number(&ast);

        assert_eq!(first.decl(var), second.decl(var));
        assert_eq!(first.stmt(lit), second.stmt(lit));
        assert_eq!(first.len(), second.len());
    }
}
