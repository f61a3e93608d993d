//! Indented outline printing of a traversal.
//!
//! One line per declaration or statement, in pre-order, indented by
//! traversal depth and annotated with the context tag each node was
//! reached under. The printer brackets recursion in its overridden hooks
//! (push depth, walk, pop depth), which is the canonical use of the
//! "override and call the walk to continue" contract.

use std::fmt::Write as _;

use alder_ast::{Ast, DeclId, StmtId};
use alder_visit::{walk_decl, walk_stmt, walk_tree, DeclContext, StmtContext, Visitor};

use crate::number::{NodeNumbers, Numberer};

/// Render a whole-tree outline.
pub fn print_outline(ast: &Ast) -> String {
    let numbers = Numberer::number(ast);
    let mut printer = OutlinePrinter::new(ast, numbers);
    walk_tree(&mut printer);
    printer.into_output()
}

/// The outline-printing visitor.
pub struct OutlinePrinter<'a> {
    ast: &'a Ast,
    numbers: NodeNumbers,
    output: String,
    depth: usize,
}

impl<'a> OutlinePrinter<'a> {
    pub fn new(ast: &'a Ast, numbers: NodeNumbers) -> Self {
        OutlinePrinter {
            ast,
            numbers,
            output: String::new(),
            depth: 0,
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
    }

    fn number_suffix(n: Option<u32>) -> String {
        match n {
            Some(n) => format!("#{n}"),
            None => "#?".to_string(),
        }
    }
}

impl Visitor for OutlinePrinter<'_> {
    fn ast(&self) -> &Ast {
        self.ast
    }

    fn visit_decl(&mut self, context: DeclContext, decl: DeclId) {
        let node = self.ast.decl(decl);
        let kind = node.kind_name();
        let name = node.name.display();
        let number = Self::number_suffix(self.numbers.decl(decl));
        self.indent();
        let _ = writeln!(
            self.output,
            "{kind} '{name}' <{}> {number}",
            context.symbol()
        );

        self.depth += 1;
        walk_decl(self, context, decl);
        self.depth -= 1;
    }

    fn visit_stmt(&mut self, context: StmtContext, stmt: StmtId) {
        let kind = self.ast.stmt(stmt).kind_name();
        let number = Self::number_suffix(self.numbers.stmt(stmt));
        self.indent();
        let _ = writeln!(self.output, "{kind} <{}> {number}", context.symbol());

        self.depth += 1;
        walk_stmt(self, context, stmt);
        self.depth -= 1;
    }
}
