//! Implementations of the CLI modes: load a serialized tree, run one of
//! the introspection tools over it, return the rendered output.

use std::fs;
use std::path::Path;

use alder_ast::Ast;
use alder_dump::{dump_nodes, print_outline, DumpOptions, Numberer};

use crate::error::AlderError;

/// Options shared by the output modes.
#[derive(Debug, Clone, Default)]
pub struct ToolOptions {
    /// Show compiler-synthesized declarations in dump output.
    pub include_implicit: bool,
    /// Traverse with the experimental definition-first instantiation
    /// policy.
    pub definition_first: bool,
}

/// Load a serialized tree from a JSON file.
pub fn load_ast(path: &Path) -> Result<Ast, AlderError> {
    let text = fs::read_to_string(path).map_err(|source| AlderError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let ast: Ast = serde_json::from_str(&text).map_err(|source| AlderError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        decls = ast.decl_count(),
        stmts = ast.stmt_count(),
        "loaded tree"
    );
    Ok(ast)
}

/// `print` mode: an indented pre-order outline of the whole tree.
pub fn run_print(path: &Path) -> Result<String, AlderError> {
    let ast = load_ast(path)?;
    Ok(print_outline(&ast))
}

/// `dump` mode: one detailed record per reachable node.
pub fn run_dump(path: &Path, options: &ToolOptions) -> Result<String, AlderError> {
    let ast = load_ast(path)?;
    Ok(dump_nodes(
        &ast,
        &DumpOptions {
            include_implicit: options.include_implicit,
            definition_first: options.definition_first,
        },
    ))
}

/// `number` mode: a summary of visitation-order numbering.
pub fn run_number(path: &Path) -> Result<String, AlderError> {
    let ast = load_ast(path)?;
    let numbers = Numberer::number(&ast);
    tracing::debug!(total = numbers.len(), "numbered tree");
    Ok(format!(
        "numbered {} nodes ({} declarations, {} statements)\n",
        numbers.len(),
        numbers.decl_count(),
        numbers.stmt_count()
    ))
}
