//! Alder: syntax-tree traversal and introspection for a C++-like front
//! end.
//!
//! The interesting machinery lives in the workspace crates — `alder-ast`
//! (the tree), `alder-visit` (the traversal engine), `alder-dump` (the
//! introspection tooling). This crate is the line-oriented command-line
//! tool over them: load a serialized tree, pick an output mode, write to
//! stdout.

// The workspace crates, re-exported for library consumers.
pub use alder_ast as ast;
pub use alder_dump as dump;
pub use alder_visit as visit;

pub mod cli;
pub mod error;
