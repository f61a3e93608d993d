//! Introspection tooling for alder syntax trees.
//!
//! Everything here consumes the traversal engine purely through its public
//! hook surface: a numbering pass ([`Numberer`]), an indented outline
//! printer ([`print_outline`]), and a detailed per-node dumper
//! ([`dump_nodes`]). No tool holds ambient global state; each visitor
//! carries its own sink and side tables.

mod dump;
mod number;
mod printer;

pub use dump::{dump_nodes, DumpOptions};
pub use number::{NodeNumbers, Numberer};
pub use printer::{print_outline, OutlinePrinter};
