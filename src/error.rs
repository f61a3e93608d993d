//! CLI error type and exit-code mapping.
//!
//! The traversal core has no recoverable-error notion; everything here
//! concerns the glue around it — reading and parsing serialized trees.
//! Exit codes: `2` invalid arguments (produced by the argument parser
//! itself), `3` load/resolution errors, `10` internal errors.

use thiserror::Error;

/// Errors the command-line tool can report.
#[derive(Debug, Error)]
pub enum AlderError {
    /// The input file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The input file is not a valid serialized tree.
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl AlderError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AlderError::Read { .. } | AlderError::Parse { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_map_to_resolution_exit_code() {
        let err = AlderError::Read {
            path: "missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "cannot read missing.json: gone");
    }
}
