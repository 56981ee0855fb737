//! Python source parsing and symbol access
//!
//! This crate handles:
//! - Parsing vendored Python modules with tree-sitter
//! - Resolving registered symbols (functions, methods, classes, property
//!   accessors) to their definition nodes
//! - Extracting the exact source text of a definition
//! - Reading module-level constants (version strings, dict literal keys)

pub mod parser;
pub mod resolve;
pub mod constants;

pub use parser::{PythonParser, ParsedModule, ParseError};
pub use resolve::{ResolvedSymbol, ResolveError, resolve_in_module};
pub use constants::{string_assignment, dict_string_keys, package_version};
