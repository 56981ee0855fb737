//! Python parsing using tree-sitter
//!
//! Parses vendored module files into a syntax tree and provides error
//! handling with diagnostics.

use patchguard_core::{Diagnostic, DiagnosticCode, Location, Severity};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Tree};

/// Python source parser
///
/// tree-sitter parsers are stateful, so a fresh one is created per parse
/// call; the grammar itself is static.
pub struct PythonParser;

impl PythonParser {
    /// Create a new Python parser
    pub fn new() -> Self {
        Self
    }

    /// Parse Python source into a syntax tree
    ///
    /// Returns ParsedModule on success, or ParseError on failure. A tree
    /// containing syntax errors counts as a failure: a module that does
    /// not parse cleanly cannot be fingerprinted reliably.
    pub fn parse(&self, source: &str, file_path: Option<&Path>) -> Result<ParsedModule, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| ParseError {
                message: format!("failed to load Python grammar: {}", e),
                file_path: file_path.map(|p| p.to_path_buf()),
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| ParseError {
            message: "parser returned no tree".to_string(),
            file_path: file_path.map(|p| p.to_path_buf()),
        })?;

        if tree.root_node().has_error() {
            return Err(ParseError {
                message: "module contains syntax errors".to_string(),
                file_path: file_path.map(|p| p.to_path_buf()),
            });
        }

        Ok(ParsedModule {
            source: source.to_string(),
            tree,
            file_path: file_path.map(|p| p.to_path_buf()),
        })
    }

    /// Parse a Python module from a file
    pub fn parse_file(&self, path: &Path) -> Result<ParsedModule, ParseError> {
        let source = std::fs::read_to_string(path).map_err(|e| ParseError {
            message: format!("failed to read file: {}", e),
            file_path: Some(path.to_path_buf()),
        })?;

        self.parse(&source, Some(path))
    }

    /// Parse and return a diagnostic on error
    pub fn parse_with_diagnostic(
        &self,
        source: &str,
        file_path: Option<&Path>,
    ) -> Result<ParsedModule, Diagnostic> {
        self.parse(source, file_path).map_err(|e| e.to_diagnostic())
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Successfully parsed Python module
#[derive(Debug)]
pub struct ParsedModule {
    /// Original source text
    pub source: String,

    /// Parsed syntax tree
    pub tree: Tree,

    /// Source file path (if parsed from file)
    pub file_path: Option<PathBuf>,
}

impl ParsedModule {
    /// Root module node
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text of a node, sliced from the original source
    pub fn text_of(&self, node: Node<'_>) -> &str {
        &self.source[node.start_byte()..node.end_byte()]
    }

    /// Source text of a definition, extended to whole physical lines
    ///
    /// Runs from the first byte of the line the node starts on through the
    /// end of the line it ends on, keeping original indentation and the
    /// trailing newline when the file has one. This is the text the
    /// content digest is computed over.
    pub fn line_extent_of(&self, node: Node<'_>) -> &str {
        let start = self.source[..node.start_byte()]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = self.source[node.end_byte()..]
            .find('\n')
            .map(|i| node.end_byte() + i + 1)
            .unwrap_or(self.source.len());
        &self.source[start..end]
    }
}

/// Failed parse with context
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// What went wrong
    pub message: String,

    /// Source file path (if parsed from file)
    pub file_path: Option<PathBuf>,
}

impl ParseError {
    /// Convert to a diagnostic for reporting
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::new(
            DiagnosticCode::ModuleParseError,
            Severity::Error,
            self.message.clone(),
        );
        if let Some(path) = &self.file_path {
            diag = diag.with_location(Location::new(path.display().to_string()));
        }
        diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_module() {
        let parser = PythonParser::new();
        let module = parser.parse("def f():\n    return 1\n", None).unwrap();
        assert_eq!(module.root().kind(), "module");
    }

    #[test]
    fn parse_rejects_broken_source() {
        let parser = PythonParser::new();
        let result = parser.parse("def f(:\n", None);
        assert!(result.is_err());
    }

    #[test]
    fn parse_error_becomes_diagnostic() {
        let parser = PythonParser::new();
        let err = parser
            .parse("class (:", Some(Path::new("botocore/broken.py")))
            .unwrap_err();
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, DiagnosticCode::ModuleParseError);
        assert_eq!(diag.location.unwrap().file, "botocore/broken.py");
    }

    #[test]
    fn line_extent_covers_whole_lines() {
        let parser = PythonParser::new();
        let source = "class C:\n    def m(self):\n        return 1\n";
        let module = parser.parse(source, None).unwrap();

        // The class node starts at byte 0 and the extent is the whole file.
        let class_node = module.root().child(0).unwrap();
        assert_eq!(module.line_extent_of(class_node), source);
    }
}
