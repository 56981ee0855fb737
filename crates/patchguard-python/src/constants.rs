//! Module-level constant extraction
//!
//! Reads simple top-level assignments out of a parsed module: version
//! strings (`__version__ = '1.34.2'`) and the string keys of dict literals
//! (`PROTOCOL_PARSERS = {...}`).

use crate::parser::{ParsedModule, PythonParser};
use std::path::Path;
use tree_sitter::Node;

/// Value of a top-level `NAME = '...'` string assignment
pub fn string_assignment(module: &ParsedModule, name: &str) -> Option<String> {
    let value = assignment_value(module, name)?;
    string_literal_value(module, value)
}

/// String keys of a top-level `NAME = {...}` dict literal, in source order
pub fn dict_string_keys(module: &ParsedModule, name: &str) -> Option<Vec<String>> {
    let value = assignment_value(module, name)?;
    if value.kind() != "dictionary" {
        return None;
    }

    let mut keys = Vec::new();
    for i in 0..value.named_child_count() {
        let child = value.named_child(i)?;
        if child.kind() != "pair" {
            continue;
        }
        let key = child.child_by_field_name("key")?;
        if let Some(key) = string_literal_value(module, key) {
            keys.push(key);
        }
    }
    Some(keys)
}

/// `__version__` of a vendored package, read from its `__init__.py`
///
/// Best-effort: the version only feeds the informational header line, so
/// unreadable or unparseable init modules yield `None` rather than an error.
pub fn package_version(vendor_root: &Path, package: &str) -> Option<String> {
    let init_path = vendor_root.join(package).join("__init__.py");
    let module = PythonParser::new().parse_file(&init_path).ok()?;
    string_assignment(&module, "__version__")
}

/// Right-hand side of a top-level `name = value` assignment
fn assignment_value<'a>(module: &'a ParsedModule, name: &str) -> Option<Node<'a>> {
    let root = module.root();
    for i in 0..root.named_child_count() {
        let child = root.named_child(i)?;
        if child.kind() != "expression_statement" {
            continue;
        }
        let Some(assignment) = child.named_child(0) else {
            continue;
        };
        if assignment.kind() != "assignment" {
            continue;
        }
        let Some(left) = assignment.child_by_field_name("left") else {
            continue;
        };
        if left.kind() == "identifier" && module.text_of(left) == name {
            return assignment.child_by_field_name("right");
        }
    }
    None
}

/// Literal value of a string node, without quotes
fn string_literal_value(module: &ParsedModule, node: Node<'_>) -> Option<String> {
    if node.kind() != "string" {
        return None;
    }

    let mut value = String::new();
    for i in 0..node.named_child_count() {
        let child = node.named_child(i)?;
        if child.kind() == "string_content" {
            value.push_str(module.text_of(child));
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_version_string() {
        let module = PythonParser::new()
            .parse("__author__ = 'aws'\n__version__ = '1.34.2'\n", None)
            .unwrap();
        assert_eq!(string_assignment(&module, "__version__"), Some("1.34.2".to_string()));
        assert_eq!(string_assignment(&module, "__release__"), None);
    }

    #[test]
    fn read_dict_keys_in_order() {
        let source = "\
PROTOCOL_PARSERS = {
    'ec2': EC2QueryParser,
    'query': QueryParser,
    'json': JSONParser,
    'rest-json': RestJSONParser,
    'rest-xml': RestXMLParser,
}
";
        let module = PythonParser::new().parse(source, None).unwrap();
        assert_eq!(
            dict_string_keys(&module, "PROTOCOL_PARSERS"),
            Some(vec![
                "ec2".to_string(),
                "query".to_string(),
                "json".to_string(),
                "rest-json".to_string(),
                "rest-xml".to_string(),
            ])
        );
    }

    #[test]
    fn non_dict_assignment_yields_none() {
        let module = PythonParser::new().parse("PROTOCOL_PARSERS = 7\n", None).unwrap();
        assert_eq!(dict_string_keys(&module, "PROTOCOL_PARSERS"), None);
    }

    #[test]
    fn package_version_from_tree() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("botocore");
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::write(pkg.join("__init__.py"), "__version__ = '1.34.2'\n").unwrap();

        assert_eq!(package_version(dir.path(), "botocore"), Some("1.34.2".to_string()));
        assert_eq!(package_version(dir.path(), "aiohttp"), None);
    }
}
