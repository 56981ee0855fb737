//! Symbol resolution over parsed modules
//!
//! Maps a registered target symbol to its definition node and extracts the
//! exact source text that gets fingerprinted. Property accessors resolve to
//! the decorated getter/setter function, never to the property wrapper.

use crate::parser::ParsedModule;
use patchguard_core::{AccessorKind, TargetSymbol};
use tree_sitter::Node;

/// A symbol resolved to its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSymbol {
    /// Fully-qualified display name
    pub qualname: String,

    /// Exact source text of the definition (whole physical lines,
    /// decorators included)
    pub source: String,

    /// 1-indexed line the extracted text starts on
    pub line: usize,
}

/// Resolution failure for a single symbol
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The owning class is gone from the module
    #[error("class `{class_name}` not found in {module}")]
    ClassNotFound { module: String, class_name: String },

    /// The member (or module-level definition) is gone
    #[error("symbol `{qualname}` not found")]
    NotFound { qualname: String },
}

/// Resolve a target symbol within its parsed module
pub fn resolve_in_module(
    module: &ParsedModule,
    symbol: &TargetSymbol,
) -> Result<ResolvedSymbol, ResolveError> {
    let root = module.root();

    let node = match symbol.kind {
        AccessorKind::Function => {
            let name = symbol.member.as_deref().unwrap_or_default();
            find_definition(module, root, name, "function_definition")
        }
        AccessorKind::Class => {
            let name = symbol.class_name.as_deref().unwrap_or_default();
            find_definition(module, root, name, "class_definition")
        }
        AccessorKind::Method => {
            let body = class_body(module, root, symbol)?;
            let name = symbol.member.as_deref().unwrap_or_default();
            find_definition(module, body, name, "function_definition")
        }
        AccessorKind::PropertyGetter | AccessorKind::PropertySetter => {
            let body = class_body(module, root, symbol)?;
            let name = symbol.member.as_deref().unwrap_or_default();
            find_accessor(module, body, name, symbol.kind)
        }
    };

    let node = node.ok_or_else(|| ResolveError::NotFound {
        qualname: symbol.qualname(),
    })?;

    let source = module.line_extent_of(node);
    Ok(ResolvedSymbol {
        qualname: symbol.qualname(),
        source: source.to_string(),
        line: node.start_position().row + 1,
    })
}

/// Body block of the symbol's owning class
fn class_body<'a>(
    module: &'a ParsedModule,
    root: Node<'a>,
    symbol: &TargetSymbol,
) -> Result<Node<'a>, ResolveError> {
    let class_name = symbol.class_name.as_deref().unwrap_or_default();
    let class_node = find_definition(module, root, class_name, "class_definition").ok_or_else(|| {
        ResolveError::ClassNotFound {
            module: symbol.module.clone(),
            class_name: class_name.to_string(),
        }
    })?;

    // A decorated class carries its body on the inner definition
    let class_node = unwrap_decorated(class_node);
    class_node
        .child_by_field_name("body")
        .ok_or_else(|| ResolveError::NotFound {
            qualname: symbol.qualname(),
        })
}

/// Find a named definition among the direct children of a scope
///
/// Returns the outermost node: the `decorated_definition` wrapper when the
/// definition is decorated, so extraction includes the decorator lines.
fn find_definition<'a>(
    module: &'a ParsedModule,
    scope: Node<'a>,
    name: &str,
    kind: &str,
) -> Option<Node<'a>> {
    for i in 0..scope.named_child_count() {
        let child = scope.named_child(i)?;
        let inner = unwrap_decorated(child);
        if inner.kind() != kind {
            continue;
        }
        if definition_name(module, inner) == Some(name) {
            return Some(child);
        }
    }
    None
}

/// Find a property getter or setter among the direct children of a class body
fn find_accessor<'a>(
    module: &'a ParsedModule,
    body: Node<'a>,
    name: &str,
    kind: AccessorKind,
) -> Option<Node<'a>> {
    for i in 0..body.named_child_count() {
        let child = body.named_child(i)?;
        if child.kind() != "decorated_definition" {
            continue;
        }
        let inner = unwrap_decorated(child);
        if inner.kind() != "function_definition" || definition_name(module, inner) != Some(name) {
            continue;
        }
        if has_accessor_decorator(module, child, name, kind) {
            return Some(child);
        }
    }
    None
}

/// Whether a decorated definition carries the decorator matching `kind`
///
/// Getters are marked `@property` or `@<name>.getter`; setters are marked
/// `@<name>.setter`.
fn has_accessor_decorator(
    module: &ParsedModule,
    decorated: Node<'_>,
    name: &str,
    kind: AccessorKind,
) -> bool {
    for i in 0..decorated.named_child_count() {
        let Some(child) = decorated.named_child(i) else {
            continue;
        };
        if child.kind() != "decorator" {
            continue;
        }
        let text = module.text_of(child).trim_start_matches('@').trim();
        let matched = match kind {
            AccessorKind::PropertyGetter => {
                text == "property" || text == format!("{}.getter", name)
            }
            AccessorKind::PropertySetter => text == format!("{}.setter", name),
            _ => false,
        };
        if matched {
            return true;
        }
    }
    false
}

/// Peel a `decorated_definition` down to the inner definition node
fn unwrap_decorated(node: Node<'_>) -> Node<'_> {
    if node.kind() == "decorated_definition" {
        node.child_by_field_name("definition").unwrap_or(node)
    } else {
        node
    }
}

/// Name of a function or class definition node
fn definition_name<'a>(module: &'a ParsedModule, node: Node<'a>) -> Option<&'a str> {
    node.child_by_field_name("name").map(|n| module.text_of(n))
}
