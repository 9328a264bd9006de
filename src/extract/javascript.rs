use anyhow::Result;
use tree_sitter::{Node as TSNode, Parser};

use super::SpecifierExtractor;

/// Recognizes static `import` declarations and literal `require("...")`
/// calls in JavaScript/JSX source. Anything else — dynamic imports, computed
/// require arguments, re-exports — is ignored.
pub struct JsSpecifierExtractor;

impl JsSpecifierExtractor {
    pub fn new() -> Self {
        Self
    }

    fn collect(&self, node: &TSNode, source: &[u8], specifiers: &mut Vec<String>) {
        match node.kind() {
            "import_statement" => {
                if let Some(specifier) = import_source(node, source) {
                    specifiers.push(specifier);
                }
            }
            "call_expression" => {
                if let Some(specifier) = require_argument(node, source) {
                    specifiers.push(specifier);
                }
            }
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect(&child, source, specifiers);
        }
    }
}

impl SpecifierExtractor for JsSpecifierExtractor {
    fn extract(&self, source: &str) -> Result<Vec<String>> {
        // A fresh parser per call keeps the extractor shareable across the
        // builder's worker threads.
        let mut parser = Parser::new();
        parser.set_language(tree_sitter_javascript::language())?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            anyhow::bail!("source is not parsable as a module");
        }

        let mut specifiers = Vec::new();
        self.collect(&root, source.as_bytes(), &mut specifiers);
        Ok(specifiers)
    }
}

impl Default for JsSpecifierExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// `import ... from "x"` and `import "x"`: the source string.
fn import_source(node: &TSNode, source: &[u8]) -> Option<String> {
    let source_node = node.child_by_field_name("source")?;
    string_value(&source_node, source)
}

/// `require("x")` where the callee is literally the identifier `require` and
/// the first argument is a string literal.
fn require_argument(node: &TSNode, source: &[u8]) -> Option<String> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "identifier" || node_text(&callee, source) != "require" {
        return None;
    }
    let arguments = node.child_by_field_name("arguments")?;
    let first = arguments.named_child(0)?;
    string_value(&first, source)
}

fn string_value(node: &TSNode, source: &[u8]) -> Option<String> {
    if node.kind() != "string" {
        return None;
    }
    let text = node_text(node, source);
    let mut chars = text.chars();
    let open = chars.next()?;
    if (open == '"' || open == '\'') && text.len() >= 2 && text.ends_with(open) {
        return Some(text[1..text.len() - 1].to_string());
    }
    None
}

fn node_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}
