//! Model document parser
//!
//! Reads a YAML model document into the raw schema, with line-annotated
//! error messages.

use std::fs;
use std::path::Path;

use crate::error::{CompileError, CompileResult};
use crate::schema::{RawAggregate, RawDocument};

/// Read and parse a model document from disk
pub fn load_document(path: &Path) -> CompileResult<RawDocument> {
    let content = fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content, path)
}

/// Parse model document content. `file` is used for error messages only.
pub fn parse_document(content: &str, file: &Path) -> CompileResult<RawDocument> {
    if content.trim().is_empty() {
        return Ok(RawDocument::default());
    }

    serde_yaml_ng::from_str(content).map_err(|e| CompileError::InvalidDocument {
        file: file.to_path_buf(),
        message: format_yaml_error(content, &e),
    })
}

/// Aggregates of a parsed document; a missing or null `aggregates` key is fatal.
pub fn require_aggregates(document: RawDocument, file: &Path) -> CompileResult<Vec<RawAggregate>> {
    document
        .aggregates
        .ok_or_else(|| CompileError::MissingAggregates {
            file: file.to_path_buf(),
        })
}

fn format_yaml_error(content: &str, err: &serde_yaml_ng::Error) -> String {
    let mut message = String::new();

    let err_str = err.to_string();
    match err.location() {
        Some(loc) => message.push_str(&format!("Line {}: {}", loc.line(), err_str)),
        None => message.push_str(&err_str),
    }

    if should_hint_colon_quotes(content, &err_str) {
        message.push_str("\nHint: Strings with colons need quotes: message: \"Must be: valid\"");
    }

    message
}

fn should_hint_colon_quotes(content: &str, err_str: &str) -> bool {
    // Unquoted scalars containing `: ` are the most common authoring mistake.
    err_str.contains("mapping values are not allowed")
        || (err_str.contains("unexpected ':'")
            && content.lines().any(|l| l.trim_start().starts_with("message:")))
}
