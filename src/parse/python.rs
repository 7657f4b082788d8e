use std::sync::Arc;

use anyhow::Result;
use tree_sitter::{Language as TsLanguage, Parser};

use crate::parse::ast::{FileId, ParsedFile};
use crate::types::context::SourceFile;

fn python_language() -> TsLanguage {
    // Modern tree-sitter crate exposes LANGUAGE directly
    tree_sitter_python::LANGUAGE.into()
}

/// Parse a Python source file into a `ParsedFile`.
pub fn parse_python_file(file_id: FileId, sf: &SourceFile) -> Result<ParsedFile> {
    let mut parser = Parser::new();
    parser.set_language(&python_language())?;

    let source = Arc::new(sf.content.clone());
    let tree = parser
        .parse(&*source, None)
        .ok_or_else(|| anyhow::anyhow!("failed to parse python source"))?;

    Ok(ParsedFile {
        file_id,
        path: sf.path.clone(),
        source,
        tree,
    })
}
