//! Parsing, selecting, and exporting function blocks

use crate::definition::{FunctionBlockDef, RuleDocument};
use crate::error::RulesError;
use marquee_domain::RuleBase;
use std::path::Path;
use tracing::{debug, info};

/// Parse a description without validating any block
pub fn parse_document(text: &str) -> Result<RuleDocument, RulesError> {
    Ok(toml::from_str(text)?)
}

/// Load and validate the named function block from TOML text
///
/// With `block = None` the first block in the document is used.
pub fn load_str(text: &str, block: Option<&str>) -> Result<RuleBase, RulesError> {
    let document = parse_document(text)?;
    let def = select_block(&document, block)?;
    let rule_base = def.build()?;

    info!(
        block = rule_base.name(),
        inputs = rule_base.inputs().len(),
        rules = rule_base.rules().len(),
        "Loaded rule base"
    );
    Ok(rule_base)
}

/// Load and validate the named function block from a file
pub fn load_file(path: impl AsRef<Path>, block: Option<&str>) -> Result<RuleBase, RulesError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading rule description");

    let text = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&text, block)
}

/// Render a rule base back to the TOML description format
pub fn to_toml(rule_base: &RuleBase) -> Result<String, RulesError> {
    let document = RuleDocument {
        function_blocks: vec![FunctionBlockDef::from_rule_base(rule_base)],
    };
    Ok(toml::to_string_pretty(&document)?)
}

fn select_block<'a>(
    document: &'a RuleDocument,
    block: Option<&str>,
) -> Result<&'a FunctionBlockDef, RulesError> {
    match block {
        Some(name) => document
            .function_blocks
            .iter()
            .find(|def| def.name == name)
            .ok_or_else(|| RulesError::FunctionBlockNotFound(name.to_string())),
        None => document
            .function_blocks
            .first()
            .ok_or_else(|| RulesError::FunctionBlockNotFound("<first>".to_string())),
    }
}
