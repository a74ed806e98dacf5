//! JSON, YAML and TOML parsing.

use super::{Parser, Tree, document_to_tree, payload_text};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Json,
    Yaml,
    Toml,
}

/// Parser for the plain-text data formats.
///
/// Each payload is read into a document with `serde_json`, `serde_yaml` or
/// `toml` and then converted to a [`Tree`], so keys keep their case.
#[derive(Debug, Clone, Copy)]
pub struct TextFormatParser {
    syntax: Syntax,
}

impl TextFormatParser {
    /// JSON parser.
    pub const JSON: Self = Self::new(Syntax::Json);
    /// YAML parser.
    pub const YAML: Self = Self::new(Syntax::Yaml);
    /// TOML parser.
    pub const TOML: Self = Self::new(Syntax::Toml);

    const fn new(syntax: Syntax) -> Self {
        Self { syntax }
    }

    fn document(&self, text: &str) -> std::result::Result<JsonValue, String> {
        match self.syntax {
            Syntax::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Syntax::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            Syntax::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

impl Parser for TextFormatParser {
    fn parse(&self, payload: &[u8]) -> std::result::Result<Tree, String> {
        let text = payload_text(payload)?;
        document_to_tree(self.document(text)?)
    }
}
