//! HCL (Terraform-style) parsing.

use super::{Parser, Tree, document_to_tree, payload_text};
use serde_json::Value as JsonValue;

/// Parser for HCL documents such as Terraform `.tf` files.
///
/// Attributes become keys and blocks become nested tables, keyed by block
/// type and then by each label.
#[derive(Debug, Clone, Copy, Default)]
pub struct HclParser;

impl Parser for HclParser {
    fn parse(&self, payload: &[u8]) -> std::result::Result<Tree, String> {
        let text = payload_text(payload)?;
        let json: JsonValue = ::hcl::from_str(text).map_err(|e| e.to_string())?;
        document_to_tree(json)
    }
}
