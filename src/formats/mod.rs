//! Structured file formats and their parsers.
//!
//! The format of a payload is decided by the extension of its location:
//!
//! | Extension        | Format |
//! |------------------|--------|
//! | `.json`          | JSON   |
//! | `.yaml`, `.yml`  | YAML   |
//! | `.toml`          | TOML   |
//! | `.tf`            | HCL    |

mod terraform;
mod text;

use serde_json::Value as JsonValue;
use std::fmt;
use std::path::Path;

pub use self::terraform::HclParser;
pub use self::text::TextFormatParser;

/// Parsed key/value tree shared by every format.
///
/// Keys keep the case they have in the payload.
pub type Tree = config::Map<String, config::Value>;

/// A parser turning a raw payload into a key/value tree.
pub trait Parser: Send + Sync {
    /// Parse `payload` into a tree whose root is a table.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the payload is not valid UTF-8 or
    /// not valid for the format.
    fn parse(&self, payload: &[u8]) -> std::result::Result<Tree, String>;
}

static JSON_PARSER: TextFormatParser = TextFormatParser::JSON;
static YAML_PARSER: TextFormatParser = TextFormatParser::YAML;
static TOML_PARSER: TextFormatParser = TextFormatParser::TOML;
static HCL_PARSER: HclParser = HclParser;

/// A supported structured file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON (`.json`)
    Json,
    /// YAML (`.yaml`, `.yml`)
    Yaml,
    /// TOML (`.toml`)
    Toml,
    /// HCL as used by Terraform (`.tf`)
    Hcl,
}

impl Format {
    /// Detect the format from a location's extension.
    ///
    /// Query strings and fragments are ignored, so
    /// `https://host/app.yaml?ref=main` is YAML. Returns `None` when the
    /// location has no extension or an unsupported one.
    ///
    /// The extension is taken from the whole location, not from a parsed URL
    /// path. A URL without a path extension therefore takes it from the host:
    /// `https://config.json` is JSON and `https://example.com/` is unrecognized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use handykit::formats::Format;
    ///
    /// assert_eq!(Format::from_location("config/app.yml"), Some(Format::Yaml));
    /// assert_eq!(Format::from_location("main.tf"), Some(Format::Hcl));
    /// assert_eq!(Format::from_location("settings.ini"), None);
    /// ```
    pub fn from_location(location: &str) -> Option<Self> {
        let path = location.split(['?', '#']).next().unwrap_or(location);
        let extension = Path::new(path).extension()?.to_str()?;
        Self::from_extension(extension)
    }

    /// Map a bare extension (without the dot) to a format, ignoring ASCII case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "tf" => Some(Self::Hcl),
            _ => None,
        }
    }

    /// Display name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Hcl => "HCL",
        }
    }

    /// The parser for this format.
    pub fn parser(&self) -> &'static dyn Parser {
        match self {
            Self::Json => &JSON_PARSER,
            Self::Yaml => &YAML_PARSER,
            Self::Toml => &TOML_PARSER,
            Self::Hcl => &HCL_PARSER,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode a payload as UTF-8 text.
fn payload_text(payload: &[u8]) -> std::result::Result<&str, String> {
    std::str::from_utf8(payload).map_err(|e| format!("payload is not valid UTF-8: {}", e))
}

/// Convert a parsed document to a tree. An empty (null) document is an empty tree.
fn document_to_tree(document: JsonValue) -> std::result::Result<Tree, String> {
    match document {
        JsonValue::Object(map) => {
            let mut tree = Tree::new();
            for (key, value) in map {
                tree.insert(key, json_value_to_config_value(value)?);
            }
            Ok(tree)
        }
        JsonValue::Null => Ok(Tree::new()),
        _ => Err("expected a table at root level".to_string()),
    }
}

/// Convert a serde_json::Value to a config::Value.
fn json_value_to_config_value(value: JsonValue) -> std::result::Result<config::Value, String> {
    let kind = match value {
        JsonValue::Null => config::ValueKind::Nil,
        JsonValue::Bool(b) => config::ValueKind::Boolean(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                config::ValueKind::I64(i)
            } else if let Some(u) = n.as_u64() {
                config::ValueKind::U64(u)
            } else if let Some(f) = n.as_f64() {
                config::ValueKind::Float(f)
            } else {
                return Err(format!("unsupported number: {}", n));
            }
        }
        JsonValue::String(s) => config::ValueKind::String(s),
        JsonValue::Array(arr) => config::ValueKind::Array(
            arr.into_iter()
                .map(json_value_to_config_value)
                .collect::<std::result::Result<Vec<_>, _>>()?,
        ),
        JsonValue::Object(map) => config::ValueKind::Table(document_to_tree(JsonValue::Object(map))?),
    };

    Ok(config::Value::new(None, kind))
}
