//! Parser for form-style card descriptions.
//!
//! Intake forms write card descriptions as `###`-delimited sections that
//! alternate between a field name and its value:
//!
//! ```text
//! ###Reporting Team###
//! Growth
//! ###Requestor email###
//! a@b.com
//! Attachment: https://...
//! ```
//!
//! Everything from the first `Attachment` marker onwards is discarded.
//! Descriptions written by hand (no delimiter at all) are kept verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marker separating form sections.
pub const SECTION_DELIMITER: &str = "###";

/// Marker after which the description holds attachment links, not fields.
pub const ATTACHMENT_MARKER: &str = "Attachment";

/// Field-name → value pairs in document order.
pub type Fields = IndexMap<String, String>;

/// Result of parsing a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Description {
    /// The description used the section delimiter.
    Parsed(Fields),
    /// No delimiter: the original text, unchanged.
    Raw(String),
}

impl Description {
    /// Look up a parsed field. Always `None` for [`Description::Raw`].
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            Self::Parsed(fields) => fields.get(name).map(String::as_str),
            Self::Raw(_) => None,
        }
    }
}

/// Parse a card description into fields, or keep it raw.
///
/// A trailing field name with no value after it is dropped. Repeated field
/// names keep the first position and the last value.
#[must_use]
pub fn parse_description(text: &str) -> Description {
    if !text.contains(SECTION_DELIMITER) {
        return Description::Raw(text.to_string());
    }

    let tokens = tokenize(text);
    if tokens.len() % 2 == 1 {
        tracing::debug!(
            dropped = tokens.last().map(String::as_str),
            "description has an unpaired trailing section"
        );
    }

    let fields = tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();
    Description::Parsed(fields)
}

/// Split the structured part of `text` into trimmed, non-empty tokens.
fn tokenize(text: &str) -> Vec<String> {
    let structured = text
        .split_once(ATTACHMENT_MARKER)
        .map_or(text, |(before, _)| before);

    structured
        .split(SECTION_DELIMITER)
        .map(|token| token.replace('\n', "").trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}
