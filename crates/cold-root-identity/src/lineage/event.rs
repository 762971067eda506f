//! Lineage event data structure and its JSON form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Tag holding the hex root public key.
pub const TAG_ROOT: &str = "root";

/// Tag holding the hex detached signature by the root key.
pub const TAG_SIG: &str = "sig";

/// Tag holding the epoch label.
pub const TAG_EPOCH: &str = "epoch";

/// A signed record asserting that `pubkey` was authorized by the root key.
///
/// Serializes as
/// `{"kind", "pubkey", "created_at", "tags", "content"}` in that order.
/// Unknown fields (such as event-level `id`/`sig`) are ignored on input.
/// Tags that are not arrays are dropped on input, and each tag keeps only
/// its leading string elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageEvent {
    pub kind: u32,
    pub pubkey: String,
    pub created_at: u64,
    #[serde(default, deserialize_with = "string_tags")]
    pub tags: Vec<Vec<String>>,
    #[serde(default)]
    pub content: String,
}

fn string_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|tag| match tag {
            Value::Array(items) => {
                let strings: Vec<String> = items
                    .into_iter()
                    .map_while(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                (!strings.is_empty()).then_some(strings)
            }
            _ => None,
        })
        .collect())
}

impl LineageEvent {
    /// Value of the last tag named `name` that carries a value.
    ///
    /// Tags with fewer than two elements are skipped.
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .rfind(|tag| tag.len() >= 2 && tag[0] == name)
            .map(|tag| tag[1].as_str())
    }

    /// The `root` tag value.
    pub fn root_hex(&self) -> Option<&str> {
        self.tag(TAG_ROOT)
    }

    /// The `sig` tag value.
    pub fn sig_hex(&self) -> Option<&str> {
        self.tag(TAG_SIG)
    }

    /// The `epoch` tag value.
    pub fn epoch_label(&self) -> Option<&str> {
        self.tag(TAG_EPOCH)
    }

    /// Compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an event from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
