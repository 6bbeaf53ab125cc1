use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Prefix some keys carry so generated builders do not collide with the
/// plain `class`/`style` attribute methods. It never reaches the wire.
const BUILDER_KEY_PREFIX: &str = "datastar-";

/// Kind of value an attribute or modifier accepts.
///
/// Serialized with the short names used in exported catalogs; unknown names
/// are rejected because the renderer cannot format a value it does not know.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ValueKind {
    Bool,
    String,
    DurationMs,
    DurationSec,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::DurationMs => "duration_ms",
            ValueKind::DurationSec => "duration_sec",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bool" => Some(ValueKind::Bool),
            "string" => Some(ValueKind::String),
            "duration_ms" => Some(ValueKind::DurationMs),
            "duration_sec" => Some(ValueKind::DurationSec),
            _ => None,
        }
    }

    pub fn is_duration(&self) -> bool {
        matches!(self, ValueKind::DurationMs | ValueKind::DurationSec)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ValueKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ValueKind::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown value kind '{value}'")))
    }
}

/// Attribute name as it appears on the wire: `data-` plus the key, minus the
/// builder-only `datastar-` prefix.
pub fn wire_name(key: &str) -> String {
    let key = key.strip_prefix(BUILDER_KEY_PREFIX).unwrap_or(key);
    format!("data-{key}")
}

/// Keys are lowercase words joined by single dashes.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('-')
        && !key.ends_with('-')
        && !key.contains("--")
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
