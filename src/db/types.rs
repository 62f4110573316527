use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content profile of the vulnerability database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DbType(pub i32);

impl DbType {
    pub const LIGHT: DbType = DbType(1);

    /// Human-readable label; values without a known label render as the raw integer
    pub fn label(&self) -> Cow<'static, str> {
        match *self {
            Self::LIGHT => Cow::Borrowed("Light"),
            DbType(other) => Cow::Owned(other.to_string()),
        }
    }
}

/// Snapshot of the database metadata record
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "Version")]
    pub version: i64,
    #[serde(rename = "Type")]
    pub db_type: DbType,
    #[serde(rename = "NextUpdate", with = "rfc3339")]
    pub next_update: DateTime<Utc>,
    #[serde(rename = "UpdatedAt", with = "rfc3339")]
    pub updated_at: DateTime<Utc>,
}

/// RFC3339 timestamps normalized to UTC with a `Z` suffix
pub mod rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
