//! Field types shared by every webhook payload.

use std::fmt;

use chrono::NaiveDateTime;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::EventType;

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fields present on every webhook payload.
///
/// The relay fields (`secret`, `rio_token`, `devproxy_host`, `queue_id`,
/// `event_id`) are added by TAPD's delivery pipeline rather than the
/// entity that changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    /// Discriminator
    pub event: EventType,
    /// Where the change originated, e.g. `web`
    #[serde(default)]
    pub event_from: String,
    /// Page the change was made from
    #[serde(default)]
    pub referer: String,
    /// Workspace id
    #[serde(default)]
    pub workspace_id: String,
    /// User who triggered the event
    #[serde(default)]
    pub current_user: String,
    /// Id of the entity the event is about
    #[serde(default)]
    pub id: String,
    /// Webhook secret, when one is configured
    #[serde(default)]
    pub secret: String,
    /// Relay token
    #[serde(default)]
    pub rio_token: String,
    /// Relay proxy host
    #[serde(default)]
    pub devproxy_host: String,
    /// Delivery queue id
    #[serde(default)]
    pub queue_id: String,
    /// Event id
    #[serde(default)]
    pub event_id: String,
    /// Time the event was created (`YYYY-MM-DD HH:MM:SS`, server local time)
    #[serde(default)]
    pub created: String,
}

impl EventMeta {
    /// Parse [`created`](Self::created). Returns `None` when the field is
    /// empty or not in the `YYYY-MM-DD HH:MM:SS` form.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created, CREATED_FORMAT).ok()
    }
}

/// Names of the fields an update event changed.
///
/// On the wire this is a single comma-joined string (`"status,owner"`).
/// An empty string or `null` decodes to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ChangeFields(Vec<String>);

impl ChangeFields {
    /// Create from a list of field names.
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Returns `true` if `field` is among the changed fields.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    /// Iterate over the field names in wire order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of changed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field is listed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the field names.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ChangeFields {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl<'a> IntoIterator for &'a ChangeFields {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ChangeFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl Serialize for ChangeFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChangeFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChangeFieldsVisitor;

        impl<'de> Visitor<'de> for ChangeFieldsVisitor {
            type Value = ChangeFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a comma-separated list of field names")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v.is_empty() {
                    return Ok(ChangeFields::default());
                }
                Ok(ChangeFields(v.split(',').map(str::to_owned).collect()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ChangeFields::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ChangeFields::default())
            }
        }

        deserializer.deserialize_any(ChangeFieldsVisitor)
    }
}
