//! Attribute value types.
//!
//! This module defines the runtime representation of attribute values and
//! the conversion from the JSON the service sends back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::AttributeKind;

/// Runtime representation of an attribute value.
///
/// Every attribute starts out as [`AttrValue::Null`] and holds a value of
/// its declared [`AttributeKind`] once set or deserialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Unset, or explicitly `null` in the payload.
    Null,

    /// Free text (e.g., `username`, `bio`)
    Text(String),

    /// Flag (e.g., `closed`, `unread`)
    Bool(bool),

    /// Whole number (e.g., a card's `short_id`)
    Integer(i64),

    /// RFC 3339 timestamp (e.g., a notification's `date`)
    Timestamp(DateTime<Utc>),

    /// List of strings, usually identifiers (e.g., `member_ids`)
    List(Vec<String>),
}

impl AttrValue {
    /// Convert a JSON value into an attribute value of the given kind.
    ///
    /// `null` maps to [`AttrValue::Null`]. Returns `None` when the JSON type
    /// does not fit the kind.
    pub fn from_json(kind: AttributeKind, value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(AttrValue::Null);
        }

        match kind {
            AttributeKind::Text => match value {
                Value::String(s) => Some(AttrValue::Text(s.clone())),
                // Identifiers occasionally arrive as bare numbers.
                Value::Number(n) => Some(AttrValue::Text(n.to_string())),
                _ => None,
            },
            AttributeKind::Bool => value.as_bool().map(AttrValue::Bool),
            AttributeKind::Integer => value.as_i64().map(AttrValue::Integer),
            AttributeKind::Timestamp => value
                .as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| AttrValue::Timestamp(dt.with_timezone(&Utc))),
            AttributeKind::List => value.as_array().and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .map(AttrValue::List)
            }),
        }
    }

    /// Convert back into JSON, as sent in request bodies.
    pub fn to_json(&self) -> Value {
        match self {
            AttrValue::Null => Value::Null,
            AttrValue::Text(s) => Value::String(s.clone()),
            AttrValue::Bool(b) => Value::Bool(*b),
            AttrValue::Integer(n) => Value::from(*n),
            AttrValue::Timestamp(dt) => Value::String(dt.to_rfc3339()),
            AttrValue::List(items) => Value::from(items.clone()),
        }
    }

    /// Whether this value can be stored in an attribute of `kind`.
    ///
    /// `Null` fits every kind.
    pub fn fits(&self, kind: AttributeKind) -> bool {
        matches!(
            (self, kind),
            (AttrValue::Null, _)
                | (AttrValue::Text(_), AttributeKind::Text)
                | (AttrValue::Bool(_), AttributeKind::Bool)
                | (AttrValue::Integer(_), AttributeKind::Integer)
                | (AttrValue::Timestamp(_), AttributeKind::Timestamp)
                | (AttrValue::List(_), AttributeKind::List)
        )
    }

    /// Check if this value counts as absent for presence checks.
    ///
    /// - Null: blank
    /// - Text: blank when empty after trimming
    /// - List: blank when empty
    /// - Bool, Integer, Timestamp: never blank
    pub fn is_blank(&self) -> bool {
        match self {
            AttrValue::Null => true,
            AttrValue::Text(s) => s.trim().is_empty(),
            AttrValue::List(items) => items.is_empty(),
            AttrValue::Bool(_) | AttrValue::Integer(_) | AttrValue::Timestamp(_) => false,
        }
    }

    /// Length used by length rules: characters for text, items for lists.
    ///
    /// Returns `None` for kinds that have no length.
    pub fn length(&self) -> Option<usize> {
        match self {
            AttrValue::Null => Some(0),
            AttrValue::Text(s) => Some(s.chars().count()),
            AttrValue::List(items) => Some(items.len()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            AttrValue::Timestamp(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}
