//! Canonical content items and CMS response normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A unit of CMS-authored content, in the one shape the filter understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// CMS locale tag (`pt-BR`, `es`, ...). Absent means the default locale.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Errors raised while normalizing CMS responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// An entry was not a JSON object.
    #[error("content entry is not an object")]
    NotAnObject,

    /// A required field was missing or had the wrong type.
    #[error("content entry is missing required field `{0}`")]
    MissingField(&'static str),

    /// The response was neither an array nor a `{ "data": [...] }` envelope.
    #[error("CMS response is not a collection")]
    NotACollection,
}

/// Normalize one CMS entry.
///
/// Accepts the Strapi shape (`{ id, attributes: { ... } }`) and the flat
/// Sanity-style shape (`{ _id, title, slug: { current }, language }`).
pub fn normalize_item(value: &Value) -> Result<ContentItem, ContentError> {
    let outer = value.as_object().ok_or(ContentError::NotAnObject)?;
    let fields = match outer.get("attributes") {
        Some(Value::Object(attributes)) => attributes,
        Some(_) => return Err(ContentError::NotAnObject),
        None => outer,
    };

    let id = id_field(outer, "id")
        .or_else(|| id_field(outer, "_id"))
        .ok_or(ContentError::MissingField("id"))?;
    let title = string_field(fields, "title").ok_or(ContentError::MissingField("title"))?;

    let slug = match fields.get("slug") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Object(obj)) => string_field(obj, "current"),
        _ => None,
    };

    Ok(ContentItem {
        id,
        title,
        slug,
        locale: string_field(fields, "locale").or_else(|| string_field(fields, "language")),
        published_at: string_field(fields, "publishedAt")
            .or_else(|| string_field(fields, "published_at"))
            .or_else(|| string_field(fields, "_createdAt")),
    })
}

/// Normalize a whole CMS response, either a bare array or a `data` envelope.
pub fn normalize_collection(value: &Value) -> Result<Vec<ContentItem>, ContentError> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(obj) => match obj.get("data") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ContentError::NotACollection),
        },
        _ => return Err(ContentError::NotACollection),
    };
    entries.iter().map(normalize_item).collect()
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Ids may be numeric (Strapi) or strings (Sanity).
fn id_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
