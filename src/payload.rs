use serde::Serialize;
use serde_json::{Map, Value};

/// Body for `POST <base>/log`
///
/// Optional fields are omitted from the serialized body when unset, never
/// sent as null or empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishPayload {
    pub project: String,
    pub channel: String,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<Map<String, Value>>,
}

/// Optional fields for [`LogSnag::publish`](crate::LogSnag::publish)
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: Option<Map<String, Value>>,
    pub notify: Option<bool>,
    pub parser: Option<Map<String, Value>>,
}

impl PublishOptions {
    /// Set a human-readable description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an icon (e.g. an emoji glyph)
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Add a tag key/value pair
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.tags
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set whether the event triggers a push notification
    pub fn notify(mut self, notify: bool) -> Self {
        self.notify = Some(notify);
        self
    }

    /// Add a parser hint key/value pair
    pub fn parser(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parser
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Body for `POST <base>/insight`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightPayload {
    pub project: String,
    pub title: String,
    pub value: InsightValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Optional fields for [`LogSnag::insight`](crate::LogSnag::insight)
#[derive(Debug, Clone, Default)]
pub struct InsightOptions {
    pub icon: Option<String>,
}

impl InsightOptions {
    /// Set an icon (e.g. an emoji glyph)
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Value of an insight metric
///
/// Closed over the scalar types the API accepts; serializes as the bare
/// string, number, or boolean.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InsightValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for InsightValue {
    fn from(v: &str) -> Self {
        InsightValue::Text(v.to_string())
    }
}

impl From<String> for InsightValue {
    fn from(v: String) -> Self {
        InsightValue::Text(v)
    }
}

impl From<i32> for InsightValue {
    fn from(v: i32) -> Self {
        InsightValue::Int(v.into())
    }
}

impl From<i64> for InsightValue {
    fn from(v: i64) -> Self {
        InsightValue::Int(v)
    }
}

impl From<f64> for InsightValue {
    fn from(v: f64) -> Self {
        InsightValue::Float(v)
    }
}

impl From<bool> for InsightValue {
    fn from(v: bool) -> Self {
        InsightValue::Bool(v)
    }
}
