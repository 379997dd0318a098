//! Test data builders
//!
//! Provides builder patterns for creating test data with sensible defaults.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::types::{Content, Space, SpaceLocale};

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Builder for creating test Space objects
#[derive(Debug, Clone)]
pub struct SpaceBuilder {
    id: String,
    name: String,
    default_locale: String,
    locale_name: String,
    locale_code: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for SpaceBuilder {
    fn default() -> Self {
        Self {
            id: "space_123".to_string(),
            name: "Test Space".to_string(),
            default_locale: "en".to_string(),
            locale_name: "English".to_string(),
            locale_code: "en".to_string(),
            created_at: fixed_time() - Duration::days(30),
            updated_at: fixed_time(),
        }
    }
}

impl SpaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the default locale and the locale descriptor together
    pub fn locale(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        let code = code.into();
        self.default_locale = code.clone();
        self.locale_code = code;
        self.locale_name = name.into();
        self
    }

    pub fn build(self) -> Space {
        Space {
            id: self.id,
            name: self.name,
            default_locale: self.default_locale,
            locales: SpaceLocale {
                name: self.locale_name,
                code: self.locale_code,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
            extra: Map::new(),
        }
    }
}

/// Builder for creating test Content objects
#[derive(Debug, Clone)]
pub struct ContentBuilder {
    id: String,
    locale: String,
    data: Map<String, Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    extra: Map<String, Value>,
}

impl Default for ContentBuilder {
    fn default() -> Self {
        Self {
            id: "content_123".to_string(),
            locale: "en".to_string(),
            data: Map::new(),
            extra: Map::new(),
            created_at: fixed_time() - Duration::hours(2),
            updated_at: fixed_time(),
        }
    }
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Adds one field to the data payload
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Adds a top-level field outside the modelled ones
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Content {
        Content {
            id: self.id,
            locale: self.locale,
            data: Value::Object(self.data),
            created_at: self.created_at,
            updated_at: self.updated_at,
            extra: self.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn space_builder_defaults() {
        let space = SpaceBuilder::new().build();
        assert_eq!(space.default_locale, "en");
        assert_eq!(space.locales.code, "en");
        assert!(space.created_at < space.updated_at);
    }

    #[test]
    fn space_builder_locale_sets_both_fields() {
        let space = SpaceBuilder::new().locale("de", "German").build();
        assert_eq!(space.default_locale, "de");
        assert_eq!(space.locales.name, "German");
    }

    #[test]
    fn content_builder_collects_fields() {
        let content = ContentBuilder::new()
            .field("title", json!("Hi"))
            .field("count", json!(3))
            .build();
        assert_eq!(content.data, json!({ "title": "Hi", "count": 3 }));
    }

    #[test]
    fn content_builder_collects_extra_fields() {
        let content = ContentBuilder::new()
            .extra("publishedAt", json!("2024-05-01T12:00:00Z"))
            .build();
        assert_eq!(content.extra["publishedAt"], "2024-05-01T12:00:00Z");
        assert!(content.data.as_object().unwrap().is_empty());
    }
}
