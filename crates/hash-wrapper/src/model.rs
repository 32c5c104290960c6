//! The wrapper type and its factory.

use std::borrow::Cow;
use std::ops::Index;
use std::ptr;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::attribute::{wrap, Attribute};
use crate::config::{WrapperConfig, DEFAULT_CONFIG};
use crate::error::{json_kind, HashWrapperError, Result};
use crate::key;

static NULL: Value = Value::Null;

/// A read-only, type-tagged view over a JSON object.
///
/// The wrapper borrows its backing map and never copies or mutates it. The
/// type name is fixed at construction.
#[derive(Debug, Clone)]
pub struct WrappedModel<'a> {
    type_name: Cow<'a, str>,
    source: &'a Map<String, Value>,
    config: &'a WrapperConfig,
}

/// Wrap `source` as a model named `type_name`.
///
/// Fails with [`HashWrapperError::InvalidArgument`] when `source` is not a
/// JSON object or `type_name` is empty.
///
/// ```
/// use hash_wrapper::create;
/// use serde_json::json;
///
/// let item = json!({"id": 1, "pricing": {"full_price": "$9.99"}});
/// let model = create("Item", &item).unwrap();
/// let pricing = model.read_attribute("pricing").unwrap().unwrap();
/// assert_eq!(pricing.as_model().unwrap().type_name(), "Pricing");
/// ```
pub fn create<'a>(
    type_name: impl Into<Cow<'a, str>>,
    source: &'a Value,
) -> Result<WrappedModel<'a>> {
    create_with(&DEFAULT_CONFIG, type_name, source)
}

/// [`create`] with an explicit [`WrapperConfig`], shared by every nested
/// wrapper read from the result.
pub fn create_with<'a>(
    config: &'a WrapperConfig,
    type_name: impl Into<Cow<'a, str>>,
    source: &'a Value,
) -> Result<WrappedModel<'a>> {
    match source {
        Value::Object(map) => WrappedModel::with_config(config, type_name, map),
        other => {
            let kind = json_kind(other);
            tracing::debug!(kind, "rejected non-object source");
            Err(HashWrapperError::InvalidArgument(format!(
                "expected a JSON object, got {kind}"
            )))
        }
    }
}

impl<'a> WrappedModel<'a> {
    /// Wrap an object map with the default config.
    pub fn new(type_name: impl Into<Cow<'a, str>>, source: &'a Map<String, Value>) -> Result<Self> {
        Self::with_config(&DEFAULT_CONFIG, type_name, source)
    }

    /// Wrap an object map with `config`. Fails on an empty type name.
    pub fn with_config(
        config: &'a WrapperConfig,
        type_name: impl Into<Cow<'a, str>>,
        source: &'a Map<String, Value>,
    ) -> Result<Self> {
        let type_name = type_name.into();
        if type_name.is_empty() {
            tracing::debug!("rejected empty type name");
            return Err(HashWrapperError::InvalidArgument(
                "type name must not be empty".into(),
            ));
        }
        Ok(Self {
            type_name,
            source,
            config,
        })
    }

    /// The type name given at construction.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Config inherited by nested wrappers.
    pub fn config(&self) -> &'a WrapperConfig {
        self.config
    }

    /// Read an attribute, wrapping nested objects.
    ///
    /// `name` is looked up as given, then in its canonical spelling
    /// (`:pricing` falls back to `pricing`). A missing key is `Ok(None)`.
    /// The only failure is a nested type-name marker that cannot name a
    /// type.
    pub fn read_attribute(&self, name: &str) -> Result<Option<Attribute<'a>>> {
        match key::lookup(self.source, name) {
            Some(raw) => wrap(self.config, &self.type_name, name, raw).map(Some),
            None => Ok(None),
        }
    }

    /// Exact-key lookup with no spelling fallback and no wrapping.
    pub fn raw_attribute(&self, key: &str) -> Option<&'a Value> {
        self.source.get(key)
    }

    /// The backing map, exactly as it was handed in.
    pub fn to_plain_value(&self) -> &'a Map<String, Value> {
        self.source
    }

    /// Whether both wrappers view the same backing map.
    pub fn shares_source(&self, other: &WrappedModel<'_>) -> bool {
        ptr::eq(self.source, other.source)
    }
}

impl Index<&str> for WrappedModel<'_> {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.source.get(key).unwrap_or(&NULL)
    }
}

impl Serialize for WrappedModel<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.source.serialize(serializer)
    }
}
