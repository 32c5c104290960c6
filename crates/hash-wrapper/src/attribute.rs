//! Attribute values and the nested wrapping rule.

use std::borrow::Cow;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::{Map, Value};

use crate::config::WrapperConfig;
use crate::error::{json_kind, HashWrapperError, Result};
use crate::inflect::default_type_name;
use crate::model::WrappedModel;

/// Result of reading an attribute through a [`WrappedModel`].
///
/// Nested objects come back as [`Attribute::Model`], arrays as
/// [`Attribute::List`] with their objects wrapped, everything else by
/// reference.
#[derive(Debug, Clone)]
pub enum Attribute<'a> {
    Model(WrappedModel<'a>),
    List(Vec<Attribute<'a>>),
    Value(&'a Value),
}

impl<'a> Attribute<'a> {
    /// The wrapper for a nested object.
    pub fn as_model(&self) -> Option<&WrappedModel<'a>> {
        match self {
            Attribute::Model(model) => Some(model),
            _ => None,
        }
    }

    /// The wrapped elements of a sequence.
    pub fn as_list(&self) -> Option<&[Attribute<'a>]> {
        match self {
            Attribute::List(items) => Some(items),
            _ => None,
        }
    }

    /// Any value that is not a nested object or a sequence.
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Attribute::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Structural dump with every wrapper replaced by its backing map.
    pub fn to_plain_value(&self) -> Value {
        match self {
            Attribute::Model(model) => Value::Object(model.to_plain_value().clone()),
            Attribute::List(items) => {
                Value::Array(items.iter().map(Attribute::to_plain_value).collect())
            }
            Attribute::Value(value) => (*value).clone(),
        }
    }
}

impl Serialize for Attribute<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Attribute::Model(model) => model.serialize(serializer),
            Attribute::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Attribute::Value(value) => value.serialize(serializer),
        }
    }
}

/// Apply the wrapping rule to a value read under `attr` of a model named
/// `parent`.
pub(crate) fn wrap<'a>(
    config: &'a WrapperConfig,
    parent: &str,
    attr: &str,
    raw: &'a Value,
) -> Result<Attribute<'a>> {
    match raw {
        Value::Object(map) => wrap_map(config, parent, attr, map).map(Attribute::Model),
        Value::Array(items) => {
            let mut wrapped = Vec::with_capacity(items.len());
            for item in items {
                wrapped.push(match item {
                    Value::Object(map) => Attribute::Model(wrap_map(config, parent, attr, map)?),
                    other => Attribute::Value(other),
                });
            }
            Ok(Attribute::List(wrapped))
        }
        other => Ok(Attribute::Value(other)),
    }
}

/// Without a marker the type is named after the attribute. Attribute names
/// with no letters to name a type after (`""`, `"_"`) inherit the parent's
/// type name.
fn wrap_map<'a>(
    config: &'a WrapperConfig,
    parent: &str,
    attr: &str,
    map: &'a Map<String, Value>,
) -> Result<WrappedModel<'a>> {
    let (type_name, overridden) = match map.get(config.type_marker()) {
        Some(marker) => (marker_type_name(config, marker)?, true),
        None => {
            let derived = default_type_name(attr);
            if derived.is_empty() {
                (Cow::Owned(parent.to_string()), false)
            } else {
                (Cow::Owned(derived), false)
            }
        }
    };
    tracing::trace!(attribute = attr, %type_name, overridden, "wrapping nested map");
    WrappedModel::with_config(config, type_name, map)
}

/// Strings name the type verbatim; numbers and booleans use their JSON text.
fn marker_type_name<'a>(config: &WrapperConfig, marker: &'a Value) -> Result<Cow<'a, str>> {
    match marker {
        Value::String(name) if !name.is_empty() => Ok(Cow::Borrowed(name)),
        Value::Number(n) => Ok(Cow::Owned(n.to_string())),
        Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
        other => Err(HashWrapperError::InvalidArgument(format!(
            "`{}` must name a type, got {}",
            config.type_marker(),
            match other {
                Value::String(_) => "empty string",
                _ => json_kind(other),
            }
        ))),
    }
}
