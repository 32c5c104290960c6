//! What a serializer engine needs from an object it serializes.

use serde_json::Value;

use crate::attribute::Attribute;
use crate::error::Result;
use crate::model::WrappedModel;

/// Engine-facing contract: a type name for serializer lookup, attribute
/// reads for field extraction, and a plain structural fallback for when no
/// serializer is registered under the type name.
///
/// Nested [`Attribute::Model`] values implement the same contract, so an
/// engine resolves has-one, has-many and belongs-to relationships by reading
/// the attribute and serializing whatever comes back.
pub trait Serializable {
    fn type_name(&self) -> &str;

    fn read_attribute(&self, name: &str) -> Result<Option<Attribute<'_>>>;

    fn raw_attribute(&self, key: &str) -> Option<&Value>;

    fn to_plain_value(&self) -> Value;
}

impl Serializable for WrappedModel<'_> {
    fn type_name(&self) -> &str {
        WrappedModel::type_name(self)
    }

    fn read_attribute(&self, name: &str) -> Result<Option<Attribute<'_>>> {
        WrappedModel::read_attribute(self, name)
    }

    fn raw_attribute(&self, key: &str) -> Option<&Value> {
        WrappedModel::raw_attribute(self, key)
    }

    fn to_plain_value(&self) -> Value {
        Value::Object(WrappedModel::to_plain_value(self).clone())
    }
}
