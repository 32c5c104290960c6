//! A small serializer engine used to drive wrappers the way a real engine
//! would: serializer lookup by type name, field extraction, relationships,
//! and the plain-value fallback.

#![allow(dead_code)]

use std::collections::HashMap;

use hash_wrapper::{Attribute, Serializable};
use serde_json::{Map, Value};

type Compute = Box<dyn Fn(&dyn Serializable) -> Value>;

enum Field {
    Attribute { name: &'static str, key: &'static str },
    Computed { key: &'static str, compute: Compute },
    Relationship { name: &'static str },
}

#[derive(Default)]
pub struct SerializerDef {
    fields: Vec<Field>,
}

impl SerializerDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(self, name: &'static str) -> Self {
        self.attribute_as(name, name)
    }

    pub fn attribute_as(mut self, name: &'static str, key: &'static str) -> Self {
        self.fields.push(Field::Attribute { name, key });
        self
    }

    pub fn computed(
        mut self,
        key: &'static str,
        compute: impl Fn(&dyn Serializable) -> Value + 'static,
    ) -> Self {
        self.fields.push(Field::Computed {
            key,
            compute: Box::new(compute),
        });
        self
    }

    pub fn has_one(self, name: &'static str) -> Self {
        self.relationship(name)
    }

    pub fn has_many(self, name: &'static str) -> Self {
        self.relationship(name)
    }

    pub fn belongs_to(self, name: &'static str) -> Self {
        self.relationship(name)
    }

    fn relationship(mut self, name: &'static str) -> Self {
        self.fields.push(Field::Relationship { name });
        self
    }
}

#[derive(Default)]
pub struct Engine {
    serializers: HashMap<String, SerializerDef>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, type_name: &str, def: SerializerDef) -> &mut Self {
        self.serializers.insert(type_name.to_string(), def);
        self
    }

    pub fn has_serializer_for(&self, object: &dyn Serializable) -> bool {
        self.serializers.contains_key(object.type_name())
    }

    /// Serialize with the serializer registered for the object's type name,
    /// or fall back to the object's plain value.
    pub fn serialize(&self, object: &dyn Serializable) -> Value {
        match self.serializers.get(object.type_name()) {
            Some(def) => self.serialize_with(def, object),
            None => object.to_plain_value(),
        }
    }

    pub fn serialize_as(&self, type_name: &str, object: &dyn Serializable) -> Value {
        let def = self
            .serializers
            .get(type_name)
            .unwrap_or_else(|| panic!("no serializer registered for {type_name}"));
        self.serialize_with(def, object)
    }

    fn serialize_with(&self, def: &SerializerDef, object: &dyn Serializable) -> Value {
        let mut out = Map::new();
        for field in &def.fields {
            match field {
                Field::Attribute { name, key } => {
                    let value = read(object, name)
                        .map(|attr| attr.to_plain_value())
                        .unwrap_or(Value::Null);
                    out.insert((*key).to_string(), value);
                }
                Field::Computed { key, compute } => {
                    out.insert((*key).to_string(), compute(object));
                }
                Field::Relationship { name } => {
                    let value = read(object, name)
                        .map(|attr| self.serialize_attribute(&attr))
                        .unwrap_or(Value::Null);
                    out.insert((*name).to_string(), value);
                }
            }
        }
        Value::Object(out)
    }

    fn serialize_attribute(&self, attr: &Attribute<'_>) -> Value {
        match attr {
            Attribute::Model(model) => self.serialize(model),
            Attribute::List(items) => {
                Value::Array(items.iter().map(|item| self.serialize_attribute(item)).collect())
            }
            Attribute::Value(value) => (*value).clone(),
        }
    }
}

fn read<'o>(object: &'o dyn Serializable, name: &str) -> Option<Attribute<'o>> {
    object
        .read_attribute(name)
        .expect("attribute read must succeed")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("hash_wrapper=trace"))
        .with_test_writer()
        .try_init();
}
