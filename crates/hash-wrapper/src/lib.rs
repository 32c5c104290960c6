//! hash-wrapper - read-only model views over JSON objects.
//!
//! A serializer engine usually wants a typed object: something with a type
//! name to pick a serializer by, attributes to read fields from, and a plain
//! fallback value when no serializer matches. [`create`] turns a
//! [`serde_json`] object into such a [`WrappedModel`] without declaring a
//! Rust type per data shape.
//!
//! Reading an attribute that holds an object yields another wrapper typed
//! after the attribute (`pricing` -> `Pricing`, `offers` -> `Offer`), unless
//! the nested object names its own type under the
//! [`DEFAULT_TYPE_MARKER`] key.
//!
//! ```
//! use hash_wrapper::create;
//! use serde_json::json;
//!
//! let item = json!({
//!     "id": 1,
//!     "offers": [{"type": "bogo"}, {"type": "delivery", "_hash_wrapper_model_name": "Promo"}],
//! });
//! let model = create("Item", &item).unwrap();
//! let offers = model.read_attribute("offers").unwrap().unwrap();
//! let names: Vec<_> = offers
//!     .as_list()
//!     .unwrap()
//!     .iter()
//!     .map(|o| o.as_model().unwrap().type_name().to_string())
//!     .collect();
//! assert_eq!(names, ["Offer", "Promo"]);
//! assert_eq!(model.to_plain_value(), item.as_object().unwrap());
//! ```

mod attribute;
mod config;
mod contract;
mod error;
mod inflect;
mod key;
mod model;

pub use attribute::Attribute;
pub use config::{WrapperConfig, DEFAULT_TYPE_MARKER};
pub use contract::Serializable;
pub use error::{HashWrapperError, Result};
pub use inflect::default_type_name;
pub use key::{canonical_key, SYMBOL_SIGIL};
pub use model::{create, create_with, WrappedModel};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
