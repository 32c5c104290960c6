//! Wrapper configuration.

use std::borrow::Cow;

use serde::Deserialize;

/// Reserved key whose value names the type of the map that contains it.
pub const DEFAULT_TYPE_MARKER: &str = "_hash_wrapper_model_name";

/// Settings shared by a wrapper and every wrapper nested beneath it.
///
/// Deserializable so a host can embed it in its own config file; missing
/// fields fall back to [`WrapperConfig::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    pub type_marker: Cow<'static, str>,
}

impl WrapperConfig {
    pub const DEFAULT: WrapperConfig = WrapperConfig {
        type_marker: Cow::Borrowed(DEFAULT_TYPE_MARKER),
    };

    /// Config reading nested type names from `marker` instead.
    pub fn with_type_marker(marker: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_marker: marker.into(),
        }
    }

    /// Key holding a nested map's type name.
    pub fn type_marker(&self) -> &str {
        &self.type_marker
    }
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub(crate) static DEFAULT_CONFIG: WrapperConfig = WrapperConfig::DEFAULT;
