//! Codec configuration.
//!
//! A single option controls whether quaternions are written `[x, y, z, w]`
//! (the default) or `[w, x, y, z]`. The encoded array carries no order
//! marker, so the write and read sides must agree on it.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! quaternion_w_component_first = true
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Component order for quaternions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuaternionOrder {
    /// `[x, y, z, w]`
    #[default]
    Xyzw,
    /// `[w, x, y, z]`
    Wxyz,
}

/// Options for the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Write and read quaternions with `w` first.
    pub quaternion_w_component_first: bool,
}

impl CodecConfig {
    /// Configuration with quaternions written `w` first.
    pub const fn w_first() -> Self {
        Self {
            quaternion_w_component_first: true,
        }
    }

    /// Quaternion component order selected by this configuration.
    pub fn quaternion_order(&self) -> QuaternionOrder {
        if self.quaternion_w_component_first {
            QuaternionOrder::Wxyz
        } else {
            QuaternionOrder::Xyzw
        }
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            "Loaded codec config from {} (quaternion order {:?})",
            path.display(),
            config.quaternion_order()
        );
        Ok(config)
    }
}
